use chrono::Utc;
use diesel::prelude::*;

use crate::domain::content::{Content, NewContent};
use crate::domain::types::{CategoryName, ContentId};
use crate::models::content::{Content as DbContent, NewContent as DbNewContent};
use crate::repository::{ContentReader, ContentWriter, DieselRepository, RepositoryResult};

impl ContentReader for DieselRepository {
    fn list_contents(&self) -> RepositoryResult<Vec<Content>> {
        use crate::schema::contents;

        let mut conn = self.conn()?;

        let items = contents::table
            .order(contents::id.asc())
            .load::<DbContent>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Content>, _>>()?;

        Ok(items)
    }

    fn get_content_by_id(&self, id: ContentId) -> RepositoryResult<Option<Content>> {
        use crate::schema::contents;

        let mut conn = self.conn()?;

        let content = contents::table
            .find(id.get())
            .first::<DbContent>(&mut conn)
            .optional()?;

        let content = content.map(TryInto::try_into).transpose()?;
        Ok(content)
    }

    fn get_content_by_slug(&self, slug: &str) -> RepositoryResult<Option<Content>> {
        use crate::schema::contents;

        let mut conn = self.conn()?;

        let content = contents::table
            .filter(contents::slug.eq(slug))
            .order(contents::id.asc())
            .first::<DbContent>(&mut conn)
            .optional()?;

        let content = content.map(TryInto::try_into).transpose()?;
        Ok(content)
    }

    fn find_content_by_category_name(
        &self,
        name: &CategoryName,
    ) -> RepositoryResult<Option<Content>> {
        use crate::schema::contents;

        let mut conn = self.conn()?;

        let content = contents::table
            .filter(contents::category_key.eq(name.lookup_key()))
            .first::<DbContent>(&mut conn)
            .optional()?;

        let content = content.map(TryInto::try_into).transpose()?;
        Ok(content)
    }
}

impl ContentWriter for DieselRepository {
    fn create_content(&self, content: &NewContent) -> RepositoryResult<Content> {
        use crate::schema::contents;

        let mut conn = self.conn()?;
        let db_content = DbNewContent::from(content);

        let created = diesel::insert_into(contents::table)
            .values(db_content)
            .get_result::<DbContent>(&mut conn)?;

        let created: Content = created.try_into()?;
        Ok(created)
    }

    fn update_content(&self, id: ContentId, content: &NewContent) -> RepositoryResult<Content> {
        use crate::schema::contents;

        let mut conn = self.conn()?;
        let slug = content.slug();

        let updated = diesel::update(contents::table.find(id.get()))
            .set((
                contents::category_name.eq(content.category_name.as_str()),
                contents::category_key.eq(content.category_name.lookup_key()),
                contents::summarize_content.eq(content.summarize_content.as_deref()),
                contents::content.eq(content.content.as_str()),
                contents::slug.eq(slug.as_str()),
                contents::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbContent>(&mut conn)?;

        let updated: Content = updated.try_into()?;
        Ok(updated)
    }

    fn delete_content(&self, id: ContentId) -> RepositoryResult<usize> {
        use crate::schema::contents;

        let mut conn = self.conn()?;

        let affected = diesel::delete(contents::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
