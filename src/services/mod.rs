pub mod contents;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
