pub mod content;
pub mod types;
