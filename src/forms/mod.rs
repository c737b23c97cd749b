pub mod contents;
