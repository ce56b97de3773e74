pub mod colors;
pub mod json_writer;
pub mod summary;
pub mod tables;
pub mod tsv_writer;
