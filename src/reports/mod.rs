pub mod readme_reporter;
pub mod table;
