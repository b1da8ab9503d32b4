pub mod date;
pub mod filesystem;
