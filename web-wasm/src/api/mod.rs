pub mod classifier;
pub mod file_reader;
