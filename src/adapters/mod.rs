pub mod clock;
pub mod json_file;
