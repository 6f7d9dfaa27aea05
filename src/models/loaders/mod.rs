pub mod txt_loader;

pub use txt_loader::{article_id_from_file_name, list_txt_files, read_source_file};
