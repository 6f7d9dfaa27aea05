pub mod article;
pub mod loaders;

pub use article::{Article, Paragraph};
pub use loaders::{article_id_from_file_name, list_txt_files, read_source_file};
