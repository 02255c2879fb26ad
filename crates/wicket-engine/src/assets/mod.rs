pub mod dictionary;
pub mod images;
