pub mod piece;
pub mod text_item;
