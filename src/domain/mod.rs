pub mod combined_image;
pub mod display_scale;
pub mod file_order;
pub mod image_stack;
pub mod index_range;
pub mod input_source;
pub mod opaque_image;
pub mod sprite_sheet;
