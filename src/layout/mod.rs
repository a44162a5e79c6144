// Word layout: locating words on the face and packing them into row bitmaps

pub mod locator;
pub mod packer;

pub use locator::{LayoutError, WordLocator};
pub use packer::BitmapPacker;
