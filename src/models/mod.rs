pub mod face;

pub use face::{
    // Face data
    Face, Grid, WordSpec,
    // Packed output
    Bitmap, TableEntry,
    // Grid geometry
    GRID_COLS, GRID_ROWS, GRID_STRIDE,
};
