use crate::models::{Bitmap, Face, TableEntry, GRID_ROWS, GRID_STRIDE};

use super::locator::{LayoutError, WordLocator};

pub struct BitmapPacker;

impl BitmapPacker {
    /// Pack flat cell indices into row bytes.
    ///
    /// Column 0 maps to the least significant bit of its row byte, and the
    /// rows are emitted last-to-first: output byte 0 is the grid's bottom
    /// row. Both conventions are fixed by the display firmware and must be
    /// preserved bit for bit.
    pub fn pack(cells: &[usize]) -> Bitmap {
        let mut rows = [0u8; GRID_ROWS];

        for &idx in cells {
            let col = idx % GRID_STRIDE;
            let row = idx / GRID_STRIDE;
            rows[row] |= 1 << col;
        }

        rows.reverse();
        rows
    }

    /// Locate and pack every word of the face, in word-list order.
    ///
    /// All or nothing: the first unlocatable run aborts the build and no
    /// table is produced.
    pub fn build_table(face: &Face) -> Result<Vec<TableEntry>, LayoutError> {
        let mut table = Vec::with_capacity(face.words.len());

        for word in &face.words {
            let cells = WordLocator::cells_of(&face.grid, word)?;
            table.push(TableEntry {
                index: word.index,
                ident: word.ident(),
                bitmap: Self::pack(&cells),
            });
        }

        Ok(table)
    }
}
