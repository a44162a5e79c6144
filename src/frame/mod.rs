use thiserror::Error;

use crate::models::{Bitmap, Grid, TableEntry, GRID_COLS, GRID_ROWS};

/// A screen buffer in the same row order the bitmaps use: byte 0 is the
/// grid's bottom row.
pub type Frame = [u8; GRID_ROWS];

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("face has no word {0:?}, cannot compose a time")]
    MissingWord(String),
}

/// Hour words by clock hour; slot 0 is unused, 12 o'clock folds to TWELVE.
const HOUR_IDENTS: [&str; 13] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ELEVEN",
    "TWELVE",
];

/// OR a word bitmap into the frame.
pub fn or_bitmap(frame: &mut Frame, bitmap: &Bitmap) {
    for (dst, src) in frame.iter_mut().zip(bitmap) {
        *dst |= src;
    }
}

pub fn get_pixel(frame: &Frame, x: usize, y: usize) -> bool {
    (frame[y] >> x) & 1 == 1
}

/// Compose the frame the clock shows for a given time.
///
/// Minutes below 30 count up from the past hour; from 30 on the clock
/// counts down to the next one ("A QUARTER TO FOUR"). With `half_to`
/// disabled the switch happens at 38 instead, so the half hour always
/// reads "HALF PAST". Minute bands: under 8 the hour stands alone, under
/// 23 it takes A QUARTER, anything else HALF.
pub fn compose_time(
    table: &[TableEntry],
    hour: u8,
    minute: u8,
    half_to: bool,
) -> Result<Frame, FrameError> {
    let mut frame = [0u8; GRID_ROWS];
    let mut h = hour;
    let mut m = minute;

    let threshold = if half_to { 30 } else { 38 };
    let past_to = if m < threshold {
        "PAST"
    } else {
        m = 60 - m;
        h += 1;
        "TO"
    };

    // there's no zero o'clock on the face
    let h = match h % 12 {
        0 => 12,
        folded => folded,
    };
    or_bitmap(&mut frame, bitmap_of(table, HOUR_IDENTS[h as usize])?);

    if m < 8 {
        // close enough to the full hour
        return Ok(frame);
    } else if m < 23 {
        or_bitmap(&mut frame, bitmap_of(table, "AQUARTER")?);
    } else {
        or_bitmap(&mut frame, bitmap_of(table, "HALF")?);
    }
    or_bitmap(&mut frame, bitmap_of(table, past_to)?);

    Ok(frame)
}

/// ASCII preview of a frame: lit cells show their grid letter, unlit cells
/// a dot, one line per grid row top to bottom.
pub fn render(frame: &Frame, grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            if get_pixel(frame, col, GRID_ROWS - 1 - row) {
                out.push(grid.letter(row, col));
            } else {
                out.push('.');
            }
        }
        out.push('\n');
    }
    out
}

fn bitmap_of<'a>(table: &'a [TableEntry], ident: &str) -> Result<&'a Bitmap, FrameError> {
    table
        .iter()
        .find(|e| e.ident == ident)
        .map(|e| &e.bitmap)
        .ok_or_else(|| FrameError::MissingWord(ident.to_string()))
}
