use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use thiserror::Error;
use tokio::fs;

use crate::models::{Face, Grid, WordSpec, GRID_COLS, GRID_ROWS, GRID_STRIDE};

/// Violations of the face text format, caught at load time.
#[derive(Debug, Error, PartialEq)]
pub enum FaceError {
    #[error("expected {GRID_ROWS} grid rows, found {0}")]
    WrongRowCount(usize),

    #[error("grid row {row} has {found} letters, expected {GRID_COLS}")]
    WrongRowWidth { row: usize, found: usize },

    #[error("grid row {row} contains non-letter character {ch:?}")]
    BadLetter { row: usize, ch: char },

    #[error("word {name:?} contains an empty run")]
    EmptyRun { name: String },

    #[error("no word list found after the grid block")]
    MissingWords,
}

/// Parse and normalize a face from its text form: the grid rows first, a
/// blank line, then one word per line with `-` marking run boundaries.
/// Lines starting with `#` are ignored. Grid letters are uppercased and
/// internal whitespace is stripped before any dimension check.
pub fn parse(text: &str) -> Result<Face, FaceError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.starts_with('#'));

    let mut rows: Vec<String> = Vec::new();
    for line in lines.by_ref() {
        if line.is_empty() {
            if rows.is_empty() {
                continue;
            }
            break;
        }
        let row: String = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        rows.push(row);
    }

    if rows.len() != GRID_ROWS {
        return Err(FaceError::WrongRowCount(rows.len()));
    }
    for (i, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != GRID_COLS {
            return Err(FaceError::WrongRowWidth {
                row: i,
                found: width,
            });
        }
        if let Some(ch) = row.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(FaceError::BadLetter { row: i, ch });
        }
    }

    let mut words = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let name = line.to_lowercase();
        let runs: Vec<String> = name.split('-').map(|r| r.to_uppercase()).collect();
        if runs.iter().any(|r| r.is_empty()) {
            return Err(FaceError::EmptyRun { name });
        }
        words.push(WordSpec {
            index: words.len(),
            name,
            runs,
        });
    }
    if words.is_empty() {
        return Err(FaceError::MissingWords);
    }

    // Flatten with the separator kept after every row, so flat indices are
    // row * GRID_STRIDE + col and the invariant len == rows * stride holds.
    let mut cells = String::with_capacity(GRID_ROWS * GRID_STRIDE);
    for row in &rows {
        cells.push_str(row);
        cells.push('\n');
    }

    Ok(Face {
        grid: Grid { cells },
        words,
    })
}

/// Load a face from a file
pub async fn load<P: AsRef<Path>>(path: P) -> Result<Face> {
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading face file {}", path.as_ref().display()))?;
    let face = parse(&content)?;

    tracing::info!(
        "Loaded face with {} words from {}",
        face.words.len(),
        path.as_ref().display()
    );

    Ok(face)
}

/// The face the clock shipped with.
pub fn builtin() -> Face {
    BUILTIN.clone()
}

static BUILTIN: Lazy<Face> =
    Lazy::new(|| parse(BUILTIN_FACE).expect("builtin face is well formed"));

const BUILTIN_FACE: &str = "\
HALFZERO
YQUARTER
PASTODOT
SIXTWONE
THREETEN
FIVEIGHT
TWELFOUR
SEVENINE

zero
one
two
three
four
five
six
seven
eight
nine
ten
el-even
twel-ve
a-quarter
half
past
to
dot
";
