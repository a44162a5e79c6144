use thiserror::Error;

use crate::models::{Grid, WordSpec};

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A word list out of sync with its grid is an authoring bug, so this
    /// aborts the whole build with no partial table.
    #[error("run {run:?} of word {word:?} not found in the grid at or after index {searched_from}")]
    RunNotFound {
        word: String,
        run: String,
        searched_from: usize,
    },
}

pub struct WordLocator;

impl WordLocator {
    /// First occurrence of `run` in the flattened grid text at or after
    /// `search_from`, as a flat index.
    ///
    /// The search runs over the raw flattened text, separator column
    /// included, exactly as the face was authored against.
    pub fn locate(grid: &Grid, run: &str, search_from: usize) -> Option<usize> {
        grid.text()
            .get(search_from..)?
            .find(run)
            .map(|i| search_from + i)
    }

    /// Flat indices of every cell the word lights.
    ///
    /// Runs are matched left to right with a monotonically advancing
    /// cursor: a run may never match earlier than the end of the previous
    /// run's match. Within a run the cells are contiguous by construction.
    pub fn cells_of(grid: &Grid, word: &WordSpec) -> Result<Vec<usize>, LayoutError> {
        let mut cells = Vec::new();
        let mut cursor = 0;

        for run in &word.runs {
            let idx = Self::locate(grid, run, cursor).ok_or_else(|| LayoutError::RunNotFound {
                word: word.name.clone(),
                run: run.clone(),
                searched_from: cursor,
            })?;
            cells.extend(idx..idx + run.len());
            cursor = idx + run.len();
        }

        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face;

    fn word(name: &str) -> WordSpec {
        WordSpec {
            index: 0,
            name: name.to_string(),
            runs: name.split('-').map(str::to_uppercase).collect(),
        }
    }

    #[test]
    fn test_locate_finds_first_occurrence() {
        let grid = face::builtin().grid;
        assert_eq!(WordLocator::locate(&grid, "HALF", 0), Some(0));
        assert_eq!(WordLocator::locate(&grid, "ZERO", 0), Some(4));
        assert_eq!(WordLocator::locate(&grid, "QUARTER", 0), Some(10));
    }

    #[test]
    fn test_locate_honors_lower_bound() {
        let grid = face::builtin().grid;
        // The only HALF sits at the top left corner, so searching past it
        // comes up empty.
        assert_eq!(WordLocator::locate(&grid, "HALF", 1), None);
        // TEN first appears inside THREETEN; there is no later one.
        assert_eq!(WordLocator::locate(&grid, "TEN", 0), Some(41));
        assert_eq!(WordLocator::locate(&grid, "TEN", 42), None);
    }

    #[test]
    fn test_single_run_word_is_contiguous() {
        let grid = face::builtin().grid;
        let cells = WordLocator::cells_of(&grid, &word("seven")).unwrap();
        assert_eq!(cells, vec![63, 64, 65, 66, 67]);
    }

    #[test]
    fn test_multi_run_word_advances_monotonically() {
        let grid = face::builtin().grid;
        // EL from TWELFOUR, then EVEN strictly after it in SEVENINE.
        let cells = WordLocator::cells_of(&grid, &word("el-even")).unwrap();
        assert_eq!(cells, vec![56, 57, 64, 65, 66, 67]);
        assert!(cells.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_cursor_skips_earlier_occurrence_of_later_run() {
        let grid = face::builtin().grid;
        // A naive independent search would put A at index 1 (in HALFZERO's
        // row); after QUARTER the cursor forces the A of PASTODOT instead.
        let cells = WordLocator::cells_of(&grid, &word("quarter-a")).unwrap();
        assert_eq!(cells, vec![10, 11, 12, 13, 14, 15, 16, 19]);
    }

    #[test]
    fn test_missing_run_reports_word_and_cursor() {
        let grid = face::builtin().grid;
        let err = WordLocator::cells_of(&grid, &word("half-xyzzy")).unwrap_err();
        assert_eq!(
            err,
            LayoutError::RunNotFound {
                word: "half-xyzzy".to_string(),
                run: "XYZZY".to_string(),
                searched_from: 4,
            }
        );
    }
}
