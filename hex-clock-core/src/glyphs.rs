//! The hour characters. These are drawn by hand instead of with a font renderer because redrawing a
//! rendered letter on every tick flickers when the background changes underneath it.
//!
//! `letters.json` maps each label to 8 rows of 5 columns of 0 or 1:
//!
//! ```json
//! { "1": [[0,0,0,0,0], [0,0,1,0,0], [0,1,1,0,0], ...] }
//! ```
use crate::compositor::hour_label;
use crate::errors::{ClockError, ClockResult, ResourceError};
use crate::geometry::{Grid, WIDTH, rotate_quarter_turns};
use crate::logging::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// glyphs in the resource are narrower than the matrix
pub const SOURCE_COLUMNS: usize = 5;

/// blank columns added on the left. the rest of the padding goes on the right
const LEADING_COLUMNS: usize = 1;

/// An 8x8 bitmap. Every cell is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(Grid<u8>);

impl Glyph {
    /// Every cell must be 0 or 1. Nothing checks this here. `letters.json` goes through `from_source` instead.
    pub const fn new(rows: Grid<u8>) -> Self {
        Self(rows)
    }

    fn from_source(label: &str, rows: &[Vec<u8>]) -> Result<Self, ResourceError> {
        let malformed = |reason: String| ResourceError::Malformed {
            label: label.to_string(),
            reason,
        };

        if rows.len() != WIDTH {
            return Err(malformed(format!(
                "expected {} rows, found {}",
                WIDTH,
                rows.len()
            )));
        }

        let mut grid = [[0; WIDTH]; WIDTH];

        for (y, (row, padded)) in rows.iter().zip(grid.iter_mut()).enumerate() {
            let row: [u8; SOURCE_COLUMNS] = row.as_slice().try_into().map_err(|_| {
                malformed(format!(
                    "row {} is {} columns wide, expected {}",
                    y,
                    row.len(),
                    SOURCE_COLUMNS
                ))
            })?;

            if let Some(bad) = row.iter().find(|&&x| x > 1) {
                return Err(malformed(format!("row {y} contains {bad}, expected 0 or 1")));
            }

            *padded = pad_row(row);
        }

        Ok(Self(grid))
    }

    pub fn intensity(&self, x: usize, y: usize) -> u8 {
        self.0[y][x]
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.intensity(x, y) == 1
    }

    pub fn rows(&self) -> &Grid<u8> {
        &self.0
    }

    /// positive turns are anti-clockwise
    pub fn rotated(&self, turns: i32) -> Self {
        Self(rotate_quarter_turns(&self.0, turns))
    }
}

/// `[c0, c1, c2, c3, c4]` -> `[0, c0, c1, c2, c3, c4, 0, 0]`
pub fn pad_row(row: [u8; SOURCE_COLUMNS]) -> [u8; WIDTH] {
    let mut padded = [0; WIDTH];

    padded[LEADING_COLUMNS..LEADING_COLUMNS + SOURCE_COLUMNS].copy_from_slice(&row);

    padded
}

#[derive(Deserialize)]
#[serde(transparent)]
struct GlyphDocument(BTreeMap<String, Vec<Vec<u8>>>);

/// Loaded once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphTable {
    pub fn load(path: impl AsRef<Path>) -> ClockResult<Self> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json(&json)?;

        info!("loaded {} glyphs from {}", table.len(), path.display());

        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let document: GlyphDocument = serde_json::from_str(json)?;

        let mut glyphs = BTreeMap::new();

        for (label, rows) in document.0.iter() {
            let mut chars = label.chars();

            let key = match (chars.next(), chars.next()) {
                (Some(key), None) => key,
                _ => {
                    return Err(ResourceError::Malformed {
                        label: label.clone(),
                        reason: "labels must be a single character".to_string(),
                    });
                }
            };

            debug!("glyph {:?}", key);

            glyphs.insert(key, Glyph::from_source(label, rows)?);
        }

        let table = Self { glyphs };

        for label in table.missing_hour_labels() {
            warn!("no glyph for hour label {:?}. that hour will fail to render", label);
        }

        Ok(table)
    }

    pub fn get(&self, label: char) -> ClockResult<&Glyph> {
        self.glyphs.get(&label).ok_or(ClockError::MissingGlyph(label))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    /// labels that some hour of the day needs but this table does not have
    pub fn missing_hour_labels(&self) -> Vec<char> {
        let mut missing: Vec<char> = (0..24)
            .map(hour_label)
            .filter(|label| !self.glyphs.contains_key(label))
            .collect();

        missing.sort_unstable();
        missing.dedup();

        missing
    }
}
