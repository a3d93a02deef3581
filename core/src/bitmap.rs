use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// On-disk representation of a glyph or image asset.
///
/// Every entry of `bitlines` is one row, top to bottom, over the alphabet
/// `'0'`/`'1'`. Rows don't need to share a length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitFile {
    pub bitlines: Vec<String>,
}

/// Immutable, possibly ragged bit matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    rows: Vec<Vec<bool>>,
}

impl Bitmap {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().map(|c| c == '1').collect())
            .collect();
        Self { rows }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn from_json(data: &[u8]) -> Result<Self, AssetError> {
        let file: BitFile = serde_json::from_slice(data).map_err(|_| AssetError::Malformed)?;
        Ok(Self::from_lines(&file.bitlines))
    }

    pub fn to_bitfile(&self) -> BitFile {
        let bitlines = self
            .rows
            .iter()
            .map(|row| row.iter().map(|&on| if on { '1' } else { '0' }).collect())
            .collect();
        BitFile { bitlines }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
