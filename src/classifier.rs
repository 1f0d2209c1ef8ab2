//! Width classification over a pair of range tables

use crate::range::RangeTable;
use crate::tables::{COMBINING_RANGES, WIDE_RANGES};
use crate::types::{CellWidth, ClassifierOptions};

/// Classifier over the built-in tables, shared by the free functions
pub static REFERENCE: WidthClassifier = WidthClassifier::reference();

/// Maps a code point to its terminal cell width
///
/// Combining ranges win over wide ranges when a code point is in both.
#[derive(Debug, Clone)]
pub struct WidthClassifier {
    combining: RangeTable,
    wide: RangeTable,
    options: ClassifierOptions,
}

impl WidthClassifier {
    /// Classifier over the built-in BMP tables
    pub const fn reference() -> Self {
        Self {
            combining: RangeTable::from_static(COMBINING_RANGES),
            wide: RangeTable::from_static(WIDE_RANGES),
            options: ClassifierOptions::const_default(),
        }
    }

    /// Classifier over caller-supplied tables
    pub fn new(combining: RangeTable, wide: RangeTable) -> Self {
        Self {
            combining,
            wide,
            options: ClassifierOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ClassifierOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    pub fn combining(&self) -> &RangeTable {
        &self.combining
    }

    pub fn wide(&self) -> &RangeTable {
        &self.wide
    }

    /// Classify a raw code point
    ///
    /// Total over `u32`: values outside both tables, including values above
    /// U+10FFFF, are single width.
    pub fn classify(&self, code_point: u32) -> CellWidth {
        let strategy = self.options.strategy;
        if self.combining.contains_with(code_point, strategy) {
            CellWidth::Zero
        } else if self.wide.contains_with(code_point, strategy) {
            CellWidth::Double
        } else {
            CellWidth::Single
        }
    }

    /// Number of cells `c` occupies
    pub fn char_width(&self, c: char) -> usize {
        self.classify(c as u32).cells()
    }
}

impl Default for WidthClassifier {
    fn default() -> Self {
        Self::reference()
    }
}
