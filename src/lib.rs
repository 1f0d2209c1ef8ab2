//! cell-width - Terminal cell width of single Unicode code points
//!
//! Combining marks take no cells, East Asian and other wide characters take
//! two, everything else takes one.
//!
//! # Classify a Character
//! ```
//! use cell_width::{char_width, classify, CellWidth};
//!
//! assert_eq!(char_width('A'), 1);
//! assert_eq!(char_width('\u{0301}'), 0);
//! assert_eq!(char_width('語'), 2);
//! assert_eq!(classify(0x3042), CellWidth::Double);
//! ```
//!
//! # Custom Tables
//! ```
//! use cell_width::{parse_range_table, RangeTable, WidthClassifier};
//!
//! let wide = parse_range_table("# emoji\nU+1F300..U+1F64F").unwrap();
//! let classifier = WidthClassifier::new(RangeTable::empty(), wide);
//! assert_eq!(classifier.char_width('\u{1F600}'), 2);
//! ```
//!
//! # Search Strategy
//! ```
//! use cell_width::{ClassifierOptions, SearchStrategy, WidthClassifier};
//!
//! let linear = WidthClassifier::reference().with_options(ClassifierOptions {
//!     strategy: SearchStrategy::Linear,
//! });
//! assert_eq!(linear.char_width('あ'), 2);
//! ```

mod classifier;
mod error;
mod parser;
mod range;
mod tables;
mod types;

pub use classifier::{WidthClassifier, REFERENCE};
pub use error::TableError;
pub use parser::parse_range_table;
pub use range::RangeTable;
pub use tables::{COMBINING_RANGES, WIDE_RANGES};
pub use types::{CellWidth, ClassifierOptions, Interval, SearchStrategy, MAX_CODE_POINT};

/// Classify a code point against the built-in tables
///
/// # Arguments
/// * `code_point` - Any `u32`; values that are not scalar values are single width
///
/// # Returns
/// * `CellWidth::Zero` - Combining mark
/// * `CellWidth::Double` - Wide character
/// * `CellWidth::Single` - Anything else
pub fn classify(code_point: u32) -> CellWidth {
    REFERENCE.classify(code_point)
}

/// Number of terminal cells `c` occupies (0, 1 or 2)
pub fn char_width(c: char) -> usize {
    REFERENCE.char_width(c)
}
