use std::fmt;

/// Errors that can occur while building or parsing a range table
///
/// `line` is 1-based: the source line for parsed tables, the entry
/// position for tables built from a list of ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Line could not be read as a range
    ParseError {
        line: usize,
        message: String,
        suggestion: Option<String>,
    },
    /// Range ends before it starts
    InvertedRange { line: usize, low: u32, high: u32 },
    /// Range lies (partly) above U+10FFFF
    OutOfRange { line: usize, code_point: u32 },
    /// Range starts before the previous one
    Unsorted {
        line: usize,
        low: u32,
        previous_low: u32,
    },
    /// Range starts inside the previous one
    Overlap {
        line: usize,
        low: u32,
        previous_high: u32,
    },
}

impl TableError {
    /// Line (or entry) the error refers to
    pub fn line(&self) -> usize {
        match self {
            TableError::ParseError { line, .. }
            | TableError::InvertedRange { line, .. }
            | TableError::OutOfRange { line, .. }
            | TableError::Unsorted { line, .. }
            | TableError::Overlap { line, .. } => *line,
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ParseError {
                line,
                message,
                suggestion,
            } => {
                write!(f, "Line {}: {}", line, message)?;
                if let Some(sug) = suggestion {
                    write!(f, " (Suggestion: {})", sug)?;
                }
                Ok(())
            }
            TableError::InvertedRange { line, low, high } => write!(
                f,
                "Line {}: range U+{:04X}..U+{:04X} ends before it starts",
                line, low, high
            ),
            TableError::OutOfRange { line, code_point } => write!(
                f,
                "Line {}: U+{:04X} is above U+10FFFF",
                line, code_point
            ),
            TableError::Unsorted {
                line,
                low,
                previous_low,
            } => write!(
                f,
                "Line {}: range starting at U+{:04X} comes after U+{:04X}",
                line, low, previous_low
            ),
            TableError::Overlap {
                line,
                low,
                previous_high,
            } => write!(
                f,
                "Line {}: range starting at U+{:04X} overlaps previous range ending at U+{:04X}",
                line, low, previous_high
            ),
        }
    }
}

impl std::error::Error for TableError {}
