/// Inclusive `(low, high)` code point interval
pub type Interval = (u32, u32);

/// Highest Unicode scalar value
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Number of terminal cells a code point occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellWidth {
    /// Combining mark, stacked onto the preceding character
    Zero,
    /// Default width
    #[default]
    Single,
    /// Wide character (East Asian scripts and similar blocks)
    Double,
}

impl CellWidth {
    /// Width in terminal cells
    pub fn cells(self) -> usize {
        match self {
            CellWidth::Zero => 0,
            CellWidth::Single => 1,
            CellWidth::Double => 2,
        }
    }
}

impl From<CellWidth> for usize {
    fn from(width: CellWidth) -> usize {
        width.cells()
    }
}

/// How a range table is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Binary search over the sorted ranges
    #[default]
    Binary,
    /// Ascending scan, stopping at the first range starting above the code point
    Linear,
}

/// Classifier options
#[derive(Debug, Clone, Default)]
pub struct ClassifierOptions {
    /// Membership test used for both tables
    pub strategy: SearchStrategy,
}

impl ClassifierOptions {
    pub(crate) const fn const_default() -> Self {
        Self {
            strategy: SearchStrategy::Binary,
        }
    }
}
