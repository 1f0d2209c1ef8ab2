//! Sorted range tables and the membership test

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::TableError;
use crate::types::{Interval, SearchStrategy, MAX_CODE_POINT};

/// Sorted, non-overlapping sequence of inclusive code point ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Cow<'static, [Interval]>,
}

impl RangeTable {
    /// Wrap static data that is already known to be sorted and disjoint
    pub(crate) const fn from_static(ranges: &'static [Interval]) -> Self {
        Self {
            ranges: Cow::Borrowed(ranges),
        }
    }

    /// Build a table from owned ranges, checking ordering and bounds
    ///
    /// Adjacent ranges are accepted and kept as separate entries.
    pub fn from_ranges(ranges: Vec<Interval>) -> Result<Self, TableError> {
        let mut previous = None;
        for (i, &range) in ranges.iter().enumerate() {
            check_range(range, previous, i + 1)?;
            previous = Some(range);
        }
        Ok(Self::from_checked(ranges))
    }

    /// Wrap ranges already validated with `check_range`
    pub(crate) fn from_checked(ranges: Vec<Interval>) -> Self {
        Self {
            ranges: Cow::Owned(ranges),
        }
    }

    /// Table with no ranges
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }

    /// Check whether `code_point` falls inside any range
    pub fn contains(&self, code_point: u32) -> bool {
        self.contains_with(code_point, SearchStrategy::Binary)
    }

    /// Check membership using the given search strategy
    pub fn contains_with(&self, code_point: u32, strategy: SearchStrategy) -> bool {
        match strategy {
            SearchStrategy::Binary => binary_contains(&self.ranges, code_point),
            SearchStrategy::Linear => linear_contains(&self.ranges, code_point),
        }
    }

    pub fn ranges(&self) -> &[Interval] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.ranges.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for RangeTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// One range per line, `U+LOW..U+HIGH` or `U+CP` for single points
impl fmt::Display for RangeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(low, high)) in self.ranges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if low == high {
                write!(f, "U+{:04X}", low)?;
            } else {
                write!(f, "U+{:04X}..U+{:04X}", low, high)?;
            }
        }
        Ok(())
    }
}

/// Validate `range` against bounds and the range before it
pub(crate) fn check_range(
    range: Interval,
    previous: Option<Interval>,
    line: usize,
) -> Result<(), TableError> {
    let (low, high) = range;
    if low > high {
        return Err(TableError::InvertedRange { line, low, high });
    }
    if high > MAX_CODE_POINT {
        return Err(TableError::OutOfRange {
            line,
            code_point: high,
        });
    }
    if let Some((previous_low, previous_high)) = previous {
        if low < previous_low {
            return Err(TableError::Unsorted {
                line,
                low,
                previous_low,
            });
        }
        if low <= previous_high {
            return Err(TableError::Overlap {
                line,
                low,
                previous_high,
            });
        }
    }
    Ok(())
}

/// Ascending scan; stops at the first range starting above `code_point`
fn linear_contains(ranges: &[Interval], code_point: u32) -> bool {
    for &(low, high) in ranges {
        if code_point < low {
            break;
        }
        if code_point <= high {
            return true;
        }
    }
    false
}

fn binary_contains(ranges: &[Interval], code_point: u32) -> bool {
    ranges
        .binary_search_by(|&(low, high)| {
            if high < code_point {
                Ordering::Less
            } else if low > code_point {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
