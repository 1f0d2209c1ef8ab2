//! Range table text format
//!
//! One entry per line, either `LOW..HIGH` or a single code point. Values are
//! hexadecimal with an optional `U+` or `0x` prefix. `#` starts a comment.
//!
//! ```text
//! # Combining Diacritical Marks
//! U+0300..U+036F
//! 0x0378
//! ```

use winnow::ascii::space0;
use winnow::combinator::{alt, opt, preceded};
use winnow::token::take_while;
use winnow::PResult;
use winnow::Parser;

use crate::error::TableError;
use crate::range::{check_range, RangeTable};
use crate::types::Interval;

/// Parse a hexadecimal code point with optional prefix
fn parse_code_point(input: &mut &str) -> PResult<u32> {
    preceded(
        opt(alt(("U+", "u+", "0x", "0X"))),
        take_while(1..=8, |c: char| c.is_ascii_hexdigit()),
    )
    .try_map(|digits: &str| u32::from_str_radix(digits, 16))
    .parse_next(input)
}

/// Parse `LOW..HIGH` or a single code point
fn parse_range(input: &mut &str) -> PResult<Interval> {
    let low = parse_code_point(input)?;
    let high = opt(preceded((space0, "..", space0), parse_code_point)).parse_next(input)?;
    Ok((low, high.unwrap_or(low)))
}

/// Strip the comment and surrounding whitespace from a line
fn content_of(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

/// Parse range table text into a validated table
pub fn parse_range_table(input: &str) -> Result<RangeTable, TableError> {
    let mut ranges = Vec::new();
    let mut previous = None;

    for (i, line) in input.lines().enumerate() {
        let line_num = i + 1;
        let content = content_of(line);
        if content.is_empty() {
            continue;
        }

        let range = parse_range
            .parse(content)
            .map_err(|_| TableError::ParseError {
                line: line_num,
                message: format!("Invalid range '{}'", content),
                suggestion: Some("Use 'U+0300..U+036F' or a single 'U+0300'".to_string()),
            })?;

        check_range(range, previous, line_num)?;
        previous = Some(range);
        ranges.push(range);
    }

    Ok(RangeTable::from_checked(ranges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_point_prefixes() {
        for text in ["U+0300", "u+0300", "0x300", "0X0300", "300"] {
            let mut input = text;
            assert_eq!(parse_code_point(&mut input).unwrap(), 0x300, "{}", text);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn test_parse_range_forms() {
        let mut input = "U+0378..U+0379";
        assert_eq!(parse_range(&mut input).unwrap(), (0x378, 0x379));

        let mut input = "1100 .. 115F";
        assert_eq!(parse_range(&mut input).unwrap(), (0x1100, 0x115F));

        let mut input = "FFFF";
        assert_eq!(parse_range(&mut input).unwrap(), (0xFFFF, 0xFFFF));
    }

    #[test]
    fn test_parse_table_with_comments() {
        let input = "# header\n\nU+0300..U+036F  # combining\n  0x0378\n";
        let table = parse_range_table(input).unwrap();
        assert_eq!(table.ranges(), &[(0x300, 0x36F), (0x378, 0x378)]);
    }

    #[test]
    fn test_parse_empty_input() {
        let table = parse_range_table("").unwrap();
        assert!(table.is_empty());
        let table = parse_range_table("# nothing here\n\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_error_line_number() {
        let input = "U+0300..U+036F\n\nnot a range";
        let err = parse_range_table(input).unwrap_err();
        assert!(matches!(err, TableError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let err = parse_range_table("U+0300..").unwrap_err();
        assert!(matches!(err, TableError::ParseError { line: 1, .. }));
        let err = parse_range_table("U+0300 U+0301").unwrap_err();
        assert!(matches!(err, TableError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_parse_reports_source_line_for_overlap() {
        let input = "# table\nU+0010..U+0020\n\nU+0015";
        let err = parse_range_table(input).unwrap_err();
        assert_eq!(err.line(), 4);
        assert!(matches!(err, TableError::Overlap { .. }));
    }

    #[test]
    fn test_display_parses_back() {
        let ranges = vec![(0x300, 0x36F), (0x378, 0x378), (0x1F300, 0x1F5FF)];
        let table = RangeTable::from_ranges(ranges).unwrap();
        let reparsed = parse_range_table(&table.to_string()).unwrap();
        assert_eq!(reparsed, table);
    }
}
