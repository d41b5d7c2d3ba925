//! Timing-line protocol.
//!
//! A benchmarked program reports a measurement by printing a line of the form
//!
//! ```text
//! TIMING_<name>: <seconds>
//! ```
//!
//! anywhere in its stdout. Surrounding whitespace is tolerated, every other line is
//! ignored.

use std::num::ParseFloatError;

use thiserror::Error;

pub const TIMING_PREFIX: &str = "TIMING_";

pub type ParseResult<T> = Result<T, ParseError>;

/// A tagged line whose value is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for timing `{name}` in line {line:?}")]
pub struct ParseError {
    pub line: String,
    pub name: String,
    pub value: String,
    #[source]
    pub source: ParseFloatError,
}

/// One `(name, seconds)` observation extracted from a line.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingLine<'a> {
    pub name: &'a str,
    pub seconds: f64,
}

/// Returns `Ok(None)` for lines that are not timing lines (wrong prefix or no colon).
pub fn parse_line(line: &str) -> ParseResult<Option<TimingLine<'_>>> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(TIMING_PREFIX) else {
        return Ok(None);
    };
    let Some((name, value)) = rest.split_once(':') else {
        return Ok(None);
    };

    let value = value.trim();
    match value.parse::<f64>() {
        Ok(seconds) => Ok(Some(TimingLine { name, seconds })),
        Err(source) => Err(ParseError {
            line: trimmed.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_value() {
        let t = parse_line("TIMING_foo: 1.50").unwrap().unwrap();
        assert_eq!(t.name, "foo");
        assert_eq!(t.seconds, 1.5);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let t = parse_line("  TIMING_bar:2").unwrap().unwrap();
        assert_eq!(t.name, "bar");
        assert_eq!(t.seconds, 2.0);

        let t = parse_line("\tTIMING_baz:   0.25  \r").unwrap().unwrap();
        assert_eq!(t.name, "baz");
        assert_eq!(t.seconds, 0.25);
    }

    #[test]
    fn ignores_untagged_lines() {
        for line in [
            "",
            "compiling module foo",
            "warning: TIMING_x: 1.0",
            "timing_foo: 1.0",
            "TIMING foo: 1.0",
            "TIMING_nocolon 3.0",
            "TIMING_",
        ] {
            assert_eq!(parse_line(line).unwrap(), None, "line {line:?}");
        }
    }

    #[test]
    fn name_stops_at_first_colon() {
        let err = parse_line("TIMING_a:b:1.0").unwrap_err();
        assert_eq!(err.name, "a");
        assert_eq!(err.value, "b:1.0");
    }

    #[test]
    fn malformed_value_is_an_error() {
        let err = parse_line("TIMING_x: abc").unwrap_err();
        assert_eq!(err.name, "x");
        assert_eq!(err.value, "abc");
        assert_eq!(err.line, "TIMING_x: abc");

        assert!(parse_line("TIMING_y:").is_err());
    }
}
