use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A point on the board grid, addressed by line and column. Both are
/// zero based internally; the display form counts lines from 1 and
/// labels columns with letters, so the top left corner reads `1a`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoardLocation {
    line: u8,
    column: u8,
}

// Accepts the line digit and column letter in either order ("1a", "a1").
static LOCATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^(?:([1-9])([a-i])|([a-i])([1-9]))$").unwrap()
});

impl BoardLocation {
    pub fn new(line: u8, column: u8) -> Self {
        Self { line, column }
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    pub fn column(&self) -> u8 {
        self.column
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.line + 1, (b'a' + self.column) as char)
    }
}

type ParseError = &'static str;

impl FromStr for BoardLocation {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        const INVALID: ParseError = "invalid location; expected a line digit and a column letter, e.g. 1a";
        let lowered = input.to_lowercase();
        let captures = LOCATION_REGEX.captures(lowered.trim()).ok_or(INVALID)?;
        let digit = captures.get(1).or_else(|| captures.get(4)).ok_or(INVALID)?;
        let letter = captures.get(2).or_else(|| captures.get(3)).ok_or(INVALID)?;
        let line = digit.as_str().as_bytes()[0] - b'1';
        let column = letter.as_str().as_bytes()[0] - b'a';
        Ok(BoardLocation::new(line, column))
    }
}
