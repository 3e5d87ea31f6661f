//! Cell values and row conversion.

use std::fmt;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    /// A decimal shown with exactly `places` fractional digits.
    Decimal { value: f64, places: usize },
    /// An absent value, rendered as an empty cell.
    Null,
}

impl Cell {
    /// Creates a decimal cell with the given number of fractional digits.
    pub fn decimal(value: f64, places: usize) -> Self {
        Cell::Decimal { value, places }
    }

    /// Returns the display width of the rendered value in characters.
    pub fn width(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(n) => write!(f, "{}", n),
            Cell::Decimal { value, places } => write!(f, "{:.*}", places, value),
            Cell::Null => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Integer(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Integer(n.into())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

/// A record with a fixed, statically known column layout.
pub trait Row {
    /// Column headers, in display order.
    const HEADERS: &'static [&'static str];

    /// Cells for this record, one per header.
    fn cells(&self) -> Vec<Cell>;
}
