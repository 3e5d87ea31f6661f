//! Table layout and rendering.

use crate::cell::{Cell, Row};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// Errors raised while building a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("row has {found} cells, table has {expected} columns")]
    ArityMismatch { expected: usize, found: usize },

    #[error("column {index} out of range for a table with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },
}

/// Horizontal placement of text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Pads `text` to `width` characters.
    ///
    /// Centering with odd slack puts the extra space on the right for
    /// odd-width text and on the left for even-width text.
    fn justify(self, text: &str, width: usize) -> String {
        let len = text.chars().count();
        let slack = width.saturating_sub(len);
        let (left, right) = match self {
            Alignment::Left => (0, slack),
            Alignment::Right => (slack, 0),
            Alignment::Center if slack % 2 == 0 => (slack / 2, slack / 2),
            Alignment::Center if len % 2 == 1 => (slack / 2, slack / 2 + 1),
            Alignment::Center => (slack / 2 + 1, slack / 2),
        };
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }
}

/// A text table with fixed headers and an ordered list of rows.
///
/// Rendering is a pure function of the headers, alignments and rows; rows
/// appear in insertion order.
///
/// # Example
///
/// ```
/// use stats_table::{Cell, Table};
///
/// let mut table = Table::new(["Batter", "Strike Rate"]);
/// table.add_row(vec![Cell::from("Buttler"), Cell::decimal(118.5, 2)]).unwrap();
/// assert!(table.render().contains("| Buttler |    118.50   |"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let alignments = vec![Alignment::default(); headers.len()];
        Self {
            headers,
            alignments,
            rows: Vec::new(),
        }
    }

    /// Builds a table from typed records, using the record's headers.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ArityMismatch`] if a record yields the wrong
    /// number of cells.
    pub fn from_rows<'a, R, I>(rows: I) -> Result<Self, TableError>
    where
        R: Row + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut table = Self::new(R::HEADERS.iter().copied());
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    /// Sets the alignment of one column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] if `index` is not a column.
    pub fn set_alignment(&mut self, index: usize, alignment: Alignment) -> Result<(), TableError> {
        let columns = self.alignments.len();
        let slot = self
            .alignments
            .get_mut(index)
            .ok_or(TableError::ColumnOutOfRange { index, columns })?;
        *slot = alignment;
        Ok(())
    }

    /// Appends a row of cells.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ArityMismatch`] if the row length differs from
    /// the number of headers.
    pub fn add_row(&mut self, cells: Vec<Cell>) -> Result<(), TableError> {
        if cells.len() != self.headers.len() {
            return Err(TableError::ArityMismatch {
                expected: self.headers.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Appends a typed record.
    pub fn push<R: Row>(&mut self, row: &R) -> Result<(), TableError> {
        self.add_row(row.cells())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of each column: the widest of its header and cells.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }

    /// Renders the table without a trailing newline.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let rule = Self::rule(&widths);

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(rule.clone());
        lines.push(self.line(self.headers.iter().map(String::as_str), &widths));
        lines.push(rule.clone());
        for row in &self.rows {
            let texts: Vec<String> = row.iter().map(Cell::to_string).collect();
            lines.push(self.line(texts.iter().map(String::as_str), &widths));
        }
        lines.push(rule);

        lines.join("\n")
    }

    /// Writes the rendered table followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    fn rule(widths: &[usize]) -> String {
        let mut rule = String::from("+");
        for width in widths {
            rule.push_str(&"-".repeat(width + 2));
            rule.push('+');
        }
        rule
    }

    fn line<'a>(&self, texts: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
        let mut line = String::from("|");
        for ((text, width), alignment) in texts.zip(widths).zip(&self.alignments) {
            line.push(' ');
            line.push_str(&alignment.justify(text, *width));
            line.push_str(" |");
        }
        line
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
