//! Fixed-width text tables.
//!
//! This crate renders headers and rows into a bordered grid:
//! - [`Cell`] for typed cell values
//! - [`Row`] for record types that know how to become a table row
//! - [`Table`] and [`Alignment`] for layout and rendering
//!
//! ```text
//! +------+--------+----------------+
//! | Team | Gender | Win Percentage |
//! +------+--------+----------------+
//! | IND  |  male  |     50.00      |
//! +------+--------+----------------+
//! ```

mod cell;
mod table;

pub use cell::{Cell, Row};
pub use table::{Alignment, Table, TableError};
