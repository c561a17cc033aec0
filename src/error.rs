use std::num::ParseIntError;

use thiserror::Error;

/// Reasons a room label or coordinate pair failed to parse into a [`Location`](crate::Location).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseLocationError {
    /// Neither `<row letter>:<column>` nor `<x>,<y>`.
    #[error("expected `<row letter>:<column>` or `<x>,<y>`, got {0:?}")]
    Malformed(String),
    /// The row of a label was not a letter `A` to `Z`.
    #[error("row {0:?} is not a letter from A to Z")]
    BadRow(char),
    /// A coordinate was not an integer.
    #[error("bad coordinate: {0}")]
    BadNumber(#[from] ParseIntError),
}
