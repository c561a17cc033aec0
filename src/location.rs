use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use ndarray::Ix;

use crate::error::ParseLocationError;

/// One coordinate of a [`Location`]; signed so that stepping off an edge is representable.
pub type Coord = isize;
/// Side length of a (square) dungeon.
pub type Dimension = NonZero<usize>;

const ROW_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default)]
/// A location `(x, y)` in a dungeon. The top left room is `Location(0, 0)`.
///
/// Any pair of coordinates is meaningful: the dungeon is a torus, so locations outside `0..size` wrap around.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Shift by `rhs` without wrapping; see [`Self::wrapped`].
    pub fn offset_by(self, rhs: (Coord, Coord)) -> Self {
        Self(self.0.wrapping_add(rhs.0), self.1.wrapping_add(rhs.1))
    }

    /// The unique location in `0..size` on both axes equivalent to `self` on a torus of side `size`.
    pub fn wrapped(self, size: Dimension) -> Self {
        let size = size.get() as Coord;
        Self(self.0.rem_euclid(size), self.1.rem_euclid(size))
    }

    pub(crate) fn as_index(&self, size: Dimension) -> (Ix, Ix) {
        let Self(x, y) = self.wrapped(size);
        (y as Ix, x as Ix)
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1 as Coord, value.0 as Coord)
    }
}

/// The letter naming `row`, if there is one.
pub(crate) fn row_label(row: Coord) -> Option<char> {
    usize::try_from(row).ok().and_then(|row| ROW_LABELS.chars().nth(row))
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match row_label(self.1) {
            Some(row) => write!(f, "{}:{}", row, self.0),
            None => write!(f, "{},{}", self.0, self.1),
        }
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    /// Accepts either a room label such as `C:4` (row letter, then column) or a raw `x,y` pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((row, column)) = s.split_once(':') {
            let mut letters = row.trim().chars();
            let row = match (letters.next(), letters.next()) {
                (Some(letter), None) => letter,
                _ => return Err(ParseLocationError::Malformed(s.to_owned())),
            };
            let y = ROW_LABELS.find(row.to_ascii_uppercase())
                .ok_or(ParseLocationError::BadRow(row))?;

            return Ok(Self(column.trim().parse()?, y as Coord));
        }

        match s.split_once(',') {
            Some((x, y)) => Ok(Self(x.trim().parse()?, y.trim().parse()?)),
            None => Err(ParseLocationError::Malformed(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::Location;
    use crate::error::ParseLocationError;

    #[test]
    fn wraps_negative_and_large() {
        let size = NonZero::new(10).unwrap();
        assert_eq!(Location(-1, 0).wrapped(size), Location(9, 0));
        assert_eq!(Location(10, 0).wrapped(size), Location(0, 0));
        assert_eq!(Location(-31, 47).wrapped(size), Location(9, 7));
    }

    #[test]
    fn label_roundtrip() {
        assert_eq!(Location(4, 2).to_string(), "C:4");
        assert_eq!("C:4".parse::<Location>().unwrap(), Location(4, 2));
        assert_eq!("c : 4".parse::<Location>().unwrap(), Location(4, 2));
        assert_eq!(Location(3, -1).to_string(), "3,-1");
        assert_eq!("3,-1".parse::<Location>().unwrap(), Location(3, -1));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("hello".parse::<Location>(), Err(ParseLocationError::Malformed("hello".to_owned())));
        assert_eq!("!:3".parse::<Location>(), Err(ParseLocationError::BadRow('!')));
        assert!(matches!("A:x".parse::<Location>(), Err(ParseLocationError::BadNumber(_))));
        assert!(matches!("AB:1".parse::<Location>(), Err(ParseLocationError::Malformed(_))));
    }
}
