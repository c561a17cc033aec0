use strum::{Display, EnumString, VariantArray};

use crate::location::{Coord, Location};

/// A single step between orthogonally adjacent rooms.
///
/// Variants are declared in the canonical neighbor order, [`Left`](Self::Left), [`Right`](Self::Right), [`Up`](Self::Up), [`Down`](Self::Down);
/// [`Self::VARIANTS`] iterates in that order and propagation depends on it.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SquareStep {
    #[strum(to_string = "left", serialize = "h")]
    Left,
    #[strum(to_string = "right", serialize = "l")]
    Right,
    #[strum(to_string = "up", serialize = "k")]
    Up,
    #[strum(to_string = "down", serialize = "j")]
    Down,
}

impl SquareStep {
    /// The unit offset `(dx, dy)` of this step; `y` grows downward.
    pub fn offset(&self) -> (Coord, Coord) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// Take the step from `location`. The result is not wrapped.
    pub fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.offset())
    }

    /// Every neighbor of `location` in canonical order, paired with the step that reaches it.
    pub fn neighbors_of(location: Location) -> [(Self, Location); 4] {
        [Self::Left, Self::Right, Self::Up, Self::Down].map(|step| (step, step.attempt_from(location)))
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::SquareStep;
    use crate::location::Location;

    #[test]
    fn canonical_order() {
        assert_eq!(SquareStep::VARIANTS, &[SquareStep::Left, SquareStep::Right, SquareStep::Up, SquareStep::Down]);
        assert_eq!(
            SquareStep::neighbors_of(Location(5, 5)).map(|(_, l)| l),
            [Location(4, 5), Location(6, 5), Location(5, 4), Location(5, 6)],
        );
    }

    #[test]
    fn unit_offsets() {
        for step in SquareStep::VARIANTS {
            let (dx, dy) = step.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("k".parse::<SquareStep>().unwrap(), SquareStep::Up);
        assert_eq!("LEFT".parse::<SquareStep>().unwrap(), SquareStep::Left);
        assert!("north".parse::<SquareStep>().is_err());
    }
}
