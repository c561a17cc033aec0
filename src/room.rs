use std::fmt::{Display, Formatter};

use crate::attribute::{Attribute, PerAttribute};
use crate::location::Location;
use crate::state::{DeducedState, NeighborSensed, Severity};

/// A single room: what was sensed here and what has been deduced about it.
///
/// Rooms are owned by a [`Dungeon`](crate::Dungeon) and only it mutates them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    location: Location,
    pub(crate) visited: bool,
    pub(crate) sensed: PerAttribute<NeighborSensed>,
    pub(crate) deduced: PerAttribute<DeducedState>,
}

impl Room {
    pub(crate) fn new(location: Location) -> Self {
        Self {
            location,
            visited: false,
            sensed: Default::default(),
            deduced: Default::default(),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.location);
    }

    /// Record entering this room and sensing `clues` from its neighbors.
    ///
    /// Surviving the entry clears the room of everything not already confirmed.
    /// A sensed `No` is never overwritten afterwards.
    pub(crate) fn enter(&mut self, clues: PerAttribute<bool>) {
        self.visited = true;

        for (attribute, clue) in clues.iter() {
            if self.deduced[attribute] != DeducedState::Yes {
                self.deduced[attribute] = DeducedState::No;
            }

            if self.sensed[attribute] != NeighborSensed::No {
                self.sensed[attribute] = NeighborSensed::from_clue(*clue);
            }
        }
    }

    /// Record certain knowledge that `attribute` is here, regardless of what was deduced before.
    pub(crate) fn confirm(&mut self, attribute: Attribute) {
        self.visited = true;
        self.deduced[attribute] = DeducedState::Yes;
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn sensed(&self, attribute: Attribute) -> NeighborSensed {
        self.sensed[attribute]
    }

    pub fn deduced(&self, attribute: Attribute) -> DeducedState {
        self.deduced[attribute]
    }

    /// Nothing at all is known about this room yet.
    pub fn is_undetermined(&self) -> bool {
        self.deduced.iter().all(|(_, state)| *state == DeducedState::Unknown)
    }

    /// Attributes worth showing for this room, in attribute order.
    pub fn hints(&self) -> impl Iterator<Item=(Attribute, Severity)> + '_ {
        self.deduced.iter().filter_map(|(attribute, state)| state.severity().map(|severity| (attribute, severity)))
    }
}

/// A three character glyph: `.?.` when undetermined, otherwise one slot per attribute.
impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let filler = if self.visited { '-' } else { '.' };

        if self.is_undetermined() {
            return write!(f, "{filler}?{filler}");
        }

        for (attribute, state) in self.deduced.iter() {
            let c = match state.severity() {
                Some(Severity::High) => attribute.initial(),
                Some(Severity::Low) => attribute.initial().to_ascii_lowercase(),
                None => filler,
            };
            write!(f, "{c}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::Room;
    use crate::attribute::{Attribute, PerAttribute};
    use crate::location::Location;
    use crate::state::{DeducedState, NeighborSensed, Severity};

    #[test]
    fn enter_clears_and_records() {
        let mut room = Room::new(Location(1, 2));
        room.enter(PerAttribute::new([true, false, true]));

        assert!(room.visited());
        assert!(room.deduced.iter().all(|(_, s)| *s == DeducedState::No));
        assert_eq!(room.sensed(Attribute::Pit), NeighborSensed::Yes);
        assert_eq!(room.sensed(Attribute::Arrow), NeighborSensed::No);
        assert_eq!(room.sensed(Attribute::Dragon), NeighborSensed::Yes);
        assert_eq!(room.to_string(), "---");
    }

    #[test]
    fn sensed_no_is_sticky() {
        let mut room = Room::new(Location(0, 0));
        room.enter(PerAttribute::new([false, true, false]));
        room.enter(PerAttribute::new([true, false, false]));

        assert_eq!(room.sensed(Attribute::Pit), NeighborSensed::No);
        assert_eq!(room.sensed(Attribute::Arrow), NeighborSensed::No);
    }

    #[test]
    fn enter_keeps_confirmed() {
        let mut room = Room::new(Location(0, 0));
        room.confirm(Attribute::Pit);
        room.enter(PerAttribute::splat(false));

        assert_eq!(room.deduced(Attribute::Pit), DeducedState::Yes);
        assert_eq!(room.deduced(Attribute::Dragon), DeducedState::No);
        assert_eq!(room.to_string(), "P--");
    }

    #[test]
    fn hints_and_glyph() {
        let mut room = Room::new(Location(3, 3));
        assert!(room.is_undetermined());
        assert_eq!(room.to_string(), ".?.");

        room.deduced[Attribute::Arrow] = DeducedState::Maybe;
        room.deduced[Attribute::Dragon] = DeducedState::Yes;
        assert!(!room.is_undetermined());
        assert_eq!(room.hints().collect_vec(), vec![(Attribute::Arrow, Severity::Low), (Attribute::Dragon, Severity::High)]);
        assert_eq!(room.to_string(), ".aD");

        room.reset();
        assert_eq!(room, Room::new(Location(3, 3)));
    }
}
