use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;

use crate::attribute::{Attribute, PerAttribute};
use crate::location::{row_label, Coord, Dimension, Location};
use crate::propagate;
use crate::room::Room;
use crate::shape::SquareStep;
use crate::state::{DeducedState, NeighborSensed};

/// Side length of a [`Dungeon`] built with [`Default`].
pub const DEFAULT_SIZE: Dimension = match Dimension::new(10) {
    Some(size) => size,
    None => panic!("default dungeon size must be nonzero"),
};

/// A square, toroidal grid of [`Room`]s with a selection cursor.
///
/// Every room has exactly four neighbors: the left edge touches the right edge and the top edge touches the bottom.
/// Every mutating command except the manual corrections ends with a full propagation pass, see [`Self::update_room_states`].
#[derive(Clone, Debug)]
pub struct Dungeon {
    rooms: Array2<Room>,
    size: Dimension,
    selected: Location,
}

impl Default for Dungeon {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Dungeon {
    /// Construct a `size` by `size` dungeon with nothing known and the top left room selected.
    pub fn new(size: Dimension) -> Self {
        Self {
            rooms: Array2::from_shape_fn((size.get(), size.get()), |ind| Room::new(Location::from(ind))),
            size,
            selected: Location::default(),
        }
    }

    pub fn size(&self) -> Dimension {
        self.size
    }

    /// Forget everything and select the top left room again.
    pub fn reset(&mut self) {
        debug!("resetting dungeon");
        self.selected = Location::default();
        self.rooms.iter_mut().for_each(Room::reset);
    }

    /// The selected location, always within `0..size` on both axes.
    pub fn selected(&self) -> Location {
        self.selected
    }

    pub fn selected_room(&self) -> &Room {
        self.get_room(self.selected)
    }

    /// Select the room at `location`, wrapping it into the dungeon.
    pub fn select(&mut self, location: Location) {
        self.selected = location.wrapped(self.size);
    }

    /// Move the cursor by one room, wrapping across the edge.
    pub fn move_selection(&mut self, step: SquareStep) {
        let last = self.size.get() as Coord - 1;
        let wrap = |c: Coord| match c {
            c if c > last => 0,
            c if c < 0 => last,
            c => c,
        };

        let Location(x, y) = step.attempt_from(self.selected);
        self.selected = Location(wrap(x), wrap(y));
    }

    /// Enter the selected room and record which attributes were sensed among its neighbors, then propagate.
    pub fn explore(&mut self, pit: bool, arrow: bool, dragon: bool) {
        self.explore_with(PerAttribute::new([pit, arrow, dragon]))
    }

    /// [`Self::explore`] taking the clues as a [`PerAttribute`].
    pub fn explore_with(&mut self, clues: PerAttribute<bool>) {
        debug!(location = %self.selected, ?clues, "exploring");
        self.selected_room_mut().enter(clues);
        self.update_room_states();
    }

    /// Record that the selected room certainly holds a pit, overriding any earlier deduction, then propagate.
    pub fn found_a_pit(&mut self) {
        debug!(location = %self.selected, "found a pit");
        self.selected_room_mut().confirm(Attribute::Pit);
        self.update_room_states();
    }

    /// Run one propagation pass over the whole dungeon.
    ///
    /// Commands already do this; call it directly after manual corrections.
    pub fn update_room_states(&mut self) {
        propagate::update_room_states(&mut self.rooms, self.size);
    }

    /// The room at `location`. Any location is accepted and wrapped into the dungeon.
    pub fn get_room(&self, location: Location) -> &Room {
        &self.rooms[location.as_index(self.size)]
    }

    /// The four neighbors of `location`, in canonical order.
    pub fn neighbors(&self, location: Location) -> [(SquareStep, &Room); 4] {
        SquareStep::neighbors_of(location).map(|(step, neighbor)| (step, self.get_room(neighbor)))
    }

    /// All rooms, row by row.
    pub fn rooms(&self) -> impl Iterator<Item=&Room> {
        self.rooms.iter()
    }

    /// Manually mark the selected room as visited or not. Does not propagate.
    pub fn set_visited(&mut self, visited: bool) {
        self.selected_room_mut().visited = visited;
    }

    /// Manually overwrite what was sensed in the selected room. Does not propagate.
    pub fn set_sensed(&mut self, attribute: Attribute, sensed: NeighborSensed) {
        self.selected_room_mut().sensed[attribute] = sensed;
    }

    /// Manually overwrite the deduction for the selected room, locked or not. Does not propagate.
    pub fn set_deduced(&mut self, attribute: Attribute, deduced: DeducedState) {
        self.selected_room_mut().deduced[attribute] = deduced;
    }

    fn selected_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.selected.as_index(self.size)]
    }
}

/// Column numbers across the top, row letters down the side, one [`Room`] glyph per room, and the selection in brackets.
impl Display for Dungeon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let n = self.size.get();
        writeln!(f, "{}", (0..n).map(|x| format!("{x:>4}")).join(""))?;

        for (y, row) in self.rooms.rows().into_iter().enumerate() {
            match row_label(y as Coord) {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{y}")?,
            }

            for (x, room) in row.iter().enumerate() {
                let separator = if self.selected == Location(x as Coord, y as Coord) {
                    '['
                } else if x > 0 && self.selected == Location(x as Coord - 1, y as Coord) {
                    ']'
                } else {
                    ' '
                };
                write!(f, "{separator}{room}")?;
            }

            if self.selected == Location(n as Coord - 1, y as Coord) {
                write!(f, "]")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
