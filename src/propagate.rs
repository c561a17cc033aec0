//! The two-phase pass that turns sensed clues into deduced states.
//!
//! Phase "No": every open state becomes [`No`](DeducedState::No) if any neighbor sensed nothing for that attribute, [`Unknown`](DeducedState::Unknown) otherwise.
//! A neighbor reporting no clue clears all of its own neighbors, one of which is this room.
//!
//! Phase "Maybe/Yes": every state still open looks at its neighbors in canonical order and stops at the first one that sensed the attribute.
//! If three of that neighbor's four neighbors are clear, this room is the only candidate left and becomes [`Yes`](DeducedState::Yes);
//! otherwise it becomes [`Maybe`](DeducedState::Maybe).
//! Later neighbors are never consulted, even when one of them would have proved [`Yes`](DeducedState::Yes).
//!
//! Locked states are skipped by both phases. The pass runs once per call and does not iterate to a fixed point.

use ndarray::Array2;
use strum::VariantArray;
use tracing::{debug, trace};

use crate::attribute::{Attribute, PerAttribute};
use crate::location::{Dimension, Location};
use crate::room::Room;
use crate::shape::SquareStep;
use crate::state::{DeducedState, NeighborSensed};

/// Counts of open states each phase settled on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct PassSummary {
    pub(crate) cleared: usize,
    pub(crate) maybe: usize,
    pub(crate) confirmed: usize,
}

pub(crate) fn update_room_states(rooms: &mut Array2<Room>, size: Dimension) -> PassSummary {
    let mut summary = PassSummary::default();
    // propagation never writes sensed states
    let sensed = rooms.map(|room| room.sensed);

    for room in rooms.iter_mut() {
        let location = room.location();
        for &attribute in Attribute::VARIANTS {
            if room.deduced[attribute].is_locked() {
                continue;
            }

            let neighbor_cleared = SquareStep::neighbors_of(location).iter()
                .any(|(_, neighbor)| sensed[neighbor.as_index(size)][attribute] == NeighborSensed::No);

            room.deduced[attribute] = if neighbor_cleared {
                summary.cleared += 1;
                DeducedState::No
            } else {
                DeducedState::Unknown
            };
        }
    }

    // the second phase never writes or unlocks No, so the set of clear rooms is fixed from here on
    let clear: Array2<PerAttribute<bool>> = rooms.map(|room| room.deduced.map(|state| state == DeducedState::No));

    for room in rooms.iter_mut() {
        let location = room.location();
        for &attribute in Attribute::VARIANTS {
            if room.deduced[attribute].is_locked() {
                continue;
            }

            let first_sensing = SquareStep::neighbors_of(location).into_iter()
                .map(|(_, neighbor)| neighbor)
                .find(|neighbor| sensed[neighbor.as_index(size)][attribute] == NeighborSensed::Yes);

            let Some(neighbor) = first_sensing else {
                continue;
            };

            if clear_neighbor_count(&clear, size, neighbor, attribute) == 3 {
                let via = neighbor.wrapped(size);
                trace!(%location, %attribute, %via, "only remaining candidate");
                summary.confirmed += 1;
                room.deduced[attribute] = DeducedState::Yes;
            } else {
                summary.maybe += 1;
                room.deduced[attribute] = DeducedState::Maybe;
            }
        }
    }

    debug!(cleared = summary.cleared, maybe = summary.maybe, confirmed = summary.confirmed, "propagated room states");
    summary
}

/// How many of the four neighbor slots of `location` are clear of `attribute`.
///
/// On very small dungeons one room can fill several slots and is then counted once per slot.
fn clear_neighbor_count(clear: &Array2<PerAttribute<bool>>, size: Dimension, location: Location, attribute: Attribute) -> usize {
    SquareStep::neighbors_of(location).iter()
        .filter(|(_, neighbor)| clear[neighbor.as_index(size)][attribute])
        .count()
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use ndarray::Array2;

    use super::{update_room_states, PassSummary};
    use crate::attribute::{Attribute, PerAttribute};
    use crate::location::Location;
    use crate::room::Room;
    use crate::state::DeducedState;

    fn rooms(size: usize) -> Array2<Room> {
        Array2::from_shape_fn((size, size), |ind| Room::new(Location::from(ind)))
    }

    #[test]
    fn empty_pass_changes_nothing() {
        let size = NonZero::new(4).unwrap();
        let mut rooms = rooms(4);
        assert_eq!(update_room_states(&mut rooms, size), PassSummary::default());
        assert!(rooms.iter().all(Room::is_undetermined));
    }

    #[test]
    fn single_room_torus_is_its_own_neighbor() {
        let size = NonZero::new(1).unwrap();
        let mut rooms = rooms(1);
        rooms[(0, 0)].sensed[Attribute::Pit] = crate::state::NeighborSensed::Yes;

        update_room_states(&mut rooms, size);

        // every neighbor slot holds the open room itself, so nothing is clear
        assert_eq!(rooms[(0, 0)].deduced(Attribute::Pit), DeducedState::Maybe);
        assert_eq!(rooms[(0, 0)].deduced(Attribute::Arrow), DeducedState::Unknown);
    }

    #[test]
    fn open_states_are_recomputed() {
        let size = NonZero::new(5).unwrap();
        let mut rooms = rooms(5);
        rooms[(2, 2)].enter(PerAttribute::new([true, true, false]));
        update_room_states(&mut rooms, size);
        assert_eq!(rooms[(2, 1)].deduced(Attribute::Pit), DeducedState::Maybe);
        assert_eq!(rooms[(2, 1)].deduced(Attribute::Dragon), DeducedState::No);

        // withdrawing the clue by hand reopens the neighbor
        rooms[(2, 2)].sensed[Attribute::Pit] = Default::default();
        update_room_states(&mut rooms, size);
        assert_eq!(rooms[(2, 1)].deduced(Attribute::Pit), DeducedState::Unknown);
        assert_eq!(rooms[(2, 1)].deduced(Attribute::Arrow), DeducedState::Maybe);
    }
}
