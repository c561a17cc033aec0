#![warn(missing_docs)]

//! # `pitfall`
//!
//! A deduction aid for hidden hazard exploration games: pits, arrows and dragons hide in the rooms of a small toroidal dungeon,
//! and from inside a room the player only senses whether one of its four neighbors holds a hazard, never which one.
//! Build a [`Dungeon`], move its cursor with [`move_selection`](Dungeon::move_selection), report what was sensed with
//! [`explore`](Dungeon::explore), and read the verdict for every room back with [`get_room`](Dungeon::get_room).
//!
//! Drawing, input and layout are left to the caller; this crate only tracks and infers hazard likelihood per room.
//!
//! # Internals
//! Each room keeps two tri-state facts per [`Attribute`]:
//! what was sensed there about its neighbors ([`NeighborSensed`]), and what has been deduced about the room itself ([`DeducedState`]).
//! Deduced `Yes` and `No` are locked and never revised by inference.
//!
//! After every command the whole dungeon is swept twice:
//! 1. Every open room next to a room that sensed nothing for an attribute is cleared of it.
//! 2. Every remaining open room next to a room that sensed the attribute becomes a candidate.
//! When three of that neighbor's four neighbors are already clear, the candidate is the only one left and is confirmed.
//!
//! Only the first sensing neighbor in canonical order (left, right, up, down) is consulted in step 2.
//!
//! The sweep is a single pass rather than a search to a fixed point, so it is cheap enough to run on every key press.

pub use attribute::{Attribute, PerAttribute};
pub use dungeon::{Dungeon, DEFAULT_SIZE};
pub use error::ParseLocationError;
pub use location::{Coord, Dimension, Location};
pub use room::Room;
pub use shape::SquareStep;
pub use state::{DeducedState, NeighborSensed, Severity};

pub(crate) mod attribute;
pub(crate) mod dungeon;
pub(crate) mod error;
pub(crate) mod location;
pub(crate) mod propagate;
pub(crate) mod room;
pub(crate) mod shape;
pub(crate) mod state;
#[cfg(feature = "wasm")]
pub mod wasm;
