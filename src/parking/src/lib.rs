#![warn(clippy::pedantic)]

//! Rearranging cars in a parking lot that has exactly one empty spot.
//!
//! The only way to move a car is to drive it into the empty spot.
//! [`find_moves_sequence`] computes a sequence of such moves turning a start
//! layout into a desired one in linear time.

mod error;
mod layout;
mod moves;
mod position_index;
mod sequencer;

pub use error::{ParkingError, Which};
pub use layout::Layout;
pub use moves::{Move, MoveSequence};
pub use position_index::PositionIndex;
pub use sequencer::{find_moves_sequence, find_moves_sequence_into, validate_layouts};

/// Identifies a car. [`EMPTY`] is reserved for the empty spot.
pub type Car = u32;

/// The occupant of the empty spot. Never use it for a real car.
pub const EMPTY: Car = 0;
