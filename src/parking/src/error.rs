use crate::Car;
use std::io;
use thiserror::Error;

/// Which of the two layouts handed to the sequencer an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    Start,
    Desired,
}

impl std::fmt::Display for Which {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Which::Start => f.write_str("start"),
            Which::Desired => f.write_str("desired"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("The start layout has {start} spots but the desired layout has {desired}")]
    LengthMismatch { start: usize, desired: usize },
    #[error("The {layout} layout has no empty spot")]
    MissingEmptySpot { layout: Which },
    #[error("The {layout} layout has {count} empty spots but exactly one is supported")]
    MultipleEmptySpots { layout: Which, count: usize },
    #[error("Car {car} is parked in both spot {first} and spot {second}")]
    DuplicateCar { car: Car, first: usize, second: usize },
    #[error("Car {car} is wanted in spot {spot} but is not parked anywhere in the start layout")]
    UnknownCar { car: Car, spot: usize },
    /// The position index lost track of a car. This is a bug in the
    /// sequencer, not something a caller can cause with validated input.
    #[error("Internal error: car {car} is missing from the position index")]
    IndexDesync { car: Car },
    #[error("Cannot move from spot {from} to spot {to}: {reason}")]
    IllegalMove {
        from: usize,
        to: usize,
        reason: &'static str,
    },
    #[error("Failed to render the move sequence: {0}")]
    Render(#[from] io::Error),
}
