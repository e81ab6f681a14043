use crate::{Car, EMPTY, ParkingError};
use fxhash::{FxBuildHasher, FxHashMap};
use std::collections::hash_map::Entry;

/// Reverse lookup from a car to the spot it is parked in.
///
/// The empty sentinel is tracked like any other car, so the empty spot is
/// found in constant time as well. Whoever owns the index is responsible for
/// keeping it the exact inverse of the spot array; see [`crate::Layout`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    positions: FxHashMap<Car, usize>,
}

impl PositionIndex {
    /// Build the index of a layout so that `lookup(spots[i]) == i`.
    ///
    /// # Errors
    ///
    /// If any identifier, including the empty sentinel, appears twice
    pub fn build(spots: &[Car]) -> Result<PositionIndex, ParkingError> {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(spots.len(), FxBuildHasher::default());

        for (spot, &car) in spots.iter().enumerate() {
            match positions.entry(car) {
                Entry::Occupied(first) => {
                    return Err(ParkingError::DuplicateCar {
                        car,
                        first: *first.get(),
                        second: spot,
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(spot);
                }
            }
        }

        Ok(PositionIndex { positions })
    }

    pub fn update(&mut self, car: Car, spot: usize) {
        self.positions.insert(car, spot);
    }

    /// Find the spot a car is parked in.
    ///
    /// # Errors
    ///
    /// If the car is not tracked. Callers only look up cars that are known to
    /// be parked, so this indicates the index went out of sync.
    pub fn lookup(&self, car: Car) -> Result<usize, ParkingError> {
        self.positions
            .get(&car)
            .copied()
            .ok_or(ParkingError::IndexDesync { car })
    }

    /// The spot currently holding the empty sentinel.
    ///
    /// # Errors
    ///
    /// If the sentinel is not tracked
    pub fn empty_spot(&self) -> Result<usize, ParkingError> {
        self.lookup(EMPTY)
    }

    #[must_use]
    pub fn contains(&self, car: Car) -> bool {
        self.positions.contains_key(&car)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
