use crate::{Car, EMPTY, Move, ParkingError, PositionIndex};
use log::debug;

/// A parking lot: the car in every spot together with the reverse index of
/// where every car is. The two are only ever mutated together.
#[derive(Debug, Clone)]
pub struct Layout {
    spots: Vec<Car>,
    index: PositionIndex,
}

impl Layout {
    /// Copy `spots` into a new layout and index it.
    ///
    /// # Errors
    ///
    /// If a car or the empty sentinel occurs more than once
    pub fn new(spots: &[Car]) -> Result<Layout, ParkingError> {
        Ok(Layout {
            index: PositionIndex::build(spots)?,
            spots: spots.to_vec(),
        })
    }

    #[must_use]
    pub fn spots(&self) -> &[Car] {
        &self.spots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// The car in `spot`, or `None` if the spot does not exist.
    #[must_use]
    pub fn occupant(&self, spot: usize) -> Option<Car> {
        self.spots.get(spot).copied()
    }

    #[must_use]
    pub fn contains(&self, car: Car) -> bool {
        self.index.contains(car)
    }

    /// # Errors
    ///
    /// If the car is not parked in this layout
    pub fn position_of(&self, car: Car) -> Result<usize, ParkingError> {
        self.index.lookup(car)
    }

    /// # Errors
    ///
    /// If the layout has no empty spot
    pub fn empty_spot(&self) -> Result<usize, ParkingError> {
        self.index.empty_spot()
    }

    /// Drive the car in `from` into the empty spot `to`, keeping the index in
    /// step with the spots.
    ///
    /// # Errors
    ///
    /// If the move is not legal on the current layout
    pub fn drive(&mut self, from: usize, to: usize) -> Result<Move, ParkingError> {
        let mv = Move::new(from, to);
        mv.apply(&mut self.spots)?;

        let car = self.spots[to];
        self.index.update(car, to);
        self.index.update(EMPTY, from);
        debug!("Drove car: car={car} from={from} to={to}");

        Ok(mv)
    }

    pub(crate) fn into_spots(self) -> Vec<Car> {
        self.spots
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.index.len() == self.spots.len()
            && self
                .spots
                .iter()
                .enumerate()
                .all(|(spot, &car)| self.index.lookup(car).is_ok_and(|found| found == spot))
    }
}

#[cfg(test)]
mod tests {
    use super::Layout;
    use crate::{Move, ParkingError};

    #[test]
    fn drive_keeps_index_in_sync() {
        let mut layout = Layout::new(&[1, 2, 0, 3]).unwrap();
        assert!(layout.is_consistent());

        assert_eq!(layout.drive(0, 2).unwrap(), Move::new(0, 2));
        assert_eq!(layout.spots(), [0, 2, 1, 3]);
        assert_eq!(layout.empty_spot().unwrap(), 0);
        assert_eq!(layout.position_of(1).unwrap(), 2);
        assert!(layout.is_consistent());

        layout.drive(3, 0).unwrap();
        assert_eq!(layout.spots(), [3, 2, 1, 0]);
        assert_eq!(layout.empty_spot().unwrap(), 3);
        assert!(layout.is_consistent());
    }

    #[test]
    fn failed_drive_leaves_layout_untouched() {
        let mut layout = Layout::new(&[1, 2, 0]).unwrap();
        assert!(matches!(
            layout.drive(0, 1),
            Err(ParkingError::IllegalMove { .. })
        ));
        assert_eq!(layout.spots(), [1, 2, 0]);
        assert!(layout.is_consistent());
    }

    #[test]
    fn occupant_lookup() {
        let layout = Layout::new(&[7, 0]).unwrap();
        assert_eq!(layout.occupant(0), Some(7));
        assert_eq!(layout.occupant(2), None);
        assert_eq!(layout.len(), 2);
        assert!(layout.contains(7));
        assert!(!layout.contains(3));
        assert!(!layout.is_empty());
    }
}
