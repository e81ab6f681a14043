use crate::{Car, EMPTY, ParkingError};
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    io,
    ops::Deref,
};

/// A single car driving from one spot into the empty spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: usize,
    to: usize,
}

impl Move {
    #[must_use]
    pub fn new(from: usize, to: usize) -> Move {
        Move { from, to }
    }

    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> usize {
        self.to
    }

    /// Replay this move literally on a spot array: the car at `from` drives
    /// into `to`, and `from` becomes the empty spot.
    ///
    /// # Errors
    ///
    /// If either spot is out of range, `from` is empty, or `to` is occupied
    pub fn apply(&self, spots: &mut [Car]) -> Result<(), ParkingError> {
        let illegal = |reason| ParkingError::IllegalMove {
            from: self.from,
            to: self.to,
            reason,
        };

        if self.from >= spots.len() || self.to >= spots.len() {
            return Err(illegal("spot out of range"));
        }
        if self.from == self.to {
            return Err(illegal("source and destination are the same spot"));
        }
        if spots[self.from] == EMPTY {
            return Err(illegal("there is no car in the source spot"));
        }
        if spots[self.to] != EMPTY {
            return Err(illegal("the destination spot is occupied"));
        }

        spots.swap(self.from, self.to);
        Ok(())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move car from spot {} to spot {}", self.from, self.to)
    }
}

/// An ordered list of moves. Every move assumes the effects of the ones
/// before it, so the order must be preserved when replaying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    #[must_use]
    pub fn new() -> MoveSequence {
        MoveSequence::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> MoveSequence {
        MoveSequence {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Replay the whole sequence on a copy of `start`, returning the layout
    /// it ends in.
    ///
    /// # Errors
    ///
    /// If any move is illegal at the point it is replayed
    pub fn replay(&self, start: &[Car]) -> Result<Vec<Car>, ParkingError> {
        let mut spots = start.to_vec();
        for mv in &self.moves {
            mv.apply(&mut spots)?;
        }
        Ok(spots)
    }

    /// Write one human readable line per move.
    ///
    /// # Errors
    ///
    /// If writing to `writer` fails
    pub fn write_to(&self, writer: &mut impl io::Write) -> io::Result<()> {
        for mv in &self.moves {
            writeln!(writer, "{mv}")?;
        }
        writer.flush()
    }
}

impl Deref for MoveSequence {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveSequence {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.moves
                .iter()
                .format_with(", ", |mv, f| f(&format_args!("{}->{}", mv.from, mv.to)))
        )
    }
}
