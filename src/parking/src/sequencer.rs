use crate::{Car, EMPTY, Layout, MoveSequence, ParkingError, PositionIndex, error::Which};
use itertools::Itertools;
use log::{debug, info, trace};
use std::io;

/// Check that `start` and `desired` describe the same set of cars parked in
/// the same number of spots with exactly one empty spot each.
///
/// # Errors
///
/// With the first violated precondition found
pub fn validate_layouts(start: &[Car], desired: &[Car]) -> Result<(), ParkingError> {
    validated_layout(start, desired).map(drop)
}

/// Validate both layouts and hand back the indexed start layout, so the
/// sequencer works on the same index the checks ran against.
fn validated_layout(start: &[Car], desired: &[Car]) -> Result<Layout, ParkingError> {
    if start.len() != desired.len() {
        return Err(ParkingError::LengthMismatch {
            start: start.len(),
            desired: desired.len(),
        });
    }

    for (layout, spots) in [(Which::Start, start), (Which::Desired, desired)] {
        match spots.iter().filter(|&&car| car == EMPTY).count() {
            0 => return Err(ParkingError::MissingEmptySpot { layout }),
            1 => {}
            count => return Err(ParkingError::MultipleEmptySpots { layout, count }),
        }
    }

    let layout = Layout::new(start)?;
    PositionIndex::build(desired)?;

    // Equal lengths and no duplicates on either side, so every desired car
    // being present in the start layout means both hold the same cars
    if let Some((spot, &car)) = desired
        .iter()
        .find_position(|&&car| !layout.contains(car))
    {
        return Err(ParkingError::UnknownCar { car, spot });
    }

    Ok(layout)
}

/// Find a sequence of moves that rearranges the cars from `start` into
/// `desired`, using the single empty spot as a buffer.
///
/// Spots are fixed in ascending order. Fixing a spot takes at most two moves:
/// evict whatever car is in it into the empty spot, then drive the wanted car
/// in. A fixed spot is never touched again, so the sequence has at most
/// `2 * start.len()` moves. The final position of the empty spot is never
/// targeted directly; it ends up right once every car is.
///
/// If `print_sequence` is set, the finished sequence is written to stdout.
///
/// # Errors
///
/// If the layouts are malformed (see [`validate_layouts`]) or printing fails
pub fn find_moves_sequence(
    start: &[Car],
    desired: &[Car],
    print_sequence: bool,
) -> Result<MoveSequence, ParkingError> {
    let moves = plan(start, desired)?;

    if print_sequence {
        moves.write_to(&mut io::stdout().lock())?;
    }

    Ok(moves)
}

/// Like [`find_moves_sequence`], but always renders the sequence into
/// `writer`.
///
/// # Errors
///
/// If the layouts are malformed or writing fails
pub fn find_moves_sequence_into(
    start: &[Car],
    desired: &[Car],
    writer: &mut impl io::Write,
) -> Result<MoveSequence, ParkingError> {
    let moves = plan(start, desired)?;
    moves.write_to(writer)?;
    Ok(moves)
}

fn plan(start: &[Car], desired: &[Car]) -> Result<MoveSequence, ParkingError> {
    let mut layout = validated_layout(start, desired)?;
    let mut moves = MoveSequence::with_capacity(2 * layout.len());

    for (spot, &wanted) in desired.iter().enumerate() {
        if wanted == EMPTY {
            trace!("Spot {spot} should end up empty, skipping");
            continue;
        }
        set_spot(&mut layout, spot, wanted, &mut moves)?;
    }

    info!(
        "Found {} moves to rearrange {} spots",
        moves.len(),
        layout.len()
    );
    debug!("Move sequence: {moves}");
    debug_assert!(moves.len() <= 2 * layout.len());
    debug_assert_eq!(layout.into_spots(), desired);

    Ok(moves)
}

fn set_spot(
    layout: &mut Layout,
    spot: usize,
    wanted: Car,
    moves: &mut MoveSequence,
) -> Result<(), ParkingError> {
    // Spots come from enumerating the desired layout, which has the same
    // length as this one
    let current = layout.spots()[spot];

    if current == wanted {
        trace!("Car {wanted} is already in spot {spot}");
        return Ok(());
    }

    if current != EMPTY {
        let empty = layout.empty_spot()?;
        moves.push(layout.drive(spot, empty)?);
    }

    let from = layout.position_of(wanted)?;
    moves.push(layout.drive(from, spot)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        find_moves_sequence, find_moves_sequence_into, set_spot, validate_layouts,
        validated_layout,
    };
    use crate::{Layout, Move, MoveSequence, ParkingError, error::Which};
    use std::io;

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn pairs(moves: &[Move]) -> Vec<(usize, usize)> {
        moves.iter().map(|mv| (mv.from(), mv.to())).collect()
    }

    #[test]
    fn known_sequence() {
        let moves = find_moves_sequence(&[1, 2, 0, 3], &[3, 0, 1, 2], false).unwrap();
        assert_eq!(pairs(&moves), [(0, 2), (3, 0), (1, 3)]);
    }

    #[test]
    fn single_move_into_empty_spot() {
        let moves = find_moves_sequence(&[0, 1], &[1, 0], false).unwrap();
        assert_eq!(pairs(&moves), [(1, 0)]);
    }

    #[test]
    fn no_moves_when_already_arranged() {
        let moves = find_moves_sequence(&[2, 0, 1], &[2, 0, 1], false).unwrap();
        assert!(moves.is_empty());

        let moves = find_moves_sequence(&[0], &[0], false).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn renders_into_writer() {
        let mut out = Vec::new();
        let moves = find_moves_sequence_into(&[0, 1], &[1, 0], &mut out).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "move car from spot 1 to spot 0\n"
        );
    }

    #[test]
    fn validation() {
        assert!(validate_layouts(&[1, 0], &[0, 1]).is_ok());
        assert!(validate_layouts(&[], &[]).is_err());

        assert!(matches!(
            validate_layouts(&[1, 0], &[1, 0, 2]),
            Err(ParkingError::LengthMismatch {
                start: 2,
                desired: 3
            })
        ));
        assert!(matches!(
            validate_layouts(&[1, 2], &[1, 0]),
            Err(ParkingError::MissingEmptySpot {
                layout: Which::Start
            })
        ));
        assert!(matches!(
            validate_layouts(&[1, 0, 2], &[0, 0, 1]),
            Err(ParkingError::MultipleEmptySpots {
                layout: Which::Desired,
                count: 2
            })
        ));
        assert!(matches!(
            validate_layouts(&[1, 0, 1], &[1, 0, 2]),
            Err(ParkingError::DuplicateCar {
                car: 1,
                first: 0,
                second: 2
            })
        ));
        assert!(matches!(
            validate_layouts(&[1, 0, 2], &[1, 0, 3]),
            Err(ParkingError::UnknownCar { car: 3, spot: 2 })
        ));
    }

    #[test]
    fn malformed_input_produces_no_moves() {
        assert!(find_moves_sequence(&[1, 0, 2], &[2, 1, 0, 3], false).is_err());
        assert!(find_moves_sequence(&[1, 2, 3], &[3, 2, 1], false).is_err());
    }

    #[test]
    fn write_failure_is_a_render_error() {
        let err = find_moves_sequence_into(&[0, 1], &[1, 0], &mut BrokenPipe).unwrap_err();
        match err {
            ParkingError::Render(io_err) => {
                assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected a render error, got {other:?}"),
        }

        // Nothing is written, so an empty sequence renders without failing
        let moves = find_moves_sequence_into(&[1, 0], &[1, 0], &mut BrokenPipe).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn validated_layout_is_the_start_layout() {
        let layout = validated_layout(&[4, 0, 9], &[9, 4, 0]).unwrap();
        assert_eq!(layout.spots(), [4, 0, 9]);
        assert!(layout.is_consistent());
        assert_eq!(layout.empty_spot().unwrap(), 1);
        assert_eq!(layout.position_of(9).unwrap(), 2);
    }

    #[test]
    fn set_last_spot() {
        let mut layout = Layout::new(&[3, 0, 1, 2]).unwrap();
        let mut moves = MoveSequence::new();

        set_spot(&mut layout, 3, 1, &mut moves).unwrap();
        assert_eq!(pairs(&moves), [(3, 1), (2, 3)]);
        assert_eq!(layout.spots(), [3, 2, 0, 1]);
        assert!(layout.is_consistent());

        set_spot(&mut layout, 3, 1, &mut moves).unwrap();
        assert_eq!(moves.len(), 2);
    }
}
