use proptest::prelude::*;
use tsip::sans::{
    DLE, ETX, MAX_DATA,
    framer::{Advance, AnyState, Framer},
    stuff::stuff,
};

fn advance_all(framer: &mut Framer, bytes: &[u8]) -> Vec<Advance> {
    bytes.iter().map(|&b| framer.advance(b)).collect()
}

#[test]
fn ignores_bytes_between_frames() {
    let mut framer = Framer::new();

    for b in [0x00, ETX, 0x42, 0xFF] {
        assert_eq!(framer.advance(b), Advance::Pending);
        assert!(matches!(framer.state(), AnyState::Idle(_)));
    }
}

#[test]
fn walks_every_state() {
    let mut framer = Framer::new();

    framer.advance(DLE);
    assert!(matches!(framer.state(), AnyState::Framed(_)));

    framer.advance(0x42);
    assert!(matches!(framer.state(), AnyState::InData(_)));

    framer.advance(0x01);
    assert!(matches!(framer.state(), AnyState::InData(_)));

    framer.advance(DLE);
    assert!(matches!(framer.state(), AnyState::InDataEscape(_)));

    assert_eq!(framer.advance(ETX), Advance::Complete);
    assert!(matches!(framer.state(), AnyState::Idle(_)));
    assert_eq!(framer.frame(), [0x42, 0x01]);
}

#[test]
fn control_byte_after_opening_is_noise() {
    let mut framer = Framer::new();

    assert_eq!(advance_all(&mut framer, &[DLE, ETX]), [Advance::Pending; 2]);
    assert!(matches!(framer.state(), AnyState::Idle(_)));

    assert_eq!(advance_all(&mut framer, &[DLE, DLE]), [Advance::Pending; 2]);
    assert!(matches!(framer.state(), AnyState::Idle(_)));
}

#[test]
fn doubled_escape_is_stored_once() {
    let mut framer = Framer::new();

    let outcomes = advance_all(&mut framer, &[DLE, 0x99, DLE, DLE, 0x07, DLE, DLE, DLE, ETX]);

    assert_eq!(outcomes.last(), Some(&Advance::Complete));
    assert_eq!(framer.frame(), [0x99, DLE, 0x07, DLE]);
}

#[test]
fn single_escape_in_data_misframes() {
    let mut framer = Framer::new();

    let outcomes = advance_all(&mut framer, &[DLE, 0x42, 0x01, DLE, 0x02]);

    assert_eq!(outcomes.last(), Some(&Advance::Misframed));
    assert!(matches!(framer.state(), AnyState::Idle(_)));
    assert!(framer.frame().is_empty());

    // Data following a mis-frame is ignored until the next opening escape.
    assert_eq!(advance_all(&mut framer, &[0x03, 0x04]), [Advance::Pending; 2]);
    assert!(matches!(framer.state(), AnyState::Idle(_)));
}

#[test]
fn resynchronises_after_misframe() {
    let mut framer = Framer::new();

    advance_all(&mut framer, &[DLE, 0x42, DLE, 0x55]);
    let outcomes = advance_all(&mut framer, &[DLE, 0x45, 0x01, DLE, ETX]);

    assert_eq!(outcomes.last(), Some(&Advance::Complete));
    assert_eq!(framer.frame(), [0x45, 0x01]);
}

#[test]
fn new_frame_replaces_previous() {
    let mut framer = Framer::new();

    advance_all(&mut framer, &[DLE, 0x42, 1, 2, 3, DLE, ETX]);
    advance_all(&mut framer, &[DLE, 0x43, 4, DLE, ETX]);

    assert_eq!(framer.frame(), [0x43, 4]);
}

#[test]
fn drops_bytes_beyond_capacity() {
    let mut framer = Framer::new();

    let frame: Vec<u8> = (0..MAX_DATA + 40).map(|i| (i % 7) as u8 + 0x20).collect();
    let outcomes: Vec<_> = stuff(&frame).map(|b| framer.advance(b)).collect();

    assert_eq!(outcomes.last(), Some(&Advance::Complete));
    assert_eq!(framer.frame(), &frame[..MAX_DATA]);
}

#[test]
fn reset_discards_frame_in_progress() {
    let mut framer = Framer::new();

    advance_all(&mut framer, &[DLE, 0x42, 1, 2]);
    framer.reset();

    assert!(matches!(framer.state(), AnyState::Idle(_)));
    assert!(framer.frame().is_empty());
    assert_eq!(framer.advance(DLE), Advance::Pending);
    assert_eq!(framer.advance(ETX), Advance::Pending);
}

proptest! {
    #[test]
    fn never_exceeds_capacity(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut framer = Framer::new();

        for b in bytes {
            framer.advance(b);
            prop_assert!(framer.frame().len() <= MAX_DATA);
        }
    }

    #[test]
    fn stuffed_frames_reproduce(
        code in any::<u8>().prop_filter("code must not be a control byte", |c| *c != DLE && *c != ETX),
        data in prop::collection::vec(any::<u8>(), 0..MAX_DATA),
    ) {
        let mut frame = vec![code];
        frame.extend_from_slice(&data);
        frame.truncate(MAX_DATA);

        let mut framer = Framer::new();
        let completed = stuff(&frame)
            .map(|b| framer.advance(b))
            .filter(|a| *a == Advance::Complete)
            .count();

        prop_assert_eq!(completed, 1);
        prop_assert_eq!(framer.frame(), &frame[..]);
    }

    #[test]
    fn stuffing_doubles_escapes(frame in prop::collection::vec(any::<u8>(), 0..256)) {
        let escapes = frame.iter().filter(|&&b| b == DLE).count();
        let wire: Vec<u8> = stuff(&frame).collect();

        prop_assert_eq!(wire.len(), frame.len() + escapes + 3);
        prop_assert_eq!(wire.iter().filter(|&&b| b == DLE).count(), 2 * escapes + 2);
        prop_assert_eq!(&wire[wire.len() - 2..], &[DLE, ETX]);
    }
}
