use super::*;

#[test]
fn from_bytes_pairs_consecutive_bytes() {
    let ep = Episode::from_bytes(&[10, 10, 11, 12]).unwrap();
    assert_eq!(
        ep.positions,
        vec![Position::new(10, 10), Position::new(11, 12)]
    );
    assert_eq!(ep.to_bytes(), vec![10, 10, 11, 12]);
}

#[test]
fn empty_file_is_an_empty_episode() {
    let ep = Episode::from_bytes(&[]).unwrap();
    assert!(ep.is_empty());
    ep.validate().unwrap();
}

#[test]
fn odd_byte_count_is_a_format_mismatch() {
    let err = Episode::from_bytes(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, RacetrackError::FormatMismatch(_)));
}

#[test]
fn cell_is_zero_indexed() {
    assert_eq!(Position::new(1, 1).cell(), Some((0, 0)));
    assert_eq!(Position::new(10, 11).cell(), Some((9, 10)));
    assert_eq!(Position::new(50, 50).cell(), Some((49, 49)));
}

#[test]
fn coordinates_outside_one_to_fifty_are_rejected() {
    assert_eq!(Position::new(0, 5).cell(), None);
    assert_eq!(Position::new(5, 51).cell(), None);
    assert_eq!(Position::new(150, 150).cell(), None);

    let ep = Episode::new(vec![Position::new(3, 3), Position::new(51, 1)]);
    match ep.validate() {
        Err(RacetrackError::CoordinateOutOfRange { index, x, y }) => {
            assert_eq!((index, x, y), (1, 51, 1));
        }
        other => panic!("unexpected: {other:?}"),
    }
}
