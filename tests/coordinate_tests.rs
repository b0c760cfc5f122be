use gomoku_stepper::{
    column_index, column_letter, Coordinate, ErrorKind, InputError, StepError, LAST_COLUMN,
};

#[test]
fn test_board_letters() {
    assert_eq!(LAST_COLUMN, 'O');
    assert_eq!(column_letter(0), Some('A'));
    assert_eq!(column_letter(14), Some('O'));
    assert_eq!(column_letter(15), None);
    assert_eq!(column_index('h'), Some(7));
    assert_eq!(column_index('P'), None);
    assert_eq!(column_index('3'), None);
}

#[test]
fn test_parse_and_display() {
    let c: Coordinate = " h3 ".parse().unwrap();
    assert_eq!(c.letter(), 'H');
    assert_eq!(c.col(), 7);
    assert_eq!(c.row(), 3);
    assert_eq!(c.to_string(), "H3");
    assert_eq!("O15".parse::<Coordinate>().unwrap().to_string(), "O15");
}

#[test]
fn test_parse_label_is_syntax_only() {
    assert_eq!(Coordinate::parse_label("z99"), Ok(('Z', 99)));
    assert_eq!(
        Coordinate::parse_label("9Z"),
        Err(InputError::InvalidCoordinate("9Z".to_string()))
    );
}

#[test]
fn test_off_board_label() {
    assert_eq!(
        "P1".parse::<Coordinate>().unwrap_err(),
        StepError::OutOfBounds {
            step: 0,
            column: 15,
            row: 1
        }
    );
    assert_eq!(
        "A0".parse::<Coordinate>().unwrap_err(),
        StepError::OutOfBounds {
            step: 0,
            column: 0,
            row: 0
        }
    );
}

#[test]
fn test_huge_row_is_off_board() {
    assert_eq!(Coordinate::parse_label("H99999999999"), Ok(('H', u32::MAX)));
    for label in ["H99", "H99999999999"] {
        let err = label.parse::<Coordinate>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds, "{}", label);
    }
    assert_eq!(
        gomoku_stepper::step_sequence_str("H99999999999", "up", "2")
            .unwrap_err()
            .kind(),
        ErrorKind::OutOfBounds
    );
}

#[test]
fn test_offset() {
    let c = Coordinate::new(0, 1).unwrap();
    assert_eq!(c.offset(1, 1).unwrap().to_string(), "B2");
    assert_eq!(c.offset(-1, 0), Err((-1, 1)));
    assert_eq!(c.offset(0, -1), Err((0, 0)));
    assert_eq!(c.offset(14, 14).unwrap().to_string(), "O15");
    assert_eq!(c.offset(15, 0), Err((15, 1)));
}

#[test]
fn test_new_checks_bounds() {
    assert!(Coordinate::new(14, 15).is_some());
    assert!(Coordinate::new(15, 1).is_none());
    assert!(Coordinate::new(0, 0).is_none());
    assert!(Coordinate::new(0, 16).is_none());
}
