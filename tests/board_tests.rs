use gomoku_stepper::{path_mask, render_path, step_sequence_str, BitBoard, BitBoardError};

#[test]
fn test_renders_start_and_path() {
    let path = step_sequence_str("A1", "ru", "3").unwrap();
    let text = render_path(&path);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 16);
    // bottom row is row 1
    assert!(lines[14].starts_with(" 1  S ."));
    assert!(lines[13].starts_with(" 2  . X"));
    assert!(lines[12].starts_with(" 3  . . X"));
    assert!(lines[15].trim_start().starts_with("A B C"));
    assert_eq!(text.matches('X').count(), 2);
}

#[test]
fn test_mask_marks_every_cell() {
    let path = step_sequence_str("H8", "down", "8").unwrap();
    let mask = path_mask(&path);
    assert_eq!(mask.count_ones(), 8);
    // column H is index 7, rows 8 down to 1
    assert_eq!(
        mask.iter_set().collect::<Vec<_>>(),
        (0..8).map(|r| (r, 7)).collect::<Vec<_>>()
    );
}

#[test]
fn test_bitboard_set_and_get() {
    let mut bb = BitBoard::<u16, 15>::default();
    assert_eq!(bb.count_ones(), 0);
    bb.set(14, 14).unwrap();
    bb.set(0, 3).unwrap();
    assert!(bb.get(14, 14).unwrap());
    assert!(!bb.get(14, 13).unwrap());
    assert_eq!(bb.iter_set().collect::<Vec<_>>(), vec![(0, 3), (14, 14)]);
    assert_eq!(format!("{:?}", bb), "BitBoard<15x15> [(0,3) (14,14)]");
}

#[test]
fn test_bitboard_rejects_out_of_range() {
    let mut bb = BitBoard::<u16, 15>::new();
    assert_eq!(
        bb.set(15, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 15, col: 0 })
    );
    assert!(bb.get(0, 15).is_err());
    // more columns than bits in a row
    assert!(BitBoard::<u8, 9>::new().set(0, 8).is_err());
}
