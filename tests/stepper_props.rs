use gomoku_stepper::{
    format_sequence, step_sequence, step_sequence_str, Coordinate, ErrorKind, StepError,
    ALL_DIRECTIONS, BOARD_SIZE, MAX_ROW, MIN_ROW,
};
use proptest::prelude::*;

fn any_coordinate() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, MIN_ROW..=MAX_ROW).prop_map(|(c, r)| Coordinate::new(c, r).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn in_bounds_paths_have_requested_length(
        start in any_coordinate(),
        dir_idx in 0..8usize,
        steps in 1..=BOARD_SIZE as usize,
    ) {
        let direction = ALL_DIRECTIONS[dir_idx];
        match step_sequence(start, direction, steps) {
            Ok(path) => {
                prop_assert_eq!(path.len(), steps);
                prop_assert_eq!(path[0], start);
                let (dc, dr) = direction.unit_vector();
                for pair in path.windows(2) {
                    prop_assert_eq!(pair[1].col() as i16 - pair[0].col() as i16, dc as i16);
                    prop_assert_eq!(pair[1].row() as i16 - pair[0].row() as i16, dr as i16);
                }
            }
            Err(StepError::OutOfBounds { step, .. }) => {
                // the failing step is the first one off the board
                prop_assert!(step >= 1 && step < steps);
                prop_assert!(step_sequence(start, direction, step).is_ok());
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn walking_back_returns_to_start(
        start in any_coordinate(),
        dir_idx in 0..8usize,
        steps in 1..=BOARD_SIZE as usize,
    ) {
        let direction = ALL_DIRECTIONS[dir_idx];
        if let Ok(path) = step_sequence(start, direction, steps) {
            let end = *path.last().unwrap();
            let back = step_sequence(end, direction.opposite(), steps).unwrap();
            prop_assert_eq!(*back.last().unwrap(), start);
        }
    }

    #[test]
    fn text_and_typed_entry_points_agree(
        start in any_coordinate(),
        dir_idx in 0..8usize,
        steps in 1..20usize,
    ) {
        let direction = ALL_DIRECTIONS[dir_idx];
        let typed = step_sequence(start, direction, steps);
        let text = step_sequence_str(&start.to_string(), direction.code(), &steps.to_string());
        prop_assert_eq!(typed.clone(), text);
        if let Ok(path) = typed {
            let joined = format_sequence(&path);
            prop_assert_eq!(joined.split(", ").count(), steps);
        }
    }

    #[test]
    fn coordinate_text_round_trips(start in any_coordinate()) {
        let text = start.to_string();
        prop_assert_eq!(text.parse::<Coordinate>().unwrap(), start);
        prop_assert_eq!(text.to_lowercase().parse::<Coordinate>().unwrap(), start);
    }

    #[test]
    fn unknown_tokens_never_parse(token in "[a-z]{3,6}") {
        let known = ["down", "left", "right", "up"];
        prop_assume!(!known.contains(&token.as_str()));
        let err = step_sequence_str("H8", &token, "2").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidDirection);
    }
}
