use gomoku_stepper::{Direction, StepError, ALL_DIRECTIONS};

#[test]
fn test_unit_vectors() {
    let expected = [
        (Direction::Up, (0, 1)),
        (Direction::Down, (0, -1)),
        (Direction::Left, (-1, 0)),
        (Direction::Right, (1, 0)),
        (Direction::UpLeft, (-1, 1)),
        (Direction::UpRight, (1, 1)),
        (Direction::DownLeft, (-1, -1)),
        (Direction::DownRight, (1, -1)),
    ];
    for (dir, vector) in expected {
        assert_eq!(dir.unit_vector(), vector, "{}", dir);
        assert_eq!(<(i8, i8)>::from(dir), vector);
    }
}

#[test]
fn test_accepted_spellings() {
    let cases = [
        ("up", Direction::Up),
        ("U", Direction::Up),
        ("Down", Direction::Down),
        ("l", Direction::Left),
        ("RIGHT", Direction::Right),
        ("LU", Direction::UpLeft),
        ("left_up", Direction::UpLeft),
        ("up left", Direction::UpLeft),
        ("ru", Direction::UpRight),
        ("Up-Right", Direction::UpRight),
        ("LD", Direction::DownLeft),
        ("dl", Direction::DownLeft),
        ("rd", Direction::DownRight),
        (" down-right ", Direction::DownRight),
    ];
    for (token, dir) in cases {
        assert_eq!(token.parse::<Direction>().unwrap(), dir, "token {:?}", token);
    }
}

#[test]
fn test_rejected_spellings() {
    for token in ["X", "north", "uu", "up--left", "", "left-right"] {
        assert!(
            matches!(token.parse::<Direction>(), Err(StepError::InvalidDirection(_))),
            "token {:?}",
            token
        );
    }
}

#[test]
fn test_names_and_codes_round_trip() {
    for dir in ALL_DIRECTIONS {
        assert_eq!(dir.name().parse::<Direction>().unwrap(), dir);
        assert_eq!(dir.code().parse::<Direction>().unwrap(), dir);
        assert_eq!(dir.to_string(), dir.name());
    }
}

#[test]
fn test_opposites_cancel() {
    for dir in ALL_DIRECTIONS {
        let (a, b) = dir.unit_vector();
        let (c, d) = dir.opposite().unit_vector();
        assert_eq!((a + c, b + d), (0, 0));
        assert_eq!(dir.opposite().opposite(), dir);
    }
}
