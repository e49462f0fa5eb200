use log::LevelFilter;
use tictactoe::{coord_to_index, index_to_coord, level_from, Player, NUM_CELLS, WINNING_LINES};

#[test]
fn test_winning_lines_are_distinct_and_on_grid() {
    for (i, line) in WINNING_LINES.iter().enumerate() {
        assert!(line.iter().all(|&c| c < NUM_CELLS));
        assert!(!WINNING_LINES[i + 1..].contains(line));
    }
}

#[test]
fn test_coord_conversion() {
    for i in 0..NUM_CELLS {
        let (r, c) = index_to_coord(i);
        assert_eq!(coord_to_index(r, c), Some(i));
    }
    assert_eq!(index_to_coord(5), (1, 2));
    assert_eq!(coord_to_index(0, 3), None);
    assert_eq!(coord_to_index(3, 0), None);
}

#[test]
fn test_player_labels() {
    assert_eq!(Player::First.to_string(), "X");
    assert_eq!(Player::Second.to_string(), "O");
    assert_eq!(Player::First.other(), Player::Second);
    assert_eq!(Player::Second.other(), Player::First);
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
    assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
}
