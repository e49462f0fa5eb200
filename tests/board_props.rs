use proptest::prelude::*;
use tictactoe::{Board, BoardError, Cell, Player, NUM_CELLS, WINNING_LINES};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::First), Just(Player::Second)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0..NUM_CELLS, player()), 0..12).prop_map(|moves| {
        let mut board = Board::new();
        for (i, p) in moves {
            let _ = board.make_move(i, p);
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn make_move_changes_exactly_one_cell(board in arb_board(), index in 0..NUM_CELLS, p in player()) {
        let before = board.cells();
        let mut board = board;
        match board.make_move(index, p) {
            Ok(()) => {
                prop_assert_eq!(before[index], Cell::Empty);
                let after = board.cells();
                for i in 0..NUM_CELLS {
                    if i == index {
                        prop_assert_eq!(after[i], Cell::Mark(p));
                    } else {
                        prop_assert_eq!(after[i], before[i]);
                    }
                }
            }
            Err(e) => {
                prop_assert_eq!(e, BoardError::CellOccupied);
                prop_assert_eq!(board.cells(), before);
            }
        }
    }

    #[test]
    fn out_of_range_never_mutates(board in arb_board(), index in NUM_CELLS..usize::MAX, p in player()) {
        let mut board = board;
        let before = board;
        prop_assert_eq!(board.make_move(index, p), Err(BoardError::InvalidIndex));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn winner_iff_uniform_line(board in arb_board()) {
        let cells = board.cells();
        let uniform = WINNING_LINES.iter().any(|&[a, b, c]| {
            !cells[a].is_empty() && cells[a] == cells[b] && cells[b] == cells[c]
        });
        prop_assert_eq!(board.check_winner(), uniform);
    }

    #[test]
    fn full_iff_no_empty_cell(board in arb_board()) {
        prop_assert_eq!(board.is_full(), board.move_count() == NUM_CELLS);
    }
}
