#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use tictactoe::cli::{parse_command, render, run};
    use tictactoe::{Command, GameSession, LifecycleState, Player, STATUS_QUIT};

    fn play(script: &str) -> (GameSession, String) {
        let mut session = GameSession::new();
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script.to_string()), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("start"), Some(Command::Start));
        assert_eq!(parse_command(" PAUSE "), Some(Command::Pause));
        assert_eq!(parse_command("q"), Some(Command::Quit { confirmed: false }));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn test_parse_cells() {
        assert_eq!(parse_command("1"), Some(Command::CellClick(0)));
        assert_eq!(parse_command("9"), Some(Command::CellClick(8)));
        assert_eq!(parse_command("a1"), Some(Command::CellClick(0)));
        assert_eq!(parse_command("B2"), Some(Command::CellClick(4)));
        assert_eq!(parse_command("C3"), Some(Command::CellClick(8)));
    }

    #[test]
    fn test_parse_off_grid_cells_still_click() {
        // The session reports these as invalid moves.
        assert!(matches!(parse_command("0"), Some(Command::CellClick(i)) if i >= 9));
        assert!(matches!(parse_command("10"), Some(Command::CellClick(i)) if i >= 9));
        assert!(matches!(parse_command("D1"), Some(Command::CellClick(i)) if i >= 9));
        assert!(matches!(parse_command("A4"), Some(Command::CellClick(i)) if i >= 9));
    }

    #[test]
    fn test_render_shows_grid_and_status() {
        let mut session = GameSession::new();
        session.start();
        session.cell_click(0);
        session.cell_click(4);
        let text = render(&session.snapshot());
        assert!(text.contains("    A B C"));
        assert!(text.contains(" 1  X . ."));
        assert!(text.contains(" 2  . O ."));
        assert!(text.contains("Player X's turn"));
        assert!(text.contains("[Running, X to move]"));
    }

    #[test]
    fn test_run_plays_a_game() {
        let (session, out) = play("start\nA1\nA2\nB1\nB2\nC1\n");
        assert_eq!(session.state(), LifecycleState::Stopped);
        assert_eq!(session.status(), "Player X wins!");
        assert!(out.contains("Player X wins!"));
    }

    #[test]
    fn test_run_quit_asks_for_confirmation() {
        let (session, out) = play("start\n5\nquit\nn\n");
        assert!(out.contains("Really quit? [y/N]"));
        assert_eq!(session.state(), LifecycleState::Running);
        assert_eq!(session.current_player(), Player::Second);

        let (session, _) = play("start\n5\nquit\ny\n");
        assert_eq!(session.state(), LifecycleState::Stopped);
        assert_eq!(session.status(), STATUS_QUIT);
    }

    #[test]
    fn test_run_reports_unknown_and_stops_on_exit() {
        let (session, out) = play("jump\nexit\nstart\n");
        assert!(out.contains("Unknown command: jump"));
        assert_eq!(session.state(), LifecycleState::Stopped);
    }
}
