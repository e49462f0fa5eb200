use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use tictactoe::prelude::*;
use tictactoe::NUM_CELLS;

/// Pick a random command, weighted heavily toward cell clicks. Clicks range
/// one past the grid so out-of-range moves are exercised too.
fn random_command(rng: &mut SmallRng) -> Command {
    match rng.random_range(0..20) {
        0 => Command::Start,
        1 => Command::Pause,
        2 => Command::Quit {
            confirmed: rng.random_bool(0.5),
        },
        _ => Command::CellClick(rng.random_range(0..=NUM_CELLS)),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <commands>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let commands: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new();

    let mut games_finished = 0usize;
    let mut wins_x = 0usize;
    let mut wins_o = 0usize;
    let mut draws = 0usize;
    let mut rejected_moves = 0usize;

    for _ in 0..commands {
        let command = random_command(&mut rng);
        let mover = session.current_player();
        let was_running = session.state() == LifecycleState::Running;
        match session.dispatch(command) {
            CommandOutcome::Rejected(_) => rejected_moves += 1,
            CommandOutcome::Faulted => {
                return Err(anyhow::anyhow!("session faulted on {:?}", command))
            }
            CommandOutcome::Applied
                if was_running
                    && matches!(command, Command::CellClick(_))
                    && session.state() == LifecycleState::Stopped =>
            {
                games_finished += 1;
                if session.board().check_winner() {
                    match mover {
                        Player::First => wins_x += 1,
                        Player::Second => wins_o += 1,
                    }
                } else {
                    draws += 1;
                }
            }
            _ => {}
        }
    }

    let result = json!({
        "seed": seed,
        "commands": commands,
        "games_finished": games_finished,
        "wins_x": wins_x,
        "wins_o": wins_o,
        "draws": draws,
        "rejected_moves": rejected_moves,
        "final_state": session.snapshot(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
