#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{cli, init_logging, CommandOutcome, GameSession};

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game in the terminal.
    Play,
    /// Start a game and click the given cells (0-8) in order.
    Replay {
        #[arg(required = true, help = "Cell indices, row-major from 0 (e.g. 0 3 1 4 2)")]
        cells: Vec<usize>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            let mut session = GameSession::new();
            let stdin = std::io::stdin();
            cli::run(&mut session, stdin.lock(), std::io::stdout())?;
        }
        Commands::Replay { cells } => {
            let mut session = GameSession::new();
            session.start();
            for index in cells {
                match session.cell_click(index) {
                    CommandOutcome::Ignored => {
                        println!("Game over before cell {}; remaining moves skipped", index);
                        break;
                    }
                    CommandOutcome::Faulted => {
                        return Err(anyhow::anyhow!("replay failed at cell {}", index))
                    }
                    _ => {}
                }
            }
            println!("{}", cli::render(&session.snapshot()));
        }
    }
    Ok(())
}
