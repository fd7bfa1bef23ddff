#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use tictactoe::{
    domain::Snapshot, init_logging, ui, CliPlayer, GameEngine, Marker, MatchStatus, MoveOutcome,
    Player, RandomPlayer, OPPONENT_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Tic-tac-toe against a random opponent", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum MarkerArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<MarkerArg> for Marker {
    fn from(arg: MarkerArg) -> Self {
        match arg {
            MarkerArg::X => Marker::X,
            MarkerArg::O => Marker::O,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive match against the random opponent.
    Play {
        #[arg(long, value_enum, help = "Skip the marker prompt and play as X or O")]
        marker: Option<MarkerArg>,
        #[arg(long, help = "Fix RNG seed for a reproducible opponent (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run headless random-vs-random matches and print the tally as JSON.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { marker, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (opponent will be reproducible)", s);
            }
            play(marker.map(Marker::from), make_rng(seed)).await
        }
        Commands::Sim { games, seed } => sim(games, make_rng(seed)),
    }
}

#[cfg(feature = "std")]
async fn play(marker: Option<Marker>, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    let mut human = CliPlayer::new();

    loop {
        if Snapshot::from(&engine).show_marker_prompt {
            let chosen = match marker {
                Some(m) => m,
                None => prompt_marker()?,
            };
            engine.start_match(chosen);
            log::info!("match started, player is {}", engine.player_marker());
        }

        ui::print_board(engine.board());
        let Some(index) = human.select_cell(&mut rng, engine.board()) else {
            println!("Input closed, exiting.");
            return Ok(());
        };

        let pending = match engine.apply_player_move(index) {
            MoveOutcome::Rejected(err) => {
                println!("{}", err);
                continue;
            }
            MoveOutcome::Applied { pending, .. } => pending,
        };

        if let Some(token) = pending {
            tokio::time::sleep(Duration::from_millis(OPPONENT_DELAY_MS)).await;
            if let Some(cell) = engine.opponent_move(&mut rng, token) {
                log::debug!("opponent marked cell {}", cell + 1);
                println!("Opponent plays cell {}.", cell + 1);
            }
        }

        if engine.status() != MatchStatus::Active {
            ui::print_board(engine.board());
            println!("{}", ui::status_text(engine.status()));
            if !prompt_restart()? {
                return Ok(());
            }
            engine.restart_match();
        }
    }
}

#[cfg(feature = "std")]
fn prompt_marker() -> anyhow::Result<Marker> {
    let stdin = io::stdin();
    loop {
        print!("Play as X or O? ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before a marker was chosen");
        }
        match line.trim().to_ascii_uppercase().as_str() {
            "X" => return Ok(Marker::X),
            "O" => return Ok(Marker::O),
            other => println!("'{}' is not a marker - enter X or O", other),
        }
    }
}

#[cfg(feature = "std")]
fn prompt_restart() -> anyhow::Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("Play again? (y/n) ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => println!("'{}' - enter y or n", other),
        }
    }
}

#[cfg(feature = "std")]
fn sim(games: u32, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut seat = RandomPlayer::new();
    let mut engine = GameEngine::new();
    let mut player_wins = 0u32;
    let mut opponent_wins = 0u32;
    let mut draws = 0u32;

    for game in 0..games {
        // alternate the marker assignment so neither symbol is favored
        let marker = if game % 2 == 0 { Marker::X } else { Marker::O };
        engine.start_match(marker);

        let mut turns = 0;
        while engine.status() == MatchStatus::Active {
            turns += 1;
            if turns > 20 {
                anyhow::bail!("match failed to terminate");
            }
            let Some(index) = seat.select_cell(&mut rng, engine.board()) else {
                break;
            };
            if let MoveOutcome::Applied {
                pending: Some(token),
                ..
            } = engine.apply_player_move(index)
            {
                engine.opponent_move(&mut rng, token);
            }
        }

        match engine.status() {
            MatchStatus::Won(m) if m == engine.player_marker() => player_wins += 1,
            MatchStatus::Won(_) => opponent_wins += 1,
            MatchStatus::Draw => draws += 1,
            MatchStatus::Active => {}
        }
        log::debug!("game {} finished after {} rounds", game + 1, turns);
    }

    let result = json!({
        "games": games,
        "player_wins": player_wins,
        "opponent_wins": opponent_wins,
        "draws": draws,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
