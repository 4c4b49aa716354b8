//! Terminal host driver: run a session from stdin and manage the Hall of Fame.

mod telemetry;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use spotlight::domain::rules::MIN_PLAYERS;
use spotlight::domain::{Player, SeededSource, TurnView};
use spotlight::{
    AppError, ErrorCode, FileStore, GameConfig, HallOfFame, SessionController, StoreConfig,
    TaskDeck, TurnOutcome,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "spotlight")]
#[command(about = "Party game host: perform prompts, score turns, crown a winner")]
struct Cli {
    /// Emit JSON logs instead of compact text
    #[arg(long, global = true)]
    json_logs: bool,

    /// Directory holding the Hall of Fame (overrides SPOTLIGHT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a session; type points for each turn or `s` to skip
    Play(PlayArgs),
    /// List Hall of Fame entries, newest first
    HallOfFame,
    /// Delete every Hall of Fame entry
    ClearHallOfFame,
}

#[derive(Args)]
struct PlayArgs {
    /// Host name; asked for when omitted
    #[arg(long)]
    host: Option<String>,

    /// Player name, repeat for each player; asked for when fewer than two
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Rounds per player (overrides SPOTLIGHT_ROUNDS_PER_PLAYER)
    #[arg(long)]
    rounds: Option<u32>,

    /// Maximum points per task (overrides SPOTLIGHT_MAX_POINTS_PER_TASK)
    #[arg(long)]
    max_points: Option<u32>,

    /// Seed for turn order and prompts (for reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        error!(code = %e.code(), error = %e, "spotlight failed");
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut store_config = StoreConfig::from_env();
    if let Some(dir) = cli.data_dir {
        store_config.data_dir = dir;
    }
    let hall_of_fame = HallOfFame::new(Arc::new(FileStore::new(store_config.data_dir.clone())));

    match cli.command {
        Command::Play(args) => play(args, hall_of_fame).await,
        Command::HallOfFame => {
            show_hall_of_fame(&hall_of_fame).await;
            Ok(())
        }
        Command::ClearHallOfFame => {
            hall_of_fame.clear().await?;
            info!(data_dir = %store_config.data_dir.display(), "Hall of Fame cleared");
            println!("Hall of Fame cleared.");
            Ok(())
        }
    }
}

async fn play(args: PlayArgs, hall_of_fame: HallOfFame) -> Result<(), AppError> {
    let mut config = GameConfig::from_env()?;
    if let Some(rounds) = args.rounds {
        config = config.with_rounds_per_player(rounds);
    }
    if let Some(max_points) = args.max_points {
        config = config.with_max_points_per_task(max_points);
    }
    config.validate()?;

    let controller = match args.seed {
        Some(seed) => SessionController::with_parts(
            config,
            TaskDeck::standard(),
            hall_of_fame,
            Box::new(SeededSource::new(seed)),
        ),
        None => SessionController::new(config, hall_of_fame),
    };

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let host = match args.host {
        Some(host) => host,
        None => match ask(&mut input, "Host name > ").await? {
            Some(host) => host,
            None => return Ok(()),
        },
    };
    let mut names = args.players;
    while names.iter().filter(|n| !n.trim().is_empty()).count() < MIN_PLAYERS {
        let prompt = format!("Player {} name > ", names.len() + 1);
        match ask(&mut input, &prompt).await? {
            Some(name) => names.push(name),
            None => return Ok(()),
        }
    }
    controller.configure(&host, &names)?;

    let mut view = controller.start_game()?;
    let ranking = loop {
        print_turn(&view);
        let prompt = format!("Points 0-{} or 's' to skip > ", view.max_points);
        let Some(line) = ask(&mut input, &prompt).await? else {
            println!("Session abandoned.");
            return Ok(());
        };

        let outcome = if line.eq_ignore_ascii_case("s") {
            controller.skip_turn()
        } else {
            match line.parse::<i64>() {
                Ok(points) => controller.record_score(points),
                Err(_) => {
                    println!("Type a number or 's'.");
                    continue;
                }
            }
        };

        match outcome {
            Ok(TurnOutcome::Next(next)) => view = next,
            Ok(TurnOutcome::Finished { ranking }) => break ranking,
            Err(e) if e.code() == ErrorCode::InvalidScore => {
                println!("Points must be between 0 and {}.", view.max_points);
            }
            Err(e) => return Err(e.into()),
        }
    };

    print_ranking(&ranking);

    let award = controller.confirm_winner().await?;
    if let Some(warning) = &award.warning {
        eprintln!("⚠️  Could not save to the Hall of Fame: {warning}");
    }
    println!();
    println!("★ {} ★", award.winner.title());
    println!("{}", award.winner.share_message());
    controller.award_playback_finished()?;
    Ok(())
}

/// Print `prompt` and read one trimmed line; `None` at end of input.
async fn ask(input: &mut Input, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

fn print_turn(view: &TurnView) {
    println!();
    println!(
        "Round {}/{}, turn {}/{}",
        view.round_no, view.rounds_total, view.turn_no, view.turns_total
    );
    println!("{}: {}", view.player.name, view.prompt);
}

fn print_ranking(ranking: &[Player]) {
    println!();
    println!("Final ranking");
    for (place, player) in ranking.iter().enumerate() {
        println!("{:>3}. {:<20} {:>4}", place + 1, player.name, player.score);
    }
}

async fn show_hall_of_fame(hall_of_fame: &HallOfFame) {
    let entries = hall_of_fame.list_or_empty().await;
    if entries.is_empty() {
        println!("The Hall of Fame is empty.");
        return;
    }
    for (place, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<20} {:>4}  {}",
            place + 1,
            entry.name,
            entry.points,
            entry.recorded_at.date()
        );
    }
}
