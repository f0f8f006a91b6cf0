use std::io::BufRead;

use clap::Parser;
use kuba::{render_board, Color, Coord, Direction, KubaGame};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Interactive two-player Kuba game on the console.
#[derive(Parser)]
struct Args {
    /// Name of the player with the black marbles
    black: String,

    /// Name of the player with the white marbles
    white: String,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut game = KubaGame::new((&args.black, Color::Black), (&args.white, Color::White))?;

    println!("Welcome to the Kuba game!");
    println!("Moves are entered as \"name row,col direction\".");
    println!("Valid directions are: R, L, F, B. Enter q to quit.");
    println!("{} has black marbles, {} has white marbles.", args.black, args.white);
    print_state(&game);

    let stdin = std::io::stdin().lock();
    for line in stdin.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Some((name, coord, direction)) = parse_move(trimmed) else {
            println!("Input invalid! Expected: name row,col direction");
            continue;
        };

        match game.make_move(name, coord, direction) {
            Ok(captured) => {
                debug!(player = name, %coord, %direction, "Committed move");
                if let Some(marble) = captured {
                    println!("{} captured a {} marble!", name, marble);
                }
            }
            Err(err) => {
                // Print the whole rejection chain, most specific reason last.
                let mut err_dyn = &err as &dyn std::error::Error;
                println!("{}", err_dyn);
                while let Some(src_err) = err_dyn.source() {
                    err_dyn = src_err;
                    println!("  {}", err_dyn);
                }
            }
        }

        print_state(&game);
        if let Some(winner) = game.winner() {
            info!(winner);
            println!("WINNER: {}", winner);
            break;
        }
    }
    Ok(())
}

fn parse_move(line: &str) -> Option<(&str, Coord, Direction)> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let coord = parts.next()?.parse().ok()?;
    let direction = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((name, coord, direction))
}

fn print_state(game: &KubaGame) {
    println!();
    print!("{}", render_board(game.board()));
    println!();
    for player in game.players() {
        let counts = player.captured_counts();
        println!(
            "{} has captured: W: {}, B: {}, R: {}",
            player.name(),
            counts.white,
            counts.black,
            counts.red
        );
    }
    if let Some(current) = game.current_turn() {
        println!("Current turn: {}", current);
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
