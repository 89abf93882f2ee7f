//! manual — drive the elevator from the terminal.
//!
//! Commands are read line-buffered from stdin, one key per line:
//!
//! ```text
//! q  move up        w  open doors for people going up
//! a  move down      s  open doors for people going down
//! r  toggle relative/absolute numbers
//! x  quit
//! ```
//!
//! The game ends when everyone has been delivered.  Set `RUST_LOG=debug` to
//! watch door cycles in the log.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use lift_core::Direction;
use lift_render::{render_elevator, RenderOptions};
use lift_sim::scenario::{DEFAULT_CAPACITY, DEFAULT_FLOOR_COUNT, DEFAULT_PEOPLE_PER_FLOOR};
use lift_sim::{load_scenario_json, Command, Game, NoopObserver, Outcome, ScenarioBuilder};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(about = "Interactive single-elevator simulation")]
struct Args {
    /// Number of floors in the randomized building.
    #[arg(long, default_value_t = DEFAULT_FLOOR_COUNT)]
    floors: usize,

    /// Carriage capacity.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Waiting people per floor.
    #[arg(long, default_value_t = DEFAULT_PEOPLE_PER_FLOOR)]
    people_per_floor: usize,

    /// RNG seed; the same seed always yields the same building.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Load a JSON scenario file instead of generating a random building.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Show raw destination floors instead of signed remaining distances.
    #[arg(long)]
    absolute: bool,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let elevator = match &args.scenario {
        Some(path) => load_scenario_json(path)?,
        None => ScenarioBuilder::new()
            .floor_count(args.floors)
            .capacity(Some(args.capacity))
            .people_per_floor(args.people_per_floor)
            .seed(args.seed)
            .build()?,
    };

    let mut game = Game::new(elevator);
    let mut opts = RenderOptions {
        relative_destinations: !args.absolute,
        color: !args.no_color,
    };
    let mut advertised = Direction::None;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render_elevator(game.elevator(), advertised, opts));
        if game.is_over() {
            break;
        }
        println!("q = up, a = down, w = doors ↑, s = doors ↓, r = toggle numbers, x = quit");

        let Some(line) = lines.next() else {
            println!("(stdin closed)");
            return Ok(());
        };
        let key = line?.trim().to_lowercase();

        advertised = Direction::None;
        let command = match key.as_str() {
            "q" => Command::Move(1),
            "a" => Command::Move(-1),
            "w" => {
                advertised = Direction::Up;
                Command::OpenDoors(Direction::Up)
            }
            "s" => {
                advertised = Direction::Down;
                Command::OpenDoors(Direction::Down)
            }
            "r" => {
                opts.relative_destinations = !opts.relative_destinations;
                continue;
            }
            "x" => return Ok(()),
            _ => continue,
        };

        match game.apply(command, &mut NoopObserver)? {
            Outcome::MoveRejected { delta } => {
                println!("bump — no floor {delta:+} from here");
            }
            Outcome::DoorsOpened { alighted, boarded, .. } => {
                println!("{alighted} stepped off, {boarded} boarded");
            }
            Outcome::Moved(_) => {}
        }
    }

    println!(
        "everyone delivered: {} passengers in {} turns",
        game.delivered(),
        game.turn()
    );
    Ok(())
}
