//! Print a board and the destinations of the pieces on the given cells.
//!
//! Usage: cargo run -- --placement "8/8/8/3q4/8/8/1P6/8" d5 b2

use clap::Parser;

use chess_rules::config::GameConfig;
use chess_rules::game::Game;
use chess_rules::game_repr::Cell;
use chess_rules::highlight::HighlightChannel;

#[derive(Parser, Debug)]
#[command(name = "chess_rules")]
#[command(about = "Show legal destinations for pieces on a board")]
struct Args {
    /// Piece placement, top rank first (defaults to the standard layout)
    #[arg(long)]
    placement: Option<String>,

    /// Seat white at the top of the board
    #[arg(long)]
    flipped: bool,

    /// Cells to query, e.g. e2 g1
    cells: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = if args.flipped { GameConfig::flipped() } else { GameConfig::standard() };
    if let Some(placement) = args.placement {
        config = config.with_placement(placement);
    }

    let game = match Game::from_config(&config, HighlightChannel::new()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(2);
        }
    };

    println!("{}", game.board());
    println!();

    for name in &args.cells {
        let Some(cell) = Cell::from_algebraic(name) else {
            eprintln!("Skipping '{}': not a cell", name);
            continue;
        };
        let Some(piece) = game.board().try_get_occupant(cell) else {
            println!("{}: empty", cell);
            continue;
        };

        let moves: Vec<String> = game
            .legal_moves(cell)
            .iter()
            .map(|mv| if mv.is_capture() { format!("x{}", mv.to) } else { mv.to.to_string() })
            .collect();
        println!("{} {:?} {:?}: {}", cell, piece.color(), piece.piece_type(), moves.join(" "));
    }
}
