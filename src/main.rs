//! Sequencium self-play demo
//!
//! Plays a full engine-vs-engine game on the standard starting position,
//! printing the board after each move and the final result.

use anyhow::Result;
use clap::Parser;

use sequencium::board::{Board, Player, MAX_BOARD_SIZE};
use sequencium::engine::SearchEngine;
use sequencium::rules::{is_game_over, play_move, winner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sequencium engine self-play demo")]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 6)]
    size: usize,

    /// Search depth for both players
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Transposition table slots per engine
    #[arg(long, default_value_t = 1 << 20)]
    tt_slots: usize,

    /// Only print the final position and result
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.size < 2 || cli.size > MAX_BOARD_SIZE {
        anyhow::bail!("board size must be in 2..={MAX_BOARD_SIZE}");
    }

    let mut board = Board::standard(cli.size);
    // One engine per player: the position hash carries no side-to-move
    // information, so the two perspectives must not share a cache.
    let mut engines = [
        SearchEngine::with_table_slots(cli.tt_slots),
        SearchEngine::with_table_slots(cli.tt_slots),
    ];

    println!(
        "Sequencium self-play: {0}x{0} board, depth {1}",
        cli.size, cli.depth
    );
    if !cli.quiet {
        println!("{board}\n");
    }

    let mut current = Player::A;
    let mut move_count = 0;
    while !is_game_over(&board) {
        let engine = &mut engines[if current == Player::A { 0 } else { 1 }];
        let result = engine.search(&mut board, current, cli.depth);

        match result.best_move {
            Some(mv) => {
                play_move(&mut board, current, mv)?;
                move_count += 1;
                if !cli.quiet {
                    println!(
                        "move {move_count}: {current} plays ({}, {}) = {} \
                         [score {}, {} nodes]",
                        mv.row, mv.col, mv.value, result.score, result.nodes
                    );
                    println!("{board}\n");
                }
            }
            None => {
                if !cli.quiet {
                    println!("{current} has no moves, passing");
                }
            }
        }
        current = current.opponent();
    }

    println!("{board}");
    println!(
        "game over after {move_count} moves: A max {}, B max {}",
        board.max_value(Player::A),
        board.max_value(Player::B)
    );
    match winner(&board) {
        Some(p) => println!("winner: player {p}"),
        None => println!("tie"),
    }
    Ok(())
}
