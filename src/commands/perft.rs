use std::time::Instant;

use anyhow::Context;
use clap::Args;
use cpz_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use cpz_chess::game_state::game_state::BoardState;
use cpz_chess::move_generation::perft::{perft, perft_divide};
use cpz_chess::utils::long_algebraic::move_to_long_algebraic;

#[derive(Args)]
pub struct PerftOptions {
    #[arg(value_name = "FEN", default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(short, long, default_value = "4")]
    depth: u8,

    /// Node count per root move
    #[arg(long)]
    divide: bool,
}

impl PerftOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let board = BoardState::from_fen(&self.fen).context("Invalid FEN")?;
        let timer = Instant::now();

        if self.divide {
            let mut total = 0usize;
            for (mv, nodes) in perft_divide(&board, self.depth) {
                println!("{}: {nodes}", move_to_long_algebraic(mv));
                total += nodes;
            }
            println!();
            println!("Nodes: {total}");
        } else {
            let counts = perft(&board, self.depth);
            println!("Nodes: {}", counts.nodes);
            println!("Captures: {}", counts.captures);
            println!("En passant: {}", counts.en_passant);
            println!("Castles: {}", counts.castles);
            println!("Promotions: {}", counts.promotions);
            println!("Checks: {}", counts.checks);
            println!("Checkmates: {}", counts.checkmates);
        }

        println!("Time: {:.3}s", timer.elapsed().as_secs_f64());
        Ok(())
    }
}
