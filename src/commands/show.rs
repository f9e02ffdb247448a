use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use cpz_chess::codec::pack::PackView;
use cpz_chess::move_generation::legal_move_generator::{game_status, GameStatus};
use cpz_chess::utils::long_algebraic::move_to_long_algebraic;
use cpz_chess::utils::render_game_state::render_board;

use super::read_pack_file;

#[derive(Args)]
pub struct ShowOptions {
    #[arg(value_name = "PATH")]
    path: PathBuf,

    #[arg(value_name = "INDEX")]
    index: u32,
}

impl ShowOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let data = read_pack_file(&self.path)?;
        let pack = PackView::from_bytes(&data).context("Pack failed structural checks")?;
        let puzzle = pack
            .puzzle(self.index)
            .with_context(|| format!("Failed to load puzzle {}", self.index))?;

        println!("{}", render_board(&puzzle.position));
        println!();
        println!("FEN: {}", puzzle.position.get_fen());
        println!("Rating: {}", puzzle.rating);
        println!("Player: {:?}", puzzle.player_color());
        if !puzzle.themes.is_empty() {
            println!("Themes: {}", puzzle.themes);
        }
        if !puzzle.opening.is_empty() {
            println!("Opening: {}", puzzle.opening);
        }

        let solution: Vec<String> = puzzle
            .solution
            .iter()
            .map(|mv| move_to_long_algebraic(*mv))
            .collect();
        println!("Solution: {}", solution.join(" "));

        let mut board = puzzle.position;
        for &mv in &puzzle.solution {
            if !board.is_legal_move(mv) {
                break;
            }
            board = board.apply_move(mv);
        }
        match game_status(&board) {
            GameStatus::Checkmate(winner) => println!("Ends in checkmate for {winner:?}"),
            GameStatus::Stalemate => println!("Ends in stalemate"),
            GameStatus::Ongoing => {}
        }

        Ok(())
    }
}
