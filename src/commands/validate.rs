use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Args;
use cpz_chess::codec::pack::PackView;

use super::read_pack_file;

#[derive(Args)]
pub struct ValidateOptions {
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Also list every valid puzzle
    #[arg(short, long)]
    verbose: bool,
}

impl ValidateOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let data = read_pack_file(&self.path)?;
        let pack = PackView::from_bytes(&data).context("Pack failed structural checks")?;

        let timer = Instant::now();
        let mut invalid = 0u32;

        for (index, puzzle) in pack.puzzles().enumerate() {
            let outcome = puzzle.and_then(|puzzle| puzzle.validate_solution());
            match outcome {
                Ok(()) if self.verbose => println!("Puzzle {index}: ok"),
                Ok(()) => {}
                Err(err) => {
                    invalid += 1;
                    println!("Puzzle {index}: {err}");
                }
            }
        }

        println!();
        println!(
            "Checked {} puzzles in {:.2} seconds",
            pack.len(),
            timer.elapsed().as_secs_f32()
        );

        if invalid > 0 {
            bail!("{invalid} invalid puzzle(s)");
        }
        println!("No invalid puzzles!");
        Ok(())
    }
}
