use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use cpz_chess::codec::lichess_csv::parse_lichess_csv;
use cpz_chess::codec::pack_builder::{PackBuildConfig, PackBuilder};

use super::{write_pack_file, write_theme_index};

#[derive(Args)]
pub struct PackOptions {
    /// Lichess puzzle database CSV
    #[arg(short, long, value_name = "CSV")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    #[arg(long)]
    min_rating: Option<i32>,

    #[arg(long)]
    max_rating: Option<i32>,

    /// Seed for a deterministic shuffle before limiting
    #[arg(long)]
    seed: Option<u64>,

    /// Keep at most this many puzzles after filtering (0 keeps all)
    #[arg(long, default_value = "0")]
    limit: usize,

    /// Also write theme bitsets under <DIR>/index/<pack name>/
    #[arg(long, value_name = "DIR")]
    index_dir: Option<PathBuf>,

    /// Print the reason for every skipped entry
    #[arg(short, long)]
    verbose: bool,
}

impl PackOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        let entries = parse_lichess_csv(&text)?;
        println!("Loaded {} entries from {}", entries.len(), self.input.display());

        let config = PackBuildConfig {
            min_rating: self.min_rating,
            max_rating: self.max_rating,
            seed: self.seed,
            limit: (self.limit > 0).then_some(self.limit),
        };
        let built = PackBuilder::from_entries(entries).build(&config)?;

        if self.verbose {
            for skipped in &built.skipped {
                eprintln!("skipped {}: {}", skipped.fen, skipped.reason);
            }
        }

        write_pack_file(&self.output, &built.bytes)?;
        if let Some(index_dir) = &self.index_dir {
            write_theme_index(index_dir, &self.output, &built.theme_bitsets())?;
        }

        println!(
            "Wrote {} ({} puzzles, {} bytes). Skipped: {}",
            self.output.display(),
            built.puzzle_count,
            built.bytes.len(),
            built.skipped.len()
        );
        Ok(())
    }
}
