use std::path::PathBuf;

use clap::Args;
use cpz_chess::codec::pack_builder::{PackBuildConfig, PackBuilder};
use cpz_chess::puzzle::starter_pack::starter_entries;

use super::{write_pack_file, write_theme_index};

#[derive(Args)]
pub struct StarterOptions {
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Seed for a deterministic shuffle of the puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Also write theme bitsets under <DIR>/index/<pack name>/
    #[arg(long, value_name = "DIR")]
    index_dir: Option<PathBuf>,
}

impl StarterOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = PackBuildConfig {
            seed: self.seed,
            ..PackBuildConfig::default()
        };
        let built = PackBuilder::from_entries(starter_entries()).build(&config)?;

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
