use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use cpz_chess::codec::pack_header::decode_pack_header;
use cpz_chess::codec::puzzle_record::decode_puzzle_record;
use cpz_chess::game_state::chess_rules::{EXTENDED_RECORD_SIZE, PACK_HEADER_SIZE, RECORD_SIZE};

use super::read_pack_file;

#[derive(Args)]
pub struct InspectOptions {
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Print every record, not just the first
    #[arg(short, long)]
    verbose: bool,
}

impl InspectOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let data = read_pack_file(&self.path)?;
        let header = decode_pack_header(&data).context("Not a CPZ1 pack")?;

        println!("Path: {}", self.path.display());
        println!("Record size: {}", header.record_size);
        println!("Puzzle count: {}", header.puzzle_count);
        println!("Rating min/max: {}/{}", header.rating_min, header.rating_max);
        println!(
            "Reserved bytes: {}",
            header.reserved.iter().map(|byte| format!("{byte:02x}")).collect::<String>()
        );

        let expected = header.expected_pack_len().unwrap_or(usize::MAX);
        println!("File size: {} (expected {expected})", data.len());
        if data.len() != expected {
            bail!("Size mismatch vs header");
        }
        if (header.record_size as usize) < RECORD_SIZE {
            bail!("Record size {} is below {RECORD_SIZE}", header.record_size);
        }

        let shown = if self.verbose { header.puzzle_count } else { header.puzzle_count.min(1) };
        let stride = header.record_size as usize;
        for index in 0..shown as usize {
            let start = PACK_HEADER_SIZE + index * stride;
            let puzzle = decode_puzzle_record(&data[start..start + stride])
                .with_context(|| format!("Record {index} does not decode"))?;

            println!();
            println!("Record {index}: rating {}", puzzle.rating);
            println!("  move count: {}", puzzle.solution.len());
            if stride >= EXTENDED_RECORD_SIZE {
                println!("  themes: {}", puzzle.themes);
                println!("  opening: {}", puzzle.opening);
            }
        }

        Ok(())
    }
}
