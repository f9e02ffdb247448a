//! Builds CPZ1 packs from text puzzle entries (FEN + UCI moves).
//!
//! Every entry is replayed against the legal move generator before it is
//! packed; entries that fail are skipped and reported, never written.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::codec::pack_header::{encode_pack_header, PackHeader};
use crate::codec::puzzle_record::{encode_puzzle_record, Puzzle};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{EXTENDED_RECORD_SIZE, MAX_SOLUTION_MOVES};
use crate::game_state::game_state::BoardState;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEntry {
    pub fen: String,
    pub moves_uci: Vec<String>,
    pub rating: i32,
    pub themes_raw: String,
    pub opening_raw: String,
}

/// Filters and ordering applied before packing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackBuildConfig {
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    /// Shuffles the filtered entries deterministically when set.
    pub seed: Option<u64>,
    /// Keeps at most this many entries after filtering and shuffling.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub fen: String,
    pub reason: ChessError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPack {
    pub bytes: Vec<u8>,
    pub puzzle_count: u32,
    pub skipped: Vec<SkippedEntry>,
    /// Sanitized theme tags of each written puzzle, in pack order.
    pub themes_per_puzzle: Vec<Vec<String>>,
}

impl BuiltPack {
    /// One bitset per theme; bit `i` (LSB first) is set when puzzle `i`
    /// carries the theme.
    pub fn theme_bitsets(&self) -> BTreeMap<String, Vec<u8>> {
        let bitset_len = (self.themes_per_puzzle.len() + 7) / 8;
        let mut bitsets: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        for (index, themes) in self.themes_per_puzzle.iter().enumerate() {
            for theme in themes {
                let bits = bitsets
                    .entry(theme.clone())
                    .or_insert_with(|| vec![0u8; bitset_len]);
                bits[index / 8] |= 1 << (index % 8);
            }
        }
        bitsets
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackBuilder {
    entries: Vec<PuzzleEntry>,
}

impl PackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<PuzzleEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: PuzzleEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(&self, config: &PackBuildConfig) -> ChessResult<BuiltPack> {
        let selected = select_entries(&self.entries, config);

        let mut records = Vec::with_capacity(selected.len());
        let mut ratings = Vec::with_capacity(selected.len());
        let mut themes_per_puzzle = Vec::with_capacity(selected.len());
        let mut skipped = Vec::new();

        for entry in selected {
            match puzzle_from_entry(entry) {
                Ok((puzzle, themes)) => {
                    records.push(encode_puzzle_record(&puzzle)?);
                    ratings.push(puzzle.rating);
                    themes_per_puzzle.push(themes);
                }
                Err(reason) => skipped.push(SkippedEntry {
                    fen: entry.fen.clone(),
                    reason,
                }),
            }
        }

        let header = PackHeader {
            record_size: EXTENDED_RECORD_SIZE as u16,
            puzzle_count: records.len() as u32,
            rating_min: ratings.iter().copied().min().unwrap_or(0),
            rating_max: ratings.iter().copied().max().unwrap_or(0),
            reserved: [0; 4],
        };

        let mut bytes = Vec::with_capacity(18 + records.len() * EXTENDED_RECORD_SIZE);
        bytes.extend_from_slice(&encode_pack_header(&header));
        for record in &records {
            bytes.extend_from_slice(record);
        }

        Ok(BuiltPack {
            bytes,
            puzzle_count: header.puzzle_count,
            skipped,
            themes_per_puzzle,
        })
    }
}

fn select_entries<'a>(entries: &'a [PuzzleEntry], config: &PackBuildConfig) -> Vec<&'a PuzzleEntry> {
    let mut selected: Vec<&PuzzleEntry> = entries
        .iter()
        .filter(|entry| config.min_rating.map_or(true, |min| entry.rating >= min))
        .filter(|entry| config.max_rating.map_or(true, |max| entry.rating <= max))
        .collect();

    if let Some(seed) = config.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        selected.shuffle(&mut rng);
    }

    if let Some(limit) = config.limit.filter(|limit| *limit > 0) {
        selected.truncate(limit);
    }

    selected
}

fn puzzle_from_entry(entry: &PuzzleEntry) -> ChessResult<(Puzzle, Vec<String>)> {
    if entry.moves_uci.len() > MAX_SOLUTION_MOVES {
        return Err(ChessError::TooManyMoves(entry.moves_uci.len()));
    }

    let position = BoardState::from_fen(&entry.fen)?;
    let solution = entry
        .moves_uci
        .iter()
        .map(|text| long_algebraic_to_move(text))
        .collect::<ChessResult<Vec<_>>>()?;
    let themes = parse_themes(&entry.themes_raw);

    let puzzle = Puzzle {
        rating: entry.rating.clamp(0, u16::MAX as i32) as u16,
        position,
        solution,
        themes: themes.join(","),
        opening: opening_from_tags(&entry.opening_raw),
    };
    puzzle.validate_solution()?;
    Ok((puzzle, themes))
}

/// Splits on whitespace, commas, semicolons and pipes, sanitizes each tag and
/// drops duplicates while keeping first-seen order.
pub fn parse_themes(raw: &str) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();
    for chunk in raw.split(|ch: char| ch.is_whitespace() || matches!(ch, ',' | ';' | '|')) {
        let theme = sanitize_theme(chunk);
        if !theme.is_empty() && !themes.contains(&theme) {
            themes.push(theme);
        }
    }
    themes
}

/// Lowercase, runs of anything outside `[a-z0-9_-]` become one `_`, repeated
/// underscores collapse, and leading/trailing underscores are trimmed.
pub fn sanitize_theme(theme: &str) -> String {
    let mut out = String::with_capacity(theme.len());
    for ch in theme.trim().to_lowercase().chars() {
        let keep = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-';
        let mapped = if keep { ch } else { '_' };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches('_').to_owned()
}

/// First opening tag with underscores turned into spaces.
pub fn opening_from_tags(raw: &str) -> String {
    raw.split_whitespace()
        .next()
        .map(|tag| tag.replace('_', " "))
        .unwrap_or_default()
}
