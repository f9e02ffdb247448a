//! Loader for the Lichess puzzle database CSV export.
//!
//! The export never quotes fields (FEN, UCI moves and tag lists contain no
//! commas), so rows are split on plain commas.

use crate::codec::pack_builder::PuzzleEntry;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::MAX_SOLUTION_MOVES;

const REQUIRED_COLUMNS: [&str; 4] = ["FEN", "Moves", "Rating", "Themes"];

pub fn parse_lichess_csv(text: &str) -> ChessResult<Vec<PuzzleEntry>> {
    let mut lines = text.lines();
    let header: Vec<&str> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .collect();

    let column = |name: &str| header.iter().position(|field| *field == name);
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| column(*name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ChessError::MissingCsvColumns(missing.join(", ")));
    }

    let (Some(fen_col), Some(moves_col), Some(rating_col), Some(themes_col)) =
        (column("FEN"), column("Moves"), column("Rating"), column("Themes"))
    else {
        return Err(ChessError::MissingCsvColumns(REQUIRED_COLUMNS.join(", ")));
    };
    let opening_col = column("OpeningTags");

    let mut entries = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        let field = |index: usize| fields.get(index).map_or("", |value| value.trim());

        let fen = field(fen_col);
        let moves_uci: Vec<String> = field(moves_col)
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        if fen.is_empty() || moves_uci.is_empty() || moves_uci.len() > MAX_SOLUTION_MOVES {
            continue;
        }

        entries.push(PuzzleEntry {
            fen: fen.to_owned(),
            moves_uci,
            rating: parse_rating(field(rating_col)),
            themes_raw: field(themes_col).to_owned(),
            opening_raw: opening_col.map(field).unwrap_or_default().to_owned(),
        });
    }

    Ok(entries)
}

// Non-numeric ratings count as 0; fractional ones are truncated.
fn parse_rating(text: &str) -> i32 {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map_or(0, |value| value as i32)
}

#[cfg(test)]
mod tests {
    use super::parse_lichess_csv;
    use crate::errors::ChessError;

    const SAMPLE: &str = "\
PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes,GameUrl,OpeningTags
00008,r6k/pp2r2p/4Rp1Q/3p4/8/1N1P2R1/PqP2bPP/7K b - - 0 24,f2g3 e6e7 b2b1 b3c1 b1c1 h6c1,1913,75,94,6230,crushing hangingPiece long middlegame,https://lichess.org/787zsVup/black#47,
0000D,5rk1/1p3ppp/pq3b2/8/8/1P1Q1N2/P4PPP/3R2K1 w - - 2 27,d3d6 f8d8 d6d8 f6d8,1580,73,97,15273,advantage endgame short,https://lichess.org/F8M8OS71#53,Sicilian_Defense Sicilian_Defense_Najdorf
0009B,,e2e4,1000,0,0,0,opening,,
";

    #[test]
    fn loads_rows_by_header_name() {
        let entries = parse_lichess_csv(SAMPLE).expect("sample should parse");
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].rating, 1913);
        assert_eq!(entries[0].moves_uci.len(), 6);
        assert_eq!(entries[0].themes_raw, "crushing hangingPiece long middlegame");
        assert_eq!(entries[0].opening_raw, "");

        assert_eq!(entries[1].moves_uci[0], "d3d6");
        assert_eq!(
            entries[1].opening_raw,
            "Sicilian_Defense Sicilian_Defense_Najdorf"
        );
    }

    #[test]
    fn missing_columns_are_reported() {
        assert_eq!(
            parse_lichess_csv("PuzzleId,FEN,Moves\n"),
            Err(ChessError::MissingCsvColumns("Rating, Themes".to_owned()))
        );
        assert!(parse_lichess_csv("").is_err());
    }
}
