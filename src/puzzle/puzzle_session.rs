//! Step-by-step solving of one puzzle.
//!
//! The solver plays the side to move in the puzzle position. Each correct
//! player move is answered immediately by the next scripted reply, so the
//! session always waits on the solver when it is `Playing`.

use crate::codec::puzzle_record::Puzzle;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::BoardState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Playing,
    Solved,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The session had already ended; nothing changed.
    AlreadyFinished,
    /// Wrong or illegal move, or the solution was already exhausted. The
    /// session is now `Failed`.
    Incorrect,
    /// Correct move and the solution is complete. `reply` is the scripted
    /// reply played on the way, if the last solution move was one.
    Solved { reply: Option<Move> },
    /// Correct move; the scripted reply (if legal) was played and the solver
    /// moves next.
    Continue { reply: Option<Move> },
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzle: Puzzle,
    board: BoardState,
    move_index: usize,
    status: SessionStatus,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle) -> Self {
        let board = puzzle.position;
        Self {
            puzzle,
            board,
            move_index: 0,
            status: SessionStatus::Playing,
        }
    }

    #[inline]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn move_index(&self) -> usize {
        self.move_index
    }

    #[inline]
    pub fn player_color(&self) -> Color {
        self.puzzle.player_color()
    }

    /// Hint: the solution move the solver is expected to play next.
    pub fn expected_move(&self) -> Option<Move> {
        if self.status != SessionStatus::Playing {
            return None;
        }
        self.puzzle.solution.get(self.move_index).copied()
    }

    /// Legal destinations for highlighting; empty once the session ended.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        if self.status != SessionStatus::Playing {
            return Vec::new();
        }
        self.board.generate_legal_moves_from(square)
    }

    pub fn submit_move(&mut self, mv: Move) -> MoveOutcome {
        if self.status != SessionStatus::Playing {
            return MoveOutcome::AlreadyFinished;
        }

        let correct = self.puzzle.solution.get(self.move_index) == Some(&mv);
        if !correct || !self.board.is_legal_move(mv) {
            self.status = SessionStatus::Failed;
            return MoveOutcome::Incorrect;
        }

        self.board = self.board.apply_move(mv);
        self.move_index += 1;
        if self.is_exhausted() {
            self.status = SessionStatus::Solved;
            return MoveOutcome::Solved { reply: None };
        }

        let reply = self.play_scripted_reply();
        if self.is_exhausted() {
            self.status = SessionStatus::Solved;
            return MoveOutcome::Solved { reply };
        }
        MoveOutcome::Continue { reply }
    }

    /// Back to the starting position with the same puzzle.
    pub fn retry(&mut self) {
        self.board = self.puzzle.position;
        self.move_index = 0;
        self.status = SessionStatus::Playing;
    }

    fn is_exhausted(&self) -> bool {
        self.move_index >= self.puzzle.solution.len()
    }

    // An illegal scripted reply is skipped, but it still consumes its slot.
    fn play_scripted_reply(&mut self) -> Option<Move> {
        let reply = self.puzzle.solution.get(self.move_index).copied()?;
        self.move_index += 1;
        if !self.board.is_legal_move(reply) {
            return None;
        }
        self.board = self.board.apply_move(reply);
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, Promotion};
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::parse_move_list;

    fn session(fen: &str, moves: &str) -> PuzzleSession {
        PuzzleSession::new(Puzzle {
            rating: 900,
            position: parse_fen(fen).expect("FEN should parse"),
            solution: parse_move_list(moves).expect("moves should parse"),
            themes: String::new(),
            opening: String::new(),
        })
    }

    const ITALIAN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/8/PPPP1PPP/RNBQK1NR w KQkq - 2 3";

    #[test]
    fn correct_line_plays_replies_and_solves() {
        let mut session = session(ITALIAN, "d1h5 g8f6 h5f7");
        assert_eq!(session.player_color(), Color::Light);
        assert_eq!(session.expected_move(), Some(Move::new(3, 39)));

        assert_eq!(
            session.submit_move(Move::new(3, 39)),
            MoveOutcome::Continue {
                reply: Some(Move::new(62, 45))
            }
        );
        assert_eq!(session.move_index(), 2);
        assert_eq!(session.board().at(45), Piece::DarkKnight);

        assert_eq!(
            session.submit_move(Move::new(39, 53)),
            MoveOutcome::Solved { reply: None }
        );
        assert_eq!(session.status(), SessionStatus::Solved);
        assert!(session.board().is_checkmate());
        assert_eq!(session.expected_move(), None);
        assert_eq!(
            session.submit_move(Move::new(39, 53)),
            MoveOutcome::AlreadyFinished
        );
    }

    #[test]
    fn wrong_move_fails_and_retry_resets() {
        let mut session = session(ITALIAN, "d1h5 g8f6 h5f7");
        assert_eq!(session.submit_move(Move::new(3, 21)), MoveOutcome::Incorrect);
        assert_eq!(session.status(), SessionStatus::Failed);
        assert!(session.legal_moves_from(3).is_empty());

        session.retry();
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.move_index(), 0);
        assert_eq!(session.board(), &session.puzzle().position);
        assert!(!session.legal_moves_from(3).is_empty());
    }

    #[test]
    fn promotion_choice_must_match_exactly() {
        let mut wrong_piece = session("7k/P7/8/8/8/8/8/K7 w - - 0 1", "a7a8q");
        assert_eq!(
            wrong_piece.submit_move(Move::with_promotion(48, 56, Promotion::Rook)),
            MoveOutcome::Incorrect
        );

        let mut right_piece = session("7k/P7/8/8/8/8/8/K7 w - - 0 1", "a7a8q");
        assert_eq!(
            right_piece.submit_move(Move::with_promotion(48, 56, Promotion::Queen)),
            MoveOutcome::Solved { reply: None }
        );
    }

    #[test]
    fn final_scripted_reply_completes_the_puzzle() {
        let mut session = session("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1 e8c8");
        assert_eq!(
            session.submit_move(Move::new(4, 6)),
            MoveOutcome::Solved {
                reply: Some(Move::new(60, 58))
            }
        );
        assert_eq!(session.board().at(59), Piece::DarkRook);
        assert_eq!(session.board().at(5), Piece::LightRook);
    }

    #[test]
    fn illegal_solution_move_cannot_be_played() {
        // Scripted solution asks for a move that is not legal here.
        let mut session = session("4k3/8/8/8/8/8/8/4K2R w - - 0 1", "e1g1");
        assert_eq!(session.submit_move(Move::new(4, 6)), MoveOutcome::Incorrect);
    }

    #[test]
    fn empty_solution_fails_on_first_move() {
        let mut session = session("4k3/8/8/8/8/8/8/4K3 w - - 0 1", "");
        assert_eq!(session.expected_move(), None);
        assert_eq!(session.submit_move(Move::new(4, 12)), MoveOutcome::Incorrect);
    }
}
