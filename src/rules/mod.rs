//! Game rules: movement legality and match detection.

pub mod matching;
pub mod movement;

pub use matching::{detect_matches, find_runs, MatchReport, MatchRun, Orientation, RUN_LENGTH};
pub use movement::{legal_target, move_piece, move_selected, MoveRejection, Moved};
