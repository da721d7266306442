//! Core game types: board representation, move generation, make/unmake and
//! game rules.

mod board;
mod chess_move;
mod coord;
mod error;
mod eval;
mod layout;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod status;
mod team;

pub mod perft;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, MovementKind};
pub use coord::Coord;
pub use error::{BoardError, LayoutError};
pub use eval::MATERIAL_WEIGHT;
pub use layout::STARTING_LAYOUT;
pub use make_move::AppliedMove;
pub use movegen::PawnSurroundings;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use status::GameStatus;
pub use team::Team;
