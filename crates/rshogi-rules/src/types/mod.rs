//! 基本型モジュール
//!
//! 将棋の局面・指し手を表す基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move
//!   ↓
//! Hand
//! ```

mod color;
mod hand;
mod moves;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use hand::Hand;
pub use moves::Move;
pub use piece::Piece;
pub use piece_type::{HAND_ORDER, PieceType};
pub use square::Square;
