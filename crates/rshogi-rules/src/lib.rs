//! # rshogi-rules
//!
//! 将棋のルール判定ライブラリ。探索・評価は行わない。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, PieceType, Piece, Hand, Move）
//! - `position`: 局面表現、SFEN、千日手判定用の局面履歴
//! - `movegen`: 駒ごとの疑似合法手生成
//! - `rules`: 合法性判定（自殺手・成り・駒打ち・打ち歩詰め）、王手・詰み、持将棋
//! - `config`: 終局判定のしきい値
//! - `game`: 対局の進行管理
//!
//! ```
//! use rshogi_rules::{Game, GameStatus, Move};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 30);
//!
//! let mv: Move = "7g7f".parse().unwrap();
//! assert_eq!(game.play(mv), Ok(GameStatus::InProgress));
//! assert!("7f7e".parse::<Move>().map(|mv| game.play(mv).is_err()).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod position;
pub mod rules;
pub mod types;

pub use config::RuleConfig;
pub use error::{IllegalMove, MoveParseError, SfenError};
pub use game::{Game, GameStatus};
pub use position::{History, Position, PositionKey, SFEN_HIRATE};
pub use rules::{is_checkmate, is_in_check, is_legal_drop, is_mutual_impasse, legal_moves};
pub use types::{Color, Hand, Move, Piece, PieceType, Square};
