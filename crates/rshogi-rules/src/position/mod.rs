//! 局面と局面履歴
//!
//! - `Position`: 盤面・手駒・手番
//! - `PositionKey` / SFEN: 同一局面判定用の正準表現
//! - `History`: 千日手判定用の局面キーの記録

mod history;
mod pos;
mod sfen;

pub use history::{FOURFOLD, History};
pub use pos::Position;
pub use sfen::{PositionKey, SFEN_HIRATE};
