//! 指し手（Move）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PieceType, Square};
use crate::error::MoveParseError;

/// 指し手
///
/// 盤上の駒を動かす `Normal` と、手駒を打つ `Drop` の2種。
/// 打つ駒の持ち主は常に適用する局面の手番。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    Normal {
        from: Square,
        to: Square,
        promote: bool,
    },
    Drop {
        to: Square,
        piece_type: PieceType,
    },
}

impl Move {
    /// 盤上の指し手
    #[inline]
    pub const fn normal(from: Square, to: Square, promote: bool) -> Move {
        Move::Normal { from, to, promote }
    }

    /// 駒打ち
    #[inline]
    pub const fn drop(piece_type: PieceType, to: Square) -> Move {
        Move::Drop { to, piece_type }
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// 移動元（駒打ちは None）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Normal { promote: true, .. })
    }
}

/// USI 表記（"7g7f", "8h2b+", "P*5e"）
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal { from, to, promote } => {
                write!(f, "{from}{to}")?;
                if promote {
                    f.write_str("+")?;
                }
                Ok(())
            }
            Move::Drop { to, piece_type } => write!(f, "{}*{to}", piece_type.to_sfen_char()),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [p, '*', f, r] => {
                let piece_type = PieceType::from_sfen_char(*p)
                    .filter(|pt| p.is_ascii_uppercase() && pt.is_droppable())
                    .ok_or(MoveParseError::InvalidPiece(*p))?;
                Ok(Move::drop(piece_type, Square::from_usi_chars(*f, *r)?))
            }
            [ff, fr, tf, tr, rest @ ..] => {
                let promote = match rest {
                    [] => false,
                    ['+'] => true,
                    _ => return Err(MoveParseError::InvalidMoveFormat(s.to_string())),
                };
                let from = Square::from_usi_chars(*ff, *fr)?;
                let to = Square::from_usi_chars(*tf, *tr)?;
                Ok(Move::normal(from, to, promote))
            }
            _ => Err(MoveParseError::InvalidMoveFormat(s.to_string())),
        }
    }
}
