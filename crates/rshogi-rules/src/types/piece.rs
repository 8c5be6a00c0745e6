//! 駒（Piece）

use serde::{Deserialize, Serialize};

use super::{Color, PieceType};

/// Complete piece representation including promoted pieces
///
/// 盤上に置かれた駒は値として扱い、移動・成り・捕獲のたびに新しい値で置き換える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub promoted: bool,
}

impl Piece {
    /// Create new piece
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece {
            piece_type,
            color,
            promoted: false,
        }
    }

    /// Create promoted piece
    #[inline]
    pub const fn promoted(piece_type: PieceType, color: Color) -> Self {
        Piece {
            piece_type,
            color,
            promoted: true,
        }
    }

    /// まだ成れる駒か（成れる駒種で、未成）
    #[inline]
    pub const fn is_promotable(self) -> bool {
        self.piece_type.can_promote() && !self.promoted
    }

    /// 金と同じ動きをする駒か（金、と、成香、成桂、成銀）
    #[inline]
    pub const fn moves_like_gold(self) -> bool {
        match self.piece_type {
            PieceType::Gold => true,
            PieceType::Pawn | PieceType::Lance | PieceType::Knight | PieceType::Silver => {
                self.promoted
            }
            _ => false,
        }
    }

    /// Promote this piece
    #[inline]
    pub const fn promote(self) -> Self {
        Piece {
            promoted: true,
            ..self
        }
    }

    /// SFEN表記（"+P", "k" など）
    pub fn to_sfen(self) -> String {
        let c = self.piece_type.to_sfen_char();
        let c = match self.color {
            Color::Black => c,
            Color::White => c.to_ascii_lowercase(),
        };
        if self.promoted {
            format!("+{c}")
        } else {
            c.to_string()
        }
    }
}
