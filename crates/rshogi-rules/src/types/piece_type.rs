//! 駒種（PieceType）

use serde::{Deserialize, Serialize};

/// 駒種（8種、成りは `Piece::promoted` で表す）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    King = 0,   // K
    Rook = 1,   // R
    Bishop = 2, // B
    Gold = 3,   // G
    Silver = 4, // S
    Knight = 5, // N
    Lance = 6,  // L
    Pawn = 7,   // P
}

/// 手駒の並び順（King を除く 7 種、SFEN の出力順）
pub const HAND_ORDER: [PieceType; 7] = [
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
    PieceType::Pawn,
];

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 8;

    /// 全ての駒種
    pub const ALL: [PieceType; 8] = [
        PieceType::King,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// Get the index of this piece type (0-7)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 手駒配列のインデックス（King は None）
    #[inline]
    pub const fn hand_index(self) -> Option<usize> {
        match self {
            PieceType::King => None,
            _ => Some(self as usize - 1),
        }
    }

    /// Check if piece can promote
    #[inline]
    pub const fn can_promote(self) -> bool {
        matches!(
            self,
            PieceType::Rook
                | PieceType::Bishop
                | PieceType::Silver
                | PieceType::Knight
                | PieceType::Lance
                | PieceType::Pawn
        )
    }

    /// 打てる駒種か
    #[inline]
    pub const fn is_droppable(self) -> bool {
        !matches!(self, PieceType::King)
    }

    /// SFEN文字（先手＝大文字）
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Gold => 'G',
            PieceType::Silver => 'S',
            PieceType::Knight => 'N',
            PieceType::Lance => 'L',
            PieceType::Pawn => 'P',
        }
    }

    /// SFEN文字から変換（大文字小文字は区別しない）
    #[inline]
    pub const fn from_sfen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'R' => Some(PieceType::Rook),
            'B' => Some(PieceType::Bishop),
            'G' => Some(PieceType::Gold),
            'S' => Some(PieceType::Silver),
            'N' => Some(PieceType::Knight),
            'L' => Some(PieceType::Lance),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type_can_promote() {
        assert!(PieceType::Pawn.can_promote());
        assert!(PieceType::Lance.can_promote());
        assert!(PieceType::Knight.can_promote());
        assert!(PieceType::Silver.can_promote());
        assert!(PieceType::Bishop.can_promote());
        assert!(PieceType::Rook.can_promote());
        assert!(!PieceType::Gold.can_promote());
        assert!(!PieceType::King.can_promote());
    }

    #[test]
    fn test_hand_index_matches_hand_order() {
        for (i, pt) in HAND_ORDER.iter().enumerate() {
            assert_eq!(pt.hand_index(), Some(i));
        }
        assert_eq!(PieceType::King.hand_index(), None);
    }

    #[test]
    fn test_sfen_chars() {
        for pt in PieceType::ALL {
            assert_eq!(PieceType::from_sfen_char(pt.to_sfen_char()), Some(pt));
            assert_eq!(
                PieceType::from_sfen_char(pt.to_sfen_char().to_ascii_lowercase()),
                Some(pt)
            );
        }
        assert_eq!(PieceType::from_sfen_char('x'), None);
    }
}
