//! 駒の利きの方向表
//!
//! すべて先手から見た (筋, 段) の差分。後手は段の差分に `Color::forward()` を掛けて反転する。
//! 段の差分は -1 が前方。

use crate::types::{Piece, PieceType};

/// 1マスずつの利き
pub(crate) type Offsets = &'static [(i8, i8)];

const KING_STEPS: Offsets = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

// Gold moves like king except backward diagonals
const GOLD_STEPS: Offsets = &[
    (-1, -1),
    (0, -1),
    (1, -1), // Forward
    (-1, 0),
    (1, 0), // Sides
    (0, 1), // Back
];

const SILVER_STEPS: Offsets = &[
    (-1, -1),
    (0, -1),
    (1, -1), // Forward
    (-1, 1),
    (1, 1), // Backward diagonals
];

// Two squares forward, one to the side
const KNIGHT_STEPS: Offsets = &[(-1, -2), (1, -2)];

const PAWN_STEPS: Offsets = &[(0, -1)];

const ORTHOGONAL: Offsets = &[(0, -1), (-1, 0), (1, 0), (0, 1)];

const DIAGONAL: Offsets = &[(-1, -1), (1, -1), (-1, 1), (1, 1)];

const LANCE_RAYS: Offsets = &[(0, -1)];

const NONE: Offsets = &[];

/// 駒の利きの形：1マスの利きと走り利き
#[derive(Debug, Clone, Copy)]
pub(crate) struct Movement {
    pub steps: Offsets,
    pub rays: Offsets,
}

/// 駒の動き（先手基準）
pub(crate) const fn movement(piece: Piece) -> Movement {
    if piece.moves_like_gold() {
        return Movement {
            steps: GOLD_STEPS,
            rays: NONE,
        };
    }
    match piece.piece_type {
        PieceType::King => Movement {
            steps: KING_STEPS,
            rays: NONE,
        },
        PieceType::Gold => Movement {
            steps: GOLD_STEPS,
            rays: NONE,
        },
        PieceType::Silver => Movement {
            steps: SILVER_STEPS,
            rays: NONE,
        },
        PieceType::Knight => Movement {
            steps: KNIGHT_STEPS,
            rays: NONE,
        },
        PieceType::Pawn => Movement {
            steps: PAWN_STEPS,
            rays: NONE,
        },
        PieceType::Lance => Movement {
            steps: NONE,
            rays: LANCE_RAYS,
        },
        // 竜：飛車 + 斜め1マス
        PieceType::Rook if piece.promoted => Movement {
            steps: DIAGONAL,
            rays: ORTHOGONAL,
        },
        PieceType::Rook => Movement {
            steps: NONE,
            rays: ORTHOGONAL,
        },
        // 馬：角 + 縦横1マス
        PieceType::Bishop if piece.promoted => Movement {
            steps: ORTHOGONAL,
            rays: DIAGONAL,
        },
        PieceType::Bishop => Movement {
            steps: NONE,
            rays: DIAGONAL,
        },
    }
}
