//! 持将棋（相入玉）の点数判定

use crate::position::Position;
use crate::types::{Color, Piece, PieceType};

/// 相入玉で引き分けとなる点数
pub const IMPASSE_THRESHOLD: i32 = 24;

/// 盤上の駒の点数：飛角（成りを含む）5点、金と成った小駒1点、その他0点
#[inline]
const fn board_points(piece: Piece) -> i32 {
    match piece.piece_type {
        PieceType::Rook | PieceType::Bishop => 5,
        _ if piece.moves_like_gold() => 1,
        _ => 0,
    }
}

/// 手駒の点数（常に生駒として数える）
#[inline]
const fn hand_points(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Rook | PieceType::Bishop => 5,
        PieceType::Gold => 1,
        _ => 0,
    }
}

/// `color` の盤上の駒と手駒の合計点
pub fn material_score(pos: &Position, color: Color) -> i32 {
    let on_board: i32 = pos.pieces_of(color).map(|(_, pc)| board_points(pc)).sum();
    let in_hand: i32 = pos
        .hand(color)
        .iter()
        .map(|(pt, n)| hand_points(pt) * i32::from(n))
        .sum();
    on_board + in_hand
}

/// 両者とも `threshold` 点以上か
pub fn is_impasse_with(pos: &Position, threshold: i32) -> bool {
    Color::ALL
        .into_iter()
        .all(|color| material_score(pos, color) >= threshold)
}

/// 両者とも24点以上か
#[inline]
pub fn is_mutual_impasse(pos: &Position) -> bool {
    is_impasse_with(pos, IMPASSE_THRESHOLD)
}
