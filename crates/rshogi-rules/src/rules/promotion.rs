//! 成り（任意の成り・強制成り）

use crate::position::Position;
use crate::types::{Color, PieceType, Square};

/// `piece_type` の生駒が `to` に置かれると行き所がなくなるか
///
/// 歩・香は最奥段、桂は最奥2段。駒打ちの制限と強制成りで共有する。
#[inline]
pub(crate) const fn is_dead_end(piece_type: PieceType, color: Color, to: Square) -> bool {
    let rank = to.relative_rank(color);
    match piece_type {
        PieceType::Pawn | PieceType::Lance => rank == 0,
        PieceType::Knight => rank <= 1,
        _ => false,
    }
}

/// `from` の駒が `to` へ動くとき成れるか
///
/// 成れる駒種の生駒で、移動元か移動先が相手陣（手前から見て奥3段）にあること。
pub fn can_promote(pos: &Position, from: Square, to: Square) -> bool {
    pos.piece_on(from).is_some_and(|pc| {
        pc.is_promotable() && (from.in_promotion_zone(pc.color) || to.in_promotion_zone(pc.color))
    })
}

/// `from` の駒が `to` へ動くとき成らなければならないか
pub fn must_promote(pos: &Position, from: Square, to: Square) -> bool {
    pos.piece_on(from)
        .is_some_and(|pc| !pc.promoted && is_dead_end(pc.piece_type, pc.color, to))
}
