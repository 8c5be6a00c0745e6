//! 王手・詰みの判定

use log::{debug, trace};

use super::legality;
use crate::movegen::piece_targets;
use crate::position::Position;
use crate::types::{Color, Square};

/// `sq` に `by` の駒の利きがあるか
pub fn is_attacked(pos: &Position, sq: Square, by: Color) -> bool {
    pos.pieces_of(by)
        .any(|(from, _)| piece_targets(pos, from).contains(&sq))
}

/// `color` の玉に王手がかかっているか
///
/// 玉が盤上にない局面は王手とみなす。
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    match pos.king_square(color) {
        Some(ksq) => is_attacked(pos, ksq, !color),
        None => {
            debug!("{color:?} has no king on the board; treating as in check");
            true
        }
    }
}

/// 手番側が詰んでいるか
pub fn is_checkmate(pos: &Position) -> bool {
    let us = pos.side_to_move();
    if !is_in_check(pos, us) {
        return false;
    }
    let mated = !legality::has_legal_move(pos);
    trace!("{us:?} in check, mated = {mated}");
    mated
}
