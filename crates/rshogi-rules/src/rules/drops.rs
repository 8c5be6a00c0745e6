//! 駒打ちの合法性
//!
//! 検査順：駒種・手駒の枚数 → 空き升 → 二歩・行き所のない駒 → 自玉の安全 → 打ち歩詰め。
//! 手駒の枚数は打ち歩詰めの試行より先に確認する。

use super::check::is_checkmate;
use super::legality::leaves_king_attacked;
use super::promotion::is_dead_end;
use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Move, PieceType, Square};

/// 駒打ちが合法か検査し、非合法なら理由を返す
pub fn check_drop(pos: &Position, to: Square, piece_type: PieceType) -> Result<(), IllegalMove> {
    let us = pos.side_to_move();

    if !piece_type.is_droppable() {
        return Err(IllegalMove::NotDroppable(piece_type));
    }
    if !pos.hand(us).has(piece_type) {
        return Err(IllegalMove::NotInHand(piece_type));
    }
    if pos.piece_on(to).is_some() {
        return Err(IllegalMove::Occupied(to));
    }

    if piece_type == PieceType::Pawn && pos.has_unpromoted_pawn_on_file(us, to.file()) {
        return Err(IllegalMove::DoublePawn(to));
    }
    if is_dead_end(piece_type, us, to) {
        return Err(IllegalMove::DeadDrop { piece_type, to });
    }

    let mv = Move::drop(piece_type, to);
    if leaves_king_attacked(pos, mv) {
        return Err(IllegalMove::SelfCheck);
    }

    // 打ち歩詰め
    if piece_type == PieceType::Pawn {
        let mut next = pos.clone();
        next.do_move(mv);
        if is_checkmate(&next) {
            return Err(IllegalMove::PawnDropMate(to));
        }
    }

    Ok(())
}

/// `piece_type` を `to` に打てるか
#[inline]
pub fn is_legal_drop(pos: &Position, to: Square, piece_type: PieceType) -> bool {
    check_drop(pos, to, piece_type).is_ok()
}
