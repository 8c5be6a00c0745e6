//! 指し手の合法性判定と合法手生成
//!
//! 疑似合法手を局面のコピーに適用し、自玉に利きが残るものを除く。
//! ピンの検出はこの自殺手判定のみで行う。

use super::check::is_in_check;
use super::drops::check_drop;
use super::promotion::{can_promote, must_promote};
use crate::error::IllegalMove;
use crate::movegen::{piece_targets, pseudo_legal_targets};
use crate::position::Position;
use crate::types::{HAND_ORDER, Move, PieceType, Square};

/// 指し手が合法か検査し、非合法なら理由を返す
pub fn check_move(pos: &Position, mv: Move) -> Result<(), IllegalMove> {
    match mv {
        Move::Normal { from, to, promote } => check_board_move(pos, from, to, promote),
        Move::Drop { to, piece_type } => check_drop(pos, to, piece_type),
    }
}

#[inline]
pub fn is_legal_move(pos: &Position, mv: Move) -> bool {
    check_move(pos, mv).is_ok()
}

fn check_board_move(pos: &Position, from: Square, to: Square, promote: bool) -> Result<(), IllegalMove> {
    let us = pos.side_to_move();
    let piece = pos.piece_on(from).ok_or(IllegalMove::NoPiece(from))?;
    if piece.color != us {
        return Err(IllegalMove::NotYourPiece {
            square: from,
            owner: piece.color,
        });
    }

    // 自駒の升は利きに含まれないので到達判定より先に見る
    let target = pos.piece_on(to);
    if target.is_some_and(|pc| pc.color == us) {
        return Err(IllegalMove::OwnPieceCapture(to));
    }
    if !piece_targets(pos, from).contains(&to) {
        return Err(IllegalMove::Unreachable { from, to });
    }
    if target.is_some_and(|pc| pc.piece_type == PieceType::King) {
        return Err(IllegalMove::KingCapture(to));
    }

    if promote && !can_promote(pos, from, to) {
        return Err(IllegalMove::PromotionNotAllowed { from, to });
    }
    if !promote && must_promote(pos, from, to) {
        return Err(IllegalMove::PromotionRequired { from, to });
    }

    if leaves_king_attacked(pos, Move::normal(from, to, promote)) {
        return Err(IllegalMove::SelfCheck);
    }
    Ok(())
}

/// 指し手を適用すると自玉に利きがあるか（構造的な検査は済んでいること）
pub(crate) fn leaves_king_attacked(pos: &Position, mv: Move) -> bool {
    let us = pos.side_to_move();
    let mut next = pos.clone();
    next.do_move(mv);
    is_in_check(&next, us)
}

/// 移動先ごとの成・不成の候補
fn promotion_choices(pos: &Position, from: Square, to: Square) -> &'static [bool] {
    if must_promote(pos, from, to) {
        &[true]
    } else if can_promote(pos, from, to) {
        &[false, true]
    } else {
        &[false]
    }
}

/// 盤上の駒を動かす候補手（自殺手判定前）
fn board_candidates(pos: &Position) -> impl Iterator<Item = Move> + '_ {
    pos.pieces_of(pos.side_to_move()).flat_map(move |(from, _)| {
        pseudo_legal_targets(pos, from)
            .into_iter()
            .filter(move |&to| !pos.piece_on(to).is_some_and(|pc| pc.piece_type == PieceType::King))
            .flat_map(move |to| {
                promotion_choices(pos, from, to)
                    .iter()
                    .map(move |&promote| Move::normal(from, to, promote))
            })
    })
}

/// 駒打ちの候補（手駒にあり空き升に打つもの、その他の制限は未検査）
fn drop_candidates(pos: &Position) -> impl Iterator<Item = Move> + '_ {
    let hand = pos.hand(pos.side_to_move());
    HAND_ORDER
        .into_iter()
        .filter(move |&pt| hand.has(pt))
        .flat_map(move |pt| {
            Square::all()
                .filter(move |&sq| pos.piece_on(sq).is_none())
                .map(move |sq| Move::drop(pt, sq))
        })
}

/// 手番側の合法手（盤上の指し手、続いて駒打ち）
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves: Vec<Move> = board_candidates(pos)
        .filter(|&mv| !leaves_king_attacked(pos, mv))
        .collect();
    moves.extend(drop_candidates(pos).filter(|&mv| is_legal_move(pos, mv)));
    moves
}

/// 合法手が1つでもあるか（最初の合法手で打ち切る）
pub fn has_legal_move(pos: &Position) -> bool {
    board_candidates(pos).any(|mv| !leaves_king_attacked(pos, mv))
        || drop_candidates(pos).any(|mv| is_legal_move(pos, mv))
}

/// `from` の駒が合法に移動できる升（成・不成のいずれかが合法なもの）
pub fn legal_targets(pos: &Position, from: Square) -> Vec<Square> {
    pseudo_legal_targets(pos, from)
        .into_iter()
        .filter(|&to| {
            promotion_choices(pos, from, to)
                .iter()
                .any(|&promote| is_legal_move(pos, Move::normal(from, to, promote)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_has_30_moves() {
        let pos = Position::new();
        let moves = legal_moves(&pos);
        assert_eq!(moves.len(), 30);
        assert!(moves.contains(&mv("7g7f")));
        assert!(moves.contains(&mv("2h1h")));
        assert!(moves.iter().all(|m| !m.is_drop() && !m.is_promotion()));
    }

    #[test]
    fn test_check_move_reasons() {
        let pos = Position::new();
        assert_eq!(check_move(&pos, mv("5e5d")), Err(IllegalMove::NoPiece(sq("5e"))));
        assert_eq!(
            check_move(&pos, mv("3c3d")),
            Err(IllegalMove::NotYourPiece {
                square: sq("3c"),
                owner: Color::White
            })
        );
        assert_eq!(check_move(&pos, mv("2i2h")), Err(IllegalMove::OwnPieceCapture(sq("2h"))));
        assert_eq!(
            check_move(&pos, mv("7g7e")),
            Err(IllegalMove::Unreachable {
                from: sq("7g"),
                to: sq("7e")
            })
        );
        assert_eq!(
            check_move(&pos, mv("7g7f+")),
            Err(IllegalMove::PromotionNotAllowed {
                from: sq("7g"),
                to: sq("7f")
            })
        );
        assert_eq!(check_move(&pos, mv("7g7f")), Ok(()));
    }

    #[test]
    fn test_promotion_required_and_optional() {
        let pos = Position::from_sfen("4k4/9/P8/9/9/9/9/9/4K4 b - 1").unwrap();
        assert_eq!(
            check_move(&pos, mv("9c9b")),
            Ok(()),
            "pawn to the second rank may stay unpromoted"
        );
        let moves = legal_moves(&pos);
        assert!(moves.contains(&mv("9c9b")));
        assert!(moves.contains(&mv("9c9b+")));

        let pos = Position::from_sfen("4k4/P8/9/9/9/9/9/9/4K4 b - 1").unwrap();
        assert_eq!(
            check_move(&pos, mv("9b9a")),
            Err(IllegalMove::PromotionRequired {
                from: sq("9b"),
                to: sq("9a")
            })
        );
        let pawn_moves: Vec<_> = legal_moves(&pos).into_iter().filter(|m| m.from() == Some(sq("9b"))).collect();
        assert_eq!(pawn_moves, vec![mv("9b9a+")]);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // 5e金は後手5a飛車にピンされている
        let pos = Position::from_sfen("4r4/9/9/9/4G4/9/9/9/4K4 b - 1").unwrap();
        assert_eq!(check_move(&pos, mv("5e4e")), Err(IllegalMove::SelfCheck));
        assert_eq!(check_move(&pos, mv("5e5d")), Ok(()));
        assert_eq!(legal_targets(&pos, sq("5e")), vec![sq("5d"), sq("5f")]);
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let pos = Position::from_sfen("3r5/9/9/9/9/9/9/9/4K4 b - 1").unwrap();
        assert_eq!(check_move(&pos, mv("5i6i")), Err(IllegalMove::SelfCheck));
        assert_eq!(check_move(&pos, mv("5i4h")), Ok(()));
    }

    #[test]
    fn test_king_capture_rejected_and_never_generated() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4R3K b - 1").unwrap();
        assert_eq!(check_move(&pos, mv("5i5a")), Err(IllegalMove::KingCapture(sq("5a"))));
        assert!(legal_moves(&pos).iter().all(|m| m.to() != sq("5a")));
    }

    #[test]
    fn test_unreachable_king_square_reported_as_unreachable() {
        // 5e歩は1a玉に届かない
        let pos = Position::from_sfen("8k/9/9/9/4P4/9/9/9/4K4 b - 1").unwrap();
        assert_eq!(
            check_move(&pos, mv("5e1a")),
            Err(IllegalMove::Unreachable {
                from: sq("5e"),
                to: sq("1a")
            })
        );
    }

    #[test]
    fn test_has_legal_move_matches_legal_moves() {
        let pos = Position::new();
        assert!(has_legal_move(&pos));

        let mated = Position::from_sfen("4k4/4G4/4P4/9/9/9/9/9/4K4 w - 1").unwrap();
        assert!(!has_legal_move(&mated));
        assert!(legal_moves(&mated).is_empty());
    }

    #[test]
    fn test_drops_are_listed_after_board_moves() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b G 1").unwrap();
        let moves = legal_moves(&pos);
        let king_moves = moves.iter().filter(|m| !m.is_drop()).count();
        assert_eq!(king_moves, 5);
        assert_eq!(moves.len(), 5 + 79);
        assert!(moves[..5].iter().all(|m| !m.is_drop()));
    }
}
