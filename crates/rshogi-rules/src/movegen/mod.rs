//! 指し手生成（疑似合法手）
//!
//! 自玉の安全は考慮しない。合法性の絞り込みは `rules` が行う。

mod tables;

use crate::position::Position;
use crate::rules;
use crate::types::{PieceType, Square};

/// `from` の駒の移動先（疑似合法）
///
/// 向きはその駒の持ち主で決まり、手番には依存しない。王手判定で相手の駒の利きを
/// 調べるのに使う。空き升なら空。
pub fn piece_targets(pos: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = pos.piece_on(from) else {
        return Vec::new();
    };
    let forward = piece.color.forward();
    let movement = tables::movement(piece);
    let mut targets = Vec::new();

    for &(df, dr) in movement.steps {
        if let Some(to) = from.offset(df, dr * -forward) {
            if pos.piece_on(to).is_none_or(|pc| pc.color != piece.color) {
                targets.push(to);
            }
        }
    }

    for &(df, dr) in movement.rays {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr * -forward) {
            match pos.piece_on(to) {
                None => targets.push(to),
                Some(pc) => {
                    if pc.color != piece.color {
                        targets.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }

    targets
}

/// 手番側の駒の移動先（疑似合法）。相手の駒・空き升なら空
pub fn pseudo_legal_targets(pos: &Position, from: Square) -> Vec<Square> {
    match pos.piece_on(from) {
        Some(pc) if pc.color == pos.side_to_move() => piece_targets(pos, from),
        _ => Vec::new(),
    }
}

/// `piece_type` を合法に打てる升
pub fn legal_drop_squares(pos: &Position, piece_type: PieceType) -> Vec<Square> {
    Square::all()
        .filter(|&sq| rules::is_legal_drop(pos, sq, piece_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Hand, Piece};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn sorted(mut v: Vec<Square>) -> Vec<Square> {
        v.sort();
        v
    }

    fn squares(list: &[&str]) -> Vec<Square> {
        sorted(list.iter().map(|s| sq(s)).collect())
    }

    fn lone(piece: Piece, at: &str) -> Position {
        let mut pos = Position::empty();
        pos.put_piece(sq(at), piece);
        pos.set_side_to_move(piece.color);
        pos
    }

    #[test]
    fn test_pawn_direction_by_owner() {
        let black = lone(Piece::new(PieceType::Pawn, Color::Black), "5e");
        assert_eq!(piece_targets(&black, sq("5e")), vec![sq("5d")]);

        let white = lone(Piece::new(PieceType::Pawn, Color::White), "5e");
        assert_eq!(piece_targets(&white, sq("5e")), vec![sq("5f")]);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut pos = lone(Piece::new(PieceType::Knight, Color::Black), "5e");
        pos.put_piece(sq("5d"), Piece::new(PieceType::Pawn, Color::Black));
        assert_eq!(sorted(piece_targets(&pos, sq("5e"))), squares(&["6c", "4c"]));

        let white = lone(Piece::new(PieceType::Knight, Color::White), "5e");
        assert_eq!(sorted(piece_targets(&white, sq("5e"))), squares(&["6g", "4g"]));

        // 盤外
        let edge = lone(Piece::new(PieceType::Knight, Color::Black), "1b");
        assert!(piece_targets(&edge, sq("1b")).is_empty());
    }

    #[test]
    fn test_step_piece_counts_in_center() {
        let cases = [
            (Piece::new(PieceType::King, Color::Black), 8),
            (Piece::new(PieceType::Gold, Color::Black), 6),
            (Piece::new(PieceType::Silver, Color::Black), 5),
            (Piece::promoted(PieceType::Silver, Color::Black), 6),
            (Piece::promoted(PieceType::Pawn, Color::White), 6),
        ];
        for (piece, expected) in cases {
            let pos = lone(piece, "5e");
            assert_eq!(piece_targets(&pos, sq("5e")).len(), expected, "{piece:?}");
        }
    }

    #[test]
    fn test_silver_and_gold_shapes() {
        let silver = lone(Piece::new(PieceType::Silver, Color::Black), "5e");
        assert_eq!(
            sorted(piece_targets(&silver, sq("5e"))),
            squares(&["6d", "5d", "4d", "6f", "4f"])
        );

        let gold = lone(Piece::new(PieceType::Gold, Color::White), "5e");
        assert_eq!(
            sorted(piece_targets(&gold, sq("5e"))),
            squares(&["6f", "5f", "4f", "6e", "4e", "5d"])
        );
    }

    #[test]
    fn test_slider_counts_on_empty_board() {
        let cases = [
            (Piece::new(PieceType::Rook, Color::Black), 16),
            (Piece::new(PieceType::Bishop, Color::Black), 16),
            (Piece::promoted(PieceType::Rook, Color::Black), 20),
            (Piece::promoted(PieceType::Bishop, Color::Black), 20),
            (Piece::new(PieceType::Lance, Color::Black), 4),
            (Piece::new(PieceType::Lance, Color::White), 4),
        ];
        for (piece, expected) in cases {
            let pos = lone(piece, "5e");
            assert_eq!(piece_targets(&pos, sq("5e")).len(), expected, "{piece:?}");
        }
    }

    #[test]
    fn test_slider_stops_at_first_piece() {
        let mut pos = lone(Piece::new(PieceType::Rook, Color::Black), "5e");
        pos.put_piece(sq("5c"), Piece::new(PieceType::Pawn, Color::White));
        pos.put_piece(sq("3e"), Piece::new(PieceType::Pawn, Color::Black));
        let targets = piece_targets(&pos, sq("5e"));

        assert!(targets.contains(&sq("5d")));
        assert!(targets.contains(&sq("5c")));
        assert!(!targets.contains(&sq("5b")));
        assert!(targets.contains(&sq("4e")));
        assert!(!targets.contains(&sq("3e")));
        assert!(!targets.contains(&sq("2e")));
    }

    #[test]
    fn test_step_excludes_own_piece_only() {
        let mut pos = lone(Piece::new(PieceType::Gold, Color::Black), "5e");
        pos.put_piece(sq("5d"), Piece::new(PieceType::Pawn, Color::Black));
        pos.put_piece(sq("4d"), Piece::new(PieceType::Pawn, Color::White));
        let targets = piece_targets(&pos, sq("5e"));
        assert!(!targets.contains(&sq("5d")));
        assert!(targets.contains(&sq("4d")));
        assert_eq!(targets.len(), 5);
    }

    #[test]
    fn test_pseudo_legal_targets_respects_side_to_move() {
        let mut pos = lone(Piece::new(PieceType::Gold, Color::Black), "5e");
        assert_eq!(pseudo_legal_targets(&pos, sq("5e")).len(), 6);
        pos.set_side_to_move(Color::White);
        assert!(pseudo_legal_targets(&pos, sq("5e")).is_empty());
        assert!(pseudo_legal_targets(&pos, sq("1a")).is_empty());
        assert_eq!(piece_targets(&pos, sq("5e")).len(), 6);
    }

    #[test]
    fn test_start_position_pseudo_moves() {
        let pos = Position::new();
        // 2h飛車は横にのみ動ける
        assert_eq!(pseudo_legal_targets(&pos, sq("2h")).len(), 6);
        assert!(pseudo_legal_targets(&pos, sq("8h")).is_empty());
        assert_eq!(pseudo_legal_targets(&pos, sq("7g")), vec![sq("7f")]);
    }

    #[test]
    fn test_legal_drop_squares_gold() {
        let mut pos = Position::empty();
        pos.put_piece(sq("5i"), Piece::new(PieceType::King, Color::Black));
        pos.put_piece(sq("5a"), Piece::new(PieceType::King, Color::White));
        pos.set_hand(Color::Black, Hand::EMPTY.add(PieceType::Gold));
        assert_eq!(legal_drop_squares(&pos, PieceType::Gold).len(), 79);
        assert!(legal_drop_squares(&pos, PieceType::Silver).is_empty());
    }
}
