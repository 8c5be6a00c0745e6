//! 局面本体（Position）

use log::debug;

use crate::error::IllegalMove;
use crate::rules;
use crate::types::{Color, Hand, Move, Piece, PieceType, Square};

/// 局面
///
/// 盤面・両者の手駒・手番のみを持つ。手数は持たないため、
/// `==` は千日手判定における「同一局面」と一致する。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Piece on each square
    board: [Option<Piece>; Square::NUM],
    /// 手駒 [color]
    hands: [Hand; Color::NUM],
    /// 手番
    side_to_move: Color,
}

impl Position {
    /// 平手初期局面（手駒なし、先手番）
    pub fn new() -> Self {
        const BACK_RANK: [PieceType; 9] = [
            PieceType::Lance,
            PieceType::Knight,
            PieceType::Silver,
            PieceType::Gold,
            PieceType::King,
            PieceType::Gold,
            PieceType::Silver,
            PieceType::Knight,
            PieceType::Lance,
        ];

        let mut pos = Position::empty();
        for (file, pt) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            pos.put_piece(Square::new(file, 0), Piece::new(pt, Color::White));
            pos.put_piece(Square::new(file, 2), Piece::new(PieceType::Pawn, Color::White));
            pos.put_piece(Square::new(file, 6), Piece::new(PieceType::Pawn, Color::Black));
            pos.put_piece(Square::new(file, 8), Piece::new(pt, Color::Black));
        }
        // 8b飛 2b角 / 8h角 2h飛
        pos.put_piece(Square::new(1, 1), Piece::new(PieceType::Rook, Color::White));
        pos.put_piece(Square::new(7, 1), Piece::new(PieceType::Bishop, Color::White));
        pos.put_piece(Square::new(1, 7), Piece::new(PieceType::Bishop, Color::Black));
        pos.put_piece(Square::new(7, 7), Piece::new(PieceType::Rook, Color::Black));
        pos
    }

    /// 駒のない盤面（先手番）
    pub fn empty() -> Self {
        Position {
            board: [None; Square::NUM],
            hands: [Hand::EMPTY; Color::NUM],
            side_to_move: Color::Black,
        }
    }

    /// Get piece on square
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// 駒を置く（既存の駒は上書き）
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.board[sq.index()] = Some(piece);
    }

    /// 駒を取り除く
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.board[sq.index()].take()
    }

    #[inline]
    pub fn hand(&self, color: Color) -> Hand {
        self.hands[color.index()]
    }

    #[inline]
    pub fn set_hand(&mut self, color: Color, hand: Hand) {
        self.hands[color.index()] = hand;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// 盤上の駒（升目順）
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|pc| (sq, pc)))
    }

    /// `color` の盤上の駒
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    /// Find king square
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, pc)| pc.piece_type == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// `color` の生の歩が `file` にあるか（と金は数えない）
    pub fn has_unpromoted_pawn_on_file(&self, color: Color, file: u8) -> bool {
        Square::file_squares(file).any(|sq| {
            self.piece_on(sq)
                .is_some_and(|pc| pc.color == color && pc.piece_type == PieceType::Pawn && !pc.promoted)
        })
    }

    /// 合法性を確認してから指し手を適用する。非合法なら局面は変わらない
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if let Err(reason) = rules::check_move(self, mv) {
            debug!("rejected {mv} ({:?} to move): {reason}", self.side_to_move);
            return Err(reason);
        }
        self.do_move(mv);
        Ok(())
    }

    /// 指し手を適用した新しい局面
    pub fn after(&self, mv: Move) -> Result<Position, IllegalMove> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// 検査なしで指し手を適用する
    ///
    /// 呼び出し側で駒の所在と手駒の枚数が確認済みであること。
    pub(crate) fn do_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        match mv {
            Move::Normal { from, to, promote } => {
                let Some(piece) = self.remove_piece(from) else {
                    debug_assert!(false, "do_move from empty square {from}");
                    return;
                };
                if let Some(captured) = self.remove_piece(to) {
                    self.hands[us.index()] = self.hands[us.index()].add(captured.piece_type);
                }
                let piece = if promote { piece.promote() } else { piece };
                self.put_piece(to, piece);
            }
            Move::Drop { to, piece_type } => {
                let hand = self.hands[us.index()];
                debug_assert!(hand.has(piece_type), "do_move drop without {piece_type:?} in hand");
                self.hands[us.index()] = hand.checked_sub(piece_type).unwrap_or(hand);
                self.put_piece(to, Piece::new(piece_type, us));
            }
        }
        self.side_to_move = !us;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
