//! エラー型
//!
//! - `IllegalMove`: 非合法手の拒否理由。局面は変更されない
//! - `SfenError`: SFEN 文字列の解析エラー
//! - `MoveParseError`: USI 形式の指し手・升目の解析エラー

use crate::types::{Color, PieceType, Square};

/// 非合法手の拒否理由
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// 移動元に駒がない
    #[error("no piece on {0}")]
    NoPiece(Square),

    /// 移動元の駒が手番側のものではない
    #[error("piece on {square} belongs to {owner:?}")]
    NotYourPiece { square: Square, owner: Color },

    /// 駒の動きとして到達できない
    #[error("{from} cannot reach {to}")]
    Unreachable { from: Square, to: Square },

    /// 移動先に自分の駒がある
    #[error("{0} is occupied by an own piece")]
    OwnPieceCapture(Square),

    /// 玉を取る手（正しい局面からは生じない）
    #[error("capturing the king on {0}")]
    KingCapture(Square),

    /// 成れない駒・成れない位置での成り
    #[error("promotion is not allowed for {from}{to}")]
    PromotionNotAllowed { from: Square, to: Square },

    /// 行き所のない駒になる不成
    #[error("{from}{to} must promote")]
    PromotionRequired { from: Square, to: Square },

    /// 自玉が取られる形になる
    #[error("move leaves own king in check")]
    SelfCheck,

    /// 打てない駒種（玉）
    #[error("{0:?} cannot be dropped")]
    NotDroppable(PieceType),

    /// 手駒にない
    #[error("no {0:?} in hand")]
    NotInHand(PieceType),

    /// 打つ升が空いていない
    #[error("drop square {0} is occupied")]
    Occupied(Square),

    /// 二歩
    #[error("an unpromoted pawn already stands on the file of {0}")]
    DoublePawn(Square),

    /// 行き所のない駒打ち
    #[error("{piece_type:?} dropped on {to} would have no legal move")]
    DeadDrop { piece_type: PieceType, to: Square },

    /// 打ち歩詰め
    #[error("pawn drop on {0} delivers checkmate")]
    PawnDropMate(Square),
}

/// SFENパースエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SfenError {
    /// 盤面の形式が不正
    #[error("Invalid board: {0}")]
    Board(String),
    /// 手番の形式が不正
    #[error("Invalid side to move: {0}")]
    SideToMove(String),
    /// 手駒の形式が不正
    #[error("Invalid hand: {0}")]
    Hand(String),
    /// 手数の形式が不正
    #[error("Invalid ply: {0}")]
    Ply(String),
}

/// Error type for USI parsing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Invalid square notation: {0}")]
    InvalidSquare(String),
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),
    #[error("Invalid move format: {0}")]
    InvalidMoveFormat(String),
}
