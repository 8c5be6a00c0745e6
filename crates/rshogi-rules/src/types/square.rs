//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::error::MoveParseError;

/// 升目（0-80）
///
/// **IMPORTANT**: 内部の筋座標は USI 表記と逆向き。
/// - file 0 = 9筋（左端）、file 8 = 1筋（右端）
/// - rank 0 = a段（後手陣の最奥）、rank 8 = i段（先手陣の最奥）
///
/// インデックスは `rank * 9 + file`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// file / rank から生成
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 9 && rank < 9);
        Square(rank * 9 + file)
    }

    /// 範囲外なら None
    #[inline]
    pub const fn new_checked(file: i8, rank: i8) -> Option<Square> {
        if file >= 0 && file < 9 && rank >= 0 && rank < 9 {
            Some(Square(rank as u8 * 9 + file as u8))
        } else {
            None
        }
    }

    /// インデックスから生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::NUM {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// 筋（0=9筋 … 8=1筋）
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 9
    }

    /// 段（0=a段 … 8=i段）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 9
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// `color` から見た段。0 が相手陣の最奥段
    #[inline]
    pub const fn relative_rank(self, color: Color) -> u8 {
        match color {
            Color::Black => self.rank(),
            Color::White => 8 - self.rank(),
        }
    }

    /// `color` の成れる段（相手陣3段）にあるか
    #[inline]
    pub const fn in_promotion_zone(self, color: Color) -> bool {
        self.relative_rank(color) <= 2
    }

    /// (筋, 段) の差分だけずらした升。盤外なら None
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::new_checked(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// 全ての升を返すイテレータ（a段の9筋から順）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }

    /// 筋の全ての升
    pub fn file_squares(file: u8) -> impl Iterator<Item = Square> {
        (0..9).map(move |rank| Square::new(file, rank))
    }

    /// USI形式の文字（'1'-'9', 'a'-'i'）から生成
    pub fn from_usi_chars(file: char, rank: char) -> Result<Square, MoveParseError> {
        let file_idx = match file {
            '1'..='9' => b'9' - file as u8,
            _ => return Err(MoveParseError::InvalidSquare(format!("{file}{rank}"))),
        };
        let rank_idx = match rank {
            'a'..='i' => rank as u8 - b'a',
            _ => return Err(MoveParseError::InvalidSquare(format!("{file}{rank}"))),
        };
        Ok(Square::new(file_idx, rank_idx))
    }
}

/// USI 表記（例: "5e"）
///
/// - Square::new(0, 0) → "9a"
/// - Square::new(8, 8) → "1i"
/// - Square::new(2, 6) → "7g"
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = b'9' - self.file();
        let rank = b'a' + self.rank();
        write!(f, "{}{}", file as char, rank as char)
    }
}

impl FromStr for Square {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => Square::from_usi_chars(f, r),
            _ => Err(MoveParseError::InvalidSquare(s.to_string())),
        }
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = MoveParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coordinates() {
        let sq = Square::new(2, 6);
        assert_eq!(sq.file(), 2);
        assert_eq!(sq.rank(), 6);
        assert_eq!(sq.index(), 56);
        assert_eq!(sq.to_string(), "7g");
    }

    #[test]
    fn test_square_usi_roundtrip() {
        for sq in Square::all() {
            let parsed: Square = sq.to_string().parse().unwrap();
            assert_eq!(parsed, sq);
        }
        assert!("0a".parse::<Square>().is_err());
        assert!("5j".parse::<Square>().is_err());
        assert!("5".parse::<Square>().is_err());
        assert!("5ee".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_offset_edges() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));
        let other = Square::new(8, 8);
        assert_eq!(other.offset(1, 0), None);
        assert_eq!(other.offset(0, 1), None);
    }

    #[test]
    fn test_square_promotion_zone() {
        // 先手: a〜c段、後手: g〜i段
        assert!("5c".parse::<Square>().unwrap().in_promotion_zone(Color::Black));
        assert!(!"5d".parse::<Square>().unwrap().in_promotion_zone(Color::Black));
        assert!("5g".parse::<Square>().unwrap().in_promotion_zone(Color::White));
        assert!(!"5f".parse::<Square>().unwrap().in_promotion_zone(Color::White));
    }

    #[test]
    fn test_square_relative_rank() {
        let sq: Square = "1a".parse().unwrap();
        assert_eq!(sq.relative_rank(Color::Black), 0);
        assert_eq!(sq.relative_rank(Color::White), 8);
    }
}
