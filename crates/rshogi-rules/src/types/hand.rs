//! 手駒（Hand）

use serde::{Deserialize, Serialize};

use super::PieceType;
use super::piece_type::HAND_ORDER;

/// 手駒（駒種ごとの枚数）
///
/// 並びは `HAND_ORDER`（飛角金銀桂香歩）。枚数の上限は検査しない。
/// 0 枚からの減算は `checked_sub` が None を返すため負数にはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hand([u8; 7]);

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand([0; 7]);

    /// 指定駒種の枚数を取得（King は常に0）
    #[inline]
    pub const fn count(self, pt: PieceType) -> u8 {
        match pt.hand_index() {
            Some(i) => self.0[i],
            None => 0,
        }
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(self, pt: PieceType) -> bool {
        self.count(pt) > 0
    }

    /// 1枚追加
    #[inline]
    pub const fn add(self, pt: PieceType) -> Hand {
        let mut counts = self.0;
        if let Some(i) = pt.hand_index() {
            counts[i] = counts[i].saturating_add(1);
        }
        Hand(counts)
    }

    /// 1枚減らす（持っていなければ None）
    #[inline]
    pub const fn checked_sub(self, pt: PieceType) -> Option<Hand> {
        let Some(i) = pt.hand_index() else {
            return None;
        };
        if self.0[i] == 0 {
            return None;
        }
        let mut counts = self.0;
        counts[i] -= 1;
        Some(Hand(counts))
    }

    /// 指定枚数をセット
    #[inline]
    pub const fn set(self, pt: PieceType, count: u8) -> Hand {
        let mut counts = self.0;
        if let Some(i) = pt.hand_index() {
            counts[i] = count;
        }
        Hand(counts)
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// 持っている駒種と枚数（`HAND_ORDER` 順、0枚は除く）
    pub fn iter(self) -> impl Iterator<Item = (PieceType, u8)> {
        HAND_ORDER
            .into_iter()
            .zip(self.0)
            .filter(|&(_, n)| n > 0)
    }
}
