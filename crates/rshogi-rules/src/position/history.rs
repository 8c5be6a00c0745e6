//! 千日手判定用の局面履歴

use std::collections::HashMap;

use super::pos::Position;
use super::sfen::PositionKey;

/// 千日手とみなす同一局面の出現回数
pub const FOURFOLD: usize = 4;

/// 着手ごとに記録される局面キーの列
///
/// 記録は指し手が確定した後の局面のみ。初期局面は記録しない。
#[derive(Debug, Clone, Default)]
pub struct History {
    keys: Vec<PositionKey>,
    counts: HashMap<PositionKey, usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 局面を記録する
    pub fn record(&mut self, pos: &Position) {
        let key = pos.key();
        *self.counts.entry(key.clone()).or_insert(0) += 1;
        self.keys.push(key);
    }

    /// 直近の局面が4回目以上の出現か
    pub fn is_fourfold_repetition(&self) -> bool {
        self.is_repetition(FOURFOLD)
    }

    /// 直近の局面が `limit` 回以上出現しているか
    pub fn is_repetition(&self, limit: usize) -> bool {
        self.keys
            .last()
            .is_some_and(|key| self.counts.get(key).copied().unwrap_or(0) >= limit)
    }

    /// `pos` と同一の局面が記録された回数
    pub fn repetition_count(&self, pos: &Position) -> usize {
        self.counts.get(&pos.key()).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// 最後に記録した局面キー
    pub fn last(&self) -> Option<&PositionKey> {
        self.keys.last()
    }

    /// 記録順の局面キー
    pub fn iter(&self) -> impl Iterator<Item = &PositionKey> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
        assert!(!history.is_fourfold_repetition());
    }

    #[test]
    fn test_repetition_counts_only_last_key() {
        let a = Position::new();
        let mut b = Position::new();
        b.set_side_to_move(Color::White);

        let mut history = History::new();
        for _ in 0..4 {
            history.record(&a);
        }
        assert!(history.is_fourfold_repetition());

        history.record(&b);
        assert_eq!(history.repetition_count(&a), 4);
        assert_eq!(history.repetition_count(&b), 1);
        assert!(!history.is_fourfold_repetition());
        assert_eq!(history.last(), Some(&b.key()));
    }

    #[test]
    fn test_custom_limit() {
        let pos = Position::new();
        let mut history = History::new();
        history.record(&pos);
        history.record(&pos);
        assert!(!history.is_repetition(3));
        history.record(&pos);
        assert!(history.is_repetition(3));
        assert!(!history.is_fourfold_repetition());
        assert_eq!(history.iter().count(), 3);
    }
}
