//! 対局ルールの設定値

use serde::{Deserialize, Serialize};

use crate::position::FOURFOLD;
use crate::rules::IMPASSE_THRESHOLD;

/// 終局判定のしきい値
///
/// TOML/JSON から読み込める。省略した項目は既定値（千日手4回、持将棋24点）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// 同一局面がこの回数現れたら千日手
    #[serde(default = "default_repetition_limit")]
    pub repetition_limit: usize,
    /// 両者がこの点数以上なら持将棋
    #[serde(default = "default_impasse_threshold")]
    pub impasse_threshold: i32,
}

fn default_repetition_limit() -> usize {
    FOURFOLD
}

fn default_impasse_threshold() -> i32 {
    IMPASSE_THRESHOLD
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            repetition_limit: FOURFOLD,
            impasse_threshold: IMPASSE_THRESHOLD,
        }
    }
}
