//! 対局の進行管理（Game）
//!
//! 局面・局面履歴・ルール設定・手数をまとめて保持する。終局条件は報告するだけで、
//! 対局を打ち切るかどうかは呼び出し側が決める。

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::RuleConfig;
use crate::error::IllegalMove;
use crate::position::{History, Position};
use crate::rules;
use crate::types::{Color, Move};

/// 対局の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    /// 対局中
    InProgress,
    /// 手番側が詰み
    Checkmate { winner: Color },
    /// 千日手
    Repetition,
    /// 持将棋
    Impasse,
}

impl GameStatus {
    /// 終局条件を満たしているか
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: History,
    config: RuleConfig,
    ply: u32,
}

impl Game {
    /// 平手初期局面から開始
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    pub fn with_config(config: RuleConfig) -> Self {
        Self::from_position(Position::new(), config)
    }

    /// 任意の局面から開始（開始局面は履歴に含めない）
    pub fn from_position(position: Position, config: RuleConfig) -> Self {
        Game {
            position,
            history: History::new(),
            config,
            ply: 0,
        }
    }

    /// 指し手を検査して確定し、確定後の状態を返す
    ///
    /// 非合法手なら局面・履歴・手数はいずれも変わらない。
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, IllegalMove> {
        self.position.apply_move(mv)?;
        self.ply += 1;
        self.history.record(&self.position);
        debug!("ply {}: {mv}", self.ply);
        Ok(self.status())
    }

    /// 現局面の状態（詰み > 千日手 > 持将棋 の優先順）
    pub fn status(&self) -> GameStatus {
        let us = self.position.side_to_move();
        if self.position.king_square(us).is_none() {
            warn!("{us:?} has no king on the board; treating as checkmated");
        }
        if rules::is_checkmate(&self.position) {
            GameStatus::Checkmate { winner: !us }
        } else if self.history.is_repetition(self.config.repetition_limit) {
            GameStatus::Repetition
        } else if rules::is_impasse_with(&self.position, self.config.impasse_threshold) {
            GameStatus::Impasse
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// 確定した手数
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 現局面のSFEN（手数フィールドは次の手の番号）
    pub fn sfen(&self) -> String {
        self.position.to_sfen(self.ply + 1)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.position)
    }

    /// 手番側に王手がかかっているか
    pub fn in_check(&self) -> bool {
        rules::is_in_check(&self.position, self.position.side_to_move())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
