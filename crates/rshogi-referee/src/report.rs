//! 最終局面の報告（テキスト / JSON）

use std::fmt;

use rshogi_rules::rules::material_score;
use rshogi_rules::{Color, Game, GameStatus};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Material {
    pub black: i32,
    pub white: i32,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub sfen: String,
    pub ply: u32,
    pub side_to_move: Color,
    pub status: GameStatus,
    pub in_check: bool,
    pub material: Material,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_moves: Option<Vec<String>>,
}

impl Report {
    pub fn new(game: &Game, list: bool) -> Self {
        let pos = game.position();
        Report {
            sfen: game.sfen(),
            ply: game.ply(),
            side_to_move: pos.side_to_move(),
            status: game.status(),
            in_check: game.in_check(),
            material: Material {
                black: material_score(pos, Color::Black),
                white: material_score(pos, Color::White),
            },
            legal_moves: list.then(|| game.legal_moves().iter().map(ToString::to_string).collect()),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sfen: {}", self.sfen)?;
        writeln!(f, "status: {}", describe(self.status))?;
        writeln!(f, "in check: {}", if self.in_check { "yes" } else { "no" })?;
        writeln!(f, "material: black {}, white {}", self.material.black, self.material.white)?;
        if let Some(moves) = &self.legal_moves {
            writeln!(f, "legal moves ({}): {}", moves.len(), moves.join(" "))?;
        }
        Ok(())
    }
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "in progress".to_string(),
        GameStatus::Checkmate { winner } => format!("checkmate, {} wins", color_name(winner)),
        GameStatus::Repetition => "repetition (sennichite)".to_string(),
        GameStatus::Impasse => "impasse (jishogi)".to_string(),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}
