//! SFEN形式の解析・出力と千日手判定用の局面キー

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pos::Position;
use crate::error::SfenError;
use crate::types::{Color, HAND_ORDER, Piece, PieceType, Square};

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// 同一局面判定用のキー
///
/// SFEN の盤面・手番・手駒の3フィールド（手数を含まない）。
/// 2局面が等しいとき、かつそのときに限りバイト列として一致する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionKey(String);

impl PositionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Position {
    /// SFEN文字列から局面を生成（手数フィールドは省略可、読み捨てる）
    pub fn from_sfen(sfen: &str) -> Result<Position, SfenError> {
        let parts: Vec<&str> = sfen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(SfenError::Board("SFEN must have at least 3 parts".to_string()));
        }

        let mut pos = Position::empty();

        // 1. 盤面
        pos.parse_board(parts[0])?;

        // 2. 手番
        let side = match parts[1] {
            "b" => Color::Black,
            "w" => Color::White,
            other => {
                return Err(SfenError::SideToMove(format!("Expected 'b' or 'w', got '{other}'")));
            }
        };
        pos.set_side_to_move(side);

        // 3. 手駒
        pos.parse_hand(parts[2])?;

        // 4. 手数（オプション）
        if let Some(ply) = parts.get(3) {
            ply.parse::<u32>().map_err(|_| SfenError::Ply(ply.to_string()))?;
        }
        if parts.len() > 4 {
            return Err(SfenError::Ply(format!("unexpected trailing fields: {}", parts[4..].join(" "))));
        }

        Ok(pos)
    }

    /// 現局面のSFEN文字列（`ply` は手数フィールド）
    pub fn to_sfen(&self, ply: u32) -> String {
        format!("{} {ply}", self.key())
    }

    /// 千日手判定用のキー
    pub fn key(&self) -> PositionKey {
        let mut result = String::with_capacity(96);

        // 1. 盤面
        for rank in 0..9 {
            let mut empty_count = 0;
            for file in 0..9 {
                match self.piece_on(Square::new(file, rank)) {
                    None => empty_count += 1,
                    Some(pc) => {
                        if empty_count > 0 {
                            result.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        result.push_str(&pc.to_sfen());
                    }
                }
            }
            if empty_count > 0 {
                result.push_str(&empty_count.to_string());
            }
            if rank < 8 {
                result.push('/');
            }
        }

        // 2. 手番
        result.push(' ');
        result.push(self.side_to_move().to_sfen_char());

        // 3. 手駒
        result.push(' ');
        let hand_str = self.hand_to_sfen();
        if hand_str.is_empty() {
            result.push('-');
        } else {
            result.push_str(&hand_str);
        }

        PositionKey(result)
    }

    /// 盤面部分をパース
    fn parse_board(&mut self, board_str: &str) -> Result<(), SfenError> {
        let ranks: Vec<&str> = board_str.split('/').collect();
        if ranks.len() != 9 {
            return Err(SfenError::Board(format!("Expected 9 ranks, got {}", ranks.len())));
        }

        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0u32; // 9筋から開始
            let mut promoted = false;

            for c in rank_str.chars() {
                if c == '+' {
                    if promoted {
                        return Err(SfenError::Board(format!("Double '+' in rank {rank}")));
                    }
                    promoted = true;
                    continue;
                }

                if let Some(digit) = c.to_digit(10) {
                    if promoted || digit == 0 {
                        return Err(SfenError::Board(format!("Unexpected '{c}' in rank {rank}")));
                    }
                    file += digit;
                    if file > 9 {
                        return Err(SfenError::Board(format!("Too many squares in rank {rank}")));
                    }
                    continue;
                }

                if file >= 9 {
                    return Err(SfenError::Board(format!("Too many pieces in rank {rank}")));
                }
                let pc = sfen_char_to_piece(c, promoted)?;
                self.put_piece(Square::new(file as u8, rank as u8), pc);
                promoted = false;
                file += 1;
            }

            if file != 9 || promoted {
                return Err(SfenError::Board(format!("Rank {rank} has wrong number of squares")));
            }
        }

        Ok(())
    }

    /// 手駒部分をパース
    fn parse_hand(&mut self, hand_str: &str) -> Result<(), SfenError> {
        if hand_str == "-" {
            return Ok(());
        }

        let mut count: Option<u32> = None;
        for c in hand_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                let n = count.unwrap_or(0) * 10 + digit;
                if n > u8::MAX as u32 {
                    return Err(SfenError::Hand(format!("count too large in '{hand_str}'")));
                }
                count = Some(n);
                continue;
            }

            let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
            let pt = PieceType::from_sfen_char(c)
                .filter(|pt| pt.is_droppable())
                .ok_or_else(|| SfenError::Hand(format!("Unknown hand piece: {c}")))?;
            let n = count.take().unwrap_or(1);
            if n == 0 {
                return Err(SfenError::Hand(format!("zero count for {c}")));
            }
            let hand = self.hand(color);
            self.set_hand(color, hand.set(pt, hand.count(pt).saturating_add(n as u8)));
        }

        if count.is_some() {
            return Err(SfenError::Hand(format!("dangling count in '{hand_str}'")));
        }
        Ok(())
    }

    /// 手駒をSFEN文字列に変換（先手の大文字→後手の小文字、飛角金銀桂香歩の順）
    fn hand_to_sfen(&self) -> String {
        let mut result = String::new();
        for color in Color::ALL {
            let hand = self.hand(color);
            for pt in HAND_ORDER {
                let cnt = hand.count(pt);
                if cnt == 0 {
                    continue;
                }
                if cnt > 1 {
                    result.push_str(&cnt.to_string());
                }
                let c = pt.to_sfen_char();
                result.push(match color {
                    Color::Black => c,
                    Color::White => c.to_ascii_lowercase(),
                });
            }
        }
        result
    }
}

/// SFEN文字を駒に変換
fn sfen_char_to_piece(c: char, promoted: bool) -> Result<Piece, SfenError> {
    let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
    let pt = PieceType::from_sfen_char(c)
        .ok_or_else(|| SfenError::Board(format!("Unknown piece: {c}")))?;

    if promoted {
        if !pt.can_promote() {
            return Err(SfenError::Board(format!("Cannot promote: {c}")));
        }
        Ok(Piece::promoted(pt, color))
    } else {
        Ok(Piece::new(pt, color))
    }
}
