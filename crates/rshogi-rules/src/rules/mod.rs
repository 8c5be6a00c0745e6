//! 将棋のルール判定
//!
//! - `check`: 王手・詰み
//! - `legality`: 盤上の指し手の合法性と合法手生成
//! - `drops`: 駒打ちの制限（二歩・行き所のない駒・打ち歩詰め）
//! - `promotion`: 成り・強制成り
//! - `impasse`: 持将棋の点数

mod check;
mod drops;
mod impasse;
mod legality;
mod promotion;

pub use check::{is_attacked, is_checkmate, is_in_check};
pub use drops::{check_drop, is_legal_drop};
pub use impasse::{IMPASSE_THRESHOLD, is_impasse_with, is_mutual_impasse, material_score};
pub use legality::{check_move, has_legal_move, is_legal_move, legal_moves, legal_targets};
pub use promotion::{can_promote, must_promote};
