//! Движок счёта Skull King: подсчёт очков, приведение ввода, переходы состояния.
//!
//! Основные операции:
//!   - `calculate_round_score` / `total_score` – чистый подсчёт очков
//!   - `apply_action` – применить действие к состоянию и получить новое состояние
//!   - `new_game` – стартовая партия со стандартным экипажем

pub mod actions;
pub mod errors;
pub mod input;
pub mod scoring;
pub mod update;
pub mod validation;

pub use actions::{GameAction, ScoreField};
pub use errors::EngineError;
pub use input::{
    clamp_number, clamp_round_entry, coerce_bonus, coerce_card_value, coerce_round_selector,
    parse_leading_int,
};
pub use scoring::{calculate_round_score, standings, total_score, total_score_of, Standing};
pub use update::{apply_action, new_game};
pub use validation::validate_action;

use crate::domain::PlayerId;

/// Источник идентификаторов игроков.
/// Реализации в infra: UUID v4 для реальной игры, счётчик для тестов.
pub trait IdSource {
    fn next_player_id(&mut self) -> PlayerId;
}
