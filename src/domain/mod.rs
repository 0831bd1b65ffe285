//! Доменная модель счётчика Skull King: игроки, записи раундов, бонусные карты, конфиг партии.

pub mod card;
pub mod game;
pub mod player;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Номер раунда (1-based). Он же множитель ставки для nil-бида.
pub type RoundNumber = u32;

/// Очки (могут быть отрицательными).
pub type Points = i64;

/// Непрозрачный уникальный идентификатор игрока.
///
/// В сохранении это строка (UUID v4), поэтому держим её как есть,
/// без попыток парсить обратно в `Uuid`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(raw: impl Into<String>) -> Self {
        PlayerId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Идентификатор карты в каталоге бонусов ("pirate", "kraken", ...).
pub type CardId = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Player и т.п.
pub use card::*;
pub use game::*;
pub use player::*;
