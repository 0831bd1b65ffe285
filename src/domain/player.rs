use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Points, RoundNumber};

/// Имя, которое получает игрок, если поле имени очистили.
pub const PLACEHOLDER_NAME: &str = "Pirate mystère";

/// Запись одного игрока за один раунд.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundScore {
    /// Заявка: сколько взяток игрок обещал взять (0..=N).
    pub bid: u32,
    /// Сколько взяток реально взято (0..=N).
    pub tricks: u32,
    /// Бонус от спецкарт, знак не ограничен.
    pub bonus: Points,
}

impl RoundScore {
    pub const ZERO: RoundScore = RoundScore {
        bid: 0,
        tricks: 0,
        bonus: 0,
    };

    pub fn new(bid: u32, tricks: u32, bonus: Points) -> Self {
        Self { bid, tricks, bonus }
    }

    /// Nil-бид: игрок заявил ноль взяток.
    pub fn is_nil_bid(&self) -> bool {
        self.bid == 0
    }
}

/// Игрок и все его записи по раундам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Ключ: номер раунда. Порядок обхода на сумму не влияет.
    pub scores: BTreeMap<RoundNumber, RoundScore>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: normalize_name(name.into()),
            scores: BTreeMap::new(),
        }
    }

    /// Запись раунда для отображения. Если её нет, отдаём нулевую (без мутации).
    pub fn score_for(&self, round: RoundNumber) -> RoundScore {
        self.scores.get(&round).copied().unwrap_or_default()
    }

    /// Запись раунда для изменения: создаётся с нулями при первом обращении.
    pub fn ensure_score(&mut self, round: RoundNumber) -> &mut RoundScore {
        self.scores.entry(round).or_default()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = normalize_name(name.into());
    }

    pub fn clear_scores(&mut self) {
        self.scores.clear();
    }
}

/// Пустое имя заменяется заглушкой.
pub fn normalize_name(name: String) -> String {
    if name.trim().is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name
    }
}
