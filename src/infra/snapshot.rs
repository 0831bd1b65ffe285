//! Формат сохранения: один JSON-блоб под одним ключом.
//!
//! ```text
//! {
//!   "players": [ { "id", "name", "scores": { "<round>": {"bid","tricks","bonus"} } } ],
//!   "rounds": 10, "currentRound": 1, "phase": "bids" | "results",
//!   "cards": [ { "id", "label", "description", "value", "group" } ]
//! }
//! ```
//!
//! Снапшот не версионируется. Всё, что пришло из хранилища, считается
//! недоверенным: числа принимаются в любом JSON-виде и приводятся к целым,
//! отсутствующие необязательные поля получают значения по умолчанию,
//! поля неожиданного типа считаются отсутствующими.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::domain::{GameState, MAX_PLAYERS, MIN_PLAYERS};
use crate::infra::mapping::{persisted_from_state, state_from_persisted};

/// Ошибки разбора снапшота. Наружу не выходят: StateStore логирует их и откатывается к дефолту.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("снапшот не разобран: {0}")]
    Json(#[from] serde_json::Error),

    #[error("недопустимое количество игроков в снапшоте: {0}")]
    PlayerCount(usize),

    #[error("идентификатор игрока {0} встречается дважды")]
    DuplicatePlayerId(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub players: Vec<PersistedPlayer>,

    #[serde(default, deserialize_with = "lenient::opt_int", skip_serializing_if = "Option::is_none")]
    pub rounds: Option<i64>,

    #[serde(default, deserialize_with = "lenient::opt_int", skip_serializing_if = "Option::is_none")]
    pub current_round: Option<i64>,

    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    /// Так фазу писала мобильная версия. Если есть оба ключа, главный `phase`.
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub round_phase: Option<String>,

    pub cards: Vec<PersistedCard>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersistedPlayer {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Ключи – номера раундов строками. Записи не-объекты отбрасываются.
    #[serde(default, deserialize_with = "lenient::scores")]
    pub scores: BTreeMap<String, PersistedRoundScore>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedRoundScore {
    #[serde(default, deserialize_with = "lenient::int")]
    pub bid: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub tricks: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub bonus: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersistedCard {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub value: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub group: String,
}

/// Разобрать снапшот с подстановкой значений по умолчанию и приведением диапазонов.
pub fn decode_snapshot(raw: &str) -> Result<GameState, SnapshotError> {
    let persisted: PersistedState = serde_json::from_str(raw)?;

    let count = persisted.players.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(SnapshotError::PlayerCount(count));
    }

    let mut seen = std::collections::HashSet::new();
    for p in &persisted.players {
        if !seen.insert(p.id.as_str()) {
            return Err(SnapshotError::DuplicatePlayerId(p.id.clone()));
        }
    }

    Ok(state_from_persisted(persisted))
}

/// Полный снапшот состояния. Фаза пишется всегда.
pub fn encode_snapshot(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&persisted_from_state(state))?)
}

/// Приведение произвольного JSON-значения к целому.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

mod lenient {
    use super::*;

    /// Число в любом виде; мусор и null -> 0.
    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(value_to_int(&v).unwrap_or(0))
    }

    /// Число в любом виде; мусор и null -> None (дальше сработает значение по умолчанию).
    pub fn opt_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(value_to_int(&v))
    }

    /// Строка; число превращается в текст, остальное -> пустая строка.
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(value_to_text(v).unwrap_or_default())
    }

    /// Только строка; всё остальное -> None.
    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    /// Словарь очков. Запись, которая не объект, отбрасывается с предупреждением.
    pub fn scores<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<BTreeMap<String, PersistedRoundScore>, D::Error> {
        let Value::Object(entries) = Value::deserialize(d)? else {
            return Ok(BTreeMap::new());
        };

        let mut scores = BTreeMap::new();
        for (key, entry) in entries {
            if !entry.is_object() {
                warn!(key = %key, "dropping score entry that is not an object");
                continue;
            }
            match serde_json::from_value::<PersistedRoundScore>(entry) {
                Ok(score) => {
                    scores.insert(key, score);
                }
                Err(err) => warn!(key = %key, %err, "dropping unreadable score entry"),
            }
        }
        Ok(scores)
    }

    fn value_to_text(v: Value) -> Option<String> {
        match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
