//! Конфигурация движка и хранилища.
//!
//! Значения по умолчанию можно переопределить переменными окружения:
//! - `SKULL_KING_EDIT_POLICY` — `phase-gated` | `always-editable`;
//! - `SKULL_KING_STATE_DIR` — каталог файлового хранилища (по умолчанию `.`);
//! - `SKULL_KING_STORAGE_KEY` — ключ снапшота (по умолчанию `skull-king-scorekeeper`).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const ENV_EDIT_POLICY: &str = "SKULL_KING_EDIT_POLICY";
pub const ENV_STATE_DIR: &str = "SKULL_KING_STATE_DIR";
pub const ENV_STORAGE_KEY: &str = "SKULL_KING_STORAGE_KEY";

/// Ключ, под которым снапшот лежал в браузерной версии.
pub const BROWSER_STORAGE_KEY: &str = "skull-king-scorekeeper";
/// Ключ мобильной версии.
pub const MOBILE_STORAGE_KEY: &str = "skull-king-mobile-state";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Неизвестная политика редактирования: {0}")]
    UnknownEditPolicy(String),
}

/// Когда разрешено редактировать поля раунда.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EditPolicy {
    /// Заявки только в фазе Bids, взятки и бонусы только в фазе Results.
    #[default]
    PhaseGated,
    /// Все поля редактируются всегда, фаза ни на что не влияет.
    AlwaysEditable,
}

impl FromStr for EditPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phase-gated" | "gated" => Ok(EditPolicy::PhaseGated),
            "always-editable" | "always" => Ok(EditPolicy::AlwaysEditable),
            other => Err(ConfigError::UnknownEditPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for EditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditPolicy::PhaseGated => f.write_str("phase-gated"),
            EditPolicy::AlwaysEditable => f.write_str("always-editable"),
        }
    }
}

/// Настройки правил движка.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub edit_policy: EditPolicy,
}

impl EngineConfig {
    pub fn new(edit_policy: EditPolicy) -> Self {
        Self { edit_policy }
    }

    /// Прочитать `SKULL_KING_EDIT_POLICY`. Мусор в переменной -> warn и значение по умолчанию.
    pub fn from_env() -> Self {
        let edit_policy = match std::env::var(ENV_EDIT_POLICY) {
            Ok(raw) => raw.parse::<EditPolicy>().unwrap_or_else(|err| {
                warn!(%err, "ignoring {}", ENV_EDIT_POLICY);
                EditPolicy::default()
            }),
            Err(_) => EditPolicy::default(),
        };
        Self { edit_policy }
    }

    pub fn is_phase_gated(&self) -> bool {
        self.edit_policy == EditPolicy::PhaseGated
    }
}

/// Где лежит снапшот.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub state_dir: PathBuf,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from("."),
            storage_key: BROWSER_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Прочитать `SKULL_KING_STATE_DIR` и `SKULL_KING_STORAGE_KEY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let state_dir = std::env::var(ENV_STATE_DIR)
            .map(PathBuf::from)
            .unwrap_or(defaults.state_dir);
        let storage_key = std::env::var(ENV_STORAGE_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(defaults.storage_key);
        Self {
            state_dir,
            storage_key,
        }
    }
}
