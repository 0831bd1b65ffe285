//! Счётчик очков для карточной игры Skull King.
//!
//! Слои:
//! - `domain` – игроки, записи раундов, каталог бонусных карт, конфиг партии;
//! - `engine` – правило подсчёта очков и чистые переходы состояния;
//! - `infra` – формат сохранения, key-value хранилище, генерация ID;
//! - `api` – команды/запросы/DTO для фронта;
//! - `state` – сессия, которая связывает всё это вместе.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

pub use config::{EditPolicy, EngineConfig, StoreConfig};
pub use state::Scorekeeper;
