//! Инфраструктурный слой вокруг движка счёта:
//! - генерация ID игроков;
//! - формат сохранения (снапшот) и маппинг снапшот <-> domain;
//! - абстракция key-value хранилища и StateStore поверх неё.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod snapshot;

pub use ids::*;
pub use persistence::{FileBackend, InMemoryBackend, KeyValueBackend, StateStore, StorageError};
pub use snapshot::{decode_snapshot, encode_snapshot, SnapshotError};
