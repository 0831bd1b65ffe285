use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::domain::GameState;
use crate::infra::snapshot::{decode_snapshot, encode_snapshot};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("недопустимый ключ хранилища: {0:?}")]
    InvalidKey(String),
}

/// Абстракция key-value хранилища, в котором лежит снапшот партии.
///
/// Реализации:
/// - `InMemoryBackend` – тесты и временные сессии;
/// - `FileBackend` – один файл `<key>.json` на ключ в каталоге.
pub trait KeyValueBackend {
    /// Прочитать значение. Отсутствующий ключ – не ошибка, а `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Записать значение целиком.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    entries: HashMap<String, String>,
    writes: usize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с уже записанным значением (например, битым снапшотом).
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.entries.insert(key.to_string(), value.to_string());
        backend
    }

    /// Сколько раз вызывался `set`.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueBackend for InMemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Файловое хранилище: `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Путь файла для ключа. Ключ не должен выходить за пределы каталога.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Пишем во временный файл и переименовываем: читатель не увидит половину снапшота.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Хранилище состояния партии поверх key-value бэкенда.
///
/// `load` никогда не падает: битый или отсутствующий снапшот -> `None`.
/// `save` работает по принципу fire-and-forget: ошибки только логируются.
#[derive(Debug)]
pub struct StateStore<B: KeyValueBackend> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> StateStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Загрузить снапшот. `None` – оставить состояние по умолчанию.
    pub fn load(&self) -> Option<GameState> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %self.key, %err, "failed to read saved game, using defaults");
                return None;
            }
        };

        match decode_snapshot(&raw) {
            Ok(state) => {
                debug!(key = %self.key, players = state.player_count(), "saved game loaded");
                Some(state)
            }
            Err(err) => {
                warn!(key = %self.key, %err, "discarding malformed saved game");
                None
            }
        }
    }

    /// Записать полный снапшот.
    pub fn save(&mut self, state: &GameState) {
        let raw = match encode_snapshot(state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %self.key, %err, "failed to encode game state");
                return;
            }
        };

        if let Err(err) = self.backend.set(&self.key, &raw) {
            warn!(key = %self.key, %err, "failed to save game state");
        }
    }

    /// Стереть снапшот.
    pub fn clear(&mut self) {
        if let Err(err) = self.backend.remove(&self.key) {
            warn!(key = %self.key, %err, "failed to clear saved game");
        }
    }
}

impl StateStore<FileBackend> {
    /// Файловое хранилище по конфигу.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(FileBackend::new(config.state_dir.clone()), config.storage_key.clone())
    }
}
