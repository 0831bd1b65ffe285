use uuid::Uuid;

use crate::domain::PlayerId;
use crate::engine::IdSource;

/// Боевой генератор: UUID v4, как и в сохранениях старых версий.
#[derive(Clone, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_player_id(&mut self) -> PlayerId {
        PlayerId(Uuid::new_v4().to_string())
    }
}

/// Детерминированный генератор для тестов и реплея: "player-1", "player-2", ...
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("player")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_player_id(&mut self) -> PlayerId {
        let id = PlayerId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
