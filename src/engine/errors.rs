use crate::domain::{CardId, PlayerId, RoundPhase};
use crate::engine::actions::ScoreField;

use thiserror::Error;

/// Ошибки движка: действие отклонено, состояние не изменилось.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Нельзя добавить игрока: максимум {max}")]
    TooManyPlayers { max: usize },

    #[error("Нельзя убрать игрока: минимум {min}")]
    TooFewPlayers { min: usize },

    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerId),

    #[error("Игрок {0} уже есть в партии")]
    DuplicatePlayer(PlayerId),

    #[error("Карта {0} не найдена в каталоге")]
    CardNotFound(CardId),

    #[error("Не выбрано поле бонуса для карты")]
    NoActiveBonusTarget,

    #[error("Поле {field:?} нельзя менять в фазе {phase:?}")]
    PhaseLocked { field: ScoreField, phase: RoundPhase },

    #[error("Раунд можно закрыть только в фазе результатов")]
    NotInResultsPhase,

    #[error("Достигнут последний раунд")]
    LastRoundReached,
}
