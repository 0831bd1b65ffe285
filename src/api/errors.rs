use serde::{Deserialize, Serialize};

use crate::domain::{CardId, PlayerId, RoundPhase, MIN_PLAYERS};
use crate::engine::{EngineError, ScoreField};

/// Ошибки внешнего API (то, что показываем пользователю).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Уже 8 игроков.
    ShipFull,

    /// Осталось 2 игрока, убирать нельзя.
    CrewTooSmall,

    /// Карта нажата, но поле бонуса не выбрано.
    NoBonusFieldSelected,

    /// Поле закрыто в текущей фазе.
    PhaseLocked { field: ScoreField, phase: RoundPhase },

    /// Закрыть раунд можно только в фазе результатов.
    NotInResultsPhase,

    LastRoundReached,

    PlayerNotFound(PlayerId),

    /// Игрок с таким ID уже есть.
    DuplicatePlayer(PlayerId),

    CardNotFound(CardId),
}

impl ApiError {
    /// Текст уведомления для пользователя.
    pub fn notice(&self) -> String {
        match self {
            ApiError::ShipFull => "Le navire est plein !".to_string(),
            ApiError::CrewTooSmall => format!("Il faut au moins {} joueurs.", MIN_PLAYERS),
            ApiError::NoBonusFieldSelected => {
                "Sélectionne un champ bonus dans la manche.".to_string()
            }
            ApiError::PhaseLocked { field, phase } => {
                let field = match field {
                    ScoreField::Bid => "Annonce",
                    ScoreField::Tricks => "Plis",
                    ScoreField::Bonus => "Bonus",
                };
                let phase = match phase {
                    RoundPhase::Bids => "Annonces",
                    RoundPhase::Results => "Résultats",
                };
                format!("{} n'est pas modifiable en phase {}.", field, phase)
            }
            ApiError::NotInResultsPhase => "Passe d'abord en phase résultats.".to_string(),
            ApiError::LastRoundReached => "Dernière manche atteinte.".to_string(),
            ApiError::PlayerNotFound(id) => format!("Joueur introuvable : {}", id),
            ApiError::DuplicatePlayer(id) => format!("Joueur déjà présent : {}", id),
            ApiError::CardNotFound(id) => format!("Carte introuvable : {}", id),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::TooManyPlayers { .. } => ApiError::ShipFull,
            EngineError::TooFewPlayers { .. } => ApiError::CrewTooSmall,
            EngineError::PlayerNotFound(id) => ApiError::PlayerNotFound(id),
            EngineError::DuplicatePlayer(id) => ApiError::DuplicatePlayer(id),
            EngineError::CardNotFound(id) => ApiError::CardNotFound(id),
            EngineError::NoActiveBonusTarget => ApiError::NoBonusFieldSelected,
            EngineError::PhaseLocked { field, phase } => ApiError::PhaseLocked { field, phase },
            EngineError::NotInResultsPhase => ApiError::NotInResultsPhase,
            EngineError::LastRoundReached => ApiError::LastRoundReached,
        }
    }
}
