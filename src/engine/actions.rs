use serde::{Deserialize, Serialize};

use crate::domain::{CardId, PlayerId, Points, RoundNumber, RoundPhase};

/// Поле записи раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreField {
    Bid,
    Tricks,
    Bonus,
}

impl ScoreField {
    /// В какой фазе поле редактируется, если включено разделение на фазы.
    pub fn editable_in(&self) -> RoundPhase {
        match self {
            ScoreField::Bid => RoundPhase::Bids,
            ScoreField::Tricks | ScoreField::Bonus => RoundPhase::Results,
        }
    }
}

/// Типизированное действие над партией.
///
/// Значения уже приведены к числам (см. `engine::input`),
/// но диапазоны движок всё равно проверяет/зажимает сам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameAction {
    /// Добавить игрока "Pirate {n}" с пустыми очками.
    AddPlayer { id: PlayerId },

    RemovePlayer { player_id: PlayerId },

    /// Пустое имя заменяется заглушкой.
    RenamePlayer { player_id: PlayerId, name: String },

    /// Заявка на текущий раунд, зажимается в [0, N].
    SetBid { player_id: PlayerId, bid: i64 },

    /// Взятки за текущий раунд, зажимаются в [0, N].
    SetTricks { player_id: PlayerId, tricks: i64 },

    /// Бонус за текущий раунд, без ограничений.
    SetBonus { player_id: PlayerId, bonus: Points },

    /// Прибавить значение карты к бонусу выбранного игрока.
    /// `target == None` – поле бонуса не выбрано.
    ApplyBonusCard {
        card_id: CardId,
        target: Option<PlayerId>,
    },

    /// Изменить значение карты в каталоге.
    SetCardValue { card_id: CardId, value: Points },

    /// Сменить длину партии (зажимается в [5, 14]).
    SetTotalRounds { total: RoundNumber },

    /// Перейти к раунду (зажимается в [1, total]), фаза сбрасывается в Bids.
    SelectRound { round: RoundNumber },

    TogglePhase,

    /// Закрыть раунд и перейти к следующему.
    CompleteRound,

    /// Стереть все очки, вернуться в раунд 1. Игроки и каталог остаются.
    ResetGame,
}

impl GameAction {
    /// Какое поле записи раунда трогает действие (для проверки фазы).
    ///
    /// Карта бонуса фазой не ограничена: ей нужна только выбранная цель.
    pub fn score_field(&self) -> Option<ScoreField> {
        match self {
            GameAction::SetBid { .. } => Some(ScoreField::Bid),
            GameAction::SetTricks { .. } => Some(ScoreField::Tricks),
            GameAction::SetBonus { .. } => Some(ScoreField::Bonus),
            _ => None,
        }
    }
}
