use serde::{Deserialize, Serialize};

use crate::domain::{CardId, PlayerId, DEFAULT_TOTAL_ROUNDS};
use crate::engine::input::{clamp_number, coerce_bonus, coerce_card_value, coerce_round_selector};
use crate::engine::GameAction;

/// Команда верхнего уровня.
///
/// Поля, которые пользователь набирает руками, приходят сырым текстом
/// (`raw`) и приводятся к числам здесь же, до движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Добавить игрока (ID выдаёт сессия).
    AddPlayer,

    RemovePlayer { player_id: PlayerId },

    RenamePlayer { player_id: PlayerId, name: String },

    /// Заявка на текущий раунд.
    SetBid { player_id: PlayerId, raw: String },

    /// Взятки за текущий раунд.
    SetTricks { player_id: PlayerId, raw: String },

    /// Бонус за текущий раунд.
    SetBonus { player_id: PlayerId, raw: String },

    /// Поле бонуса игрока получило фокус: карты будут добавляться к нему.
    FocusBonus { player_id: PlayerId },

    /// Снять выбор поля бонуса.
    ClearBonusFocus,

    /// Нажата карта: прибавить её значение к выбранному полю бонуса.
    ApplyBonusCard { card_id: CardId },

    /// Изменить значение карты в каталоге.
    SetCardValue { card_id: CardId, raw: String },

    /// Выбор длины партии.
    SetTotalRounds { raw: String },

    /// Выбор текущего раунда.
    SelectRound { raw: String },

    TogglePhase,

    CompleteRound,

    ResetGame,
}

impl Command {
    /// Меняет ли команда состояние партии (и, значит, требует сохранения).
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::FocusBonus { .. } | Command::ClearBonusFocus)
    }
}

/// Перевести команду в действие движка.
///
/// `new_player_id` нужен только для `AddPlayer`, `bonus_target` – только для карты.
/// Для команд фокуса возвращает `None`: они живут только в сессии.
pub fn command_to_action(
    command: &Command,
    current_round: u32,
    new_player_id: impl FnOnce() -> PlayerId,
    bonus_target: Option<&PlayerId>,
) -> Option<GameAction> {
    let round_max = i64::from(current_round);

    let action = match command {
        Command::AddPlayer => GameAction::AddPlayer {
            id: new_player_id(),
        },
        Command::RemovePlayer { player_id } => GameAction::RemovePlayer {
            player_id: player_id.clone(),
        },
        Command::RenamePlayer { player_id, name } => GameAction::RenamePlayer {
            player_id: player_id.clone(),
            name: name.clone(),
        },
        Command::SetBid { player_id, raw } => GameAction::SetBid {
            player_id: player_id.clone(),
            bid: clamp_number(raw, 0, round_max),
        },
        Command::SetTricks { player_id, raw } => GameAction::SetTricks {
            player_id: player_id.clone(),
            tricks: clamp_number(raw, 0, round_max),
        },
        Command::SetBonus { player_id, raw } => GameAction::SetBonus {
            player_id: player_id.clone(),
            bonus: coerce_bonus(raw),
        },
        Command::ApplyBonusCard { card_id } => GameAction::ApplyBonusCard {
            card_id: card_id.clone(),
            target: bonus_target.cloned(),
        },
        Command::SetCardValue { card_id, raw } => GameAction::SetCardValue {
            card_id: card_id.clone(),
            value: coerce_card_value(raw),
        },
        Command::SetTotalRounds { raw } => GameAction::SetTotalRounds {
            total: coerce_round_selector(raw, DEFAULT_TOTAL_ROUNDS),
        },
        Command::SelectRound { raw } => GameAction::SelectRound {
            round: coerce_round_selector(raw, 1),
        },
        Command::TogglePhase => GameAction::TogglePhase,
        Command::CompleteRound => GameAction::CompleteRound,
        Command::ResetGame => GameAction::ResetGame,
        Command::FocusBonus { .. } | Command::ClearBonusFocus => return None,
    };

    Some(action)
}
