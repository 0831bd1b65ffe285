use serde::{Deserialize, Serialize};

use crate::config::EditPolicy;
use crate::domain::card::CardGroup;
use crate::domain::{CardId, PlayerId, Points, RoundNumber, RoundPhase};
use crate::engine::Standing;

/// Строка табло текущего раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRowDto {
    pub player_id: PlayerId,
    pub name: String,
    pub bid: u32,
    pub tricks: u32,
    pub bonus: Points,
    /// Очки за текущий раунд.
    pub round_score: Points,
    /// Итог по всем раундам.
    pub total: Points,
    /// Выбрано ли поле бонуса этого игрока.
    pub bonus_focused: bool,
}

/// Какие поля сейчас можно менять.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditableFieldsDto {
    pub bid: bool,
    pub tricks: bool,
    pub bonus: bool,
}

/// Табло текущего раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreboardDto {
    pub current_round: RoundNumber,
    pub total_rounds: RoundNumber,
    pub phase: RoundPhase,
    pub editable: EditableFieldsDto,
    pub rows: Vec<ScoreRowDto>,
}

/// Карта каталога для кнопки/настроек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub id: CardId,
    pub label: String,
    pub description: String,
    pub value: Points,
    pub group: CardGroup,
    /// "Base · +20 pts"
    pub caption: String,
}

/// Конфиг партии для селекторов раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigDto {
    pub total_rounds: RoundNumber,
    pub current_round: RoundNumber,
    pub phase: RoundPhase,
    pub edit_policy: EditPolicy,
    /// Варианты для селектора текущего раунда: 1..=total_rounds.
    pub round_options: Vec<RoundNumber>,
    /// Варианты длины партии: 5..=14.
    pub total_round_options: Vec<RoundNumber>,
    pub player_count: usize,
    pub can_add_player: bool,
    pub can_remove_player: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Состояние изменилось, вот актуальное табло.
    Updated(ScoreboardDto),

    /// Добавлен игрок.
    PlayerAdded {
        player_id: PlayerId,
        scoreboard: ScoreboardDto,
    },

    /// Сменился выбранный бонус (состояние партии не менялось).
    FocusChanged { target: Option<PlayerId> },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Scoreboard(ScoreboardDto),
    Standings(Vec<Standing>),
    Cards(Vec<CardDto>),
    Config(ConfigDto),
}
