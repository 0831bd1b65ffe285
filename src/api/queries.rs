use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::card::BonusCard;
use crate::domain::{GameState, PlayerId, RoundPhase, MAX_PLAYERS, MAX_TOTAL_ROUNDS, MIN_PLAYERS, MIN_TOTAL_ROUNDS};
use crate::engine::{calculate_round_score, standings, total_score, ScoreField};

use super::dto::{CardDto, ConfigDto, EditableFieldsDto, QueryResponse, ScoreRowDto, ScoreboardDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Табло текущего раунда.
    Scoreboard,

    /// Таблица лидеров по итогам.
    Standings,

    /// Каталог бонусных карт.
    Cards,

    /// Конфиг партии.
    Config,
}

/// Выполнить запрос над состоянием.
pub fn run_query(
    query: &Query,
    state: &GameState,
    engine: &EngineConfig,
    bonus_target: Option<&PlayerId>,
) -> QueryResponse {
    match query {
        Query::Scoreboard => QueryResponse::Scoreboard(build_scoreboard(state, engine, bonus_target)),
        Query::Standings => QueryResponse::Standings(standings(state)),
        Query::Cards => QueryResponse::Cards(state.cards.iter().map(build_card_dto).collect()),
        Query::Config => QueryResponse::Config(build_config(state, engine)),
    }
}

/// Сформировать табло текущего раунда.
///
/// Отсутствующие записи показываются нулями, состояние не трогаем.
pub fn build_scoreboard(
    state: &GameState,
    engine: &EngineConfig,
    bonus_target: Option<&PlayerId>,
) -> ScoreboardDto {
    let round = state.config.current_round;

    let rows = state
        .players
        .iter()
        .map(|p| {
            let score = p.score_for(round);
            ScoreRowDto {
                player_id: p.id.clone(),
                name: p.name.clone(),
                bid: score.bid,
                tricks: score.tricks,
                bonus: score.bonus,
                round_score: calculate_round_score(&score, round),
                total: total_score(p),
                bonus_focused: bonus_target == Some(&p.id),
            }
        })
        .collect();

    ScoreboardDto {
        current_round: round,
        total_rounds: state.config.total_rounds,
        phase: state.config.phase,
        editable: editable_fields(state.config.phase, engine),
        rows,
    }
}

/// Какие поля открыты при данной фазе и политике.
pub fn editable_fields(phase: RoundPhase, engine: &EngineConfig) -> EditableFieldsDto {
    let open = |field: ScoreField| !engine.is_phase_gated() || field.editable_in() == phase;
    EditableFieldsDto {
        bid: open(ScoreField::Bid),
        tricks: open(ScoreField::Tricks),
        bonus: open(ScoreField::Bonus),
    }
}

pub fn build_card_dto(card: &BonusCard) -> CardDto {
    CardDto {
        id: card.id.clone(),
        label: card.label.clone(),
        description: card.description.clone(),
        value: card.value,
        group: card.group,
        caption: format!("{} · {} pts", card.group.label(), card.signed_value()),
    }
}

pub fn build_config(state: &GameState, engine: &EngineConfig) -> ConfigDto {
    let count = state.player_count();
    ConfigDto {
        total_rounds: state.config.total_rounds,
        current_round: state.config.current_round,
        phase: state.config.phase,
        edit_policy: engine.edit_policy,
        round_options: (1..=state.config.total_rounds).collect(),
        total_round_options: (MIN_TOTAL_ROUNDS..=MAX_TOTAL_ROUNDS).collect(),
        player_count: count,
        can_add_player: count < MAX_PLAYERS,
        can_remove_player: count > MIN_PLAYERS,
    }
}
