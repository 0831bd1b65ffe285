use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::player::Player;
use crate::domain::{GameState, RoundPhase, DEFAULT_ROSTER, MAX_TOTAL_ROUNDS, MIN_TOTAL_ROUNDS};
use crate::engine::actions::GameAction;
use crate::engine::errors::EngineError;
use crate::engine::input::clamp_round_entry;
use crate::engine::validation::validate_action;
use crate::engine::IdSource;

/// Новая партия: стандартный экипаж из трёх игроков, каталог по умолчанию, раунд 1 из 10.
///
/// Записи за раунд 1 создаются сразу, как только раунд показан.
pub fn new_game<I: IdSource>(ids: &mut I) -> GameState {
    let players = DEFAULT_ROSTER
        .iter()
        .map(|name| Player::new(ids.next_player_id(), *name))
        .collect();
    let mut state = GameState::new(players);
    state.ensure_current_round();
    state
}

/// Применить действие к состоянию.
///
/// Исходное состояние не меняется: при успехе возвращается новое,
/// при ошибке вызывающий код продолжает работать со старым.
pub fn apply_action(
    state: &GameState,
    action: &GameAction,
    config: &EngineConfig,
) -> Result<GameState, EngineError> {
    validate_action(state, action, config)?;

    let mut next = state.clone();
    mutate(&mut next, action);
    // Новый раунд, новый игрок, сброс: текущий раунд сразу попадает в итоги.
    next.ensure_current_round();

    debug!(
        ?action,
        round = next.config.current_round,
        phase = ?next.config.phase,
        "action applied"
    );
    Ok(next)
}

/// Сама мутация. Вызывается только после `validate_action`,
/// поэтому отсутствующий игрок/карта здесь просто пропускается.
fn mutate(state: &mut GameState, action: &GameAction) {
    let round = state.config.current_round;

    match action {
        GameAction::AddPlayer { id } => {
            let name = format!("Pirate {}", state.player_count() + 1);
            state.players.push(Player::new(id.clone(), name));
        }

        GameAction::RemovePlayer { player_id } => {
            state.players.retain(|p| &p.id != player_id);
        }

        GameAction::RenamePlayer { player_id, name } => {
            if let Some(p) = state.player_mut(player_id) {
                p.rename(name.clone());
            }
        }

        GameAction::SetBid { player_id, bid } => {
            if let Some(p) = state.player_mut(player_id) {
                p.ensure_score(round).bid = clamp_round_entry(*bid, round);
            }
        }

        GameAction::SetTricks { player_id, tricks } => {
            if let Some(p) = state.player_mut(player_id) {
                p.ensure_score(round).tricks = clamp_round_entry(*tricks, round);
            }
        }

        GameAction::SetBonus { player_id, bonus } => {
            if let Some(p) = state.player_mut(player_id) {
                p.ensure_score(round).bonus = *bonus;
            }
        }

        GameAction::ApplyBonusCard { card_id, target } => {
            let value = state.card(card_id).map(|c| c.value).unwrap_or(0);
            if let Some(p) = target.as_ref().and_then(|id| state.player_mut(id)) {
                let entry = p.ensure_score(round);
                entry.bonus = entry.bonus.saturating_add(value);
            }
        }

        GameAction::SetCardValue { card_id, value } => {
            if let Some(card) = state.card_mut(card_id) {
                card.value = *value;
            }
        }

        GameAction::SetTotalRounds { total } => {
            let total = (*total).clamp(MIN_TOTAL_ROUNDS, MAX_TOTAL_ROUNDS);
            state.config.total_rounds = total;
            if state.config.current_round > total {
                state.config.current_round = total;
                state.config.phase = RoundPhase::Bids;
            }
        }

        GameAction::SelectRound { round } => {
            state.config.current_round = (*round).clamp(1, state.config.total_rounds);
            state.config.phase = RoundPhase::Bids;
        }

        GameAction::TogglePhase => {
            state.config.phase = state.config.phase.toggled();
        }

        GameAction::CompleteRound => {
            state.config.current_round += 1;
            state.config.phase = RoundPhase::Bids;
        }

        GameAction::ResetGame => {
            for p in &mut state.players {
                p.clear_scores();
            }
            state.config.current_round = 1;
            state.config.phase = RoundPhase::Bids;
        }
    }
}
