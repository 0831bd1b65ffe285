use crate::config::EngineConfig;
use crate::domain::{GameState, PlayerId, RoundPhase, MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::actions::{GameAction, ScoreField};
use crate::engine::errors::EngineError;

/// Проверка, можно ли применить действие к текущему состоянию.
///
/// Если здесь `Ok`, то `apply_action` уже не откажет.
pub fn validate_action(
    state: &GameState,
    action: &GameAction,
    config: &EngineConfig,
) -> Result<(), EngineError> {
    if let Some(field) = action.score_field() {
        check_phase(field, state.config.phase, config)?;
    }

    match action {
        GameAction::AddPlayer { id } => {
            if state.player_count() >= MAX_PLAYERS {
                return Err(EngineError::TooManyPlayers { max: MAX_PLAYERS });
            }
            if state.player(id).is_some() {
                return Err(EngineError::DuplicatePlayer(id.clone()));
            }
            Ok(())
        }

        GameAction::RemovePlayer { player_id } => {
            require_player(state, player_id)?;
            if state.player_count() <= MIN_PLAYERS {
                return Err(EngineError::TooFewPlayers { min: MIN_PLAYERS });
            }
            Ok(())
        }

        GameAction::RenamePlayer { player_id, .. }
        | GameAction::SetBid { player_id, .. }
        | GameAction::SetTricks { player_id, .. }
        | GameAction::SetBonus { player_id, .. } => require_player(state, player_id),

        GameAction::ApplyBonusCard { card_id, target } => {
            let player_id = target.as_ref().ok_or(EngineError::NoActiveBonusTarget)?;
            if state.card(card_id).is_none() {
                return Err(EngineError::CardNotFound(card_id.clone()));
            }
            require_player(state, player_id)
        }

        GameAction::SetCardValue { card_id, .. } => {
            if state.card(card_id).is_none() {
                return Err(EngineError::CardNotFound(card_id.clone()));
            }
            Ok(())
        }

        GameAction::CompleteRound => {
            if config.is_phase_gated() && state.config.phase != RoundPhase::Results {
                return Err(EngineError::NotInResultsPhase);
            }
            if state.config.is_last_round() {
                return Err(EngineError::LastRoundReached);
            }
            Ok(())
        }

        GameAction::SetTotalRounds { .. }
        | GameAction::SelectRound { .. }
        | GameAction::TogglePhase
        | GameAction::ResetGame => Ok(()),
    }
}

/// Можно ли менять поле в текущей фазе.
fn check_phase(
    field: ScoreField,
    phase: RoundPhase,
    config: &EngineConfig,
) -> Result<(), EngineError> {
    if config.is_phase_gated() && field.editable_in() != phase {
        return Err(EngineError::PhaseLocked { field, phase });
    }
    Ok(())
}

fn require_player(state: &GameState, player_id: &PlayerId) -> Result<(), EngineError> {
    state
        .player(player_id)
        .map(|_| ())
        .ok_or_else(|| EngineError::PlayerNotFound(player_id.clone()))
}
