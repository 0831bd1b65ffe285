use tracing::{debug, info};

use crate::api::{
    build_scoreboard, command_to_action, run_query, ApiError, Command, CommandResponse, Query,
    QueryResponse,
};
use crate::config::EngineConfig;
use crate::domain::{GameState, PlayerId};
use crate::engine::{apply_action, new_game, EngineError, GameAction, IdSource};
use crate::infra::persistence::{KeyValueBackend, StateStore};

/// Сессия счётчика: владеет состоянием партии и управляет его жизненным циклом.
///
/// На каждую команду: привести ввод -> применить действие -> сохранить снапшот.
/// Отклонённая команда ничего не меняет и ничего не пишет.
/// Выбранное поле бонуса живёт только в сессии и не сохраняется.
pub struct Scorekeeper<B: KeyValueBackend, I: IdSource> {
    state: GameState,
    store: StateStore<B>,
    ids: I,
    engine: EngineConfig,
    bonus_target: Option<PlayerId>,
}

impl<B: KeyValueBackend, I: IdSource> Scorekeeper<B, I> {
    /// Открыть сессию: поднять сохранённую партию или начать новую.
    pub fn open(store: StateStore<B>, mut ids: I, engine: EngineConfig) -> Self {
        let state = match store.load() {
            Some(state) => state,
            None => {
                info!(key = store.key(), "no usable saved game, starting a new one");
                new_game(&mut ids)
            }
        };

        Self {
            state,
            store,
            ids,
            engine,
            bonus_target: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &StateStore<B> {
        &self.store
    }

    pub fn into_store(self) -> StateStore<B> {
        self.store
    }

    pub fn bonus_target(&self) -> Option<&PlayerId> {
        self.bonus_target.as_ref()
    }

    /// Выполнить команду.
    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        if !command.is_mutation() {
            return self.change_focus(&command);
        }

        let ids = &mut self.ids;
        let action = command_to_action(
            &command,
            self.state.config.current_round,
            || ids.next_player_id(),
            self.bonus_target.as_ref(),
        );

        let Some(action) = action else {
            return Ok(CommandResponse::FocusChanged {
                target: self.bonus_target.clone(),
            });
        };

        self.apply(&action).map_err(|err| {
            debug!(?action, %err, "action rejected");
            ApiError::from(err)
        })?;

        let scoreboard = build_scoreboard(&self.state, &self.engine, self.bonus_target.as_ref());
        match action {
            GameAction::AddPlayer { id } => Ok(CommandResponse::PlayerAdded {
                player_id: id,
                scoreboard,
            }),
            _ => Ok(CommandResponse::Updated(scoreboard)),
        }
    }

    /// Команды фокуса: партия не меняется, снапшот не пишется.
    fn change_focus(&mut self, command: &Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::FocusBonus { player_id } => {
                if self.state.player(player_id).is_none() {
                    return Err(ApiError::PlayerNotFound(player_id.clone()));
                }
                self.bonus_target = Some(player_id.clone());
            }
            Command::ClearBonusFocus => self.bonus_target = None,
            _ => {}
        }
        Ok(CommandResponse::FocusChanged {
            target: self.bonus_target.clone(),
        })
    }

    /// Запрос только на чтение.
    pub fn query(&self, query: &Query) -> QueryResponse {
        run_query(query, &self.state, &self.engine, self.bonus_target.as_ref())
    }

    /// Применить уже типизированное действие и сохранить результат.
    pub fn apply(&mut self, action: &GameAction) -> Result<(), EngineError> {
        let next = apply_action(&self.state, action, &self.engine)?;
        self.state = next;

        // Игрок ушёл – его поле бонуса больше не цель.
        if let Some(target) = &self.bonus_target {
            if self.state.player(target).is_none() {
                self.bonus_target = None;
            }
        }

        self.store.save(&self.state);
        Ok(())
    }
}
