use serde::{Deserialize, Serialize};

use crate::domain::card::{default_cards, BonusCard};
use crate::domain::player::Player;
use crate::domain::{PlayerId, RoundNumber};

/// Минимум игроков за столом.
pub const MIN_PLAYERS: usize = 2;
/// Максимум игроков за столом.
pub const MAX_PLAYERS: usize = 8;

/// Допустимое количество раундов в партии.
pub const MIN_TOTAL_ROUNDS: RoundNumber = 5;
pub const MAX_TOTAL_ROUNDS: RoundNumber = 14;
pub const DEFAULT_TOTAL_ROUNDS: RoundNumber = 10;

/// Имена стартового экипажа.
pub const DEFAULT_ROSTER: [&str; 3] = ["Capitaine Anne", "Barbe Noire", "Mousse Jack"];

/// Фаза текущего раунда: сначала заявки, потом результаты.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    #[default]
    Bids,
    Results,
}

impl RoundPhase {
    pub fn toggled(self) -> Self {
        match self {
            RoundPhase::Bids => RoundPhase::Results,
            RoundPhase::Results => RoundPhase::Bids,
        }
    }
}

/// Конфиг партии: сколько раундов, какой сейчас, какая фаза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Всего раундов (5..=14).
    pub total_rounds: RoundNumber,
    /// Текущий раунд (1..=total_rounds).
    pub current_round: RoundNumber,
    pub phase: RoundPhase,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            current_round: 1,
            phase: RoundPhase::Bids,
        }
    }
}

impl GameConfig {
    /// Собрать конфиг с приведением значений к допустимым диапазонам.
    pub fn clamped(total_rounds: RoundNumber, current_round: RoundNumber, phase: RoundPhase) -> Self {
        let total_rounds = total_rounds.clamp(MIN_TOTAL_ROUNDS, MAX_TOTAL_ROUNDS);
        Self {
            total_rounds,
            current_round: current_round.clamp(1, total_rounds),
            phase,
        }
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round >= self.total_rounds
    }
}

/// Полное состояние партии. Это единица сохранения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub players: Vec<Player>,
    pub cards: Vec<BonusCard>,
    pub config: GameConfig,
}

impl GameState {
    /// Новая партия с заданными игроками, стандартным каталогом и конфигом по умолчанию.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            cards: default_cards(),
            config: GameConfig::default(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    pub fn card(&self, id: &str) -> Option<&BonusCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: &str) -> Option<&mut BonusCard> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Текущий раунд показан на столе: у каждого игрока есть запись за него.
    pub fn ensure_current_round(&mut self) {
        let round = self.config.current_round;
        for p in &mut self.players {
            p.ensure_score(round);
        }
    }
}
