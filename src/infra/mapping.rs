use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::card::{BonusCard, CardGroup};
use crate::domain::player::{normalize_name, Player, RoundScore};
use crate::domain::{
    GameConfig, GameState, PlayerId, RoundNumber, RoundPhase, DEFAULT_TOTAL_ROUNDS,
};
use crate::engine::input::clamp_round_entry;
use crate::infra::snapshot::{PersistedCard, PersistedPlayer, PersistedRoundScore, PersistedState};

/// Маппинг фазы между форматом сохранения и domain.
pub fn phase_from_persisted(raw: Option<&str>) -> RoundPhase {
    match raw {
        Some("results") => RoundPhase::Results,
        _ => RoundPhase::Bids,
    }
}

pub fn phase_to_persisted(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Bids => "bids",
        RoundPhase::Results => "results",
    }
}

/// Номер раунда из ключа словаря очков. Не положительное целое -> None.
pub fn round_from_key(key: &str) -> Option<RoundNumber> {
    key.trim().parse::<RoundNumber>().ok().filter(|r| *r > 0)
}

/// Снапшот -> domain. Диапазоны приводятся, битые ключи раундов отбрасываются,
/// у каждого игрока появляется запись за текущий раунд.
pub fn state_from_persisted(persisted: PersistedState) -> GameState {
    let total_rounds = persisted
        .rounds
        .map(|r| r.clamp(0, i64::from(RoundNumber::MAX)) as RoundNumber)
        .unwrap_or(DEFAULT_TOTAL_ROUNDS);
    let current_round = persisted
        .current_round
        .map(|r| r.clamp(0, i64::from(RoundNumber::MAX)) as RoundNumber)
        .unwrap_or(1);
    let phase = phase_from_persisted(
        persisted
            .phase
            .as_deref()
            .or(persisted.round_phase.as_deref()),
    );

    let mut state = GameState {
        players: persisted.players.into_iter().map(player_from_persisted).collect(),
        cards: persisted.cards.into_iter().map(card_from_persisted).collect(),
        config: GameConfig::clamped(total_rounds, current_round, phase),
    };
    state.ensure_current_round();
    state
}

fn player_from_persisted(p: PersistedPlayer) -> Player {
    let mut scores = BTreeMap::new();

    for (key, entry) in p.scores {
        match round_from_key(&key) {
            Some(round) => {
                scores.insert(round, round_score_from_persisted(entry, round));
            }
            None => warn!(player = %p.id, key = %key, "dropping score entry with invalid round key"),
        }
    }

    Player {
        id: PlayerId(p.id),
        name: normalize_name(p.name),
        scores,
    }
}

fn round_score_from_persisted(entry: PersistedRoundScore, round: RoundNumber) -> RoundScore {
    RoundScore {
        bid: clamp_round_entry(entry.bid, round),
        tricks: clamp_round_entry(entry.tricks, round),
        bonus: entry.bonus,
    }
}

fn card_from_persisted(c: PersistedCard) -> BonusCard {
    BonusCard {
        id: c.id,
        label: c.label,
        description: c.description,
        value: c.value,
        group: CardGroup::from_label(&c.group).unwrap_or(CardGroup::Base),
    }
}

/// Domain -> снапшот.
pub fn persisted_from_state(state: &GameState) -> PersistedState {
    PersistedState {
        players: state.players.iter().map(player_to_persisted).collect(),
        rounds: Some(i64::from(state.config.total_rounds)),
        current_round: Some(i64::from(state.config.current_round)),
        phase: Some(phase_to_persisted(state.config.phase).to_string()),
        round_phase: None,
        cards: state.cards.iter().map(card_to_persisted).collect(),
    }
}

fn player_to_persisted(p: &Player) -> PersistedPlayer {
    PersistedPlayer {
        id: p.id.0.clone(),
        name: p.name.clone(),
        scores: p
            .scores
            .iter()
            .map(|(round, s)| {
                (
                    round.to_string(),
                    PersistedRoundScore {
                        bid: i64::from(s.bid),
                        tricks: i64::from(s.tricks),
                        bonus: s.bonus,
                    },
                )
            })
            .collect(),
    }
}

fn card_to_persisted(c: &BonusCard) -> PersistedCard {
    PersistedCard {
        id: c.id.clone(),
        label: c.label.clone(),
        description: c.description.clone(),
        value: c.value,
        group: c.group.label().to_string(),
    }
}
