// tests/domain_test.rs
//
// Доменные типы: записи раундов, игроки, каталог, конфиг партии, политика редактирования.

use skull_king_engine::config::{ConfigError, EditPolicy};
use skull_king_engine::domain::{
    default_cards, CardGroup, GameConfig, GameState, Player, PlayerId, RoundPhase, RoundScore,
    PLACEHOLDER_NAME,
};

#[test]
fn score_for_does_not_create_entries() {
    let p = Player::new(PlayerId::new("a"), "Anne");
    assert_eq!(p.score_for(4), RoundScore::ZERO);
    assert!(p.scores.is_empty());
}

#[test]
fn ensure_score_creates_zero_entry_once() {
    let mut p = Player::new(PlayerId::new("a"), "Anne");
    p.ensure_score(2).bid = 1;
    p.ensure_score(2).tricks = 1;
    assert_eq!(p.scores.len(), 1);
    assert_eq!(p.score_for(2), RoundScore::new(1, 1, 0));
}

#[test]
fn nil_bid_is_a_zero_bid() {
    assert!(RoundScore::ZERO.is_nil_bid());
    assert!(RoundScore::new(0, 3, 20).is_nil_bid());
    assert!(!RoundScore::new(1, 0, 0).is_nil_bid());
}

#[test]
fn ensure_current_round_touches_every_player_and_keeps_existing_entries() {
    let mut anne = Player::new(PlayerId::new("a"), "Anne");
    anne.ensure_score(3).bid = 2;
    let barbe = Player::new(PlayerId::new("b"), "Barbe");

    let mut state = GameState::new(vec![anne, barbe]);
    state.config.current_round = 3;
    state.ensure_current_round();
    state.ensure_current_round();

    assert_eq!(state.players[0].scores.len(), 1);
    assert_eq!(state.players[0].score_for(3), RoundScore::new(2, 0, 0));
    assert_eq!(state.players[1].scores.get(&3), Some(&RoundScore::ZERO));
}

#[test]
fn blank_names_become_placeholder() {
    let p = Player::new(PlayerId::new("a"), "");
    assert_eq!(p.name, PLACEHOLDER_NAME);

    let mut p = Player::new(PlayerId::new("b"), "Barbe");
    p.rename("  ");
    assert_eq!(p.name, PLACEHOLDER_NAME);
}

#[test]
fn config_clamped_keeps_current_round_inside_total() {
    let cfg = GameConfig::clamped(3, 0, RoundPhase::Results);
    assert_eq!(cfg.total_rounds, 5);
    assert_eq!(cfg.current_round, 1);
    assert_eq!(cfg.phase, RoundPhase::Results);

    let cfg = GameConfig::clamped(12, 13, RoundPhase::Bids);
    assert_eq!(cfg.current_round, 12);
    assert!(cfg.is_last_round());
}

#[test]
fn phase_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&RoundPhase::Bids).unwrap(), "\"bids\"");
    assert_eq!(serde_json::to_string(&RoundPhase::Results).unwrap(), "\"results\"");
    assert_eq!(RoundPhase::Bids.toggled(), RoundPhase::Results);
}

#[test]
fn default_catalog_has_base_and_extension_cards() {
    let cards = default_cards();
    let base = cards.iter().filter(|c| c.group == CardGroup::Base).count();
    let ext = cards.iter().filter(|c| c.group == CardGroup::Extension).count();
    assert_eq!((base, ext), (5, 4));

    let kraken = cards.iter().find(|c| c.id == "kraken").unwrap();
    assert_eq!(kraken.value, 0);
    assert_eq!(kraken.signed_value(), "+0");
}

#[test]
fn card_group_labels_round_trip() {
    for group in [CardGroup::Base, CardGroup::Extension] {
        assert_eq!(CardGroup::from_label(group.label()), Some(group));
    }
    assert_eq!(CardGroup::from_label("base"), None);
}

#[test]
fn edit_policy_parses_known_names() {
    assert_eq!("phase-gated".parse::<EditPolicy>(), Ok(EditPolicy::PhaseGated));
    assert_eq!("Always".parse::<EditPolicy>(), Ok(EditPolicy::AlwaysEditable));
    assert_eq!(
        "sometimes".parse::<EditPolicy>(),
        Err(ConfigError::UnknownEditPolicy("sometimes".into()))
    );
    assert_eq!(EditPolicy::AlwaysEditable.to_string(), "always-editable");
}
