// tests/engine_actions_tests.rs
//
// Переходы состояния через apply_action:
//  - лимиты экипажа (2..=8);
//  - зажим заявок/взяток в [0, N];
//  - фазы при PhaseGated и их отсутствие при AlwaysEditable;
//  - карты бонусов, длина партии, выбор/закрытие раунда, сброс;
//  - исходное состояние не меняется ни при успехе, ни при ошибке.

use skull_king_engine::config::{EditPolicy, EngineConfig};
use skull_king_engine::domain::{
    GameState, PlayerId, RoundPhase, RoundScore, MAX_PLAYERS, PLACEHOLDER_NAME,
};
use skull_king_engine::engine::{
    apply_action, new_game, total_score, EngineError, GameAction, ScoreField,
};
use skull_king_engine::infra::SequentialIds;

// ---------- helpers ----------

fn gated() -> EngineConfig {
    EngineConfig::new(EditPolicy::PhaseGated)
}

fn open() -> EngineConfig {
    EngineConfig::new(EditPolicy::AlwaysEditable)
}

fn fresh() -> (GameState, SequentialIds) {
    let mut ids = SequentialIds::new();
    let state = new_game(&mut ids);
    (state, ids)
}

fn pid(n: u32) -> PlayerId {
    PlayerId(format!("player-{}", n))
}

fn apply(state: &GameState, action: GameAction, cfg: &EngineConfig) -> GameState {
    apply_action(state, &action, cfg).expect("action should be accepted")
}

fn to_results(state: &GameState) -> GameState {
    apply(state, GameAction::TogglePhase, &gated())
}

fn goto_round(state: &GameState, round: u32) -> GameState {
    apply(state, GameAction::SelectRound { round }, &gated())
}

// ---------- новая партия ----------

#[test]
fn new_game_has_default_crew_cards_and_config() {
    let (state, _) = fresh();

    let names: Vec<&str> = state.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Capitaine Anne", "Barbe Noire", "Mousse Jack"]);
    assert_eq!(state.players[0].id, pid(1));
    // раунд 1 уже на столе: у всех нулевая запись
    assert!(state
        .players
        .iter()
        .all(|p| p.scores.len() == 1 && p.scores.get(&1) == Some(&RoundScore::ZERO)));

    assert_eq!(state.cards.len(), 9);
    assert_eq!(state.card("mermaid").map(|c| c.value), Some(50));

    assert_eq!(state.config.total_rounds, 10);
    assert_eq!(state.config.current_round, 1);
    assert_eq!(state.config.phase, RoundPhase::Bids);
}

// ---------- экипаж ----------

#[test]
fn add_player_appends_numbered_pirate() {
    let (state, _) = fresh();
    let next = apply(&state, GameAction::AddPlayer { id: pid(42) }, &gated());

    assert_eq!(next.player_count(), 4);
    let added = next.player(&pid(42)).expect("added player");
    assert_eq!(added.name, "Pirate 4");
    assert_eq!(added.scores.len(), 1);
    assert_eq!(added.scores.get(&1), Some(&RoundScore::ZERO));
}

#[test]
fn ninth_player_is_rejected_and_count_stays_at_eight() {
    let (mut state, _) = fresh();
    for n in 100..105 {
        state = apply(&state, GameAction::AddPlayer { id: pid(n) }, &gated());
    }
    assert_eq!(state.player_count(), MAX_PLAYERS);

    let err = apply_action(&state, &GameAction::AddPlayer { id: pid(999) }, &gated()).unwrap_err();
    assert_eq!(err, EngineError::TooManyPlayers { max: 8 });
    assert_eq!(state.player_count(), 8);
}

#[test]
fn duplicate_player_id_is_rejected() {
    let (state, _) = fresh();
    let err = apply_action(&state, &GameAction::AddPlayer { id: pid(1) }, &gated()).unwrap_err();
    assert_eq!(err, EngineError::DuplicatePlayer(pid(1)));
}

#[test]
fn removing_down_to_one_player_is_rejected() {
    let (state, _) = fresh();
    let state = apply(&state, GameAction::RemovePlayer { player_id: pid(3) }, &gated());
    assert_eq!(state.player_count(), 2);

    let err =
        apply_action(&state, &GameAction::RemovePlayer { player_id: pid(2) }, &gated()).unwrap_err();
    assert_eq!(err, EngineError::TooFewPlayers { min: 2 });
    assert_eq!(state.player_count(), 2);
}

#[test]
fn removing_unknown_player_is_reported() {
    let (state, _) = fresh();
    let err =
        apply_action(&state, &GameAction::RemovePlayer { player_id: pid(77) }, &gated()).unwrap_err();
    assert_eq!(err, EngineError::PlayerNotFound(pid(77)));
}

#[test]
fn clearing_name_falls_back_to_placeholder() {
    let (state, _) = fresh();
    let renamed = apply(
        &state,
        GameAction::RenamePlayer { player_id: pid(1), name: "Long John".into() },
        &gated(),
    );
    assert_eq!(renamed.players[0].name, "Long John");

    let cleared = apply(
        &renamed,
        GameAction::RenamePlayer { player_id: pid(1), name: "   ".into() },
        &gated(),
    );
    assert_eq!(cleared.players[0].name, PLACEHOLDER_NAME);
}

// ---------- заявки и взятки ----------

#[test]
fn bid_is_clamped_to_current_round() {
    let (state, _) = fresh();
    let state = goto_round(&state, 3);

    let high = apply(&state, GameAction::SetBid { player_id: pid(1), bid: 15 }, &gated());
    assert_eq!(high.players[0].score_for(3).bid, 3);

    let low = apply(&state, GameAction::SetBid { player_id: pid(1), bid: -5 }, &gated());
    assert_eq!(low.players[0].score_for(3).bid, 0);
}

#[test]
fn selected_round_gets_zero_entries_for_every_player() {
    let (state, _) = fresh();
    let state = goto_round(&state, 4);
    for p in &state.players {
        let rounds: Vec<u32> = p.scores.keys().copied().collect();
        assert_eq!(rounds, vec![1, 4]);
        assert_eq!(p.scores.get(&4), Some(&RoundScore::ZERO));
    }

    let state = apply(&state, GameAction::SetBid { player_id: pid(2), bid: 2 }, &gated());
    assert_eq!(state.player(&pid(2)).unwrap().score_for(4), RoundScore::new(2, 0, 0));
    assert_eq!(state.player(&pid(1)).unwrap().score_for(4), RoundScore::ZERO);
}

#[test]
fn shown_rounds_count_towards_totals() {
    let (state, _) = fresh();
    // nil-бид по умолчанию взят: +10 за раунд 1
    assert!(state.players.iter().all(|p| total_score(p) == 10));

    let state = goto_round(&state, 3);
    assert!(state.players.iter().all(|p| total_score(p) == 10 + 30));
}

#[test]
fn completing_or_clamping_a_round_creates_its_entries() {
    let (state, _) = fresh();
    let next = apply(&to_results(&state), GameAction::CompleteRound, &gated());
    assert!(next.players.iter().all(|p| p.scores.get(&2) == Some(&RoundScore::ZERO)));

    let far = goto_round(&state, 9);
    let shrunk = apply(&far, GameAction::SetTotalRounds { total: 6 }, &gated());
    assert!(shrunk.players.iter().all(|p| p.scores.contains_key(&6)));
}

#[test]
fn tricks_and_bonus_are_set_in_results_phase() {
    let (state, _) = fresh();
    let state = goto_round(&state, 5);
    let state = apply(&state, GameAction::SetBid { player_id: pid(1), bid: 3 }, &gated());
    let state = to_results(&state);
    let state = apply(&state, GameAction::SetTricks { player_id: pid(1), tricks: 9 }, &gated());
    let state = apply(&state, GameAction::SetBonus { player_id: pid(1), bonus: -250 }, &gated());

    assert_eq!(state.players[0].score_for(5), RoundScore::new(3, 5, -250));
}

// ---------- фазы ----------

#[test]
fn phase_gated_locks_fields_outside_their_phase() {
    let (state, _) = fresh();

    let err = apply_action(&state, &GameAction::SetTricks { player_id: pid(1), tricks: 1 }, &gated())
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::PhaseLocked { field: ScoreField::Tricks, phase: RoundPhase::Bids }
    );

    let err = apply_action(&state, &GameAction::SetBonus { player_id: pid(1), bonus: 20 }, &gated())
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::PhaseLocked { field: ScoreField::Bonus, phase: RoundPhase::Bids }
    );

    let results = to_results(&state);
    let err = apply_action(&results, &GameAction::SetBid { player_id: pid(1), bid: 1 }, &gated())
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::PhaseLocked { field: ScoreField::Bid, phase: RoundPhase::Results }
    );
}

#[test]
fn always_editable_ignores_phase() {
    let (state, _) = fresh();
    let state = apply(&state, GameAction::SetTricks { player_id: pid(1), tricks: 1 }, &open());
    let state = apply(&state, GameAction::SetBonus { player_id: pid(1), bonus: 20 }, &open());
    let state = apply(&state, GameAction::SetBid { player_id: pid(1), bid: 1 }, &open());

    assert_eq!(state.config.phase, RoundPhase::Bids);
    assert_eq!(state.players[0].score_for(1), RoundScore::new(1, 1, 20));
}

#[test]
fn toggle_phase_flips_back_and_forth() {
    let (state, _) = fresh();
    let once = apply(&state, GameAction::TogglePhase, &gated());
    let twice = apply(&once, GameAction::TogglePhase, &gated());
    assert_eq!(once.config.phase, RoundPhase::Results);
    assert_eq!(twice.config.phase, RoundPhase::Bids);
}

// ---------- карты ----------

#[test]
fn bonus_card_adds_its_value_to_target_bonus() {
    let (state, _) = fresh();
    let state = to_results(&state);
    let state = apply(&state, GameAction::SetBonus { player_id: pid(2), bonus: 5 }, &gated());

    let state = apply(
        &state,
        GameAction::ApplyBonusCard { card_id: "skull-king".into(), target: Some(pid(2)) },
        &gated(),
    );
    let state = apply(
        &state,
        GameAction::ApplyBonusCard { card_id: "pirate".into(), target: Some(pid(2)) },
        &gated(),
    );

    assert_eq!(state.player(&pid(2)).unwrap().score_for(1).bonus, 5 + 30 + 20);
}

#[test]
fn bonus_card_without_target_is_rejected_in_any_phase() {
    let (state, _) = fresh();
    let action = GameAction::ApplyBonusCard { card_id: "pirate".into(), target: None };

    assert_eq!(
        apply_action(&state, &action, &gated()).unwrap_err(),
        EngineError::NoActiveBonusTarget
    );
    assert_eq!(
        apply_action(&to_results(&state), &action, &gated()).unwrap_err(),
        EngineError::NoActiveBonusTarget
    );
    assert_eq!(apply_action(&state, &action, &open()).unwrap_err(), EngineError::NoActiveBonusTarget);
}

#[test]
fn bonus_card_is_not_locked_by_phase() {
    let (state, _) = fresh();
    assert_eq!(state.config.phase, RoundPhase::Bids);

    let state = apply(
        &state,
        GameAction::ApplyBonusCard { card_id: "mermaid".into(), target: Some(pid(1)) },
        &gated(),
    );
    assert_eq!(state.players[0].score_for(1).bonus, 50);
}

#[test]
fn unknown_card_is_rejected() {
    let (state, _) = fresh();
    let err = apply_action(
        &state,
        &GameAction::ApplyBonusCard { card_id: "leviathan".into(), target: Some(pid(1)) },
        &open(),
    )
    .unwrap_err();
    assert_eq!(err, EngineError::CardNotFound("leviathan".into()));
}

#[test]
fn edited_card_value_is_used_by_later_applications() {
    let (state, _) = fresh();
    let state = apply(
        &state,
        GameAction::SetCardValue { card_id: "kraken".into(), value: -15 },
        &gated(),
    );
    assert_eq!(state.card("kraken").map(|c| c.value), Some(-15));

    let state = apply(
        &state,
        GameAction::ApplyBonusCard { card_id: "kraken".into(), target: Some(pid(3)) },
        &open(),
    );
    assert_eq!(state.player(&pid(3)).unwrap().score_for(1).bonus, -15);
}

// ---------- раунды ----------

#[test]
fn shrinking_total_rounds_clamps_current_round() {
    let (state, _) = fresh();
    let state = goto_round(&state, 9);
    let state = to_results(&state);

    let state = apply(&state, GameAction::SetTotalRounds { total: 6 }, &gated());
    assert_eq!(state.config.total_rounds, 6);
    assert_eq!(state.config.current_round, 6);
    assert_eq!(state.config.phase, RoundPhase::Bids);
}

#[test]
fn total_rounds_is_clamped_to_five_through_fourteen() {
    let (state, _) = fresh();
    assert_eq!(apply(&state, GameAction::SetTotalRounds { total: 2 }, &gated()).config.total_rounds, 5);
    assert_eq!(apply(&state, GameAction::SetTotalRounds { total: 40 }, &gated()).config.total_rounds, 14);
}

#[test]
fn growing_total_rounds_keeps_current_round_and_phase() {
    let (state, _) = fresh();
    let state = goto_round(&state, 4);
    let state = to_results(&state);
    let state = apply(&state, GameAction::SetTotalRounds { total: 12 }, &gated());
    assert_eq!(state.config.current_round, 4);
    assert_eq!(state.config.phase, RoundPhase::Results);
}

#[test]
fn select_round_clamps_and_resets_phase() {
    let (state, _) = fresh();
    let state = to_results(&state);
    let state = apply(&state, GameAction::SelectRound { round: 50 }, &gated());
    assert_eq!(state.config.current_round, 10);
    assert_eq!(state.config.phase, RoundPhase::Bids);
}

#[test]
fn complete_round_requires_results_phase_when_gated() {
    let (state, _) = fresh();
    assert_eq!(
        apply_action(&state, &GameAction::CompleteRound, &gated()).unwrap_err(),
        EngineError::NotInResultsPhase
    );

    let next = apply(&to_results(&state), GameAction::CompleteRound, &gated());
    assert_eq!(next.config.current_round, 2);
    assert_eq!(next.config.phase, RoundPhase::Bids);

    // без фаз раунд закрывается сразу
    let next = apply(&state, GameAction::CompleteRound, &open());
    assert_eq!(next.config.current_round, 2);
}

#[test]
fn complete_round_stops_at_last_round() {
    let (state, _) = fresh();
    let state = goto_round(&state, 10);
    let err = apply_action(&to_results(&state), &GameAction::CompleteRound, &gated()).unwrap_err();
    assert_eq!(err, EngineError::LastRoundReached);
}

#[test]
fn reset_clears_scores_but_keeps_crew_and_cards() {
    let (state, _) = fresh();
    let state = apply(&state, GameAction::SetCardValue { card_id: "loot".into(), value: 99 }, &gated());
    let state = goto_round(&state, 6);
    let state = apply(&state, GameAction::SetBid { player_id: pid(1), bid: 2 }, &gated());
    let state = to_results(&state);

    let reset = apply(&state, GameAction::ResetGame, &gated());
    assert!(reset
        .players
        .iter()
        .all(|p| p.scores.keys().copied().collect::<Vec<_>>() == vec![1]));
    assert!(reset.players.iter().all(|p| p.score_for(1) == RoundScore::ZERO));
    assert_eq!(reset.player_count(), 3);
    assert_eq!(reset.card("loot").map(|c| c.value), Some(99));
    assert_eq!(reset.config.current_round, 1);
    assert_eq!(reset.config.phase, RoundPhase::Bids);
    assert_eq!(reset.config.total_rounds, 10);
}

// ---------- чистота ----------

#[test]
fn apply_action_never_touches_the_input_state() {
    let (state, _) = fresh();
    let before = state.clone();

    let _ = apply(&state, GameAction::SetBid { player_id: pid(1), bid: 1 }, &gated());
    let _ = apply_action(&state, &GameAction::SetTricks { player_id: pid(1), tricks: 1 }, &gated());
    let _ = apply_action(&state, &GameAction::RemovePlayer { player_id: pid(99) }, &gated());

    assert_eq!(state, before);
}
