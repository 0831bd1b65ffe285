//! Правило подсчёта очков за раунд и агрегаты по игрокам.
//!
//! Арифметика насыщающая: функция тотальна и не паникует даже на
//! экстремальных бонусах.

use serde::{Deserialize, Serialize};

use crate::domain::player::{Player, RoundScore};
use crate::domain::{GameState, PlayerId, Points, RoundNumber};

/// Очки за взятую заявку: за каждую взятку.
const EXACT_BID_POINTS_PER_TRICK: Points = 20;
/// Штраф за каждую взятку мимо заявки.
const MISSED_BID_PENALTY_PER_TRICK: Points = 10;
/// Ставка nil-бида: номер раунда * 10.
const NIL_BID_STAKE_PER_ROUND: Points = 10;

/// Очки одного игрока за раунд `round_number`.
///
/// - bid == 0: ставка `N * 10`; при нуле взяток `+ставка`, иначе `-ставка`;
/// - bid == tricks: `bid * 20`;
/// - иначе: `-|bid - tricks| * 10`.
///
/// Бонус прибавляется во всех трёх случаях.
pub fn calculate_round_score(score: &RoundScore, round_number: RoundNumber) -> Points {
    let bid = Points::from(score.bid);
    let tricks = Points::from(score.tricks);

    let base = if score.is_nil_bid() {
        let stake = Points::from(round_number).saturating_mul(NIL_BID_STAKE_PER_ROUND);
        if tricks == 0 {
            stake
        } else {
            -stake
        }
    } else if bid == tricks {
        bid.saturating_mul(EXACT_BID_POINTS_PER_TRICK)
    } else {
        -(bid - tricks).abs().saturating_mul(MISSED_BID_PENALTY_PER_TRICK)
    };

    base.saturating_add(score.bonus)
}

/// Сумма очков по произвольному набору записей `(раунд, запись)`.
/// Порядок обхода не важен.
pub fn total_score_of<'a, I>(entries: I) -> Points
where
    I: IntoIterator<Item = (RoundNumber, &'a RoundScore)>,
{
    entries
        .into_iter()
        .map(|(round, score)| calculate_round_score(score, round))
        .fold(0, Points::saturating_add)
}

/// Итог игрока по всем записанным раундам.
pub fn total_score(player: &Player) -> Points {
    total_score_of(player.scores.iter().map(|(round, score)| (*round, score)))
}

/// Строка таблицы лидеров.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    /// Место (1-based). Игроки с равным счётом делят место.
    pub rank: u32,
    pub player_id: PlayerId,
    pub name: String,
    pub total: Points,
}

/// Таблица лидеров: по убыванию итога, при равенстве – в порядке экипажа.
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut rows: Vec<(PlayerId, String, Points)> = state
        .players
        .iter()
        .map(|p| (p.id.clone(), p.name.clone(), total_score(p)))
        .collect();

    // sort_by стабильный, порядок экипажа сохраняется для равных итогов.
    rows.sort_by(|a, b| b.2.cmp(&a.2));

    let totals: Vec<Points> = rows.iter().map(|r| r.2).collect();

    rows.into_iter()
        .map(|(player_id, name, total)| {
            let better = totals.iter().filter(|t| **t > total).count();
            Standing {
                rank: better as u32 + 1,
                player_id,
                name,
                total,
            }
        })
        .collect()
}
