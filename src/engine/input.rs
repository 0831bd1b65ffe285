//! Приведение текстового ввода к числам.
//!
//! Ввод пользователя недоверенный: всё нечисловое превращается в минимум
//! диапазона (заявки/взятки) или в 0 (бонусы), ошибок здесь не бывает.

use crate::domain::{Points, RoundNumber};

/// Ведущее целое число строки: пробелы, знак, цифры; хвост игнорируется.
///
/// `"12abc"` -> 12, `" -5"` -> -5, `"3.9"` -> 3, `"abc"` -> None.
/// Слишком длинные числа насыщаются до границ i64.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen.then_some(value)
}

/// Разобрать ведущее целое и зажать в [min, max]. Мусор -> min.
pub fn clamp_number(raw: &str, min: i64, max: i64) -> i64 {
    match parse_leading_int(raw) {
        Some(v) => v.clamp(min, max.max(min)),
        None => min,
    }
}

/// Заявка или взятки для раунда `round`: [0, round].
pub fn clamp_round_entry(value: i64, round: RoundNumber) -> u32 {
    // clamp гарантирует диапазон [0, round], так что приведение без потерь.
    value.clamp(0, i64::from(round)) as u32
}

/// Бонус из текста: пусто -> 0, целое -> как есть,
/// конечная десятичная дробь -> отбрасываем дробную часть, прочее -> 0.
pub fn coerce_bonus(raw: &str) -> Points {
    let s = raw.trim();
    if s.is_empty() {
        return 0;
    }
    if let Ok(v) = s.parse::<i64>() {
        return v;
    }
    match s.parse::<f64>() {
        // `as` насыщает за пределами i64.
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

/// Значение карты в каталоге приводится так же, как бонус.
pub fn coerce_card_value(raw: &str) -> Points {
    coerce_bonus(raw)
}

/// Номер раунда из селектора: мусор или 0 -> `fallback`.
pub fn coerce_round_selector(raw: &str, fallback: RoundNumber) -> RoundNumber {
    match parse_leading_int(raw) {
        Some(v) if v > 0 => RoundNumber::try_from(v).unwrap_or(RoundNumber::MAX),
        _ => fallback,
    }
}
