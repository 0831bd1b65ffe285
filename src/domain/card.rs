use serde::{Deserialize, Serialize};

use crate::domain::{CardId, Points};

/// Категория карты в каталоге бонусов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardGroup {
    /// Карты базовой коробки.
    Base,
    /// Карты расширений (значения обычно настраиваются под домашние правила).
    Extension,
}

impl CardGroup {
    pub fn label(&self) -> &'static str {
        match self {
            CardGroup::Base => "Base",
            CardGroup::Extension => "Extension",
        }
    }

    /// Разбор метки из сохранения. Неизвестная метка -> None.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Base" => Some(CardGroup::Base),
            "Extension" => Some(CardGroup::Extension),
            _ => None,
        }
    }
}

/// Карта каталога бонусов. `value` редактируется пользователем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusCard {
    pub id: CardId,
    pub label: String,
    pub description: String,
    pub value: Points,
    pub group: CardGroup,
}

impl BonusCard {
    pub fn new(
        id: &str,
        label: &str,
        description: &str,
        value: Points,
        group: CardGroup,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            value,
            group,
        }
    }

    /// Подпись значения для кнопки: "+20", "0", "-10".
    pub fn signed_value(&self) -> String {
        if self.value >= 0 {
            format!("+{}", self.value)
        } else {
            self.value.to_string()
        }
    }
}

/// Стандартный каталог: база + расширения.
pub fn default_cards() -> Vec<BonusCard> {
    use CardGroup::{Base, Extension};

    vec![
        BonusCard::new(
            "pirate",
            "Pirate capturé",
            "Bonus pour chaque pirate gagné",
            20,
            Base,
        ),
        BonusCard::new(
            "mermaid",
            "Sirène victorieuse",
            "Bonus si la sirène bat le Skull King",
            50,
            Base,
        ),
        BonusCard::new(
            "skull-king",
            "Skull King capturé",
            "Bonus par Skull King gagné",
            30,
            Base,
        ),
        BonusCard::new(
            "tigress-pirate",
            "Tigresse (mode pirate)",
            "Bonus si la Tigresse est jouée comme pirate",
            20,
            Base,
        ),
        BonusCard::new(
            "tigress-escape",
            "Tigresse (mode fuite)",
            "Petit bonus si la Tigresse est jouée en fuite",
            10,
            Base,
        ),
        BonusCard::new(
            "kraken",
            "Kraken",
            "Carte d'extension: annule la levée, ajustez selon vos règles.",
            0,
            Extension,
        ),
        BonusCard::new(
            "whale",
            "Baleine",
            "Carte d'extension: bonus selon vos variantes.",
            10,
            Extension,
        ),
        BonusCard::new(
            "white-whale",
            "Baleine blanche",
            "Carte d'extension: effets spéciaux, bonus personnalisable.",
            20,
            Extension,
        ),
        BonusCard::new(
            "loot",
            "Butin",
            "Carte d'extension: ajoutez un bonus maison.",
            10,
            Extension,
        ),
    ]
}
