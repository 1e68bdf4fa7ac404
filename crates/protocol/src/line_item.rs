//! Order lines shown inside a detail editor.

use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient;

/// Damage classification of a single order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// The item is fine.
    #[default]
    NoDamage,
    /// Broken or shattered.
    Broken,
    /// Cosmetic scratches.
    Scratched,
    /// Dented casing or packaging.
    Dented,
    /// Exposed to liquid.
    WaterDamaged,
    /// Does not work as intended.
    Defective,
    /// Parts or accessories absent from the box.
    MissingParts,
}

impl DamageType {
    /// Returns the full vocabulary in picker order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::NoDamage,
            Self::Broken,
            Self::Scratched,
            Self::Dented,
            Self::WaterDamaged,
            Self::Defective,
            Self::MissingParts,
        ]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NoDamage => "No damage",
            Self::Broken => "Broken",
            Self::Scratched => "Scratched",
            Self::Dented => "Dented",
            Self::WaterDamaged => "Water damaged",
            Self::Defective => "Defective",
            Self::MissingParts => "Missing parts",
        }
    }

    /// Steps to the neighbouring classification, wrapping around.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::DamageType;
    ///
    /// assert_eq!(DamageType::NoDamage.cycle(true), DamageType::Broken);
    /// assert_eq!(DamageType::NoDamage.cycle(false), DamageType::MissingParts);
    /// ```
    #[must_use]
    pub fn cycle(self, forward: bool) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|d| *d == self).unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        all[next]
    }
}

impl<'de> Deserialize<'de> for DamageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::classified(deserializer)
    }
}

/// One line of the order a return request refers to.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{DamageType, LineItem};
///
/// let line = LineItem::new("SKU-1", "Lamp", 0);
/// assert_eq!(line.qty, 1);
/// assert_eq!(line.damage_type, DamageType::NoDamage);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalogue code.
    #[serde(default, alias = "itemCode")]
    pub item_code: String,
    /// Display name.
    #[serde(default, alias = "itemName")]
    pub item_name: String,
    /// Quantity, always at least 1.
    #[serde(default = "one", deserialize_with = "deserialize_qty")]
    pub qty: u32,
    /// Current damage classification.
    #[serde(default, alias = "damageType")]
    pub damage_type: DamageType,
}

impl LineItem {
    /// Creates an undamaged line, raising the quantity to at least 1.
    #[must_use]
    pub fn new(item_code: impl Into<String>, item_name: impl Into<String>, qty: u32) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            qty: qty.max(1),
            damage_type: DamageType::default(),
        }
    }

    /// Sets the damage classification.
    #[must_use]
    pub fn with_damage(mut self, damage_type: DamageType) -> Self {
        self.damage_type = damage_type;
        self
    }
}

const fn one() -> u32 {
    1
}

fn deserialize_qty<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient::integer(deserializer)?.unwrap_or(1);
    Ok(u32::try_from(raw.max(1)).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_in_both_directions() {
        let mut damage = DamageType::NoDamage;
        for _ in 0..DamageType::all().len() {
            damage = damage.cycle(true);
        }
        assert_eq!(damage, DamageType::NoDamage);

        assert_eq!(DamageType::MissingParts.cycle(true), DamageType::NoDamage);
        assert_eq!(DamageType::Broken.cycle(false), DamageType::NoDamage);
    }

    #[test]
    fn deserialize_clamps_quantity() {
        let line: LineItem =
            serde_json::from_str(r#"{"itemCode": "SKU-1", "itemName": "Mug", "qty": -3}"#)
                .expect("deserialize");
        assert_eq!(line.qty, 1);

        let line: LineItem =
            serde_json::from_str(r#"{"item_code": "SKU-2", "item_name": "Jug"}"#)
                .expect("deserialize");
        assert_eq!(line.qty, 1);
    }

    #[test]
    fn deserialize_unknown_damage_falls_back() {
        let line: LineItem = serde_json::from_str(
            r#"{"item_code": "SKU-3", "item_name": "Bowl", "qty": 2, "damage_type": "singed"}"#,
        )
        .expect("deserialize");
        assert_eq!(line.qty, 2);
        assert_eq!(line.damage_type, DamageType::NoDamage);
    }

    #[test]
    fn deserialize_tolerates_odd_value_types() {
        let line: LineItem = serde_json::from_str(
            r#"{"item_code": "SKU-4", "item_name": "Plate", "qty": null, "damage_type": 7}"#,
        )
        .expect("deserialize");
        assert_eq!(line.qty, 1);
        assert_eq!(line.damage_type, DamageType::NoDamage);

        let line: LineItem =
            serde_json::from_str(r#"{"itemCode": "SKU-5", "qty": "3", "damageType": "Dented"}"#)
                .expect("deserialize");
        assert_eq!(line.qty, 3);
        assert_eq!(line.damage_type, DamageType::Dented);

        let line: LineItem =
            serde_json::from_str(r#"{"itemCode": "SKU-6", "qty": 2.6}"#).expect("deserialize");
        assert_eq!(line.qty, 3);
    }
}
