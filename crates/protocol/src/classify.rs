//! Total classification of raw field values into closed enumerations.
//!
//! Feed records carry their type, mode and status as free-form strings.
//! Every consumer downstream of this module only ever sees a member of the
//! closed enumeration: unrecognized values resolve to a fixed fallback
//! instead of failing.

use std::fmt::Debug;

use tracing::debug;

use crate::line_item::DamageType;
use crate::request::{RequestStatus, ReturnMode, ReturnType};

/// Fallback for an unrecognized return type.
pub const FALLBACK_RETURN_TYPE: ReturnType = ReturnType::Refund;

/// Fallback for an unrecognized return mode.
pub const FALLBACK_RETURN_MODE: ReturnMode = ReturnMode::Full;

/// Fallback for an unrecognized request status.
pub const FALLBACK_STATUS: RequestStatus = RequestStatus::Pending;

/// Fallback for an unrecognized line item damage type.
pub const FALLBACK_DAMAGE_TYPE: DamageType = DamageType::NoDamage;

/// A closed enumeration that raw strings can be classified into.
///
/// Implementors only describe which normalized keys they recognize; the
/// provided [`Classify::classify`] method is total.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{Classify, ReturnType};
///
/// assert_eq!(ReturnType::classify("Missing Item"), ReturnType::Missing);
/// assert_eq!(ReturnType::classify("???"), ReturnType::Refund);
/// ```
pub trait Classify: Sized + Copy + Debug {
    /// The member returned when the raw value is not recognized.
    const FALLBACK: Self;

    /// Returns the member matching an already-normalized key, if any.
    ///
    /// Keys are lowercase with whitespace, `_` and `-` removed
    /// (see [`normalize`]).
    fn recognize(key: &str) -> Option<Self>;

    /// Classifies a raw value, falling back to [`Classify::FALLBACK`].
    fn classify(raw: &str) -> Self {
        match Self::recognize(&normalize(raw)) {
            Some(value) => value,
            None => {
                debug!(raw, fallback = ?Self::FALLBACK, "unrecognized value, using fallback");
                Self::FALLBACK
            }
        }
    }
}

/// Normalizes a raw value into a lookup key.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::classify::normalize;
///
/// assert_eq!(normalize("  Missing-Item "), "missingitem");
/// assert_eq!(normalize("WATER_damaged"), "waterdamaged");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Classify for ReturnType {
    const FALLBACK: Self = FALLBACK_RETURN_TYPE;

    fn recognize(key: &str) -> Option<Self> {
        match key {
            "refund" => Some(Self::Refund),
            "missing" | "missingitem" | "missingitems" => Some(Self::Missing),
            "damage" | "damaged" | "damageditem" => Some(Self::Damage),
            "exchange" | "replacement" => Some(Self::Exchange),
            _ => None,
        }
    }
}

impl Classify for ReturnMode {
    const FALLBACK: Self = FALLBACK_RETURN_MODE;

    fn recognize(key: &str) -> Option<Self> {
        match key {
            "full" => Some(Self::Full),
            "partial" => Some(Self::Partial),
            _ => None,
        }
    }
}

impl Classify for RequestStatus {
    const FALLBACK: Self = FALLBACK_STATUS;

    fn recognize(key: &str) -> Option<Self> {
        match key {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "flagged" => Some(Self::Flagged),
            _ => None,
        }
    }
}

impl Classify for DamageType {
    const FALLBACK: Self = FALLBACK_DAMAGE_TYPE;

    fn recognize(key: &str) -> Option<Self> {
        match key {
            "none" | "nodamage" => Some(Self::NoDamage),
            "broken" => Some(Self::Broken),
            "scratched" => Some(Self::Scratched),
            "dented" => Some(Self::Dented),
            "waterdamaged" | "waterdamage" => Some(Self::WaterDamaged),
            "defective" => Some(Self::Defective),
            "missingparts" => Some(Self::MissingParts),
            _ => None,
        }
    }
}
