//! Weighted match confidence for a (lost, found) pair.
//!
//! Callers are expected to have applied the category gate already; this
//! module only turns field similarities into one number.

use crate::config::MatchConfig;
use crate::similarity::similarity;
use crate::types::{FoundItem, ItemCharacteristics, LostItem};

/// Confidence in [0, 1] that `lost` and `found` describe the same item,
/// rounded to two decimal places.
pub fn match_confidence(lost: &LostItem, found: &FoundItem, config: &MatchConfig) -> f64 {
    let title_sim = similarity(&lost.title, &found.title);
    let description_sim = similarity(&lost.description, &found.description);
    let location_sim = similarity(&lost.last_seen_location, &found.found_location);
    let characteristics_sim =
        characteristics_similarity(&lost.characteristics, &found.characteristics);

    let confidence = title_sim * config.title_weight
        + description_sim * config.description_weight
        + location_sim * config.location_weight
        + characteristics_sim * config.characteristics_weight;

    round2(confidence)
}

/// Agreement ratio over the structured attributes both items carry.
///
/// Only color, brand, and size are compared; an attribute missing on either
/// side stays out of the denominator. No comparable attributes at all means
/// 0.0, a zero contribution rather than a defined mismatch.
pub fn characteristics_similarity(lost: &ItemCharacteristics, found: &ItemCharacteristics) -> f64 {
    let mut total = 0u32;
    let mut matched = 0u32;

    let comparable = [
        (lost.color.as_deref(), found.color.as_deref()),
        (lost.brand.as_deref(), found.brand.as_deref()),
        (lost.size.as_deref(), found.size.as_deref()),
    ];
    for (l, f) in comparable {
        let (Some(l), Some(f)) = (present(l), present(f)) else {
            continue;
        };
        total += 1;
        if l.to_lowercase() == f.to_lowercase() {
            matched += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        f64::from(matched) / f64::from(total)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Round half away from zero to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
