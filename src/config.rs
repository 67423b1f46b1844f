use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Scoring weights and acceptance threshold for the match engine.
///
/// A plain structure with the contract constants as defaults; there is no
/// runtime lookup or mutation behind it. Serde-friendly so deployments can
/// embed it in a larger service config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Weight of title-vs-title similarity.
    #[serde(default = "MatchConfig::default_title_weight")]
    pub title_weight: f64,
    /// Weight of description-vs-description similarity.
    #[serde(default = "MatchConfig::default_description_weight")]
    pub description_weight: f64,
    /// Weight of last-seen-vs-found location similarity.
    #[serde(default = "MatchConfig::default_location_weight")]
    pub location_weight: f64,
    /// Weight of the structured characteristics agreement ratio.
    #[serde(default = "MatchConfig::default_characteristics_weight")]
    pub characteristics_weight: f64,
    /// Minimum confidence for a pair to qualify as a match.
    #[serde(default = "MatchConfig::default_confidence_threshold")]
    pub confidence_threshold: f64,
}

impl MatchConfig {
    pub(crate) fn default_title_weight() -> f64 {
        0.35
    }

    pub(crate) fn default_description_weight() -> f64 {
        0.25
    }

    pub(crate) fn default_location_weight() -> f64 {
        0.20
    }

    pub(crate) fn default_characteristics_weight() -> f64 {
        0.20
    }

    pub(crate) fn default_confidence_threshold() -> f64 {
        0.6
    }

    /// Validate weights and threshold.
    ///
    /// The weights must form a convex combination so confidence stays in
    /// [0, 1]; the threshold must be meaningful within that range.
    pub fn validate(&self) -> Result<(), MatchError> {
        let weights = [
            ("title_weight", self.title_weight),
            ("description_weight", self.description_weight),
            ("location_weight", self.location_weight),
            ("characteristics_weight", self.characteristics_weight),
        ];
        for (name, w) in weights {
            if !(0.0..=1.0).contains(&w) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be between 0.0 and 1.0"
                )));
            }
        }
        let sum = self.title_weight
            + self.description_weight
            + self.location_weight
            + self.characteristics_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(MatchError::InvalidConfig(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        if !(self.confidence_threshold > 0.0 && self.confidence_threshold <= 1.0) {
            return Err(MatchError::InvalidConfig(
                "confidence_threshold must be in (0.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            title_weight: Self::default_title_weight(),
            description_weight: Self::default_description_weight(),
            location_weight: Self::default_location_weight(),
            characteristics_weight: Self::default_characteristics_weight(),
            confidence_threshold: Self::default_confidence_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.confidence_threshold, 0.6);
    }

    #[test]
    fn weights_must_sum_to_one() {
        let cfg = MatchConfig {
            title_weight: 0.5,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("sum to 1.0")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_threshold_rejected() {
        let cfg = MatchConfig {
            confidence_threshold: 0.0,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("confidence_threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_weight_rejected() {
        let cfg = MatchConfig {
            title_weight: -0.1,
            location_weight: 0.65,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("title_weight")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_fields_fall_back_to_contract_constants() {
        let cfg: MatchConfig = serde_json::from_str("{}").expect("empty object deserializes");
        assert_eq!(cfg, MatchConfig::default());
    }
}
