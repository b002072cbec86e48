//! Engine configuration.

use std::ffi::OsString;

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::image::ChannelRange;

/// Set to any value to let the engine trust caller-supplied parameters.
const TRUST_INPUTS_ENV: &str = "PHOTOEDIT_TRUST_INPUTS";

/// Runtime configuration for [`ColorAdjustmentEngine`](crate::engine::ColorAdjustmentEngine).
///
/// Fields missing from a JSON config take their values from [`Default`], so
/// the `PHOTOEDIT_TRUST_INPUTS` override applies to both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Clamp parameters into their slider ranges before every evaluation.
    pub validate_params: bool,
    /// Range of bare pixels handed to `apply_pixel`.
    pub channel_range: ChannelRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_params: validate_from_env(std::env::var_os(TRUST_INPUTS_ENV)),
            channel_range: ChannelRange::Byte,
        }
    }
}

/// Re-validation stays on unless the trust override is set.
fn validate_from_env(trust_inputs: Option<OsString>) -> bool {
    trust_inputs.is_none()
}

impl EngineConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EditError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults_match_default() {
        let cfg = EngineConfig::from_json("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.channel_range, ChannelRange::Byte);
    }

    #[test]
    fn test_partial_json_keeps_default_validation() {
        let cfg = EngineConfig::from_json(r#"{"channel_range": "Unit"}"#).unwrap();
        assert_eq!(cfg.validate_params, EngineConfig::default().validate_params);
        assert_eq!(cfg.channel_range, ChannelRange::Unit);
    }

    #[test]
    fn test_trust_override_disables_validation() {
        assert!(validate_from_env(None));
        assert!(!validate_from_env(Some(OsString::from("1"))));
        assert!(!validate_from_env(Some(OsString::new())));
    }

    #[test]
    fn test_from_json_fields() {
        let json = r#"{"validate_params": false, "channel_range": "Unit"}"#;
        let cfg = EngineConfig::from_json(json).unwrap();
        assert!(!cfg.validate_params);
        assert_eq!(cfg.channel_range, ChannelRange::Unit);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = EngineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, EditError::Config(_)));
    }
}
