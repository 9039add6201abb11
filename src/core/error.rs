//=========================================================================
// Configuration Errors
//=========================================================================
//
// Rejections produced when validating scene configuration before the
// engine starts. Gameplay itself has no error paths: invalid game
// operations are no-ops.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ConfigError =========================================================

/// Invalid scene configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("session duration must be at least one second")]
    ZeroDuration,

    #[error("at least one delivery must be required")]
    ZeroRequired,

    #[error("{required} deliveries required but only {available} items spawn")]
    UnreachableObjective { required: u32, available: usize },

    #[error("{name} must be a positive finite distance, got {value}")]
    InvalidRange { name: &'static str, value: f32 },

    #[error("move speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
}

/// Checks a distance parameter.
pub(crate) fn check_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, value })
    }
}

/// Checks a per-tick movement speed.
pub(crate) fn check_speed(value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeed(value))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range("pickup_range", 2.0).is_ok());
        assert_eq!(
            check_range("pickup_range", 0.0),
            Err(ConfigError::InvalidRange { name: "pickup_range", value: 0.0 })
        );
        assert!(check_range("drop_range", f32::NAN).is_err());
        assert!(check_range("drop_range", f32::INFINITY).is_err());
    }

    #[test]
    fn speed_check() {
        assert!(check_speed(0.08).is_ok());
        assert!(check_speed(-1.0).is_err());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = ConfigError::UnreachableObjective { required: 6, available: 5 };
        assert_eq!(err.to_string(), "6 deliveries required but only 5 items spawn");

        let err = ConfigError::InvalidRange { name: "drop_range", value: -1.0 };
        assert!(err.to_string().contains("drop_range"));
    }
}
