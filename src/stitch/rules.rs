use crate::error::StitchError;

/// Rules to accept artificial connectors.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchRules {
    /// Maximum acceptable bearing deviation in degrees.
    ///
    /// A connector is accepted only if both the deviation between the two
    /// joined lines and the deviation between the connector and the
    /// destination line stay below this value.
    pub angle_threshold: f64,
}

impl Default for StitchRules {
    fn default() -> Self {
        Self {
            angle_threshold: 5.0,
        }
    }
}

impl StitchRules {
    /// Set the maximum acceptable bearing deviation in degrees.
    pub fn angle_threshold(mut self, angle_threshold: f64) -> Self {
        self.angle_threshold = angle_threshold;
        self
    }

    /// Check that the threshold is a finite positive number of degrees.
    pub fn validate(&self) -> Result<(), StitchError> {
        if !self.angle_threshold.is_finite() || self.angle_threshold <= 0.0 {
            return Err(StitchError::InvalidAngleThreshold {
                value: self.angle_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(StitchRules::default().validate().is_ok());
        assert!(StitchRules::default().angle_threshold(30.0).validate().is_ok());
        assert!(StitchRules::default().angle_threshold(0.0).validate().is_err());
        assert!(StitchRules::default().angle_threshold(-1.0).validate().is_err());
        assert!(StitchRules::default()
            .angle_threshold(f64::NAN)
            .validate()
            .is_err());
    }
}
