/// Thresholds applied by [`crate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_phone_digits: usize,
    pub min_password_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_phone_digits: 8,
            min_password_len: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInConfig {
    /// How long the simulated sign-in request takes, in milliseconds.
    pub submit_delay_ms: u32,
    pub rules: ValidationRules,
}

impl SignInConfig {
    pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 900;

    /// Builds a config from an optional delay override, falling back to the
    /// default when the value is missing or not a number.
    pub fn with_delay_override(delay: Option<&str>) -> Self {
        Self {
            submit_delay_ms: delay
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(Self::DEFAULT_SUBMIT_DELAY_MS),
            rules: ValidationRules::default(),
        }
    }
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self::with_delay_override(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_override_is_parsed() {
        assert_eq!(SignInConfig::with_delay_override(Some("250")).submit_delay_ms, 250);
        assert_eq!(SignInConfig::with_delay_override(Some(" 40 ")).submit_delay_ms, 40);
    }

    #[test]
    fn bad_delay_falls_back_to_default() {
        assert_eq!(SignInConfig::with_delay_override(Some("soon")).submit_delay_ms, 900);
        assert_eq!(SignInConfig::default().submit_delay_ms, 900);
    }
}
