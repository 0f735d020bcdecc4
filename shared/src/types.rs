use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Enums
// ============================================================================

/// Which identifier the member signs in with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInMode {
    #[default]
    Email,
    Phone,
}

impl SignInMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignInMode::Email => "Email",
            SignInMode::Phone => "Phone",
        }
    }

    pub fn all() -> &'static [SignInMode] {
        &[SignInMode::Email, SignInMode::Phone]
    }
}

/// Calling codes offered next to the phone input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryCode {
    #[default]
    #[serde(rename = "+91")]
    India,
    #[serde(rename = "+1")]
    NorthAmerica,
    #[serde(rename = "+44")]
    UnitedKingdom,
    #[serde(rename = "+61")]
    Australia,
    #[serde(rename = "+971")]
    UnitedArabEmirates,
}

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::India => "+91",
            CountryCode::NorthAmerica => "+1",
            CountryCode::UnitedKingdom => "+44",
            CountryCode::Australia => "+61",
            CountryCode::UnitedArabEmirates => "+971",
        }
    }

    pub fn all() -> &'static [CountryCode] {
        &[
            CountryCode::India,
            CountryCode::NorthAmerica,
            CountryCode::UnitedKingdom,
            CountryCode::Australia,
            CountryCode::UnitedArabEmirates,
        ]
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country code: {0}")]
pub struct ParseCountryCodeError(pub String);

impl FromStr for CountryCode {
    type Err = ParseCountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::all()
            .iter()
            .copied()
            .find(|code| code.as_str() == s.trim())
            .ok_or_else(|| ParseCountryCodeError(s.to_string()))
    }
}

// ============================================================================
// Domain Types
// ============================================================================

/// The identifier of the active mode. Borrowed from the form state, so it
/// always reflects exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Email(&'a str),
    Phone {
        country_code: CountryCode,
        number: &'a str,
    },
}

impl Identifier<'_> {
    pub fn mode(&self) -> SignInMode {
        match self {
            Identifier::Email(_) => SignInMode::Email,
            Identifier::Phone { .. } => SignInMode::Phone,
        }
    }
}

/// What a sign-in request would carry once the form has validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: Login,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Login {
    Email(String),
    Phone {
        country_code: CountryCode,
        digits: String,
    },
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
