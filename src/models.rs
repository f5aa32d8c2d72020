//! Entity records and the write-time validation rules the store enforces.

use thiserror::Error;

/// Minimum accepted power description length, counted in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Outcome of a rejected field rule. Returned by the validation functions
/// below instead of surfacing mid-write, so no failing value ever reaches SQL.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description must be at least 20 characters long")]
    DescriptionTooShort,
    #[error("strength must be 'Strong', 'Weak', or 'Average'")]
    InvalidStrength,
}

/// A hero's capability rating for one power. Stored as its exact text form;
/// parsing is the only way to obtain a value, so the store can never be
/// handed an out-of-set rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// Parse the exact stored spelling. Case matters: `"strong"` is rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "Strong" => Ok(Strength::Strong),
            "Weak" => Ok(Strength::Weak),
            "Average" => Ok(Strength::Average),
            _ => Err(ValidationError::InvalidStrength),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl std::str::FromStr for Strength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::parse(s)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power descriptions must carry at least [`MIN_DESCRIPTION_CHARS`]
/// characters (characters, not bytes).
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Power {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// One hero's rating for one power. `strength` holds the validated text form.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct HeroPower {
    pub id: i64,
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_parse_accepts_the_three_ratings() {
        assert_eq!(Strength::parse("Strong"), Ok(Strength::Strong));
        assert_eq!(Strength::parse("Weak"), Ok(Strength::Weak));
        assert_eq!(Strength::parse("Average"), Ok(Strength::Average));
    }

    #[test]
    fn strength_parse_is_case_sensitive() {
        assert_eq!(Strength::parse("strong"), Err(ValidationError::InvalidStrength));
        assert_eq!(Strength::parse("AVERAGE"), Err(ValidationError::InvalidStrength));
        assert_eq!(Strength::parse(""), Err(ValidationError::InvalidStrength));
        assert_eq!(Strength::parse("Mighty"), Err(ValidationError::InvalidStrength));
    }

    #[test]
    fn strength_round_trips_through_its_text_form() {
        for s in [Strength::Strong, Strength::Weak, Strength::Average] {
            assert_eq!(Strength::parse(s.as_str()), Ok(s));
        }
    }

    #[test]
    fn nineteen_characters_is_too_short() {
        let nineteen = "a".repeat(MIN_DESCRIPTION_CHARS - 1);
        assert_eq!(
            validate_description(&nineteen),
            Err(ValidationError::DescriptionTooShort)
        );
        assert_eq!(validate_description(""), Err(ValidationError::DescriptionTooShort));
    }

    #[test]
    fn twenty_characters_is_accepted() {
        let twenty = "a".repeat(MIN_DESCRIPTION_CHARS);
        assert_eq!(validate_description(&twenty), Ok(()));
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        // 20 two-byte characters: 40 bytes, exactly long enough.
        let accented = "é".repeat(MIN_DESCRIPTION_CHARS);
        assert_eq!(validate_description(&accented), Ok(()));
    }
}
