//! Registration input validation.
//!
//! Both the JSON API and the form/query endpoints funnel their candidate
//! name and age through [`validate`]; only the response rendering differs
//! per route.

use std::fmt;

/// Message returned for every validation failure.
pub const VALIDATION_MESSAGE: &str = "올바른 이름과 나이(0-150)를 입력해주세요.";

pub const MAX_AGE: i64 = 150;

/// A validated registration: trimmed non-empty name, age in `0..=150`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub age: u32,
}

/// Age as it arrives off the wire: a JSON number, or a string-like field
/// from a form body, query string, or JSON string.
#[derive(Debug, Clone, Copy)]
pub enum AgeInput<'a> {
    Number(i64),
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    EmptyName,
    MissingAge,
    AgeNotNumeric,
    AgeOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALIDATION_MESSAGE)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a candidate name and age.
///
/// Succeeds iff the trimmed name is non-empty AND the age is present and
/// parses to an integer in `0..=150`. All-or-nothing, no partial success.
pub fn validate(
    name: Option<&str>,
    age: Option<AgeInput<'_>>,
) -> Result<Registration, ValidationError> {
    let name = name.ok_or(ValidationError::MissingName)?.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let age = match age.ok_or(ValidationError::MissingAge)? {
        AgeInput::Number(n) => n,
        AgeInput::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::AgeNotNumeric)?,
    };
    let age = u32::try_from(age).map_err(|_| ValidationError::AgeOutOfRange)?;
    if i64::from(age) > MAX_AGE {
        return Err(ValidationError::AgeOutOfRange);
    }

    Ok(Registration {
        name: name.to_string(),
        age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        let reg = validate(Some("Kim"), Some(AgeInput::Number(30))).expect("should validate");
        assert_eq!(reg.name, "Kim");
        assert_eq!(reg.age, 30);
    }

    #[test]
    fn test_name_is_trimmed() {
        let reg = validate(Some("  Kim  "), Some(AgeInput::Number(30))).expect("should validate");
        assert_eq!(reg.name, "Kim");
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate(None, Some(AgeInput::Number(30))),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_empty_and_whitespace_name() {
        assert_eq!(
            validate(Some(""), Some(AgeInput::Number(30))),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate(Some("   "), Some(AgeInput::Number(30))),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_missing_age() {
        assert_eq!(
            validate(Some("Kim"), None),
            Err(ValidationError::MissingAge)
        );
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate(Some("Kim"), Some(AgeInput::Number(0))).is_ok());
        assert!(validate(Some("Kim"), Some(AgeInput::Number(150))).is_ok());
        assert_eq!(
            validate(Some("Kim"), Some(AgeInput::Number(-1))),
            Err(ValidationError::AgeOutOfRange)
        );
        assert_eq!(
            validate(Some("Kim"), Some(AgeInput::Number(151))),
            Err(ValidationError::AgeOutOfRange)
        );
    }

    #[test]
    fn test_age_from_text() {
        let reg = validate(Some("Kim"), Some(AgeInput::Text("30"))).expect("should validate");
        assert_eq!(reg.age, 30);

        let reg = validate(Some("Kim"), Some(AgeInput::Text(" 30 "))).expect("should validate");
        assert_eq!(reg.age, 30);
    }

    #[test]
    fn test_non_numeric_age_text() {
        assert_eq!(
            validate(Some("Kim"), Some(AgeInput::Text("abc"))),
            Err(ValidationError::AgeNotNumeric)
        );
        assert_eq!(
            validate(Some("Kim"), Some(AgeInput::Text(""))),
            Err(ValidationError::AgeNotNumeric)
        );
    }

    #[test]
    fn test_out_of_range_age_text() {
        assert_eq!(
            validate(Some("Kim"), Some(AgeInput::Text("-1"))),
            Err(ValidationError::AgeOutOfRange)
        );
        assert_eq!(
            validate(Some("Kim"), Some(AgeInput::Text("151"))),
            Err(ValidationError::AgeOutOfRange)
        );
    }

    #[test]
    fn test_display_uses_shared_message() {
        assert_eq!(ValidationError::EmptyName.to_string(), VALIDATION_MESSAGE);
    }
}
