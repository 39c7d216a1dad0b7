use serde::Serialize;
use shared::error::{AppError, AppResult};

/// Upper bound matching the VARCHAR(255) columns the names land in.
pub const MAX_DESCRIPTIVE_NAME_CHARS: usize = 255;

/// Human-readable name for a role. Stored as given; the only rule is
/// the length cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct DescriptiveName(String);

impl DescriptiveName {
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let chars = value.chars().count();
        if chars > MAX_DESCRIPTIVE_NAME_CHARS {
            return Err(AppError::UnprocessableEntity(format!(
                "descriptive name of {chars} chars exceeds the limit of {MAX_DESCRIPTIVE_NAME_CHARS}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl PartialEq<str> for DescriptiveName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DescriptiveName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for DescriptiveName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for DescriptiveName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_round_trips() {
        let name = DescriptiveName::new("first-line support").unwrap();
        assert_eq!(name, "first-line support");
        assert_eq!(name.to_string(), "first-line support");
    }

    #[test]
    fn name_at_the_limit_is_accepted() {
        let raw = "x".repeat(MAX_DESCRIPTIVE_NAME_CHARS);
        assert!(DescriptiveName::new(raw).is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let raw = "a".repeat(16_000);
        let res = DescriptiveName::new(raw);
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn limit_counts_chars_not_bytes() {
        // 255 multibyte chars is still within the limit.
        let raw = "ü".repeat(MAX_DESCRIPTIVE_NAME_CHARS);
        assert!(DescriptiveName::new(raw).is_ok());
    }
}
