use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Wrong length or disallowed character set.
    Structural,
    /// A field holds a value outside its recognised set (EIC office id / entity type).
    UnknownFieldValue,
    /// Structure is fine but the trailing check character does not match.
    CheckDigitMismatch,
}

/// A single validation issue with field name and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue category.
    pub kind: IssueKind,
    /// Name of the offending component ("code" when the whole string is at fault).
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationIssue {
    /// Create an issue of the given kind.
    pub fn new(kind: IssueKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrong length or character set.
    pub fn structural(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Structural, field, message)
    }

    /// Value outside its recognised set.
    pub fn unknown_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::UnknownFieldValue, field, message)
    }

    /// Check character mismatch.
    pub fn check_digit_mismatch(expected: char, found: &str) -> Self {
        Self::new(
            IssueKind::CheckDigitMismatch,
            "check_digit",
            format!("invalid check digit: expected '{expected}', found '{found}'"),
        )
    }
}

/// Outcome of validating one code.
///
/// `components` is filled in whenever the code has the right length,
/// including when other checks fail, so callers can see what was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult<C> {
    /// True when `errors` is empty.
    pub is_valid: bool,
    /// The code that was evaluated (after normalisation, if enabled).
    pub code: String,
    /// Every issue found, in the order the checks ran.
    pub errors: Vec<ValidationIssue>,
    /// Parsed fields, if the code could be sliced.
    pub components: Option<C>,
}

impl<C> ValidationResult<C> {
    /// Build a result; validity is derived from `errors`.
    pub fn new(code: impl Into<String>, errors: Vec<ValidationIssue>, components: Option<C>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            code: code.into(),
            errors,
            components,
        }
    }

    /// Human-readable messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// All messages joined with "; ", or `None` when valid.
    pub fn summary(&self) -> Option<String> {
        if self.is_valid {
            None
        } else {
            Some(self.messages().join("; "))
        }
    }

    /// Whether any issue of the given kind was reported.
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}
