use std::fmt::Display;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Note,
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Note => write!(f, "note"),
        }
    }
}

/// A user-facing fault report. Configuration and parameter faults travel as
/// diagnostics; transport faults have their own error type at the rpc layer
/// and get converted when they reach the host boundary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub context: Option<String>,
}

impl Diagnostic {
    pub fn error_from_string(message: String) -> Diagnostic {
        Diagnostic { level: DiagnosticLevel::Error, message, context: None }
    }

    pub fn warning_from_string(message: String) -> Diagnostic {
        Diagnostic { level: DiagnosticLevel::Warning, message, context: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::error_from_string(message.into())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::warning_from_string(message.into())
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.level, DiagnosticLevel::Error)
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} in {}: {}", self.level, context, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

impl From<Diagnostic> for String {
    fn from(diagnostic: Diagnostic) -> Self {
        diagnostic.to_string()
    }
}

impl From<String> for Diagnostic {
    fn from(message: String) -> Self {
        Diagnostic::error_from_string(message)
    }
}

impl From<&str> for Diagnostic {
    fn from(message: &str) -> Self {
        Diagnostic::error_from_string(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_level_and_message() {
        let diag = Diagnostic::error("Unknown operation: bogusOp");
        assert_eq!(diag.to_string(), "error: Unknown operation: bogusOp");
    }

    #[test]
    fn display_includes_context_when_set() {
        let diag = Diagnostic::error("required input 'address' missing")
            .with_context("getAccount");
        assert_eq!(diag.to_string(), "error in getAccount: required input 'address' missing");
    }

    #[test]
    fn string_conversions_round_trip_the_message() {
        let diag: Diagnostic = "boom".into();
        assert!(diag.is_error());
        assert_eq!(diag.message, "boom");
    }
}
