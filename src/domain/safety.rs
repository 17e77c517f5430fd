/// Outcome of the safety classification of a chat question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyVerdict {
    Safe,
    /// The classifier's full reply text, expected to start with "UNSAFE:".
    Unsafe(String),
}

impl SafetyVerdict {
    /// Parses the classifier reply into a verdict.
    ///
    /// A reply whose trimmed text starts with "UNSAFE" is unsafe; otherwise
    /// the literal marker "SAFE" anywhere in the reply means safe. Anything
    /// else is treated as unsafe with the reply carried as the reason. The
    /// UNSAFE-prefix check comes first because "UNSAFE: ..." contains "SAFE"
    /// as a substring.
    pub fn from_reply(reply: &str) -> Self {
        let trimmed = reply.trim();
        if trimmed.starts_with("UNSAFE") {
            return Self::Unsafe(trimmed.to_string());
        }
        if trimmed.contains("SAFE") {
            return Self::Safe;
        }
        Self::Unsafe(trimmed.to_string())
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }
}
