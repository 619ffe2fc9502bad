use crate::error::{PromptError, PromptResult};

/// Represents a system instruction applied to every validation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction {
    pub(crate) content: String,
}

/// Builder for [`SystemInstruction`].
#[derive(Debug, Default)]
pub struct SystemInstructionBuilder {
    content: String,
}

impl SystemInstructionBuilder {
    /// Creates a new builder instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instruction content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds the instruction, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyInstruction`] when no content was supplied.
    pub fn build(self) -> PromptResult<SystemInstruction> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(PromptError::EmptyInstruction);
        }
        Ok(SystemInstruction {
            content: content.to_owned(),
        })
    }
}

impl SystemInstruction {
    /// Returns a builder instance.
    #[must_use]
    pub fn builder() -> SystemInstructionBuilder {
        SystemInstructionBuilder::new()
    }

    /// Returns the textual content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_content() {
        let instruction = SystemInstruction::builder()
            .content("\n  Be strict.\n")
            .build()
            .unwrap();
        assert_eq!(instruction.content(), "Be strict.");
    }

    #[test]
    fn rejects_blank_content() {
        let err = SystemInstruction::builder()
            .content("   ")
            .build()
            .expect_err("blank");
        assert!(matches!(err, PromptError::EmptyInstruction));
    }
}
