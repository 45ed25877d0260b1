use std::fmt::Display;

/// Name of the single placeholder in [`QUESTION_TEMPLATE`].
pub const QUESTION_VAR: &str = "question";

/// The fixed prompt every question is substituted into.
pub const QUESTION_TEMPLATE: &str = "Question: {question}\nAnswer: Let's think step by step.";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "deepseek-r1";

/// Where a local Ollama server listens by default.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Page title of the web UI.
pub const APP_TITLE: &str = "Langchain-Deepseek-R1 App";

/// Label shown next to the question input.
pub const QUESTION_LABEL: &str = "Enter your question here:";

/// Boxed error returned by an [`Llm`](crate::Llm) backend once it leaves the backend.
pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
	/// A `{` was never closed.
	Unclosed(usize),
	/// A `}` appeared without a matching `{`.
	UnmatchedClose(usize),
	/// The text between braces is not a valid variable name.
	BadVariable(String),
	/// `format` was called without a value for this variable.
	MissingVariable(String),
}

impl Display for TemplateError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Unclosed(pos) => write!(f, "Unclosed '{{' at byte {}", pos),
			Self::UnmatchedClose(pos) => write!(f, "Unmatched '}}' at byte {}", pos),
			Self::BadVariable(name) => write!(f, "Invalid template variable: {:?}", name),
			Self::MissingVariable(name) => write!(f, "Missing value for template variable: {}", name),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
	Template(#[from] TemplateError),
	Llm(BoxError),
}

impl Display for ChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Template(e) => write!(f, "{}", e),
			Self::Llm(e) => write!(f, "Failed to prompt LLM: {}", e),
		}
	}
}
