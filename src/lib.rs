//! Ask a locally running [Ollama](https://ollama.com) model a question and get its raw answer.
//!
//! Every question is substituted into a fixed step-by-step prompt:
//!
//! ```text
//! Question: {question}
//! Answer: Let's think step by step.
//! ```
//!
//! The filled prompt is sent to the model and whatever text comes back is handed to the caller
//! untouched. Nothing is retried, cached or persisted.
//!
//! The pieces are:
//!
//! - [`PromptTemplate`]: `{name}` placeholder substitution.
//! - [`Llm`]: the seam between a [`Chain`] and a model backend. [`Ollama`] talks to the
//!   `/api/generate` endpoint of a local Ollama server.
//! - [`Chain`]: a template piped into a model. [`Chain::answer`] is the one operation the
//!   application needs.
//! - [`service`]: a one-field web page that calls [`Chain::answer`] on submit.
//!
//! For immediate use you must run an Ollama server with the model pulled:
//!
//! ```text
//! ollama pull deepseek-r1
//! ollama serve
//! ```
//!
//! # Example
//!
//! ```no_run
//! use stepwise::{Chain, Ollama};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! 	let chain = Chain::question(Ollama::default())?;
//!
//! 	if let Some(answer) = chain.answer("What is 2+2?").await? {
//! 		println!("{}", answer);
//! 	}
//!
//! 	Ok(())
//! }
//! ```
use async_trait::async_trait;

pub mod architecture;
pub mod chain;
pub mod ollama;
pub mod service;
pub mod template;
pub mod types;

#[cfg(test)]
mod mock;

pub use chain::Chain;
pub use ollama::Ollama;
pub use template::PromptTemplate;
pub use types::{ChainError, TemplateError};

/// A text-generation model that turns one prompt into one completion.
///
/// Implementations perform a single round trip per call and must return the completion exactly
/// as the model produced it.
#[async_trait]
pub trait Llm: Send + Sync {
	/// Defines the error type returned when prompting fails.
	type Error: std::error::Error + Send + Sync + 'static;

	/// Model identifier sent to the backend.
	fn name(&self) -> &str;

	/// Prompt the model and wait for the full completion.
	async fn prompt(&self, prompt: String) -> Result<String, Self::Error>;
}
