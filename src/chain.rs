use std::collections::HashMap;

use tracing::{debug, error, instrument, trace};

use crate::{
	template::PromptTemplate,
	types::{ChainError, QUESTION_TEMPLATE, QUESTION_VAR},
	Llm,
};

/// A [`PromptTemplate`] piped into an [`Llm`].
///
/// The chain has no state of its own; each call formats the template, prompts the model once
/// and returns the completion untouched.
#[derive(Debug)]
pub struct Chain<L: Llm> {
	prompt: PromptTemplate,
	llm: L,
}

impl<L: Llm> Chain<L> {
	pub fn new(prompt: PromptTemplate, llm: L) -> Self {
		Self { prompt, llm }
	}

	/// The step-by-step question chain over `llm`.
	pub fn question(llm: L) -> Result<Self, ChainError> {
		Ok(Self::new(PromptTemplate::from_template(QUESTION_TEMPLATE)?, llm))
	}

	pub fn llm(&self) -> &L {
		&self.llm
	}

	/// Fill the template with `vars` and prompt the model with the result.
	#[instrument(skip(self, vars), fields(model = self.llm.name()))]
	pub async fn invoke(&self, vars: &HashMap<&str, &str>) -> Result<String, ChainError> {
		let filled = self.prompt.format(vars)?;

		trace!("Prompting LLM with: {:?}", filled);

		let response = self.llm.prompt(filled).await.map_err(|e| {
			error!("Failed to prompt LLM: {}", e);
			ChainError::Llm(Box::new(e))
		})?;

		debug!("LLM responded with {} bytes", response.len());

		Ok(response)
	}

	/// Answer `question` through the chain.
	///
	/// An empty question makes no call and yields `None`. Anything else, whitespace included, is
	/// forwarded and the model's text is returned as-is.
	pub async fn answer(&self, question: &str) -> Result<Option<String>, ChainError> {
		if question.is_empty() {
			trace!("Empty question, nothing to ask");
			return Ok(None)
		}

		let vars = HashMap::from([(QUESTION_VAR, question)]);
		self.invoke(&vars).await.map(Some)
	}
}
