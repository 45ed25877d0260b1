use std::{
	fmt::Display,
	sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::Llm;

#[derive(Debug, thiserror::Error)]
pub struct MockLlmError;

impl Display for MockLlmError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "MockLlm is unreachable")
	}
}

/// Received prompts, shared so they stay readable after the model moves into a router.
pub type PromptLog = Arc<Mutex<Vec<String>>>;

/// Replies with a fixed response and records every prompt it receives.
#[derive(Debug, Default)]
pub struct MockLlm {
	pub response: String,
	pub fail: bool,
	pub prompts: PromptLog,
}

impl MockLlm {
	pub fn replying(response: &str) -> Self {
		Self { response: response.to_string(), ..Default::default() }
	}

	pub fn failing() -> Self {
		Self { fail: true, ..Default::default() }
	}

	pub fn prompt_log(&self) -> PromptLog {
		self.prompts.clone()
	}

	pub fn prompts(&self) -> Vec<String> {
		self.prompts.lock().unwrap().clone()
	}
}

#[async_trait]
impl Llm for MockLlm {
	type Error = MockLlmError;

	fn name(&self) -> &str {
		"MockLlm"
	}

	async fn prompt(&self, prompt: String) -> Result<String, Self::Error> {
		self.prompts.lock().unwrap().push(prompt);

		if self.fail {
			return Err(MockLlmError)
		}

		Ok(self.response.clone())
	}
}
