use std::fmt::Display;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::{
	types::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL},
	Llm,
};

const GENERATE_PATH: &str = "api/generate";
const DEFAULT_PORT: u16 = 11434;

/// Body of a non-streaming `POST /api/generate` request.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
	pub model: &'a str,
	pub prompt: &'a str,
	pub stream: bool,
}

/// The part of the `/api/generate` reply that is used. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
	pub response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
	/// The base URL could not be parsed.
	BadUrl(#[from] url::ParseError),
	/// The server could not be reached or the connection failed mid-request.
	Request(reqwest::Error),
	/// The server answered with a non-success status.
	Status { status: StatusCode, body: String },
	/// The reply was not a generate response.
	Decode(serde_json::Error),
}

impl Display for OllamaError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadUrl(e) => write!(f, "Bad Ollama URL: {}", e),
			Self::Request(e) => write!(f, "Ollama request failed: {}", e),
			Self::Status { status, body } => write!(f, "Ollama returned {}: {}", status, body),
			Self::Decode(e) => write!(f, "Unexpected Ollama response: {}", e),
		}
	}
}

/// A model served by a local Ollama instance.
#[derive(Debug, Clone)]
pub struct Ollama {
	client: reqwest::Client,
	base_url: Url,
	model: String,
}

impl Default for Ollama {
	/// `deepseek-r1` on `http://localhost:11434`.
	fn default() -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: Url::parse(DEFAULT_OLLAMA_URL).expect("default Ollama URL is valid"),
			model: DEFAULT_MODEL.to_string(),
		}
	}
}

impl Ollama {
	/// `host` is either a full URL or an `OLLAMA_HOST`-style `host[:port]`.
	pub fn new(host: &str, model: impl Into<String>) -> Result<Self, OllamaError> {
		Ok(Self { client: reqwest::Client::new(), base_url: parse_host(host)?, model: model.into() })
	}

	/// Full URL of the generate endpoint, keeping any path prefix of the base URL.
	pub fn generate_url(&self) -> Result<Url, OllamaError> {
		let mut base = self.base_url.clone();
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		Ok(base.join(GENERATE_PATH)?)
	}
}

#[async_trait]
impl Llm for Ollama {
	type Error = OllamaError;

	fn name(&self) -> &str {
		&self.model
	}

	#[instrument(skip(self, prompt), fields(model = %self.model))]
	async fn prompt(&self, prompt: String) -> Result<String, Self::Error> {
		let url = self.generate_url()?;
		let request = GenerateRequest { model: &self.model, prompt: &prompt, stream: false };

		debug!("Sending generate request to {}", url);

		let res =
			self.client.post(url).json(&request).send().await.map_err(OllamaError::Request)?;

		let status = res.status();
		let body = res.text().await.map_err(OllamaError::Request)?;

		if !status.is_success() {
			return Err(OllamaError::Status { status, body })
		}

		let generated: GenerateResponse =
			serde_json::from_str(&body).map_err(OllamaError::Decode)?;

		Ok(generated.response)
	}
}

/// Resolve an Ollama host the way the Ollama CLI reads `OLLAMA_HOST`.
///
/// A value without a scheme is taken as plain `http`, gets port 11434 unless one is given, and
/// the `0.0.0.0` bind address is reached through `localhost`.
fn parse_host(host: &str) -> Result<Url, OllamaError> {
	let host = host.trim();
	if host.contains("://") {
		return Ok(Url::parse(host)?)
	}

	let mut url = Url::parse(&format!("http://{}", host))?;

	if url.host_str() == Some("0.0.0.0") {
		url.set_host(Some("localhost"))?;
	}

	// `Url` hides an explicit `:80` for http, so look at the authority as written.
	let authority = host.split('/').next().unwrap_or_default();
	if url.port().is_none() && !authority.ends_with(":80") {
		// http URLs always accept a port
		let _ = url.set_port(Some(DEFAULT_PORT));
	}

	Ok(url)
}
