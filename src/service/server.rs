use std::{fmt::Display, net::SocketAddr, sync::Arc};

use axum::{
	extract::State,
	http::StatusCode,
	response::{Html, IntoResponse, Response},
	routing::get,
	Form, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::{service::page, types::ChainError, Chain, Llm};

/// Form posted by the question input.
#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
	#[serde(default)]
	pub question: String,
}

/// Failure while answering a submitted question.
///
/// Rendered as a generic failure page with `502 Bad Gateway`, since the fault lies with the
/// model server.
#[derive(Debug, thiserror::Error)]
pub struct ServiceError {
	question: String,
	#[source]
	source: ChainError,
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Failed to answer question: {}", self.source)
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		(StatusCode::BAD_GATEWAY, Html(page::render_failure(&self.question))).into_response()
	}
}

/// Routes of the web UI, sharing one [`Chain`] across requests.
pub fn router<L: Llm + 'static>(chain: Chain<L>) -> Router {
	Router::new()
		.route("/", get(index).post(ask::<L>))
		.layer(TraceLayer::new_for_http())
		.with_state(Arc::new(chain))
}

/// Bind `addr` and serve the web UI until the process is stopped.
pub async fn serve<L: Llm + 'static>(addr: SocketAddr, chain: Chain<L>) -> std::io::Result<()> {
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!(task = "serve", model = chain.llm().name(), "listening on http://{}", listener.local_addr()?);

	axum::serve(listener, router(chain)).await
}

pub async fn index() -> Html<String> {
	Html(page::render("", None))
}

#[instrument(skip_all)]
pub async fn ask<L: Llm>(
	State(chain): State<Arc<Chain<L>>>,
	Form(form): Form<AskForm>,
) -> Result<Html<String>, ServiceError> {
	match chain.answer(&form.question).await {
		Ok(answer) => Ok(Html(page::render(&form.question, answer.as_deref()))),
		Err(source) => Err(ServiceError { question: form.question, source }),
	}
}
