use std::{error::Error, io::Write, net::SocketAddr};

use clap::{Parser, Subcommand};
use stepwise::{
	types::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL},
	Chain, Ollama,
};
use tracing::{info, Level};
use tracing_subscriber::fmt;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Ollama model to prompt.
	#[arg(long, env = "STEPWISE_MODEL", default_value = DEFAULT_MODEL)]
	model: String,
	/// Ollama server, as a URL or a bare `host[:port]`.
	#[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_URL)]
	ollama_url: String,
	/// Log level
	#[arg(long, default_value = "info")]
	log_level: Level,
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Serve the question page.
	Serve {
		/// Address to listen on.
		#[arg(long, default_value = "127.0.0.1:8501")]
		addr: SocketAddr,
	},
	/// Ask a single question and print the raw answer.
	Ask {
		/// The question to ask. Nothing is printed when empty.
		question: String,
	},
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
	dotenv::dotenv().ok();

	let args = Args::parse();

	let subscriber = fmt::Subscriber::builder()
		.with_max_level(args.log_level)
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	info!(task = "tracing_setup", result = "success", "tracing successfully set up");

	let chain = Chain::question(Ollama::new(&args.ollama_url, args.model)?)?;

	match args.command {
		Command::Serve { addr } => stepwise::service::serve(addr, chain).await?,
		Command::Ask { question } =>
			if let Some(answer) = chain.answer(&question).await? {
				let mut stdout = std::io::stdout().lock();
				stdout.write_all(answer.as_bytes())?;
				stdout.write_all(b"\n")?;
			},
	}

	Ok(())
}
