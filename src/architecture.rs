/// The following diagram shows the path a question takes from the browser to the model and back.
///
/// Only the [`Llm`](crate::Llm) seam is pluggable; [`Ollama`](crate::Ollama) is the backend the
/// binary uses.
#[cfg_attr(doc, aquamarine::aquamarine)]
/// ```mermaid
/// graph LR
///     subgraph Browser
///         form[Question input]
///         output[Answer area]
///     end
///     subgraph stepwise
///         ask[POST /]
///         subgraph Chain
///             template[PromptTemplate]-- filled prompt --> llm>Llm]
///         end
///         ask-- non-empty question --> template
///         llm-- raw completion --> ask
///     end
///     form --> ask
///     ask --> output
///     llm-. impl .- ollama[Ollama]
///     ollama-- POST /api/generate --> server[(Ollama server)]
/// ```
///
/// An empty question never reaches the [`Chain`](crate::Chain): the page is rendered again
/// without an answer area. The `ask` subcommand of the binary skips the browser and prints the
/// completion to stdout.
pub struct Diagram;
