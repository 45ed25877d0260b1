use std::collections::HashMap;

use tracing::trace;

use crate::types::TemplateError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Text(String),
	Var(String),
}

/// A fixed string with `{name}` placeholders.
///
/// `{{` and `}}` stand for literal braces. Values are inserted as-is; braces inside a value are
/// never treated as placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
	segments: Vec<Segment>,
	input_variables: Vec<String>,
}

impl PromptTemplate {
	/// Parses `template`, failing on unbalanced braces or malformed variable names.
	pub fn from_template(template: &str) -> Result<Self, TemplateError> {
		let mut segments = Vec::new();
		let mut input_variables: Vec<String> = Vec::new();
		let mut text = String::new();
		let mut chars = template.char_indices().peekable();

		while let Some((pos, c)) = chars.next() {
			match c {
				'{' if matches!(chars.peek(), Some((_, '{'))) => {
					chars.next();
					text.push('{');
				},
				'}' if matches!(chars.peek(), Some((_, '}'))) => {
					chars.next();
					text.push('}');
				},
				'}' => return Err(TemplateError::UnmatchedClose(pos)),
				'{' => {
					let mut name = String::new();
					loop {
						match chars.next() {
							Some((_, '}')) => break,
							Some((_, c)) => name.push(c),
							None => return Err(TemplateError::Unclosed(pos)),
						}
					}
					if !is_identifier(&name) {
						return Err(TemplateError::BadVariable(name))
					}
					if !text.is_empty() {
						segments.push(Segment::Text(std::mem::take(&mut text)));
					}
					if !input_variables.contains(&name) {
						input_variables.push(name.clone());
					}
					segments.push(Segment::Var(name));
				},
				c => text.push(c),
			}
		}

		if !text.is_empty() {
			segments.push(Segment::Text(text));
		}

		trace!("Parsed prompt template with variables: {:?}", input_variables);

		Ok(Self { segments, input_variables })
	}

	/// Distinct placeholder names in order of first appearance.
	pub fn input_variables(&self) -> &[String] {
		&self.input_variables
	}

	/// Substitutes every placeholder with its value from `vars`.
	///
	/// Variables not named in the template are ignored.
	pub fn format(&self, vars: &HashMap<&str, &str>) -> Result<String, TemplateError> {
		let mut out = String::new();
		for segment in &self.segments {
			match segment {
				Segment::Text(text) => out.push_str(text),
				Segment::Var(name) => {
					let value = vars
						.get(name.as_str())
						.ok_or_else(|| TemplateError::MissingVariable(name.clone()))?;
					out.push_str(value);
				},
			}
		}
		Ok(out)
	}
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
		_ => false,
	}
}
