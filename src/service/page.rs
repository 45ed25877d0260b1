use crate::types::{APP_TITLE, QUESTION_LABEL, QUESTION_VAR};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
input[type=text]{width:100%;padding:.5rem;font-size:1rem;box-sizing:border-box}\
pre.answer{white-space:pre-wrap;background:#f4f4f4;padding:1rem}";

/// Render the page with the question form and, when present, the answer.
///
/// `answer` is shown exactly as given, only escaped so the browser displays it as text.
pub fn render(question: &str, answer: Option<&str>) -> String {
	render_page(question, answer, None)
}

/// Render the generic failure page.
pub fn render_failure(question: &str) -> String {
	render_page(question, None, Some("Something went wrong while asking the model."))
}

fn render_page(question: &str, answer: Option<&str>, failure: Option<&str>) -> String {
	let mut html = format!(
		"<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
		 <style>{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n\
		 <form method=\"post\" action=\"/\">\n<label for=\"{var}\">{label}</label>\n\
		 <input type=\"text\" id=\"{var}\" name=\"{var}\" value=\"{value}\" autofocus>\n</form>\n",
		title = escape(APP_TITLE),
		style = STYLE,
		var = QUESTION_VAR,
		label = escape(QUESTION_LABEL),
		value = escape(question),
	);

	if let Some(answer) = answer {
		html.push_str("<pre class=\"answer\">");
		html.push_str(&escape(answer));
		html.push_str("</pre>\n");
	}

	if let Some(failure) = failure {
		html.push_str("<p class=\"error\">");
		html.push_str(&escape(failure));
		html.push_str("</p>\n");
	}

	html.push_str("</body>\n</html>\n");
	html
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}
