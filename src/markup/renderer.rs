//! `$...$` segment rendering with per-segment fallback

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Inline math: shortest run between two dollar signs on one line
static MATH_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(.*?)\$").expect("math segment pattern is valid"));

/// Failure to render one math segment. Never escapes [`render_markup`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("empty math segment")]
    Empty,

    #[error("cannot render math: {0}")]
    Invalid(String),
}

/// Turns the TeX source of one segment into display markup
pub trait MathRenderer {
    fn render(&self, tex: &str) -> Result<String, RenderError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    fn render(&self, tex: &str) -> Result<String, RenderError> {
        self(tex)
    }
}

/// Built-in renderer: escaped TeX wrapped in a `math` span for client-side
/// typesetting
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlMathRenderer;

impl MathRenderer for HtmlMathRenderer {
    fn render(&self, tex: &str) -> Result<String, RenderError> {
        let tex = tex.trim();
        if tex.is_empty() {
            return Err(RenderError::Empty);
        }
        Ok(format!("<span class=\"math\">{}</span>", escape_html(tex)))
    }
}

/// Replace every `$...$` segment in `text` with its rendered form
///
/// Text outside delimiters is left as is. A segment that fails to render is
/// kept verbatim, delimiters included.
pub fn render_markup(text: &str, renderer: &dyn MathRenderer) -> String {
    if !text.contains('$') {
        return text.to_string();
    }

    MATH_SEGMENT
        .replace_all(text, |caps: &Captures<'_>| match renderer.render(&caps[1]) {
            Ok(markup) => markup,
            Err(err) => {
                tracing::warn!(segment = &caps[0], error = %err, "math rendering failed");
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
