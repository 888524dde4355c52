//! Dataset production — turns a curated Markdown QA document into the
//! dataset the widget consumes.
//!
//! The source document is a flat Markdown file where every `## ` heading
//! opens a record: the heading text is the question, and the lines up to
//! the next heading are the answer body, rendered to HTML via
//! `pulldown_cmark`. Image references in answers are left relative — the
//! widget corrects them against the static-asset root at render time.

use std::path::Path;

use pulldown_cmark::{html, Options, Parser};

use crate::error::{Result, WidgetError};
use crate::types::QaItem;

/// Parse a Markdown QA document into dataset records.
///
/// Lines before the first `## ` heading (title, preamble) are ignored.
/// The heading marker is stripped from the question text. A document
/// with no headings yields an empty dataset (logged at warn).
pub fn parse_qa_document(source: &str) -> Vec<QaItem> {
    let mut items = Vec::new();
    let mut current_question: Option<String> = None;
    let mut current_body: Vec<&str> = Vec::new();

    for line in source.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            if let Some(question) = current_question.take() {
                items.push(QaItem::new(question, render_answer(&current_body.join("\n"))));
            }
            current_question = Some(heading.trim().to_owned());
            current_body.clear();
        } else if current_question.is_some() {
            current_body.push(line);
        }
    }
    if let Some(question) = current_question {
        items.push(QaItem::new(question, render_answer(&current_body.join("\n"))));
    }

    if items.is_empty() {
        tracing::warn!("QA document contains no '## ' headings; dataset is empty");
    } else {
        tracing::debug!(items = items.len(), "QA document parsed");
    }
    items
}

/// Render an answer body from Markdown to HTML.
fn render_answer(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output.trim().to_owned()
}

/// Serialize the dataset as the page-loader script (`window.qaData = ...;`).
///
/// # Errors
///
/// Returns [`WidgetError::Parse`] if serialization fails.
pub fn render_index_script(items: &[QaItem]) -> Result<String> {
    let json = render_index_json(items)?;
    Ok(format!("window.qaData = {json};\n"))
}

/// Serialize the dataset as the plain interchange JSON array.
///
/// # Errors
///
/// Returns [`WidgetError::Parse`] if serialization fails.
pub fn render_index_json(items: &[QaItem]) -> Result<String> {
    serde_json::to_string_pretty(items)
        .map_err(|e| WidgetError::Parse(format!("dataset serialization: {e}")))
}

/// Read and parse a Markdown QA document from disk.
///
/// # Errors
///
/// Returns [`WidgetError::Io`] with path context if the file cannot be read.
pub fn load_qa_file(path: impl AsRef<Path>) -> Result<Vec<QaItem>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|e| WidgetError::Io(format!("{}: {e}", path.display())))?;
    Ok(parse_qa_document(&source))
}

/// Write the page-loader script for a dataset to disk.
///
/// # Errors
///
/// Returns [`WidgetError::Io`] with path context if the file cannot be
/// written.
pub fn write_index_script(items: &[QaItem], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let script = render_index_script(items)?;
    std::fs::write(path, script)
        .map_err(|e| WidgetError::Io(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), items = items.len(), "dataset index written");
    Ok(())
}
