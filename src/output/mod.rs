//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::{Evaluation, OutputFormat};

/// Trait for rendering an evaluation to an output format.
pub trait OutputRenderer {
    /// Render the evaluation to a string, including a trailing newline.
    fn render(&self, evaluation: &Evaluation) -> String;
}

/// Render with the renderer matching `format`.
pub fn render(format: OutputFormat, evaluation: &Evaluation) -> String {
    match format {
        OutputFormat::Terminal => terminal::TerminalRenderer.render(evaluation),
        OutputFormat::Json => json::JsonRenderer.render(evaluation),
    }
}
