//! JSON output renderer.
//!
//! Outputs `{"operation": "...", "operands": [a, b], "result": n}`.

use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let mut out = serde_json::to_string(evaluation).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Number, Operation};

    #[test]
    fn render_json() {
        let eval = Evaluation::new(Operation::Combine, 2, 3, 6i64);
        let output = JsonRenderer.render(&eval);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["operation"], "combine");
        assert_eq!(parsed["operands"], serde_json::json!([2, 3]));
        assert_eq!(parsed["result"], 6);
    }

    #[test]
    fn render_json_float_result() {
        let eval = Evaluation::new(Operation::Compute, 1.5, 1, Number::Float(2.5));
        let output = JsonRenderer.render(&eval);
        assert!(output.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["result"], 2.5);
    }
}
