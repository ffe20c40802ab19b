//! Terminal renderer: one styled line per evaluation.

use colored::Colorize;

use crate::models::{Evaluation, Operation};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let [a, b] = &evaluation.operands;
        let symbol = match evaluation.operation {
            Operation::Add | Operation::Compute => "+",
            Operation::Combine => "×",
        };

        format!(
            "{} {} {}\n",
            format!("{a} {symbol} {b}").dimmed(),
            "=".dimmed(),
            evaluation.result.to_string().green().bold(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_add() {
        colored::control::set_override(false);
        let eval = Evaluation::new(Operation::Add, 5, 3, 8i64);
        assert_eq!(TerminalRenderer.render(&eval), "5 + 3 = 8\n");
    }

    #[test]
    fn render_combine_uses_multiplication_sign() {
        let eval = Evaluation::new(Operation::Combine, 2, 3, 6i64);
        let output = TerminalRenderer.render(&eval);
        // May be wrapped in ANSI color codes
        assert!(output.contains('×'));
        assert!(output.contains('6'));
    }
}
