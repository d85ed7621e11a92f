//! Console lines describing each solver's progress.

use tandem_core::{Scale, SolverKind};
use tandem_solvers::{Status, Step};

use crate::policy::SYMMETRIC_LOG_INTERVAL;

/// Printed to both consoles when the comparison is reset.
pub const RESET_LINE: &str = "Reset.";

/// Returns the lines a solver's console starts a run with.
pub(crate) fn start_lines(kind: SolverKind, scale: Scale) -> Vec<String> {
    match kind {
        SolverKind::Symmetric => {
            let label = match scale {
                Scale::Small => "Small",
                Scale::Large => "Large",
            };
            vec![
                format!(
                    "Problem Scale: {label} (N={})",
                    group_thousands(scale.dimension())
                ),
                "Starting interior point method...".to_owned(),
            ]
        }
        SolverKind::Asymmetric => vec!["Initializing asymmetric solver...".to_owned()],
    }
}

/// Formats `n` with a comma between each group of three digits.
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Returns the progress line for a running step, if this step prints one.
pub(crate) fn progress_line(kind: SolverKind, scale: Scale, step: &Step) -> Option<String> {
    if step.status != Status::Running {
        return None;
    }
    match kind {
        SolverKind::Symmetric => (step.iteration % SYMMETRIC_LOG_INTERVAL == 0)
            .then(|| format!("Update... cond(H) = {:.1e}", scale.condition_number())),
        SolverKind::Asymmetric => Some(format!(
            "Step {}: Residual {:.2e}",
            step.iteration, step.error
        )),
    }
}

/// Returns the line a solver's console prints on convergence.
pub(crate) fn converged_line(kind: SolverKind) -> &'static str {
    match kind {
        SolverKind::Symmetric => "Converged.",
        SolverKind::Asymmetric => "Converged. Machine precision.",
    }
}
