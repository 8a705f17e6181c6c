use super::token::Token;
use std::collections::HashSet;

/// Tolerance compensating for floating-point rounding at exact boundary
/// progress values.
const PROGRESS_EPSILON: f64 = 0.001;

/// Upper bound of the reveal control range.
pub const MAX_PROGRESS: f64 = 100.0;

/// Compute the set of `global_index` values visible at `progress`.
///
/// `progress` is the 0-100 reveal scalar; out-of-range values clamp. The
/// whole first source line is always visible so the narrative never opens
/// blank. Every other token at index `i` reveals once `progress/100` reaches
/// `i/(N-1)`, within `PROGRESS_EPSILON`. For a fixed token sequence the
/// result grows monotonically with `progress`.
pub fn visible_indices(tokens: &[Token], progress: f64) -> HashSet<usize> {
    let mut visible = HashSet::new();
    if tokens.is_empty() {
        return visible;
    }

    let p = progress.clamp(0.0, MAX_PROGRESS) / MAX_PROGRESS;
    let total = tokens.len();

    for token in tokens {
        if token.line_index == 0 {
            visible.insert(token.global_index);
            continue;
        }
        // A token outside line 0 implies total >= 2.
        let word_progress = token.global_index as f64 / (total - 1) as f64;
        if p >= word_progress - PROGRESS_EPSILON {
            visible.insert(token.global_index);
        }
    }

    visible
}
