//! Constraints section processor (spec §4.4 "Constraints").

use crate::builder::ModelBuilder;
use crate::error::{LpError, LpResult};
use crate::model::{ComparisonOp, Constraint};
use crate::parse::expression::parse_expression;
use crate::token::{ProcessedToken, Spanned};

/// Repeatedly parses `expression COMPARISON CONSTANT` until the bucket is
/// drained, folding each comparison into a lower/upper bound pair.
///
/// # Errors
/// Returns [`LpError::Structural`] if a comparison operator is missing, and
/// [`LpError::Semantic`] for a non-constant right-hand side or a strict
/// `<`/`>` comparison (only `<=`, `>=`, `=` are valid here).
pub fn process(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    let mut i = 0;
    while i < bucket.len() {
        let expression = parse_expression(bucket, &mut i, builder, false)?;

        let comparison_pos = bucket.get(i).map(|(p, _)| *p).unwrap_or_default();
        let op = match bucket.get(i).map(|(_, t)| t) {
            Some(ProcessedToken::Comparison(op)) => *op,
            _ => return Err(LpError::structural(comparison_pos, "constraint is missing its comparison operator")),
        };
        i += 1;

        let value_pos = bucket.get(i).map(|(p, _)| *p).unwrap_or(comparison_pos);
        let value = match bucket.get(i).map(|(_, t)| t) {
            Some(ProcessedToken::Constant(v)) => *v,
            _ => return Err(LpError::semantic(value_pos, "constraint right-hand side must be a constant")),
        };
        i += 1;

        let (lower, upper) = match op {
            ComparisonOp::Eq => (value, value),
            ComparisonOp::Le => (f64::NEG_INFINITY, value),
            ComparisonOp::Ge => (value, f64::INFINITY),
            ComparisonOp::Lt | ComparisonOp::Gt => {
                return Err(LpError::semantic(comparison_pos, "strict '<' or '>' is not allowed as a constraint comparison"));
            }
        };

        builder.push_constraint(Constraint { expression, lower, upper });
    }
    Ok(())
}
