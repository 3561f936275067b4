//! Objective section processor (spec §4.4 "Objective").

use crate::builder::ModelBuilder;
use crate::error::{LpError, LpResult};
use crate::parse::expression::parse_expression;
use crate::section::bucket_end;
use crate::token::{ProcessedToken, Spanned};

/// Parse the objective bucket as a single expression. The whole bucket must
/// be consumed; anything left over is a structural error.
///
/// # Errors
/// Propagates expression-parser errors, or returns [`LpError::Structural`]
/// if tokens remain after the expression.
pub fn process(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    let mut i = 0;
    let expr = parse_expression(bucket, &mut i, builder, true)?;
    if i != bucket.len() {
        let pos = bucket.get(i).map(|(p, _)| *p).unwrap_or_else(|| bucket_end(bucket));
        return Err(LpError::structural(pos, "unexpected trailing tokens in objective section"));
    }
    builder.set_objective(expr);
    Ok(())
}
