//! Bounds section processor (spec §4.4 "Bounds").
//!
//! Each entry is one of four forms, tried in order; note the asymmetry
//! between the `CONSTANT COMPARISON VARIABLE_ID` and
//! `VARIABLE_ID COMPARISON CONSTANT` forms — a leading `<=` means "the
//! constant is a lower bound", while a trailing `<=` means "the constant is
//! an upper bound".

use crate::builder::ModelBuilder;
use crate::error::{LpError, LpResult, Position};
use crate::model::ComparisonOp;
use crate::token::{ProcessedToken, Spanned};

fn peek<'t>(bucket: &'t [Spanned<ProcessedToken>], i: usize) -> Option<&'t ProcessedToken> {
    bucket.get(i).map(|(_, t)| t)
}

fn pos_at(bucket: &[Spanned<ProcessedToken>], i: usize) -> Position {
    bucket.get(i).map(|(p, _)| *p).or_else(|| bucket.last().map(|(p, _)| *p)).unwrap_or_default()
}

/// # Errors
/// Returns [`LpError::Structural`] if an entry matches none of the four
/// forms, and [`LpError::Semantic`] if a strict `<`/`>` is used.
pub fn process(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    let mut i = 0;
    while i < bucket.len() {
        let entry_pos = pos_at(bucket, i);

        // Form 1: VARIABLE_ID FREE
        if let (Some(ProcessedToken::VariableId(name)), Some(ProcessedToken::Free)) = (peek(bucket, i), peek(bucket, i + 1)) {
            let id = builder.intern(name);
            let var = builder.variable_mut(id);
            var.lower = f64::NEG_INFINITY;
            var.upper = f64::INFINITY;
            i += 2;
            continue;
        }

        // Form 2: CONSTANT <= VARIABLE_ID <= CONSTANT
        if let (
            Some(ProcessedToken::Constant(lo)),
            Some(ProcessedToken::Comparison(ComparisonOp::Le)),
            Some(ProcessedToken::VariableId(name)),
            Some(ProcessedToken::Comparison(ComparisonOp::Le)),
            Some(ProcessedToken::Constant(hi)),
        ) = (peek(bucket, i), peek(bucket, i + 1), peek(bucket, i + 2), peek(bucket, i + 3), peek(bucket, i + 4))
        {
            let id = builder.intern(name);
            let var = builder.variable_mut(id);
            var.lower = *lo;
            var.upper = *hi;
            i += 5;
            continue;
        }

        // Form 3: CONSTANT COMPARISON VARIABLE_ID
        if let (Some(ProcessedToken::Constant(c)), Some(ProcessedToken::Comparison(op)), Some(ProcessedToken::VariableId(name))) =
            (peek(bucket, i), peek(bucket, i + 1), peek(bucket, i + 2))
        {
            let op = *op;
            let c = *c;
            let name = name.clone();
            let op_pos = pos_at(bucket, i + 1);
            let id = builder.intern(&name);
            let var = builder.variable_mut(id);
            match op {
                ComparisonOp::Le => var.lower = c,
                ComparisonOp::Ge => var.upper = c,
                ComparisonOp::Eq => {
                    var.lower = c;
                    var.upper = c;
                }
                ComparisonOp::Lt | ComparisonOp::Gt => {
                    return Err(LpError::semantic(op_pos, "strict '<' or '>' is not allowed in bounds"));
                }
            }
            i += 3;
            continue;
        }

        // Form 4: VARIABLE_ID COMPARISON CONSTANT
        if let (Some(ProcessedToken::VariableId(name)), Some(ProcessedToken::Comparison(op)), Some(ProcessedToken::Constant(c))) =
            (peek(bucket, i), peek(bucket, i + 1), peek(bucket, i + 2))
        {
            let op = *op;
            let c = *c;
            let name = name.clone();
            let op_pos = pos_at(bucket, i + 1);
            let id = builder.intern(&name);
            let var = builder.variable_mut(id);
            match op {
                ComparisonOp::Le => var.upper = c,
                ComparisonOp::Ge => var.lower = c,
                ComparisonOp::Eq => {
                    var.lower = c;
                    var.upper = c;
                }
                ComparisonOp::Lt | ComparisonOp::Gt => {
                    return Err(LpError::semantic(op_pos, "strict '<' or '>' is not allowed in bounds"));
                }
            }
            i += 3;
            continue;
        }

        return Err(LpError::structural(entry_pos, "bounds entry matches none of the recognised forms"));
    }
    Ok(())
}
