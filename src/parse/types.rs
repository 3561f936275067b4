//! Binary, general, and semi-continuous section processors (spec §4.4).
//!
//! General and semi-continuous are handled in two passes: each section
//! marks the variables it mentions, then [`finalize_general_semi`] resolves
//! the semi-integer interaction once both buckets have drained. This reads
//! the same in either section order, unlike a single-pass promotion.

use crate::builder::ModelBuilder;
use crate::error::{LpError, LpResult, Position};
use crate::model::VariableType;
use crate::token::{ProcessedToken, Spanned};

fn pos_at(bucket: &[Spanned<ProcessedToken>], i: usize) -> Position {
    bucket.get(i).map(|(p, _)| *p).or_else(|| bucket.last().map(|(p, _)| *p)).unwrap_or_default()
}

/// # Errors
/// Returns [`LpError::Structural`] if any token in the binary bucket is not
/// a `VARIABLE_ID`.
pub fn process_binary(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    for (idx, (_, tok)) in bucket.iter().enumerate() {
        let ProcessedToken::VariableId(name) = tok else {
            return Err(LpError::structural(pos_at(bucket, idx), "binary section entries must be variable identifiers"));
        };
        let id = builder.intern(name);
        let var = builder.variable_mut(id);
        var.var_type = VariableType::Binary;
        var.lower = 0.0;
        var.upper = 1.0;
    }
    Ok(())
}

/// # Errors
/// Returns [`LpError::Structural`] if any token in the general bucket is not
/// a `VARIABLE_ID`.
pub fn process_general(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    for (idx, (_, tok)) in bucket.iter().enumerate() {
        let ProcessedToken::VariableId(name) = tok else {
            return Err(LpError::structural(pos_at(bucket, idx), "general section entries must be variable identifiers"));
        };
        let id = builder.intern(name);
        builder.variable_mut(id).seen_general = true;
    }
    Ok(())
}

/// # Errors
/// Returns [`LpError::Structural`] if any token in the semi-continuous
/// bucket is not a `VARIABLE_ID`.
pub fn process_semi_continuous(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    for (idx, (_, tok)) in bucket.iter().enumerate() {
        let ProcessedToken::VariableId(name) = tok else {
            return Err(LpError::structural(pos_at(bucket, idx), "semi-continuous section entries must be variable identifiers"));
        };
        let id = builder.intern(name);
        builder.variable_mut(id).seen_semi = true;
    }
    Ok(())
}

/// Resolves the `general`/`semi-continuous` interaction once both sections
/// have drained: seen in both becomes semi-integer, seen only in general
/// becomes general-integer, seen only in semi becomes semi-continuous.
pub fn finalize_general_semi(builder: &mut ModelBuilder) {
    for var in builder.variables_mut() {
        match (var.seen_general, var.seen_semi) {
            (true, true) => var.var_type = VariableType::SemiInteger,
            (true, false) => var.var_type = VariableType::GeneralInteger,
            (false, true) => var.var_type = VariableType::SemiContinuous,
            (false, false) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ModelBuilder;

    #[test]
    fn general_only_becomes_general_integer() {
        let mut builder = ModelBuilder::new();
        let id = builder.intern("x");
        builder.variable_mut(id).seen_general = true;
        finalize_general_semi(&mut builder);
        assert_eq!(builder.variable_mut(id).var_type, VariableType::GeneralInteger);
    }

    #[test]
    fn seen_in_both_becomes_semi_integer() {
        let mut builder = ModelBuilder::new();
        let id = builder.intern("x");
        {
            let var = builder.variable_mut(id);
            var.seen_general = true;
            var.seen_semi = true;
        }
        finalize_general_semi(&mut builder);
        assert_eq!(builder.variable_mut(id).var_type, VariableType::SemiInteger);
    }
}
