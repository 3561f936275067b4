//! SOS section processor (spec §4.4 "SOS", §9 "Context-sensitive label vs.
//! variable").
//!
//! Inside this section, `CONSTRAINT_LABEL` tokens are reinterpreted: the
//! first names a group, and every later one is a variable reference paired
//! with a weight. The classifier cannot tell these apart from a regular
//! constraint label, so the reinterpretation happens entirely here.

use crate::builder::ModelBuilder;
use crate::error::{LpError, LpResult, Position};
use crate::model::SosGroup;
use crate::token::{ProcessedToken, Spanned};

fn peek<'t>(bucket: &'t [Spanned<ProcessedToken>], i: usize) -> Option<&'t ProcessedToken> {
    bucket.get(i).map(|(_, t)| t)
}

fn pos_at(bucket: &[Spanned<ProcessedToken>], i: usize) -> Position {
    bucket.get(i).map(|(p, _)| *p).or_else(|| bucket.last().map(|(p, _)| *p)).unwrap_or_default()
}

/// # Errors
/// Returns [`LpError::Structural`] if a group is missing its name or type
/// marker.
pub fn process(bucket: &[Spanned<ProcessedToken>], builder: &mut ModelBuilder) -> LpResult<()> {
    let mut i = 0;
    while i < bucket.len() {
        let name_pos = pos_at(bucket, i);
        let name = match peek(bucket, i) {
            Some(ProcessedToken::ConstraintLabel(name)) => name.clone(),
            _ => return Err(LpError::structural(name_pos, "SOS group is missing its name")),
        };
        i += 1;

        let type_pos = pos_at(bucket, i);
        let sos_type = match peek(bucket, i) {
            Some(ProcessedToken::SosType(1)) => crate::model::SosType::S1,
            Some(ProcessedToken::SosType(2)) => crate::model::SosType::S2,
            _ => return Err(LpError::structural(type_pos, "SOS group is missing its S1/S2 type marker")),
        };
        i += 1;

        let mut entries = Vec::new();
        while let (Some(ProcessedToken::ConstraintLabel(var_name)), Some(ProcessedToken::Constant(weight))) = (peek(bucket, i), peek(bucket, i + 1)) {
            let var_name = var_name.clone();
            let weight = *weight;
            let id = builder.intern(&var_name);
            entries.push((id, weight));
            i += 2;
        }

        builder.push_sos_group(SosGroup { name, sos_type, entries });
    }
    Ok(())
}
