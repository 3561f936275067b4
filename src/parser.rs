//! Top-level pipeline entry point (spec §6 "Entry point").
//!
//! Wires the lexer, classifier, section splitter, section processors, and
//! model builder into the single `read`-style function external callers use.

use std::path::Path;

use crate::builder::ModelBuilder;
use crate::classify::classify;
use crate::error::{LpError, LpResult};
use crate::lexer::Lexer;
use crate::model::Model;
use crate::parse::{bounds, constraints, objective, sos, types};
use crate::section::{bucket_end, split};
use crate::source::{file_source, ByteSource, StringSource};

/// Runs the full pipeline over any [`ByteSource`], producing a [`Model`] or
/// the first error encountered.
///
/// # Errors
/// Propagates any [`LpError`] raised by the lexer, classifier, section
/// splitter, or a section processor. No partial model is ever returned.
pub fn parse<S: ByteSource>(source: S) -> LpResult<Model> {
    log::debug!("lexing LP source");
    let raw = Lexer::new(source).tokenize()?;
    log::debug!("classifying {} raw tokens", raw.len());
    let processed = classify(&raw)?;
    log::debug!("splitting {} processed tokens into sections", processed.len());
    let sections = split(processed)?;

    let mut builder = ModelBuilder::new();
    builder.set_sense(sections.sense);

    objective::process(&sections.objective, &mut builder)?;
    constraints::process(&sections.constraints, &mut builder)?;
    bounds::process(&sections.bounds, &mut builder)?;
    types::process_general(&sections.general, &mut builder)?;
    types::process_semi_continuous(&sections.semi_continuous, &mut builder)?;
    types::finalize_general_semi(&mut builder);
    types::process_binary(&sections.binary, &mut builder)?;
    sos::process(&sections.sos, &mut builder)?;

    if !sections.end.is_empty() {
        return Err(LpError::structural(bucket_end(&sections.end), "'end' section must be empty"));
    }

    let model = builder.build();
    log::info!("parsed model: {} variables, {} constraints, {} sos groups", model.variable_count(), model.constraints.len(), model.sos_groups.len());
    Ok(model)
}

/// Convenience entry point over an in-memory string.
///
/// # Errors
/// See [`parse`].
pub fn parse_str(input: &str) -> LpResult<Model> {
    parse(StringSource::new(input))
}

/// Convenience entry point that opens and parses a file.
///
/// # Errors
/// Returns [`LpError::Io`] if the file cannot be opened, otherwise see
/// [`parse`].
pub fn parse_file(path: &Path) -> LpResult<Model> {
    let source = file_source(path)?;
    parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComparisonOp, Sense, VariableType};

    #[test]
    fn scenario_linear_bounds() {
        let model = parse_str("min\n obj: 3 x + 2 y\n st\n c1: x + y <= 10\n bounds\n 0 <= x <= 5\n y >= -1\n end\n").unwrap();
        assert_eq!(model.sense, Sense::Minimize);
        assert_eq!(model.objective.linear.len(), 2);
        assert_eq!(model.objective.offset, 0.0);
        assert_eq!(model.constraints.len(), 1);
        let c1 = &model.constraints[0];
        assert_eq!(c1.lower, f64::NEG_INFINITY);
        assert_eq!(c1.upper, 10.0);
        let x = model.variables().iter().find(|v| v.name == "x").unwrap();
        assert_eq!((x.lower, x.upper), (0.0, 5.0));
        let y = model.variables().iter().find(|v| v.name == "y").unwrap();
        assert_eq!((y.lower, y.upper), (-1.0, f64::INFINITY));
    }

    #[test]
    fn scenario_objective_quadratic_with_trailer() {
        let model = parse_str("max\n o: [ 2 x^2 + 3 x * y ] / 2\n st\n x + y = 1\n end\n").unwrap();
        assert_eq!(model.sense, Sense::Maximize);
        assert!(model.objective.linear.is_empty());
        assert_eq!(model.objective.quadratic.len(), 2);
        assert_eq!(model.constraints.len(), 1);
        assert_eq!(model.constraints[0].lower, 1.0);
        assert_eq!(model.constraints[0].upper, 1.0);
    }

    #[test]
    fn scenario_constraint_quadratic_rejects_trailer() {
        let model = parse_str("min\n o: x\n st\n q: [ x * y ] <= 4\n end\n").unwrap();
        assert_eq!(model.constraints.len(), 1);
        assert_eq!(model.constraints[0].expression.quadratic.len(), 1);
        assert_eq!(model.constraints[0].upper, 4.0);
    }

    #[test]
    fn scenario_general_free_and_fixed() {
        let model = parse_str("min\n o: x + y\n st\n c: x - y >= 0\n bounds\n x free\n y = 2\n general\n x\n end\n").unwrap();
        let x = model.variables().iter().find(|v| v.name == "x").unwrap();
        assert_eq!(x.var_type, VariableType::GeneralInteger);
        assert_eq!((x.lower, x.upper), (f64::NEG_INFINITY, f64::INFINITY));
        let y = model.variables().iter().find(|v| v.name == "y").unwrap();
        assert_eq!((y.lower, y.upper), (2.0, 2.0));
    }

    #[test]
    fn scenario_sos_group() {
        let model = parse_str("min\n o: x\n sos\n g1: S1 :: x:1 y:2\n end\n").unwrap();
        assert_eq!(model.sos_groups.len(), 1);
        let group = &model.sos_groups[0];
        assert_eq!(group.name, "g1");
        assert_eq!(group.entries.len(), 2);
        assert_eq!(model.variable_count(), 2);
    }

    #[test]
    fn scenario_strict_less_than_is_rejected() {
        let result = parse_str("min\n o: x\n st\n c: x < 3\n end\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_file_with_only_end_is_minimal_model() {
        let model = parse_str("end\n").unwrap();
        assert_eq!(model.sense, Sense::Minimize);
        assert!(model.objective.linear.is_empty());
        assert!(model.constraints.is_empty());
        assert_eq!(model.variable_count(), 0);
    }

    #[test]
    fn duplicate_end_section_is_rejected() {
        let result = parse_str("min\n o: x\n end\n end\n");
        assert!(result.is_err());
    }

    #[test]
    fn non_empty_end_section_is_rejected() {
        let result = parse_str("min\n o: x\n end\n z\n");
        assert!(result.is_err());
    }

    #[test]
    fn comparison_display_is_exposed_for_diagnostics() {
        assert_eq!(ComparisonOp::Ge.to_string(), ">=");
    }
}
