//! Section splitter (spec §4.3).
//!
//! Partitions a processed-token sequence into per-section-kind buckets. The
//! sections themselves carry no structure beyond "tokens between one header
//! and the next"; each bucket is handed whole to its section processor.

use crate::error::{LpError, LpResult, Position};
use crate::model::Sense;
use crate::token::{ProcessedToken, SectionKind, Spanned};

/// Tokens grouped by section, plus the objective sense recorded from the
/// `objective` header (defaults to minimize if the header carried none,
/// which cannot happen for a well-formed file but keeps this total).
#[derive(Debug, Default)]
pub struct Sections {
    pub sense: Sense,
    pub objective: Vec<Spanned<ProcessedToken>>,
    pub constraints: Vec<Spanned<ProcessedToken>>,
    pub bounds: Vec<Spanned<ProcessedToken>>,
    pub general: Vec<Spanned<ProcessedToken>>,
    pub binary: Vec<Spanned<ProcessedToken>>,
    pub semi_continuous: Vec<Spanned<ProcessedToken>>,
    pub sos: Vec<Spanned<ProcessedToken>>,
    pub end: Vec<Spanned<ProcessedToken>>,
}

impl Sections {
    fn bucket_mut(&mut self, kind: SectionKind) -> &mut Vec<Spanned<ProcessedToken>> {
        match kind {
            SectionKind::Objective => &mut self.objective,
            SectionKind::Constraints => &mut self.constraints,
            SectionKind::Bounds => &mut self.bounds,
            SectionKind::General => &mut self.general,
            SectionKind::Binary => &mut self.binary,
            SectionKind::SemiContinuous => &mut self.semi_continuous,
            SectionKind::Sos => &mut self.sos,
            SectionKind::End => &mut self.end,
        }
    }
}

/// Split a processed-token sequence into per-section buckets.
///
/// # Errors
/// Returns [`LpError::Structural`] if a section kind's header appears more
/// than once.
pub fn split(tokens: Vec<Spanned<ProcessedToken>>) -> LpResult<Sections> {
    let mut sections = Sections::default();
    let mut seen: Vec<SectionKind> = Vec::new();
    let mut current: Option<SectionKind> = None;

    for (pos, tok) in tokens {
        if let ProcessedToken::SectionHeader { kind, sense } = tok {
            if seen.contains(&kind) {
                return Err(LpError::structural(pos, format!("duplicate '{kind}' section")));
            }
            seen.push(kind);
            if kind == SectionKind::Objective {
                if let Some(sense) = sense {
                    sections.sense = sense;
                }
            }
            current = Some(kind);
            continue;
        }

        match current {
            Some(kind) => sections.bucket_mut(kind).push((pos, tok)),
            None => return Err(LpError::structural(pos, "token precedes the first section header")),
        }
    }

    Ok(sections)
}

/// Position to report for an "unexpected end of section" error when a
/// bucket runs out before a mandatory token is found.
pub fn bucket_end(bucket: &[Spanned<ProcessedToken>]) -> Position {
    bucket.last().map(|(p, _)| *p).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::lexer::Lexer;
    use crate::source::StringSource;

    fn split_str(input: &str) -> Sections {
        let raw = Lexer::new(StringSource::new(input)).tokenize().unwrap();
        let processed = classify(&raw).unwrap();
        split(processed).unwrap()
    }

    #[test]
    fn headers_route_to_buckets_without_leaking_into_none() {
        let sections = split_str("min\n o: x\n st\n c: x <= 1\n end\n");
        assert_eq!(sections.sense, Sense::Minimize);
        assert!(!sections.objective.is_empty());
        assert!(!sections.constraints.is_empty());
        assert!(sections.end.is_empty());
    }

    #[test]
    fn maximize_sense_is_recorded() {
        let sections = split_str("max\n o: x\n end\n");
        assert_eq!(sections.sense, Sense::Maximize);
    }

    #[test]
    fn duplicate_section_header_is_structural_error() {
        let raw = Lexer::new(StringSource::new("min\n o: x\n min\n o2: y\n end\n")).tokenize().unwrap();
        let processed = classify(&raw).unwrap();
        assert!(split(processed).is_err());
    }

    #[test]
    fn token_before_any_header_is_structural_error() {
        let raw = Lexer::new(StringSource::new("x min\n o: x\n end\n")).tokenize().unwrap();
        let processed = classify(&raw).unwrap();
        assert!(split(processed).is_err());
    }
}
