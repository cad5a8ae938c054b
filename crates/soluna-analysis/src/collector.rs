//! The diagnostics collector.
//!
//! Merges lexical and syntactic diagnostics into the single ordered
//! list the session exposes.

use soluna_diagnostic::Diagnostic;

/// Merge two diagnostic streams into one.
///
/// Diagnostics are ordered by start offset; on a tie, lexical comes
/// before syntactic. Adjacent diagnostics with the same phase and code
/// whose spans overlap collapse into the first one.
pub fn merge(lexical: Vec<Diagnostic>, syntactic: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut all = lexical;
    all.extend(syntactic);
    all.sort_by_key(|d| (d.span.start.offset, d.phase));

    let mut merged: Vec<Diagnostic> = Vec::with_capacity(all.len());
    for diag in all {
        if let Some(prev) = merged.last()
            && prev.phase == diag.phase
            && prev.code == diag.code
            && diag.span.start.offset <= prev.span.end.offset
        {
            continue;
        }
        merged.push(diag);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use soluna_common::{Position, Span};
    use soluna_diagnostic::{ErrorCode, Phase};

    fn diag(phase: Phase, code: ErrorCode, start: u32, end: u32) -> Diagnostic {
        let span = Span::new(
            Position::new(1, start + 1, start),
            Position::new(1, end + 1, end),
        );
        Diagnostic::error(phase, code, span, "test")
    }

    #[test]
    fn sorts_by_offset() {
        let lexical = vec![diag(Phase::Lexical, ErrorCode::UnclosedString, 10, 12)];
        let syntactic = vec![diag(Phase::Syntactic, ErrorCode::ParserError, 2, 4)];

        let merged = merge(lexical, syntactic);
        assert_eq!(merged[0].span.start.offset, 2);
        assert_eq!(merged[1].span.start.offset, 10);
    }

    #[test]
    fn lexical_wins_offset_ties() {
        let lexical = vec![diag(Phase::Lexical, ErrorCode::UnrecognizedChar, 5, 6)];
        let syntactic = vec![diag(Phase::Syntactic, ErrorCode::ParserError, 5, 6)];

        let merged = merge(lexical, syntactic);
        assert_eq!(merged[0].phase, Phase::Lexical);
        assert_eq!(merged[1].phase, Phase::Syntactic);
    }

    #[test]
    fn collapses_overlapping_duplicates() {
        let lexical = vec![
            diag(Phase::Lexical, ErrorCode::UnclosedString, 3, 9),
            diag(Phase::Lexical, ErrorCode::UnclosedString, 7, 11),
        ];

        let merged = merge(lexical, vec![]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].span.start.offset, 3);
    }

    #[test]
    fn keeps_distinct_codes_apart() {
        let lexical = vec![
            diag(Phase::Lexical, ErrorCode::UnclosedString, 3, 9),
            diag(Phase::Lexical, ErrorCode::InvalidEscape, 7, 8),
        ];

        let merged = merge(lexical, vec![]);
        assert_eq!(merged.len(), 2);
    }
}
