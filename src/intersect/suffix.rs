use super::Intersection;
use super::compress::{Segments, compress_segments};
use crate::pattern::{Operand, PatternError, PatternResult, has_at_most_one_wildcard};

/// Suffix stage input. `x[wild]` is the wildcard and `x[..wild] == y[..wild]`.
#[derive(Debug, Clone, Copy)]
pub(super) struct SuffixScan<'a> {
    pub x: &'a str,
    pub y: &'a str,
    /// Caller-facing position of `x`; `y` is the other one.
    pub x_operand: Operand,
    pub wild: usize,
    pub wildcard: u8,
}

/// Walks both patterns from the end towards `wild`.
///
/// `x_end`/`y_end` are exclusive bounds of the unscanned part, so
/// `x[x_end..] == y[y_end..]` holds a common literal suffix on every turn.
#[tracing::instrument(level = "trace", skip(scan), fields(wild = scan.wild as u64))]
pub(super) fn scan_suffix(scan: SuffixScan<'_>) -> PatternResult<Intersection> {
    let SuffixScan {
        x,
        y,
        x_operand,
        wild,
        wildcard,
    } = scan;
    let xb = x.as_bytes();
    let yb = y.as_bytes();
    let mut x_end = xb.len();
    let mut y_end = yb.len();

    loop {
        if x_end == wild + 1 {
            // x's wildcard absorbs y[wild..y_end]
            if !has_at_most_one_wildcard(&yb[wild..y_end], wildcard) {
                return Err(multiple_wildcards(x_operand.swap(), y));
            }
            tracing::event!(tracing::Level::TRACE, operation = "scan_suffix", outcome = "subsumed");
            return Ok(Intersection::Pattern(y.to_string()));
        }

        let xc = xb[x_end - 1];

        if xc == wildcard {
            return Err(multiple_wildcards(x_operand, x));
        }

        if y_end == wild {
            tracing::event!(tracing::Level::TRACE, operation = "scan_suffix", outcome = "y_exhausted");
            return Ok(Intersection::Empty);
        }

        let yc = yb[y_end - 1];

        if yc == wildcard {
            return Ok(compress_segments(Segments {
                prefix: &x[..wild],
                q: &x[wild + 1..x_end],
                r_star: &y[wild..y_end],
                suffix: &y[y_end..],
            }));
        }

        if xc != yc {
            tracing::event!(tracing::Level::TRACE, operation = "scan_suffix", outcome = "mismatch");
            return Ok(Intersection::Empty);
        }

        x_end -= 1;
        y_end -= 1;
    }
}

fn multiple_wildcards(operand: Operand, pattern: &str) -> PatternError {
    tracing::event!(
        tracing::Level::DEBUG,
        operation = "scan_suffix",
        operand = %operand,
        pattern = %pattern,
        "pattern rejected"
    );

    PatternError::MultipleWildcards {
        operand,
        pattern: pattern.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<'a>(x: &'a str, y: &'a str, wild: usize) -> SuffixScan<'a> {
        SuffixScan {
            x,
            y,
            x_operand: Operand::X,
            wild,
            wildcard: b'*',
        }
    }

    #[test]
    fn wildcard_reached_returns_other_pattern() {
        assert_eq!(
            scan_suffix(scan("a*z", "abcz", 1)),
            Ok(Intersection::Pattern("abcz".to_string()))
        );
    }

    #[test]
    fn short_other_pattern_is_empty() {
        assert_eq!(scan_suffix(scan("a*bc", "ac", 1)), Ok(Intersection::Empty));
    }

    #[test]
    fn second_wildcard_in_x_names_x() {
        let err = scan_suffix(scan("a*b*c", "abbbc", 1)).unwrap_err();
        assert_eq!(err.operand(), Operand::X);
        assert_eq!(err.pattern(), "a*b*c");
    }

    #[test]
    fn extra_wildcards_in_absorbed_region_name_the_other_operand() {
        let err = scan_suffix(SuffixScan {
            x_operand: Operand::Y,
            ..scan("a*", "a**", 1)
        })
        .unwrap_err();
        assert_eq!(err.operand(), Operand::X);
        assert_eq!(err.pattern(), "a**");
    }

    #[test]
    fn facing_wildcards_are_compressed() {
        assert_eq!(
            scan_suffix(scan("a*cdea", "abcd*a", 1)),
            Ok(Intersection::Pattern("abcd*ea".to_string()))
        );
    }
}
