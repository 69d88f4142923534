use super::Intersection;
use super::suffix::{SuffixScan, scan_suffix};
use crate::pattern::{Operand, PatternResult};

/// Walks both patterns from the start.
///
/// Loop invariant: `x[..i] == y[..i]` and that range holds no wildcard.
#[tracing::instrument(level = "trace", skip(x, y), fields(x_len = x.len() as u64, y_len = y.len() as u64))]
pub(super) fn scan_prefix(x: &str, y: &str, wildcard: u8) -> PatternResult<Intersection> {
    let xb = x.as_bytes();
    let yb = y.as_bytes();
    let mut i = 0usize;

    while i < xb.len() && i < yb.len() {
        if xb[i] == wildcard {
            return scan_suffix(SuffixScan {
                x,
                y,
                x_operand: Operand::X,
                wild: i,
                wildcard,
            });
        }

        if yb[i] == wildcard {
            return scan_suffix(SuffixScan {
                x: y,
                y: x,
                x_operand: Operand::Y,
                wild: i,
                wildcard,
            });
        }

        if xb[i] != yb[i] {
            tracing::event!(tracing::Level::TRACE, operation = "scan_prefix", mismatch_at = i as u64);
            return Ok(Intersection::Empty);
        }

        i += 1;
    }

    Ok(close_prefix(x, y, wildcard))
}

/// One pattern is exhausted and the shorter is a literal prefix of the longer.
fn close_prefix(x: &str, y: &str, wildcard: u8) -> Intersection {
    if x.len() == y.len() {
        return Intersection::Pattern(x.to_string());
    }

    let (short, long) = if x.len() < y.len() { (x, y) } else { (y, x) };

    if long.len() == short.len() + 1 && long.as_bytes()[short.len()] == wildcard {
        Intersection::Pattern(short.to_string())
    } else {
        Intersection::Empty
    }
}
