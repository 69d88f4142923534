use super::Intersection;

/// Pieces of `x = prefix * q suffix` and `y = prefix r * suffix`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Segments<'a> {
    pub prefix: &'a str,
    pub q: &'a str,
    /// `r` followed by the wildcard.
    pub r_star: &'a str,
    pub suffix: &'a str,
}

/// Joins facing wildcards `*q` and `r*` into `r*q'`, where `q'` is `q`
/// without its longest prefix that is also a suffix of `r`.
#[tracing::instrument(level = "trace", skip(segments), fields(q_len = segments.q.len() as u64, r_len = segments.r_star.len() as u64 - 1))]
pub(super) fn compress_segments(segments: Segments<'_>) -> Intersection {
    let Segments {
        prefix,
        q,
        r_star,
        suffix,
    } = segments;
    let r = &r_star[..r_star.len() - 1];
    let trim = overlap_len(r.as_bytes(), q.as_bytes());

    tracing::event!(tracing::Level::TRACE, operation = "compress_segments", trim = trim as u64);

    Intersection::Pattern([prefix, r_star, &q[trim..], suffix].concat())
}

/// Longest `k` such that the last `k` bytes of `r` equal the first `k` bytes
/// of `q`. Each candidate is compared from scratch, so the worst case is
/// `O(len(q) * len(r))`.
pub(super) fn overlap_len(r: &[u8], q: &[u8]) -> usize {
    (1..=q.len().min(r.len()))
        .rev()
        .find(|&k| r[r.len() - k..] == q[..k])
        .unwrap_or(0)
}
