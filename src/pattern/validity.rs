use memchr::memchr_iter;

/// Returns `true` when `bytes` holds zero or one `wildcard` bytes.
#[inline]
pub fn has_at_most_one_wildcard(bytes: &[u8], wildcard: u8) -> bool {
    memchr_iter(wildcard, bytes).nth(1).is_none()
}

#[inline]
pub fn count_wildcards(bytes: &[u8], wildcard: u8) -> usize {
    memchr_iter(wildcard, bytes).count()
}
