//! Splitting long item lists into page-sized groups.

/// Discord's limit on fields per embed.
pub const DEFAULT_SUB_LIST_LEN: usize = 25;

/// Split `items` into consecutive groups of at most `max_len`, keeping order.
///
/// Handy for spreading embed fields over several pages. The last group may be
/// shorter; an empty input yields no groups. A `max_len` of 0 is treated as 1.
pub fn generate_sub_lists<T: Clone>(items: &[T], max_len: usize) -> Vec<Vec<T>> {
    items.chunks(max_len.max(1)).map(<[T]>::to_vec).collect()
}
