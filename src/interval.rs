//! Ordered interval-set insertion with coalescing.
//!
//! The cursor list keeps its cursors sorted by start index and mutually
//! non-overlapping. Inserting a new interval locates its position with a
//! binary search, absorbs every neighbour it overlaps, and replaces the
//! absorbed run with a single coalesced interval.
//!
//! Overlap rule:
//! - two non-empty intervals overlap when they share at least one position
//!   (`s1 < e2 && s2 < e1`), so `[2, 6)` and `[6, 9)` stay separate;
//! - when either interval is empty, touching counts (`s1 <= e2 && s2 <= e1`),
//!   so two carets at the same index collapse into one and a caret on the
//!   edge of a selection is absorbed by it.

/// An interval over gap indices with an arbitrary payload.
pub trait Interval: Sized {
    /// The ordered `(start, end)` pair covered by this interval.
    fn span(&self) -> (usize, usize);

    /// Build the interval covering `start..end` that replaces `inserted` and
    /// every interval in `absorbed` (in list order).
    fn coalesce(start: usize, end: usize, inserted: &Self, absorbed: &[Self]) -> Self;
}

/// Whether two spans collide under the rule described in the module docs.
pub fn overlaps(a: (usize, usize), b: (usize, usize)) -> bool {
    let (s1, e1) = a;
    let (s2, e2) = b;
    if s1 == e1 || s2 == e2 {
        s1 <= e2 && s2 <= e1
    } else {
        s1 < e2 && s2 < e1
    }
}

/// Insert `item` into the sorted, non-overlapping `list`, coalescing every
/// interval it overlaps.
pub fn merge<T: Interval>(list: &mut Vec<T>, item: T) {
    let (start, end) = item.span();

    // Ends are non-decreasing in a sorted non-overlapping list, so nothing
    // before this point can reach `start`.
    let first_candidate = list.partition_point(|i| i.span().1 < start);

    let mut first = None;
    let mut last = first_candidate;
    for (offset, existing) in list[first_candidate..].iter().enumerate() {
        let span = existing.span();
        if span.0 > end {
            break;
        }
        if overlaps(span, (start, end)) {
            first.get_or_insert(first_candidate + offset);
            last = first_candidate + offset;
        }
    }

    match first {
        Some(first) => {
            let absorbed = &list[first..=last];
            let merged_start = absorbed[0].span().0.min(start);
            let merged_end = absorbed[absorbed.len() - 1].span().1.max(end);
            let merged = T::coalesce(merged_start, merged_end, &item, absorbed);
            list.splice(first..=last, std::iter::once(merged));
        }
        None => {
            let at = list.partition_point(|i| i.span() <= (start, end));
            list.insert(at, item);
        }
    }
}

/// Check that `list` is sorted by start and free of overlaps.
pub fn is_normalized<T: Interval>(list: &[T]) -> bool {
    list.windows(2).all(|pair| {
        let a = pair[0].span();
        let b = pair[1].span();
        a <= b && !overlaps(a, b)
    })
}
