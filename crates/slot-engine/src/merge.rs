//! Coalesce overlapping or touching busy ranges.

/// A half-open `[start, end)` range in minutes since midnight.
pub type MinuteRange = (u32, u32);

/// Merge overlapping or adjacent ranges into a sorted, disjoint list.
///
/// Ranges that touch (`start == previous end`) are merged as well. The result
/// covers exactly the same minutes as the input with the fewest ranges.
pub fn merge_intervals(mut intervals: Vec<MinuteRange>) -> Vec<MinuteRange> {
    if intervals.is_empty() {
        return intervals;
    }

    // Order among equal starts does not change the merged result.
    intervals.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<MinuteRange> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}
