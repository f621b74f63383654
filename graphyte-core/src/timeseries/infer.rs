/// Estimate a representative step (in seconds) from positive adjacent deltas
/// of the given epoch timestamps.
///
/// Prefer the mode (most frequent positive delta); if there is no unique mode,
/// return the lower median.
///
/// Unique mode (60s):
///
/// ```
/// use graphyte_core::estimate_step_seconds;
/// // Adjacent deltas: 60,60,60,120,180  => unique mode is 60
/// assert_eq!(estimate_step_seconds(&[0, 60, 120, 180, 300, 480]), Some(60));
/// ```
///
/// No unique mode: fall back to lower median (60s):
///
/// ```
/// use graphyte_core::estimate_step_seconds;
/// // Adjacent deltas: 60,60,120,120  => lower median is 60
/// assert_eq!(estimate_step_seconds(&[0, 60, 120, 240, 360]), Some(60));
/// ```
///
/// The input order does not matter; duplicates are ignored. Returns `None` if
/// fewer than two distinct timestamps are present.
#[must_use]
pub fn estimate_step_seconds(timestamps: &[i64]) -> Option<i64> {
    if timestamps.len() < 2 {
        return None;
    }
    let mut ts = timestamps.to_vec();
    ts.sort_unstable();

    let mut deltas: Vec<i64> = ts
        .windows(2)
        .filter_map(|w| w[1].checked_sub(w[0]))
        .filter(|&d| d > 0)
        .collect();
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    // Run-length over the sorted deltas; the longest run is the mode.
    let mut best_delta: i64 = deltas[0];
    let mut best_count: usize = 0;
    let mut num_best_candidates: usize = 0;

    let mut cur_delta: i64 = deltas[0];
    let mut cur_count: usize = 0;
    for &d in &deltas {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        if cur_count > best_count {
            best_count = cur_count;
            best_delta = cur_delta;
            num_best_candidates = 1;
        } else if cur_count == best_count {
            num_best_candidates += 1;
        }
        cur_delta = d;
        cur_count = 1;
    }
    if cur_count > best_count {
        best_delta = cur_delta;
        num_best_candidates = 1;
    } else if cur_count == best_count {
        num_best_candidates += 1;
    }

    if num_best_candidates == 1 {
        return Some(best_delta);
    }

    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}
