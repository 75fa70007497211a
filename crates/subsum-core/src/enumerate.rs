//! The core search: backtracking subset-sum enumeration with suffix-sum
//! anchoring, downward descent over the positive pool, and an exhaustive
//! negative-correction sub-search for overshoots.

use std::collections::HashSet;

use crate::constants::EPSILON;

/// All distinct subsets of `values` summing to `target` within EPSILON.
///
/// Subset identity is the sorted multiset of values; results keep the
/// search's discovery order. Zero-valued elements are excluded from both
/// pools, so no result ever contains a zero. A negative target is
/// searched with every sign flipped and the results re-negated on the
/// way out.
///
/// Worst case is exponential — this is exhaustive backtracking with
/// pruning, not a polynomial algorithm.
pub fn enumerate_subsets(values: &[f64], target: f64) -> Vec<Vec<f64>> {
    let flip_back = target < 0.0;
    let target = if flip_back { -target } else { target };
    let values: Vec<f64> = if flip_back {
        values.iter().map(|v| -v).collect()
    } else {
        values.to_vec()
    };

    let mut positives: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
    positives.sort_by(f64::total_cmp);
    let mut negatives: Vec<f64> = values.iter().copied().filter(|v| *v < 0.0).collect();
    negatives.sort_by(f64::total_cmp);

    // Maximum sum reachable using positives[i..] alone. Non-increasing
    // in i since the pool is ascending.
    let mut suffix_sums = vec![0.0; positives.len()];
    let mut running = 0.0;
    for i in (0..positives.len()).rev() {
        running += positives[i];
        suffix_sums[i] = running;
    }

    // Anchor: the first index whose tail can still reach the target.
    // Roots before it can never complete a solution and are skipped.
    let anchor_start = suffix_sums
        .iter()
        .position(|&s| s >= target)
        .unwrap_or(positives.len());

    let mut found: Vec<Vec<f64>> = Vec::new();
    for root in (anchor_start..positives.len()).rev() {
        descend(
            root,
            vec![positives[root]],
            positives[root],
            target,
            &positives,
            &negatives,
            &mut found,
        );
    }

    // No standalone search over the negative pool: a subset of negative
    // values cannot sum to the normalized (non-negative) target, so only
    // the descent and its overshoot corrections can produce results.
    dedup_and_restore(found, flip_back)
}

/// Downward descent: extend `path` only toward strictly smaller indices,
/// so each element is used at most once and every subset is produced
/// through a single canonical index ordering.
fn descend(
    index: usize,
    path: Vec<f64>,
    sum: f64,
    target: f64,
    positives: &[f64],
    negatives: &[f64],
    found: &mut Vec<Vec<f64>>,
) {
    if (sum - target).abs() < EPSILON {
        found.push(path);
        return;
    }
    if sum > target {
        // Overshoot: patch the gap from the negative pool if there is
        // one, then stop descending on this path either way.
        if !negatives.is_empty() {
            let gap = sum - target;
            for correction in negative_corrections(gap, negatives) {
                let mut patched = path.clone();
                patched.extend(correction);
                found.push(patched);
            }
        }
        return;
    }
    for next in (0..index).rev() {
        let mut extended = path.clone();
        extended.push(positives[next]);
        descend(
            next,
            extended,
            sum + positives[next],
            target,
            positives,
            negatives,
            found,
        );
    }
}

/// Exhaustive backtracking over the negative pool for subsets whose
/// magnitudes sum exactly to `gap`. No anchoring here; every exact
/// combination is wanted and the pool is pre-filtered to magnitudes
/// that fit. Results come back sign-restored to their negative values.
fn negative_corrections(gap: f64, negatives: &[f64]) -> Vec<Vec<f64>> {
    let mut pool: Vec<f64> = negatives.iter().map(|v| -v).filter(|m| *m <= gap).collect();
    pool.sort_by(f64::total_cmp);

    let mut found = Vec::new();
    let mut path = Vec::new();
    backtrack(0, &mut path, 0.0, gap, &pool, &mut found);
    found
}

fn backtrack(
    start: usize,
    path: &mut Vec<f64>,
    sum: f64,
    gap: f64,
    pool: &[f64],
    found: &mut Vec<Vec<f64>>,
) {
    if (sum - gap).abs() < EPSILON {
        found.push(path.iter().map(|m| -m).collect());
        return;
    }
    if sum > gap {
        return;
    }
    for i in start..pool.len() {
        path.push(pool[i]);
        backtrack(i + 1, path, sum + pool[i], gap, pool, found);
        path.pop();
    }
}

/// Deduplicate by sorted-value signature (exact bit equality, matching
/// the search's own float arithmetic) and undo sign normalization.
/// Discovery order is preserved.
fn dedup_and_restore(found: Vec<Vec<f64>>, flip_back: bool) -> Vec<Vec<f64>> {
    let mut seen: HashSet<Vec<u64>> = HashSet::new();
    let mut unique = Vec::new();
    for subset in found {
        let mut sorted = subset.clone();
        sorted.sort_by(f64::total_cmp);
        let signature: Vec<u64> = sorted.iter().map(|v| v.to_bits()).collect();
        if seen.insert(signature) {
            if flip_back {
                unique.push(subset.iter().map(|v| -v).collect());
            } else {
                unique.push(subset);
            }
        }
    }
    unique
}
