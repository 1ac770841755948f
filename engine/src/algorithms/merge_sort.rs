// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{future::Future, pin::Pin};

use crate::{ok, StepEmitter, StepResult};

/// Recursive split at `floor(n / 2)`, left subtree fully merged before the right one
/// begins. Operates on owned sub-vectors; `start_idx` tracks where this sub-array sits
/// in the original array so compare highlights stay at original-array level even though
/// each frame's snapshot is only the concatenated sub-array under merge (renderers
/// ignore out-of-range highlight indices).
///
/// A stop request surfaces as [`crate::Aborted`] through the whole recursion - a
/// cancelled run is never mistaken for a valid empty sub-array.
///
/// # Errors
///
/// Returns [`crate::Aborted`] when a stop request is observed at a suspension point.
pub fn merge_sort<'a>(
    mut arr: Vec<u32>,
    start_idx: usize,
    emitter: &'a mut StepEmitter,
) -> Pin<Box<dyn Future<Output = StepResult<Vec<u32>>> + Send + 'a>> {
    Box::pin(async move {
        if arr.len() <= 1 {
            return ok!(arr);
        }

        let middle = arr.len() / 2;
        let right = arr.split_off(middle);
        let left = arr;

        let sorted_left = merge_sort(left, start_idx, emitter).await?;
        let sorted_right = merge_sort(right, start_idx + middle, emitter).await?;

        merge(&sorted_left, &sorted_right, start_idx, emitter).await
    })
}

/// One compare frame per element placement, comparing `left[li] < right[ri]`:
/// strictly-less, so ties favor the right side (observable non-stability for duplicate
/// values, reproduced as-is). A right-side placement counts as a swap. The closing
/// frame carries the fully merged sub-array with no highlights.
async fn merge(
    left: &[u32],
    right: &[u32],
    start_idx: usize,
    emitter: &mut StepEmitter,
) -> StepResult<Vec<u32>> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    // The frame snapshot during a merge is the concatenation of the two (still
    // unmodified) halves; only the highlight pair moves.
    let snapshot: Vec<u32> = left.iter().chain(right.iter()).copied().collect();

    while left_index < left.len() && right_index < right.len() {
        let left_pos = start_idx + left_index;
        let right_pos = start_idx + left.len() + right_index;
        emitter
            .emit_step(&snapshot, Some((left_pos, right_pos)), None)
            .await?;
        emitter.record_stats(1, 0).await;

        if left[left_index] < right[right_index] {
            result.push(left[left_index]);
            left_index += 1;
        } else {
            result.push(right[right_index]);
            right_index += 1;
            emitter.record_stats(0, 1).await;
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);

    emitter.emit_step(&result, None, None).await?;

    ok!(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{drain_signals, test_emitter};

    #[tokio::test]
    async fn test_sorts_and_counts_known_example() {
        let (mut emitter, mut receiver, _control) = test_emitter();

        let sorted = merge_sort(vec![5, 3, 8, 1], 0, &mut emitter).await.unwrap();

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        let snapshot = emitter.stats_snapshot();
        assert_eq!(snapshot.comparisons, 5);
        assert_eq!(snapshot.swaps, 3);

        // Frame snapshots are sub-array concatenations; highlights stay at
        // original-array level, so (2, 3) can point past a 2-element snapshot.
        let capture = drain_signals(&mut receiver);
        let trace: Vec<(&[u32], Option<(usize, usize)>)> = capture
            .frames
            .iter()
            .map(|frame| (frame.array.as_slice(), frame.compare_indices))
            .collect();
        assert_eq!(
            trace,
            vec![
                (&[5, 3][..], Some((0, 1))),
                (&[3, 5][..], None),
                (&[8, 1][..], Some((2, 3))),
                (&[1, 8][..], None),
                (&[3, 5, 1, 8][..], Some((0, 2))),
                (&[3, 5, 1, 8][..], Some((0, 3))),
                (&[3, 5, 1, 8][..], Some((1, 3))),
                (&[1, 3, 5, 8][..], None),
            ]
        );

        // No permanent sorted marking occurs mid-algorithm for merge sort.
        assert!(capture.sorted_marks().is_empty());
    }

    #[tokio::test]
    async fn test_ties_favor_the_right_side() {
        let (mut emitter, _receiver, _control) = test_emitter();

        let sorted = merge_sort(vec![2, 2], 0, &mut emitter).await.unwrap();

        assert_eq!(sorted, vec![2, 2]);
        // The strict `<` takes the right-hand duplicate first and counts it as a swap.
        let snapshot = emitter.stats_snapshot();
        assert_eq!(snapshot.comparisons, 1);
        assert_eq!(snapshot.swaps, 1);
    }

    #[tokio::test]
    async fn test_stop_unwinds_through_recursion() {
        let (mut emitter, mut receiver, control) = test_emitter();

        control.request_stop();

        assert!(merge_sort(vec![4, 2, 7, 1], 0, &mut emitter).await.is_err());
        assert!(drain_signals(&mut receiver).raw.is_empty());
    }
}
