// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{future::Future, pin::Pin};

use crate::{ok, StepEmitter, StepResult};

/// Lomuto partition scheme with the last element as pivot. After each partition the
/// pivot's final position is marked sorted immediately: elements on the other side may
/// still be touched later, but the physical value at that index is final. The cosmetic
/// half-speed full-array sweep runs only once, at the outermost call (gated on
/// `low == 0 && high == len - 1`).
///
/// # Errors
///
/// Returns [`crate::Aborted`] when a stop request is observed at a suspension point;
/// the abort unwinds through the whole recursion without further sorted-marking.
pub fn quick_sort<'a>(
    arr: &'a mut Vec<u32>,
    low: usize,
    high: usize,
    emitter: &'a mut StepEmitter,
) -> Pin<Box<dyn Future<Output = StepResult<()>> + Send + 'a>> {
    Box::pin(async move {
        if low < high {
            let pivot_index = partition(arr, low, high, emitter).await?;
            emitter.mark_sorted(arr, pivot_index).await?;

            if let Some(left_high) = pivot_index.checked_sub(1) {
                quick_sort(arr, low, left_high, emitter).await?;
            }
            quick_sort(arr, pivot_index + 1, high, emitter).await?;
        }

        if low == 0 && high + 1 == arr.len() {
            for index in 0..arr.len() {
                emitter.mark_sorted_paced(arr, index).await?;
            }
        }

        ok!()
    })
}

/// The pivot stays highlighted on every frame of the partition. Elements smaller than
/// the pivot value are swapped down to the growing boundary (a swap frame each); the
/// closing boundary-pivot swap always emits a frame and records a swap, even when it is
/// a self-swap.
async fn partition(
    arr: &mut [u32],
    low: usize,
    high: usize,
    emitter: &mut StepEmitter,
) -> StepResult<usize> {
    let pivot_value = arr[high];
    let mut boundary = low;

    emitter.emit_step(arr, None, Some(high)).await?;

    for i in low..high {
        emitter.emit_step(arr, Some((i, high)), Some(high)).await?;
        emitter.record_stats(1, 0).await;

        if arr[i] < pivot_value {
            arr.swap(i, boundary);
            emitter
                .emit_step(arr, Some((i, boundary)), Some(high))
                .await?;
            emitter.record_stats(0, 1).await;
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    emitter
        .emit_step(arr, Some((boundary, high)), Some(high))
        .await?;
    emitter.record_stats(0, 1).await;

    ok!(boundary)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{drain_signals, test_emitter};

    #[tokio::test]
    async fn test_already_sorted_input_hits_worst_case_partitions() {
        let (mut emitter, mut receiver, _control) = test_emitter();
        let mut arr = vec![1, 2, 3, 4, 5];
        let high = arr.len() - 1;

        quick_sort(&mut arr, 0, high, &mut emitter).await.unwrap();

        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
        // Pivot = last element degenerates on sorted input: 4+3+2+1 comparisons.
        let snapshot = emitter.stats_snapshot();
        assert_eq!(snapshot.comparisons, 10);
        assert_eq!(snapshot.swaps, 14);

        // One mark per partition (pivot settles from the right), then the outermost
        // cosmetic sweep re-marks the whole array.
        let capture = drain_signals(&mut receiver);
        assert_eq!(capture.sorted_marks(), vec![4, 3, 2, 1, 0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_sorts_and_highlights_pivot() {
        let (mut emitter, mut receiver, _control) = test_emitter();
        let mut arr = vec![3, 1, 2];
        let high = arr.len() - 1;

        quick_sort(&mut arr, 0, high, &mut emitter).await.unwrap();

        assert_eq!(arr, vec![1, 2, 3]);
        let snapshot = emitter.stats_snapshot();
        assert_eq!(snapshot.comparisons, 2);
        assert_eq!(snapshot.swaps, 2);

        // The opening partition frame announces the pivot with no compare highlight;
        // every partition frame keeps the pivot marked.
        let capture = drain_signals(&mut receiver);
        let first = &capture.frames[0];
        assert_eq!(first.compare_indices, None);
        assert_eq!(first.pivot_index, Some(2));
        assert!(capture
            .frames
            .iter()
            .take(5)
            .all(|frame| frame.pivot_index == Some(2)));
    }

    #[tokio::test]
    async fn test_single_element_gets_swept() {
        let (mut emitter, mut receiver, _control) = test_emitter();
        let mut arr = vec![42];

        quick_sort(&mut arr, 0, 0, &mut emitter).await.unwrap();

        let capture = drain_signals(&mut receiver);
        assert_eq!(capture.sorted_marks(), vec![0]);
    }
}
