// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ok, StepEmitter, StepResult};

/// Classic adjacent-pair passes, `n-1` outer iterations. Every comparison emits a frame
/// highlighting the pair, then records the comparison; a swap emits a second frame over
/// the mutated array and records the swap. After each pass the largest element has
/// bubbled to the end of the unsorted prefix, so `n-1-i` is finalized; index 0 is
/// finalized after the loop since the smallest element naturally ends there last.
///
/// # Errors
///
/// Returns [`crate::Aborted`] when a stop request is observed at a suspension point;
/// the remaining passes and sorted-marking are skipped.
pub async fn bubble_sort(arr: &mut Vec<u32>, emitter: &mut StepEmitter) -> StepResult<()> {
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            emitter.emit_step(arr, Some((j, j + 1)), None).await?;
            emitter.record_stats(1, 0).await;

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                emitter.emit_step(arr, Some((j, j + 1)), None).await?;
                emitter.record_stats(0, 1).await;
            }
        }
        emitter.mark_sorted(arr, n - i - 1).await?;
    }

    if n > 0 {
        emitter.mark_sorted(arr, 0).await?;
    }

    ok!()
}
