// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ok, StepEmitter, StepResult};

/// Classic shift-right-while-greater. Each element gets one leading compare frame
/// against its left neighbor; every shift emits a frame over the mutated array and
/// records a comparison *and* a swap together; placing the key emits a highlight-free
/// frame. Once all elements are placed, a cosmetic finalization sweep marks every index
/// sorted one at a time at half-speed pacing. The sweep is user-visible behavior, not
/// load-bearing for correctness.
///
/// # Errors
///
/// Returns [`crate::Aborted`] when a stop request is observed at a suspension point
/// (the finalization sweep included).
pub async fn insertion_sort(
    arr: &mut Vec<u32>,
    emitter: &mut StepEmitter,
) -> StepResult<()> {
    let n = arr.len();

    for i in 1..n {
        let key = arr[i];
        let mut j = i;

        emitter.emit_step(arr, Some((i - 1, i)), None).await?;
        emitter.record_stats(1, 0).await;

        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            emitter.emit_step(arr, Some((j - 1, j)), None).await?;
            emitter.record_stats(1, 1).await;
            j -= 1;
        }

        arr[j] = key;
        emitter.emit_step(arr, None, None).await?;
    }

    for index in 0..n {
        emitter.mark_sorted_paced(arr, index).await?;
    }

    ok!()
}
