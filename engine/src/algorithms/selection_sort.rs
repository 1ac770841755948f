// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ok, StepEmitter, StepResult};

/// For each position `i`, scan the remainder for the minimum, emitting one compare
/// frame per candidate (current minimum highlighted against the probe). Swaps only when
/// a smaller element was actually found; position `i` is finalized after each outer
/// iteration, and the last position after the loop.
///
/// # Errors
///
/// Returns [`crate::Aborted`] when a stop request is observed at a suspension point.
pub async fn selection_sort(
    arr: &mut Vec<u32>,
    emitter: &mut StepEmitter,
) -> StepResult<()> {
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        for j in i + 1..n {
            emitter.emit_step(arr, Some((min_index, j)), None).await?;
            emitter.record_stats(1, 0).await;

            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
            emitter.emit_step(arr, Some((i, min_index)), None).await?;
            emitter.record_stats(0, 1).await;
        }

        emitter.mark_sorted(arr, i).await?;
    }

    if n > 0 {
        emitter.mark_sorted(arr, n - 1).await?;
    }

    ok!()
}
