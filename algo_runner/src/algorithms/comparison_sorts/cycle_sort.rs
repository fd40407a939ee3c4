// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, ok};

/// Write each value straight to its final slot, and follow the displaced value to its
/// own slot until the cycle closes. The final slot of a value is found by counting how
/// many values in the unsorted tail are smaller than it. Values equal to it that are
/// already in place are skipped, so it lands after them.
///
/// Every comparison against the held value is counted, and every write is counted as a
/// swap. Not stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn cycle_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    for cycle_start in 0..len.saturating_sub(1) {
        ctx.check_cancelled()?;

        let mut held = ctx.get(cycle_start).clone();
        let mut position = final_position(ctx, cycle_start, held.sort_key()).await?;

        // Already in place.
        if position == cycle_start {
            ctx.mark_sorted(cycle_start);
            continue;
        }

        position = skip_equal_keys(ctx, position, held.sort_key()).await?;
        held = ctx.exchange(position, held).await?;
        ctx.mark_sorted(position);

        // Rotate the rest of the cycle.
        while position != cycle_start {
            ctx.check_cancelled()?;
            position = final_position(ctx, cycle_start, held.sort_key()).await?;
            if position != cycle_start {
                position = skip_equal_keys(ctx, position, held.sort_key()).await?;
            }
            held = ctx.exchange(position, held).await?;
            ctx.mark_sorted(position);
        }
    }
    ctx.mark_sorted(len.saturating_sub(1));
    ok!()
}

/// `cycle_start` plus the number of keys after it that are smaller than `key`.
async fn final_position<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    cycle_start: usize,
    key: f64,
) -> RunResult<usize>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut position = cycle_start;
    for index in cycle_start + 1..ctx.len() {
        ctx.check_cancelled()?;
        if ctx.compare_to_key(index, key).await? == Ordering::Less {
            position += 1;
        }
    }
    Ok(position)
}

async fn skip_equal_keys<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    mut position: usize,
    key: f64,
) -> RunResult<usize>
where
    T: Element,
    O: RunObserver<T>,
{
    while position < ctx.len() - 1
        && ctx.compare_to_key(position, key).await? == Ordering::Equal
    {
        ctx.check_cancelled()?;
        position += 1;
    }
    Ok(position)
}
