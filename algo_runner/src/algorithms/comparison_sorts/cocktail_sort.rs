// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Element, RunObserver, RunResult, StepContext, ok};

/// Bubble sort in both directions. A forward pass settles the largest remaining value
/// at the right end, a backward pass settles the smallest at the left end, and the
/// window shrinks from both sides. Stops as soon as a pass makes no swaps.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn cocktail_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let mut start = 0;
    let mut end = ctx.len().saturating_sub(1);

    while start < end {
        ctx.check_cancelled()?;

        // Forward.
        let mut swapped = false;
        for index in start..end {
            ctx.check_cancelled()?;
            if ctx.compare(index, index + 1).await? == Ordering::Greater {
                ctx.swap(index, index + 1).await?;
                swapped = true;
            }
        }
        ctx.mark_sorted(end);
        if !swapped {
            break;
        }
        end -= 1;

        // Backward.
        swapped = false;
        for index in (start..end).rev() {
            ctx.check_cancelled()?;
            if ctx.compare(index, index + 1).await? == Ordering::Greater {
                ctx.swap(index, index + 1).await?;
                swapped = true;
            }
        }
        ctx.mark_sorted(start);
        if !swapped {
            break;
        }
        start += 1;
    }
    ok!()
}
