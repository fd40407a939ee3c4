// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Element, RunError, RunObserver, RunResult, StepContext, integer_key};

const RADIX: i64 = 10;

/// LSD radix sort, base 10. Negative keys are handled by shifting every key up by
/// `-min` while computing digits, so all digits are non-negative. Each digit pass is a
/// stable counting sort: count, prefix sum, then place right to left.
///
/// Makes no comparisons. Every placement counts as a swap. Keys must be whole numbers,
/// which [`crate::run()`] checks up front.
///
/// # Errors
///
/// - [`RunError::Cancelled`] if the run is cancelled.
/// - [`RunError::InvalidInput`] if a key is not a whole number.
pub async fn radix_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    let mut keys = Vec::with_capacity(len);
    for index in 0..len {
        keys.push(whole_key(ctx, index)?);
    }
    let (Some(&min), Some(&max)) = (keys.iter().min(), keys.iter().max()) else {
        return Ok(());
    };
    let max_shifted = max - min;

    let mut exp: i64 = 1;
    while max_shifted / exp > 0 {
        ctx.check_cancelled()?;
        let is_last_pass = max_shifted / (exp * RADIX) == 0;
        counting_pass(ctx, min, exp, is_last_pass).await?;
        exp *= RADIX;
    }
    Ok(())
}

/// One stable counting sort pass on the digit selected by `exp`.
async fn counting_pass<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    min: i64,
    exp: i64,
    is_last_pass: bool,
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    let mut digits = Vec::with_capacity(len);
    for index in 0..len {
        digits.push(digit(whole_key(ctx, index)? - min, exp));
    }

    let mut counts = [0_usize; 10];
    for &digit in &digits {
        counts[digit] += 1;
    }
    for digit in 1..counts.len() {
        counts[digit] += counts[digit - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; len];
    for index in (0..len).rev() {
        let digit = digits[index];
        counts[digit] -= 1;
        output[counts[digit]] = Some(ctx.get(index).clone());
    }

    for (index, maybe_item) in output.into_iter().enumerate() {
        ctx.check_cancelled()?;
        if let Some(item) = maybe_item {
            ctx.place(index, item).await?;
            if is_last_pass {
                ctx.mark_sorted(index);
            }
        }
    }
    Ok(())
}

fn whole_key<T, O>(ctx: &StepContext<'_, T, O>, index: usize) -> RunResult<i64>
where
    T: Element,
    O: RunObserver<T>,
{
    let key = ctx.key(index);
    integer_key(key).ok_or_else(|| {
        RunError::invalid_input(format!(
            "radix sort needs whole number keys, index {index} is {key}"
        ))
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn digit(shifted_key: i64, exp: i64) -> usize { ((shifted_key / exp) % RADIX) as usize }
