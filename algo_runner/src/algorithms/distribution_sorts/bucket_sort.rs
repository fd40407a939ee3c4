// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Annotation, Element, RunObserver, RunResult, StepContext};

/// Scatter elements into `max(1, n / 2)` buckets by key, insertion sort each bucket,
/// then write the buckets back in order.
///
/// Counting: one comparison per insertion sort check inside a bucket, one swap per
/// element shifted inside a bucket, and one swap per element written back. Stable.
///
/// # Errors
///
/// Returns [`crate::RunError::Cancelled`] if the run is cancelled.
pub async fn bucket_sort<T, O>(ctx: &mut StepContext<'_, T, O>) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    let len = ctx.len();
    if len == 0 {
        return Ok(());
    }

    let (min, max) = (0..len)
        .map(|index| ctx.key(index))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), key| {
            (min.min(key), max.max(key))
        });
    let bucket_count = (len / 2).max(1);
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];

    // Scatter. One visible step per element.
    for index in 0..len {
        ctx.check_cancelled()?;
        let bucket = bucket_index(ctx.key(index), min, max, bucket_count);
        buckets[bucket].push(ctx.get(index).clone());
        ctx.publish_annotations(&[(index, Annotation::Swapping)]);
        ctx.suspend().await?;
    }

    for bucket in &mut buckets {
        insertion_sort_bucket(ctx, bucket).await?;
    }

    // Gather. Each slot is final as soon as it's written.
    let mut dest = 0;
    for item in buckets.into_iter().flatten() {
        ctx.check_cancelled()?;
        ctx.place(dest, item).await?;
        ctx.mark_sorted(dest);
        dest += 1;
    }
    Ok(())
}

/// `floor((key - min) / (max - min + 1) * bucket_count)`. The `+ 1` keeps the max key
/// out of a nonexistent bucket `bucket_count`. The clamp only guards against float
/// rounding.
///
/// Since the denominator is padded by a whole unit, keys that span less than one unit
/// (eg: `0.1..=0.5`) all land in the first few buckets.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn bucket_index(key: f64, min: f64, max: f64, bucket_count: usize) -> usize {
    let scaled = (key - min) / (max - min + 1.0) * bucket_count as f64;
    (scaled.floor().max(0.0) as usize).min(bucket_count - 1)
}

/// Buckets live outside the working copy, so the comparisons here have no highlights.
async fn insertion_sort_bucket<T, O>(
    ctx: &mut StepContext<'_, T, O>,
    bucket: &mut [T],
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    for next in 1..bucket.len() {
        ctx.check_cancelled()?;
        let mut index = next;
        while index > 0 {
            ctx.check_cancelled()?;
            let ordering = ctx
                .compare_keys(bucket[index - 1].sort_key(), bucket[index].sort_key(), &[])
                .await?;
            if ordering != Ordering::Greater {
                break;
            }
            bucket.swap(index - 1, index);
            ctx.record_swap();
            index -= 1;
        }
    }
    Ok(())
}
