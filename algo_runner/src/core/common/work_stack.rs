// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pending work for the divide and conquer algorithms. Instead of recursing, merge,
//! quick, and intro sort push ranges onto a [`WorkStack`] and loop until it is empty.
//! Native stack depth stays constant no matter how unbalanced the partitions get.

use smallvec::SmallVec;

/// Be careful when adjusting this. Partitions are usually balanced enough that the stack
/// depth stays around `2 * log2(n)`, so this covers sequences of tens of thousands of
/// elements without touching the heap. Deeper stacks are [`SmallVec::spilled`] onto the
/// heap.
pub const WORK_STACK_INLINE_SIZE: usize = 32;

/// Stack allocated LIFO of pending work items.
pub type WorkStack<T> = SmallVec<[T; WORK_STACK_INLINE_SIZE]>;
