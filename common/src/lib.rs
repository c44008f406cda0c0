//! Shared plumbing for the collector apps: the [`Collector`] trait and the
//! drivers that run a collector over a sequence, either in one pass or split
//! into contiguous partitions that are folded independently and merged.

use itertools::Itertools;
use rayon::prelude::*;

mod logger;

pub use logger::init_logger;

/// A four-step reduction: `create` an empty accumulator per partition,
/// `fold` each element into it, `combine` accumulators of adjacent
/// partitions (left precedes right in the source), then `finish`.
///
/// `combine` must be associative so that every partitioning of the input,
/// merged along any binary tree in source order, gives the same output as
/// a single sequential fold.
pub trait Collector: Sized {
    type Item;
    type Output;

    fn create() -> Self;

    fn fold(&mut self, item: Self::Item);

    fn combine(self, right: Self) -> Self;

    fn finish(self) -> Self::Output;
}

/// Shape of the binary tree along which partition accumulators are merged.
/// Leaves are always in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeShape {
    /// Split the partition list in halves recursively.
    Balanced,
    /// `((a + b) + c) + d`
    LeftDeep,
    /// `a + (b + (c + d))`
    RightDeep,
}

impl MergeShape {
    pub const ALL: [MergeShape; 3] = [Self::Balanced, Self::LeftDeep, Self::RightDeep];
}

fn fold_all<C, I>(mut acc: C, items: I) -> C
where
    C: Collector,
    I: IntoIterator<Item = C::Item>,
{
    for item in items {
        acc.fold(item);
    }
    acc
}

/// Single partition, zero combines.
pub fn collect_sequential<C, I>(input: I) -> C::Output
where
    C: Collector,
    I: IntoIterator<Item = C::Item>,
{
    fold_all(C::create(), input).finish()
}

/// Folds `items` as consecutive partitions of the given `sizes` and merges
/// the partition accumulators along a tree of the given `shape`.
///
/// Panics if `sizes` does not add up to `items.len()`.
pub fn collect_partitioned<C>(
    items: Vec<C::Item>,
    sizes: &[usize],
    shape: MergeShape,
) -> C::Output
where
    C: Collector,
{
    assert_eq!(
        sizes.iter().sum::<usize>(),
        items.len(),
        "partition sizes must cover the input exactly"
    );

    let mut items = items.into_iter();
    let partitions = sizes
        .iter()
        .map(|&len| fold_all(C::create(), items.by_ref().take(len)))
        .collect_vec();

    let merged = match shape {
        MergeShape::LeftDeep => partitions.into_iter().reduce(C::combine),
        MergeShape::RightDeep => partitions
            .into_iter()
            .rev()
            .reduce(|right, left| left.combine(right)),
        MergeShape::Balanced if partitions.is_empty() => None,
        MergeShape::Balanced => Some(merge_balanced(partitions)),
    };

    merged.unwrap_or_else(C::create).finish()
}

fn merge_balanced<C: Collector>(mut partitions: Vec<C>) -> C {
    if partitions.len() == 1 {
        return partitions.remove(0);
    }
    let right = partitions.split_off(partitions.len() / 2);
    merge_balanced(partitions).combine(merge_balanced(right))
}

/// Fork-join collection on the rayon pool; split points are up to rayon.
pub fn collect_parallel<C>(items: Vec<C::Item>) -> C::Output
where
    C: Collector + Send,
    C::Item: Send,
{
    collect_parallel_split::<C>(items, usize::MAX)
}

/// Like [`collect_parallel`] but no partition holds more than `max_len`
/// elements, so `max_len == 1` forces a combine between every pair.
pub fn collect_parallel_split<C>(items: Vec<C::Item>, max_len: usize) -> C::Output
where
    C: Collector + Send,
    C::Item: Send,
{
    items
        .into_par_iter()
        .with_max_len(max_len.max(1))
        .fold(C::create, |mut acc, item| {
            acc.fold(item);
            acc
        })
        .reduce(C::create, C::combine)
        .finish()
}
