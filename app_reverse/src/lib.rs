//! Reverses a sequence through fold/combine alone, with no final reverse
//! pass, so any partitioning yields the fully reversed input.

use common::Collector;
use std::collections::VecDeque;

/// Holds one partition's elements newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversed<T> {
    items: VecDeque<T>,
}

impl<T> Collector for Reversed<T> {
    type Item = T;
    type Output = VecDeque<T>;

    fn create() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    fn fold(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// `self` covers the earlier partition, so it goes after `right`.
    fn combine(mut self, mut right: Self) -> Self {
        right.items.append(&mut self.items);
        right
    }

    fn finish(self) -> VecDeque<T> {
        self.items
    }
}
