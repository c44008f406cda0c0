use app_longest::LongestWords;
use app_reverse::Reversed;
use common::collect_parallel;
use itertools::Itertools;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    hash::Hash,
};

/// Flattens `legs -> [animal]` into `"animal:legs"` entries, in no
/// particular order.
pub fn denormalize<K, S>(input: &HashMap<K, Vec<S>>) -> Vec<String>
where
    K: Display,
    S: AsRef<str>,
{
    input
        .iter()
        .flat_map(|(legs, names)| {
            names
                .iter()
                .map(move |name| format!("{}:{}", name.as_ref(), legs))
        })
        .collect()
}

/// Turns `x -> {y}` into `y -> {x}`.
pub fn invert_multimap<X, Y>(input: &HashMap<X, HashSet<Y>>) -> HashMap<Y, HashSet<X>>
where
    X: Eq + Hash + Clone,
    Y: Eq + Hash + Clone,
{
    input
        .iter()
        .flat_map(|(x, ys)| ys.iter().map(move |y| (y.clone(), x.clone())))
        .fold(HashMap::new(), |mut inverted, (y, x)| {
            inverted.entry(y).or_insert_with(HashSet::new).insert(x);
            inverted
        })
}

/// Splits `s` into maximal runs of one repeated character.
pub fn character_runs(s: &str) -> Vec<String> {
    let mut runs = vec![];
    for (_, run) in s.chars().group_by(|&c| c).into_iter() {
        runs.push(run.collect());
    }
    runs
}

/// The value making up strictly more than half of `values`, if any.
pub fn majority<T>(values: &[T]) -> Option<T>
where
    T: Eq + Hash + Copy,
{
    values
        .iter()
        .copied()
        .counts()
        .into_iter()
        .find(|&(_, n)| n > values.len() / 2)
        .map(|(value, _)| value)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shoe {
    pub size: u32,
}

impl Shoe {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

/// Binds `size` to `make`, yielding a fresh shoe on every call.
pub fn shoe_supplier<F>(make: F, size: u32) -> impl Fn() -> Shoe
where
    F: Fn(u32) -> Shoe,
{
    move || make(size)
}

/// All words tying for the maximum length, collected on the rayon pool.
pub fn longest_words(words: Vec<String>) -> Vec<String> {
    collect_parallel::<LongestWords<String>>(words)
}

/// `items` back to front, collected on the rayon pool.
pub fn reversed<T: Send>(items: Vec<T>) -> Vec<T> {
    collect_parallel::<Reversed<T>>(items).into()
}
