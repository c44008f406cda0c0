//! Single-pass selection of every word tying for the maximum length.

use common::Collector;

/// Accumulates the longest words seen so far in one partition.
///
/// `best_len` is `None` until the first word arrives, which orders below
/// every real length (including the empty word).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestWords<T> {
    best_len: Option<usize>,
    words: Vec<T>,
}

impl<T: AsRef<str>> Collector for LongestWords<T> {
    type Item = T;
    type Output = Vec<T>;

    fn create() -> Self {
        Self {
            best_len: None,
            words: Vec::new(),
        }
    }

    fn fold(&mut self, word: T) {
        let len = Some(word.as_ref().chars().count());
        if len == self.best_len {
            self.words.push(word);
        } else if len > self.best_len {
            self.best_len = len;
            self.words.clear();
            self.words.push(word);
        }
    }

    fn combine(mut self, mut right: Self) -> Self {
        match self.best_len.cmp(&right.best_len) {
            std::cmp::Ordering::Greater => self,
            std::cmp::Ordering::Less => right,
            std::cmp::Ordering::Equal => {
                self.words.append(&mut right.words);
                self
            }
        }
    }

    fn finish(self) -> Vec<T> {
        self.words
    }
}
