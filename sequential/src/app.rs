use anyhow::bail;
use app_longest::LongestWords;
use app_reverse::Reversed;
use common::{collect_parallel, collect_sequential, Collector};
use itertools::Itertools;
use tracing::info;

/// Applications the driver can run over the words of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Longest,
    Reverse,
    Words,
    LongSorted,
    LongReverseSorted,
    Distinct,
    LastWord,
    Runs,
}

impl App {
    pub const ALL: [App; 8] = [
        Self::Longest,
        Self::Reverse,
        Self::Words,
        Self::LongSorted,
        Self::LongReverseSorted,
        Self::Distinct,
        Self::LastWord,
        Self::Runs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Longest => "longest",
            Self::Reverse => "reverse",
            Self::Words => "words",
            Self::LongSorted => "long-sorted",
            Self::LongReverseSorted => "long-reverse-sorted",
            Self::Distinct => "distinct",
            Self::LastWord => "last-word",
            Self::Runs => "runs",
        }
    }

    pub fn load(app_name: &str) -> anyhow::Result<Self> {
        match Self::ALL.into_iter().find(|app| app.name() == app_name.trim()) {
            Some(app) => Ok(app),
            None => bail!(
                "unknown app `{}`, expected one of: {}",
                app_name,
                Self::ALL.iter().map(|app| app.name()).join(", ")
            ),
        }
    }

    /// Runs the app over `text`, one output line per result item.
    pub fn run(self, text: &str, parallel: bool) -> Vec<String> {
        let words = app_words::words(text);
        info!(app = self.name(), words = words.len(), parallel, "running");

        match self {
            Self::Longest => collect_words::<LongestWords<&str>>(words, parallel)
                .into_iter()
                .map(String::from)
                .collect_vec(),
            Self::Reverse => collect_words::<Reversed<&str>>(words, parallel)
                .into_iter()
                .map(String::from)
                .collect_vec(),
            Self::Words => words.into_iter().map(String::from).collect_vec(),
            Self::LongSorted => app_words::long_lower_sorted(text),
            Self::LongReverseSorted => app_words::long_lower_reverse_sorted(text),
            Self::Distinct => app_words::distinct_by_length(text),
            Self::LastWord => match app_words::last_word(text) {
                "" => vec![],
                last => vec![last.to_string()],
            },
            Self::Runs => words
                .into_iter()
                .flat_map(app_challenges::character_runs)
                .collect_vec(),
        }
    }
}

fn collect_words<C>(items: Vec<C::Item>, parallel: bool) -> C::Output
where
    C: Collector + Send,
    C::Item: Send,
{
    if parallel {
        collect_parallel::<C>(items)
    } else {
        collect_sequential::<C, _>(items)
    }
}
