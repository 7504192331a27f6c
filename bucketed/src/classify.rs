//! Classifiers map input units onto bucket indices.
//!
//! A classifier returns `Some(index)` to count a unit and `None` to skip it.
//! Classifiers may carry state between units, in which case `finish` is
//! called once the input is exhausted and `reset` returns them to their
//! initial state. Any `FnMut(U) -> Option<usize>` closure is a stateless
//! classifier.

/// Maps input units of type `U` onto bucket indices.
pub trait Classifier<U> {
    /// Classify a single unit. `None` means the unit is not counted.
    fn classify(&mut self, unit: U) -> Option<usize>;

    /// Called once at the end of the input. Stateful classifiers may emit one
    /// final index for work that is still pending.
    fn finish(&mut self) -> Option<usize> {
        None
    }

    /// Return the classifier to its initial state.
    fn reset(&mut self) {}
}

impl<U, F> Classifier<U> for F
where
    F: FnMut(U) -> Option<usize>,
{
    fn classify(&mut self, unit: U) -> Option<usize> {
        self(unit)
    }
}

/// Returns true for the characters that separate words.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Counts ASCII letters, folding case, into 26 buckets: `a` and `A` map to
/// bucket 0 through to `z` and `Z` at bucket 25. Everything else is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Letters;

impl Letters {
    pub const BUCKETS: usize = 26;
}

impl Classifier<char> for Letters {
    fn classify(&mut self, unit: char) -> Option<usize> {
        unit.is_ascii_alphabetic()
            .then(|| (unit.to_ascii_lowercase() as u8 - b'a') as usize)
    }
}

/// Counts the decimal digits `0` through `9` into 10 buckets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Digits;

impl Digits {
    pub const BUCKETS: usize = 10;
}

impl Classifier<char> for Digits {
    fn classify(&mut self, unit: char) -> Option<usize> {
        unit.to_digit(10).map(|d| d as usize)
    }
}

/// Counts newlines, tabs and blanks into buckets 0, 1 and 2 respectively.
#[derive(Clone, Copy, Debug, Default)]
pub struct Whitespace;

impl Whitespace {
    pub const BUCKETS: usize = 3;
    pub const NEWLINE: usize = 0;
    pub const TAB: usize = 1;
    pub const BLANK: usize = 2;
}

impl Classifier<char> for Whitespace {
    fn classify(&mut self, unit: char) -> Option<usize> {
        match unit {
            '\n' => Some(Self::NEWLINE),
            '\t' => Some(Self::TAB),
            ' ' => Some(Self::BLANK),
            _ => None,
        }
    }
}

/// What to do with a word that is still in progress when the input ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingWord {
    /// A word without a trailing separator is not counted.
    #[default]
    Ignore,
    /// A word without a trailing separator is counted once, at `finish`.
    Count,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WordState {
    Idle,
    InWord(usize),
}

/// Counts words by their length in characters. Words are runs of characters
/// between separators (space, tab and newline). A word is counted when the
/// separator that ends it arrives, so runs of separators never produce a
/// zero-length word.
#[derive(Clone, Copy, Debug)]
pub struct WordLength {
    state: WordState,
    trailing: TrailingWord,
}

impl Default for WordLength {
    fn default() -> Self {
        Self::new(TrailingWord::default())
    }
}

impl WordLength {
    pub const BUCKETS: usize = 30;

    pub fn new(trailing: TrailingWord) -> Self {
        Self {
            state: WordState::Idle,
            trailing,
        }
    }

    /// Returns the length of the word currently in progress, if any.
    pub fn pending(&self) -> Option<usize> {
        match self.state {
            WordState::Idle => None,
            WordState::InWord(len) => Some(len),
        }
    }

    pub fn trailing(&self) -> TrailingWord {
        self.trailing
    }
}

impl Classifier<char> for WordLength {
    fn classify(&mut self, unit: char) -> Option<usize> {
        match (self.state, is_separator(unit)) {
            (WordState::Idle, true) => None,
            (WordState::Idle, false) => {
                self.state = WordState::InWord(1);
                None
            }
            (WordState::InWord(len), true) => {
                self.state = WordState::Idle;
                Some(len)
            }
            (WordState::InWord(len), false) => {
                self.state = WordState::InWord(len.saturating_add(1));
                None
            }
        }
    }

    fn finish(&mut self) -> Option<usize> {
        let pending = self.pending();
        self.state = WordState::Idle;

        match self.trailing {
            TrailingWord::Ignore => {
                if let Some(len) = pending {
                    log::debug!("ignoring unterminated trailing word of length {len}");
                }
                None
            }
            TrailingWord::Count => pending,
        }
    }

    fn reset(&mut self) {
        self.state = WordState::Idle;
    }
}

/// Counts lines by their length in characters, not including the line
/// terminator (`\n` or `\r\n`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LineLength;

impl LineLength {
    pub const BUCKETS: usize = 1000;
}

impl<S: AsRef<str>> Classifier<S> for LineLength {
    fn classify(&mut self, unit: S) -> Option<usize> {
        let unit = unit.as_ref();
        let line = unit.strip_suffix('\n').unwrap_or(unit);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some(line.chars().count())
    }
}
