// schedent-core/src/record.rs
//! The data model for one CPU's scheduling line, and the parser that builds it.
//!
//! Parsing mirrors formatted stream extraction: a whitespace-delimited task
//! token followed by a signed decimal integer, repeated until a pair cannot
//! be completed. Whatever follows the last complete pair is dropped.

use log::debug;
use std::fmt;

use schedent_entropy::{entropy_trace, EntropyScore, Label};

/// A single scheduled task: its one-character label and its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub label: Label,
    pub duration: i32,
}

impl Task {
    pub fn new(label: Label, duration: i32) -> Self {
        Self { label, duration }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.duration)
    }
}

/// One parsed input line. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    tasks: Vec<Task>,
}

impl Record {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Runs the incremental entropy engine over this record's tasks.
    pub fn entropy_trace(&self) -> EntropyTrace {
        let pairs = self
            .tasks
            .iter()
            .map(|task| (task.label, f64::from(task.duration)));
        EntropyTrace(entropy_trace(pairs))
    }
}

/// The entropy after each task of a [`Record`], in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyTrace(Vec<EntropyScore>);

impl EntropyTrace {
    pub fn values(&self) -> &[EntropyScore] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Walks a line the way `>>` extraction walks a text stream.
struct Extractor<'a> {
    rest: &'a str,
}

impl<'a> Extractor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// The next maximal run of non-whitespace characters.
    fn next_token(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// An optionally signed decimal integer. Stops at the first non-digit,
    /// leaving it for the next token. Fails on no digits or on overflow.
    fn next_integer(&mut self) -> Option<i32> {
        self.rest = self.rest.trim_start();
        let bytes = self.rest.as_bytes();

        let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digit_len = bytes[sign_len..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digit_len == 0 {
            return None;
        }

        let (number, rest) = self.rest.split_at(sign_len + digit_len);
        let value = number.parse::<i32>().ok()?;
        self.rest = rest;
        Some(value)
    }

    fn is_exhausted(&self) -> bool {
        self.rest.trim_start().is_empty()
    }
}

/// Parses one line into a [`Record`].
///
/// Only the first character of each task token is kept. Parsing stops at the
/// first pair whose duration is missing or is not an `i32`; that pair and
/// everything after it are dropped without error.
pub fn parse_record(line: &str) -> Record {
    let mut extractor = Extractor::new(line);
    let mut tasks = Vec::new();

    while let Some(token) = extractor.next_token() {
        let Some(duration) = extractor.next_integer() else {
            break;
        };
        // Tokens are never empty, so the first character always exists.
        if let Some(label) = token.chars().next() {
            tasks.push(Task::new(label, duration));
        }
    }

    if !extractor.is_exhausted() {
        debug!(
            "Dropped unparsable tail after {} task(s): {:?}",
            tasks.len(),
            extractor.rest.trim()
        );
    }

    Record::new(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(record: &Record) -> String {
        record.tasks().iter().map(|t| t.label).collect()
    }

    fn durations(record: &Record) -> Vec<i32> {
        record.tasks().iter().map(|t| t.duration).collect()
    }

    #[test]
    fn test_parse_simple_pairs() {
        let record = parse_record("A 3 B 3");
        assert_eq!(record.tasks(), &[Task::new('A', 3), Task::new('B', 3)]);
    }

    #[test]
    fn test_parse_keeps_first_character_only() {
        let record = parse_record("Task1 10 worker 4 Zeta 2");
        assert_eq!(labels(&record), "TwZ");
        assert_eq!(durations(&record), vec![10, 4, 2]);
    }

    #[test]
    fn test_trailing_unmatched_token_is_dropped() {
        let record = parse_record("A 3 B");
        assert_eq!(record.tasks(), &[Task::new('A', 3)]);
    }

    #[test]
    fn test_bad_duration_drops_rest_of_line() {
        let record = parse_record("A 1 B x C 2");
        assert_eq!(record.tasks(), &[Task::new('A', 1)]);
    }

    #[test]
    fn test_digits_then_letters_split_into_next_token() {
        let record = parse_record("A 3x 4");
        assert_eq!(record.tasks(), &[Task::new('A', 3), Task::new('x', 4)]);
    }

    #[test]
    fn test_signed_durations_are_accepted() {
        let record = parse_record("A -2 B +7");
        assert_eq!(durations(&record), vec![-2, 7]);
    }

    #[test]
    fn test_bare_sign_ends_record() {
        let record = parse_record("A 1 B - 3");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_overflowing_duration_ends_record() {
        let record = parse_record("A 1 B 99999999999 C 2");
        assert_eq!(record.tasks(), &[Task::new('A', 1)]);
    }

    #[test]
    fn test_whitespace_only_line_is_empty_record() {
        assert!(parse_record("   \t ").is_empty());
    }

    #[test]
    fn test_non_ascii_label_keeps_whole_character() {
        let record = parse_record("\u{e9}t\u{e9} 5");
        assert_eq!(labels(&record), "\u{e9}");
    }

    #[test]
    fn test_task_display() {
        assert_eq!(Task::new('A', 3).to_string(), "A(3)");
        assert_eq!(Task::new('b', -1).to_string(), "b(-1)");
    }

    #[test]
    fn test_trace_length_matches_record() {
        let record = parse_record("A 1 B 2 A 3 C 4");
        assert_eq!(record.entropy_trace().len(), record.len());
        assert!(parse_record("").entropy_trace().is_empty());
    }
}
