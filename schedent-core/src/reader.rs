// schedent-core/src/reader.rs
//! Reads scheduling lines until the first blank line or end of input.

use log::debug;
use std::io::BufRead;

use crate::errors::SchedentError;
use crate::record::{parse_record, Record};

/// Reads lines in order, stopping at the first empty line or end of stream.
///
/// Only the `\n` terminator is stripped, so a line holding just `\r` or
/// spaces is not empty and is returned as-is. Bytes that are not valid UTF-8
/// become U+FFFD instead of failing the read. Zero lines is a valid result.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>, SchedentError> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        if buffer.is_empty() {
            break;
        }
        lines.push(String::from_utf8_lossy(&buffer).into_owned());
    }
    debug!("Read {} scheduling line(s)", lines.len());
    Ok(lines)
}

/// Reads and parses every record, one per line.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>, SchedentError> {
    Ok(read_lines(reader)?
        .iter()
        .map(|line| parse_record(line))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Task;
    use std::io::Cursor;

    #[test]
    fn test_stops_at_first_blank_line() {
        let lines = read_lines(Cursor::new("A 1\nB 2\n\nC 3\n")).unwrap();
        assert_eq!(lines, vec!["A 1", "B 2"]);
    }

    #[test]
    fn test_reads_until_eof_without_trailing_newline() {
        let lines = read_lines(Cursor::new("A 1\nB 2")).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_blank_first_line_yields_nothing() {
        assert!(read_records(Cursor::new("\nA 1\n")).unwrap().is_empty());
        assert!(read_records(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_crlf_blank_line_is_not_a_terminator() {
        let lines = read_lines(Cursor::new("A 1\r\n\r\nB 2\r\n")).unwrap();
        assert_eq!(lines, vec!["A 1\r", "\r", "B 2\r"]);

        let records = read_records(Cursor::new("A 1\r\n\r\nB 2\r\n")).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].tasks(), &[Task::new('A', 1)]);
        assert!(records[1].is_empty());
        assert_eq!(records[2].tasks(), &[Task::new('B', 2)]);
    }

    #[test]
    fn test_whitespace_line_is_kept() {
        let records = read_records(Cursor::new("  \nA 1\n")).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_invalid_utf8_stays_local_to_its_record() {
        let input = b"A\xff 1\nB 2 C 2\n".to_vec();
        let records = read_records(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tasks(), &[Task::new('A', 1)]);
        assert_eq!(records[1].tasks(), &[Task::new('B', 2), Task::new('C', 2)]);
    }

    #[test]
    fn test_invalid_leading_byte_becomes_replacement_label() {
        let records = read_records(Cursor::new(b"\xfeX 4\n".to_vec())).unwrap();
        assert_eq!(records[0].tasks(), &[Task::new('\u{fffd}', 4)]);
    }
}
