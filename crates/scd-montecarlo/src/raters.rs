//! Ratings from human judges
//!
//! One 0/1 decision per line, no header, in scenario order.

use crate::error::{Error, Result};
use scd_core::Verdict;
use std::io;
use std::path::Path;

/// Read ratings from any byte source
pub fn read_ratings<R: io::Read>(reader: R) -> Result<Vec<Verdict>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut ratings = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(idx + 1, |pos| pos.line() as usize);
        let raw = record.iter().collect::<Vec<_>>().join(",");
        let verdict = match record.len() {
            1 => parse_rating(record[0].trim()),
            _ => None,
        }
        .ok_or_else(|| Error::InvalidRating { line, value: raw })?;
        ratings.push(verdict);
    }
    Ok(ratings)
}

pub fn read_ratings_file<P: AsRef<Path>>(path: P) -> Result<Vec<Verdict>> {
    let file = std::fs::File::open(path)?;
    read_ratings(io::BufReader::new(file))
}

fn parse_rating(field: &str) -> Option<Verdict> {
    let value: u8 = field.parse().ok()?;
    Verdict::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_one_rating_per_line() {
        let ratings = read_ratings("0\n1\n1\n0\n".as_bytes()).unwrap();
        assert_eq!(
            ratings,
            vec![
                Verdict::NoEffect,
                Verdict::Effect,
                Verdict::Effect,
                Verdict::NoEffect
            ]
        );
    }

    #[test]
    fn test_tolerates_whitespace_and_missing_newline() {
        let ratings = read_ratings(" 1 \r\n0".as_bytes()).unwrap();
        assert_eq!(ratings, vec![Verdict::Effect, Verdict::NoEffect]);
    }

    #[test]
    fn test_rejects_out_of_range_value() {
        let err = read_ratings("0\n1\n2\n".as_bytes()).unwrap_err();
        match err {
            Error::InvalidRating { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_text_and_extra_columns() {
        assert!(matches!(
            read_ratings("yes\n".as_bytes()),
            Err(Error::InvalidRating { line: 1, .. })
        ));
        assert!(matches!(
            read_ratings("0\n1,0\n".as_bytes()),
            Err(Error::InvalidRating { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_ratings_file("/definitely/not/here/ratings.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
