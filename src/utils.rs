//! Cross-cutting helpers for the CLI surface: digit-count magnitude parsing,
//! human-readable durations, and the output-file preview.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

use crate::error::PiError;

/// Parses a digit count with an optional case-insensitive magnitude suffix:
/// `K` = 10^3, `M` = 10^6, `B` = 10^9.
pub fn parse_digit_count(raw: &str) -> Result<u64, PiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PiError::InvalidDigitCount("empty value".to_string()));
    }

    let (number_part, multiplier) = match trimmed.chars().last() {
        Some('k') | Some('K') => (&trimmed[..trimmed.len() - 1], 1_000u64),
        Some('m') | Some('M') => (&trimmed[..trimmed.len() - 1], 1_000_000u64),
        Some('b') | Some('B') => (&trimmed[..trimmed.len() - 1], 1_000_000_000u64),
        _ => (trimmed, 1u64),
    };

    let value: u64 = number_part
        .parse()
        .map_err(|_| PiError::InvalidDigitCount(raw.to_string()))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| PiError::InvalidDigitCount(format!("{raw} overflows")))
}

/// Formats an elapsed wall-clock time as
/// `H hour M minute S second MS millisecond`.
pub fn format_duration(elapsed: Duration) -> String {
    let mut ms = elapsed.as_millis();
    let hours = ms / (1000 * 60 * 60);
    ms %= 1000 * 60 * 60;
    let minutes = ms / (1000 * 60);
    ms %= 1000 * 60;
    let seconds = ms / 1000;
    let millis = ms % 1000;
    format!("{hours} hour {minutes} minute {seconds} second {millis} millisecond")
}

/// Reads back the first and last `count` characters of an output file for
/// console display, without loading the file wholly into memory.
pub fn preview(path: &Path, count: usize) -> Result<(String, String), PiError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();

    let head_len = (count as u64).min(len) as usize;
    let mut head = vec![0u8; head_len];
    file.read_exact(&mut head)?;

    let tail_len = (count as u64).min(len) as usize;
    file.seek(SeekFrom::End(-(tail_len as i64)))?;
    let mut tail = vec![0u8; tail_len];
    file.read_exact(&mut tail)?;

    Ok((
        String::from_utf8_lossy(&head).into_owned(),
        String::from_utf8_lossy(&tail).into_owned(),
    ))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_plain_digit_count() {
        assert_eq!(parse_digit_count("123").unwrap(), 123);
        assert_eq!(parse_digit_count(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_magnitude_suffixes_case_insensitive() {
        assert_eq!(parse_digit_count("100K").unwrap(), 100_000);
        assert_eq!(parse_digit_count("100k").unwrap(), 100_000);
        assert_eq!(parse_digit_count("2M").unwrap(), 2_000_000);
        assert_eq!(parse_digit_count("2m").unwrap(), 2_000_000);
        assert_eq!(parse_digit_count("1B").unwrap(), 1_000_000_000);
        assert_eq!(parse_digit_count("1b").unwrap(), 1_000_000_000);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!(parse_digit_count("").is_err());
        assert!(parse_digit_count("K").is_err());
        assert!(parse_digit_count("12X").is_err());
        assert!(parse_digit_count("-5").is_err());
        assert!(parse_digit_count("1.5M").is_err());
    }

    #[test]
    fn test_format_duration_carries_units() {
        let elapsed = Duration::from_millis(3_723_456);
        assert_eq!(
            format_duration(elapsed),
            "1 hour 2 minute 3 second 456 millisecond"
        );
        assert_eq!(
            format_duration(Duration::from_millis(42)),
            "0 hour 0 minute 0 second 42 millisecond"
        );
    }

    #[test]
    fn test_preview_reads_head_and_tail() {
        let path = std::env::temp_dir().join("pistream_preview_test.txt");
        {
            let mut f = File::create(&path).unwrap();
            f.write_all(b"3.14159265358979\n").unwrap();
        }
        let (head, tail) = preview(&path, 4).unwrap();
        assert_eq!(head, "3.14");
        assert_eq!(tail, "979\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_preview_of_short_file_returns_whole_content() {
        let path = std::env::temp_dir().join("pistream_preview_short_test.txt");
        {
            let mut f = File::create(&path).unwrap();
            f.write_all(b"3.1\n").unwrap();
        }
        let (head, tail) = preview(&path, 64).unwrap();
        assert_eq!(head, "3.1\n");
        assert_eq!(tail, "3.1\n");
        std::fs::remove_file(&path).unwrap();
    }
}
