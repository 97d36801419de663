//! Task source: delimited text records.
//!
//! One task per line, three integer fields:
//!
//! ```text
//! taskId/manufactureTime/assembleTime
//! ```
//!
//! Whitespace around fields is ignored and blank lines are skipped. Any
//! other malformed line rejects the whole load.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, error};

use crate::error::{Error, Result};
use crate::models::Task;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = '/';

const FIELD_COUNT: usize = 3;

/// Parses one record. `line` is 1-based and only used in errors.
pub fn parse_record(record: &str, line: usize, delimiter: char) -> Result<Task> {
    let fields: Vec<&str> = record.trim().split(delimiter).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(Error::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let parse = |value: &str| {
        value.parse::<i64>().map_err(|source| Error::InvalidInteger {
            line,
            value: value.to_string(),
            source,
        })
    };

    Ok(Task::new(parse(fields[0])?, parse(fields[1])?, parse(fields[2])?))
}

/// Parses every record in `content`.
///
/// Fails on the first malformed line; no partial task list is returned.
pub fn parse_tasks(content: &str, delimiter: char) -> Result<Vec<Task>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
        .map(|(idx, record)| parse_record(record, idx + 1, delimiter))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| error!("Invalid input data, correct the input and re-run: {e}"))
}

/// Loads tasks from a file.
///
/// # Errors
/// - [`Error::SourceNotFound`] if the file does not exist.
/// - [`Error::Io`] for other read failures.
/// - [`Error::FieldCount`] / [`Error::InvalidInteger`] for malformed lines.
pub fn load_tasks(path: impl AsRef<Path>, delimiter: char) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            error!("Input file not found: {}", path.display());
            Error::SourceNotFound(path.to_path_buf())
        }
        _ => Error::Io(e),
    })?;

    let tasks = parse_tasks(&content, delimiter)?;
    debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_record() {
        let task = parse_record("1/5/2", 1, '/').unwrap();
        assert_eq!(task, Task::new(1, 5, 2));
    }

    #[test]
    fn test_parse_record_trims_whitespace() {
        let task = parse_record("  3 / 9 / 3 \r", 1, '/').unwrap();
        assert_eq!(task, Task::new(3, 9, 3));
    }

    #[test]
    fn test_parse_record_custom_delimiter() {
        let task = parse_record("4,2,8", 1, ',').unwrap();
        assert_eq!(task, Task::new(4, 2, 8));
    }

    #[test]
    fn test_parse_record_wrong_field_count() {
        assert!(matches!(
            parse_record("1/5", 7, '/'),
            Err(Error::FieldCount { line: 7, found: 2, .. })
        ));
        assert!(matches!(
            parse_record("1/5/2/9", 2, '/'),
            Err(Error::FieldCount { found: 4, .. })
        ));
    }

    #[test]
    fn test_parse_record_non_integer() {
        match parse_record("1/five/2", 4, '/') {
            Err(Error::InvalidInteger { line, value, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(value, "five");
            }
            other => panic!("expected invalid integer, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_tasks_skips_blank_lines() {
        let tasks = parse_tasks("1/5/2\n\n2/1/6\n   \n3/9/3\n", '/').unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2], Task::new(3, 9, 3));
    }

    #[test]
    fn test_parse_tasks_rejects_whole_load() {
        let err = parse_tasks("1/5/2\n2/x/6\n3/9/3\n", '/').unwrap_err();
        assert!(matches!(err, Error::InvalidInteger { line: 2, .. }));
    }

    #[test]
    fn test_parse_tasks_empty() {
        assert!(parse_tasks("", '/').unwrap().is_empty());
    }

    #[test]
    fn test_load_tasks() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1/5/2").unwrap();
        writeln!(file, "2/1/6").unwrap();

        let tasks = load_tasks(file.path(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(tasks, vec![Task::new(1, 5, 2), Task::new(2, 1, 6)]);
    }

    #[test]
    fn test_load_tasks_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match load_tasks(&missing, DEFAULT_DELIMITER) {
            Err(Error::SourceNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected source not found, got {other:?}"),
        }
    }
}
