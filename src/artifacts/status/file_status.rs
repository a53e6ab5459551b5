use crate::errors::{Error, Result};
use derive_new::new;
use std::path::PathBuf;

/// State code meaning "not staged" in the index column and "not tracked" in the
/// working column.
pub const UNTOUCHED: char = '?';

const RENAME_SEPARATOR: &str = " -> ";

/// One line of `git status --porcelain`
///
/// Column 0 is read as the working-state code, column 1 as the index-state code and
/// columns 3.. as the path. For renames and copies the path is the destination.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileStatus {
    pub path: PathBuf,
    pub index_state: char,
    pub working_state: char,
}

impl FileStatus {
    pub fn is_staged(&self) -> bool {
        self.index_state != UNTOUCHED
    }

    pub fn is_unstaged(&self) -> bool {
        self.index_state == UNTOUCHED
    }

    pub fn is_untracked(&self) -> bool {
        self.working_state == UNTOUCHED
    }

    pub fn parse_line(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let (Some(working_state), Some(index_state), Some(' ')) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(Error::MalformedOutput(format!("status line '{line}'")));
        };

        let path = chars.as_str();
        if path.is_empty() {
            return Err(Error::MalformedOutput(format!("status line '{line}'")));
        }

        let is_rename = ['R', 'C'].contains(&working_state) || ['R', 'C'].contains(&index_state);
        let path = match path.split_once(RENAME_SEPARATOR) {
            Some((_, destination)) if is_rename => destination,
            _ => path,
        };

        Ok(FileStatus::new(
            PathBuf::from(unquote(path)),
            index_state,
            working_state,
        ))
    }
}

/// Parse the whole porcelain output, skipping blank lines.
pub fn parse_porcelain(output: &str) -> Result<Vec<FileStatus>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(FileStatus::parse_line)
        .collect()
}

// git wraps paths holding quotes, backslashes or control characters in C-style quotes
pub(crate) fn unquote(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut unquoted = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unquoted.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unquoted.push('\n'),
            Some('t') => unquoted.push('\t'),
            Some(other) => unquoted.push(other),
            None => unquoted.push('\\'),
        }
    }

    unquoted
}
