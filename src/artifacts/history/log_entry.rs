use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::file_status::unquote;
use crate::errors::{Error, Result};
use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;

/// ASCII unit separator; cannot appear in a commit subject, unlike `|`.
pub const FIELD_SEPARATOR: &str = "\u{1f}";

/// `git log` format producing one [`LogEntry`] header per commit:
/// id, RFC 2822 author date, author name, `<author email>`, subject.
///
/// Combined with `--name-only`, each header is followed by the name the path had in
/// that commit, which differs from the queried name for commits before a rename.
pub const LOG_FORMAT: &str = "--format=%H%x1f%aD%x1f%aN%x1f<%ae>%x1f%s";

const FIELD_COUNT: usize = 5;

/// Characters stripped from both ends of a subject line
const MESSAGE_QUOTING: [char; 2] = ['"', ' '];

/// A single commit touching a path, as reported by `git log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: CommitId,
    pub date: DateTime<FixedOffset>,
    pub author_name: String,
    pub author_email: String,
    pub message: String,
    /// Name of the path as recorded in this commit, when git reported it
    pub recorded_path: Option<PathBuf>,
}

impl std::str::FromStr for LogEntry {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let malformed = || Error::MalformedOutput(format!("log line '{line}'"));

        let fields = line.split(FIELD_SEPARATOR).collect::<Vec<_>>();
        if fields.len() < FIELD_COUNT {
            return Err(malformed());
        }

        let id = CommitId::try_parse(fields[0].trim())?;
        let date = DateTime::parse_from_rfc2822(fields[1].trim()).map_err(|_| malformed())?;
        let author_name = fields[2].to_string();
        let author_email = fields[3]
            .strip_prefix('<')
            .and_then(|email| email.strip_suffix('>'))
            .ok_or_else(malformed)?
            .to_string();
        // anything past the fourth separator belongs to the message
        let message = fields[FIELD_COUNT - 1..]
            .join(FIELD_SEPARATOR)
            .trim_matches(MESSAGE_QUOTING.as_slice())
            .to_string();

        Ok(LogEntry {
            id,
            date,
            author_name,
            author_email,
            message,
            recorded_path: None,
        })
    }
}

/// Parse `git log` output in the order git printed it (newest first).
///
/// Lines holding the field separator start a new entry; any other non-blank line is
/// a path name reported for the entry above it. An entry keeps its recorded name only
/// when git reported exactly one (a directory query lists every file it touched).
pub fn parse_log(output: &str) -> Result<Vec<LogEntry>> {
    let mut entries: Vec<LogEntry> = Vec::new();
    let mut names_seen = 0usize;

    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        if line.contains(FIELD_SEPARATOR) {
            entries.push(line.parse()?);
            names_seen = 0;
            continue;
        }

        let Some(entry) = entries.last_mut() else {
            return Err(Error::MalformedOutput(format!("log line '{line}'")));
        };
        names_seen += 1;
        entry.recorded_path = (names_seen == 1).then(|| PathBuf::from(unquote(line)));
    }

    Ok(entries)
}
