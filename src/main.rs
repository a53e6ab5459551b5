use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use gitfiles::artifacts::status::file_status::FileStatus;
use gitfiles::artifacts::tree::tree_entry::EntryKind;
use gitfiles::config::Settings;
use gitfiles::{CommitId, Repository};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitfiles",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A versioned file store backed by git",
    long_about = "Manage a directory tree of files where every change is recorded as a git commit, \
    and read back the version history of any file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new file store")]
    Init,
    #[command(
        name = "clone",
        about = "Clone an existing file store",
        long_about = "This command copies the repository at the given path, history included, into the file store directory."
    )]
    Clone {
        #[arg(index = 1, help = "Path of the repository to copy")]
        source: PathBuf,
    },
    #[command(
        name = "put",
        about = "Write a file into the tree and commit it",
        long_about = "This command writes the content of --from (or stdin) to the given path and commits the change."
    )]
    Put {
        #[arg(index = 1)]
        path: PathBuf,
        #[arg(long, help = "Read the content from this file instead of stdin")]
        from: Option<PathBuf>,
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "add", about = "Commit a file already present in the tree")]
    Add {
        #[arg(index = 1)]
        path: PathBuf,
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "rm", about = "Delete files and commit the deletion")]
    Rm {
        #[arg(index = 1, required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "mv", about = "Move a file and commit the rename")]
    Mv {
        #[arg(index = 1)]
        old_path: PathBuf,
        #[arg(index = 2)]
        new_path: PathBuf,
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "status", about = "Show staged, unstaged and untracked files")]
    Status,
    #[command(name = "log", about = "Show the version history of a file")]
    Log {
        #[arg(index = 1)]
        path: PathBuf,
        #[arg(long, help = "Print one version per line")]
        oneline: bool,
    },
    #[command(name = "show", about = "Print a file's content at a version")]
    Show {
        #[arg(index = 1)]
        path: PathBuf,
        #[arg(long, help = "Commit id of the version (defaults to the latest)")]
        version: Option<String>,
    },
    #[command(name = "ls", about = "List the files and folders of the tree")]
    Ls {
        #[arg(long, help = "Print the listing as JSON")]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let repository = cli
        .settings
        .repository()
        .context("Failed to resolve the repository path")?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init => {
            repository.init()?;
            writeln!(
                stdout,
                "Initialized file store in {}",
                repository.path().display()
            )?;
        }
        Commands::Clone { source } => {
            repository
                .clone_from(&source)
                .with_context(|| format!("Failed to clone {}", source.display()))?;
            writeln!(
                stdout,
                "Cloned {} into {}",
                source.display(),
                repository.path().display()
            )?;
        }
        Commands::Put {
            path,
            from,
            message,
        } => {
            let author = cli.settings.author()?;
            let data = match from {
                Some(from) => std::fs::read(&from)
                    .with_context(|| format!("Failed to read {}", from.display()))?,
                None => {
                    let mut data = Vec::new();
                    std::io::stdin().read_to_end(&mut data)?;
                    data
                }
            };

            let path = repository.workspace().write_file(&path, &data)?;
            let message = message.unwrap_or_else(|| format!("Add {}", path.display()));
            let commit_id = repository.add_file(&path, &author, &message)?;
            report_commit(&mut stdout, commit_id.as_ref(), &message)?;
        }
        Commands::Add { path, message } => {
            let author = cli.settings.author()?;
            let message = message.unwrap_or_else(|| format!("Add {}", path.display()));
            let commit_id = repository.add_file(&path, &author, &message)?;
            report_commit(&mut stdout, commit_id.as_ref(), &message)?;
        }
        Commands::Rm { paths, message } => {
            let author = cli.settings.author()?;
            for path in &paths {
                repository
                    .remove(path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }

            let message = message.unwrap_or_else(|| {
                let names = paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>();
                format!("Delete {}", names.join(", "))
            });
            let commit_id = repository.commit(&author, &message)?;
            report_commit(&mut stdout, commit_id.as_ref(), &message)?;
        }
        Commands::Mv {
            old_path,
            new_path,
            message,
        } => {
            let author = cli.settings.author()?;
            let message = message.unwrap_or_else(|| {
                format!("Move {} to {}", old_path.display(), new_path.display())
            });
            let commit_id = repository.move_file(&old_path, &new_path, &author, &message)?;
            report_commit(&mut stdout, commit_id.as_ref(), &message)?;
        }
        Commands::Status => {
            for status in repository.status()? {
                writeln!(stdout, "{}", format_status(&status))?;
            }
        }
        Commands::Log { path, oneline } => {
            show_log(&repository, &path, oneline, &mut stdout)?;
        }
        Commands::Show { path, version } => {
            let content = repository.file_content(&path, version.as_deref())?;
            stdout.write_all(&content)?;
        }
        Commands::Ls { json } => {
            let entries = repository.workspace().list_entries()?;
            if json {
                let listing = serde_json::json!({ "files": entries });
                writeln!(stdout, "{}", serde_json::to_string_pretty(&listing)?)?;
            } else {
                for entry in entries {
                    let indent = "  ".repeat(entry.depth);
                    match entry.kind {
                        EntryKind::Folder => {
                            writeln!(stdout, "{}{}/", indent, entry.name.blue())?
                        }
                        EntryKind::File => {
                            writeln!(stdout, "{}{} ({} bytes)", indent, entry.name, entry.size)?
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gitfiles={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_commit(
    writer: &mut impl Write,
    commit_id: Option<&CommitId>,
    message: &str,
) -> Result<()> {
    match commit_id {
        Some(commit_id) => writeln!(writer, "[{}] {}", commit_id.to_short_oid(), message)?,
        None => writeln!(writer, "nothing to commit")?,
    }

    Ok(())
}

fn format_status(status: &FileStatus) -> String {
    let path = status.path.display().to_string();
    let codes = format!("{}{}", status.working_state, status.index_state);

    if status.is_untracked() {
        format!("{} {}", codes.red(), path.red())
    } else if status.is_staged() {
        format!("{} {}", codes.green(), path)
    } else {
        format!("{} {}", codes, path)
    }
}

fn show_log(
    repository: &Repository,
    path: &Path,
    oneline: bool,
    writer: &mut impl Write,
) -> Result<()> {
    let file = repository.get_file(path)?;

    for version in file.versions().iter().rev() {
        if oneline {
            writeln!(
                writer,
                "{} {}",
                version.id().to_short_oid().yellow(),
                version.message()
            )?;
            continue;
        }

        writeln!(writer, "{}", format!("commit {}", version.id()).yellow())?;
        writeln!(writer, "Author: {}", version.author())?;
        writeln!(
            writer,
            "Date:   {}",
            version.date().format("%a %b %-d %H:%M:%S %Y %z")
        )?;
        writeln!(writer)?;
        for message_line in version.message().lines() {
            writeln!(writer, "    {}", message_line)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
