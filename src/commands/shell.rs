//! Interactive shell adapter
//!
//! Owns a repository and a writer, parses typed lines, drives the engine,
//! and renders results. Engine errors are printed and the session
//! continues; only writer failures propagate.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::status_info::FileStatus;
use crate::commands::parser::{Command, parse_line};
use crate::commands::porcelain::MergeOutcome;
use colored::Colorize;
use std::io::Write;

pub struct Shell<W: Write> {
    repository: Repository,
    writer: W,
}

impl<W: Write> Shell<W> {
    pub fn new(repository: Repository, writer: W) -> Self {
        Shell { repository, writer }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Execute one typed line
    ///
    /// # Returns
    ///
    /// `false` once the user asked to exit, `true` otherwise
    pub fn execute_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(err) => {
                writeln!(self.writer, "{} {err}", "error:".red())?;
                return Ok(true);
            }
        };

        if matches!(command, Command::Exit) {
            return Ok(false);
        }

        if let Err(err) = self.dispatch(command) {
            // engine errors are part of the conversation; writer failures
            // end it
            match err.downcast::<crate::errors::Error>() {
                Ok(engine_err) => writeln!(self.writer, "{} {engine_err}", "error:".red())?,
                Err(other) => return Err(other),
            }
        }

        Ok(true)
    }

    fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Config { key, value } => {
                self.repository.config(key, &value)?;
            }
            Command::Init => {
                let branch = self.repository.init()?;
                writeln!(
                    self.writer,
                    "Initialized empty repository on branch '{branch}'"
                )?;
            }
            Command::Status => self.render_status()?,
            Command::Add { target } => {
                self.repository.add(target)?;
            }
            Command::Commit { message } => {
                let commit = self.repository.commit(&message)?;
                self.render_commit_summary(&commit)?;
            }
            Command::Log { oneline } => self.render_log(oneline)?,
            Command::BranchList => {
                let head = self.repository.refs().head_branch().clone();
                for name in self.repository.branches()? {
                    if name == head {
                        writeln!(self.writer, "* {}", name.as_ref().green())?;
                    } else {
                        writeln!(self.writer, "  {name}")?;
                    }
                }
            }
            Command::BranchCreate { name } => {
                self.repository.branch(&name)?;
            }
            Command::Checkout { name, create } => {
                let branch = if create {
                    self.repository.checkout_new(&name)?
                } else {
                    self.repository.checkout(&name)?
                };
                if create {
                    writeln!(self.writer, "Switched to a new branch '{branch}'")?;
                } else {
                    writeln!(self.writer, "Switched to branch '{branch}'")?;
                }
            }
            Command::Merge { name } => {
                let outcome = self.repository.merge(&name)?;
                self.render_merge_outcome(outcome)?;
            }
            Command::RemoteAdd { name, url } => {
                self.repository.remote_add(&name, &url)?;
            }
            Command::Push {
                branch,
                set_upstream,
            } => {
                match self.repository.push(&branch, set_upstream)? {
                    Some(tip) => writeln!(
                        self.writer,
                        "Pushed '{branch}' to origin ({})",
                        tip.to_short_oid()
                    )?,
                    None => writeln!(self.writer, "Everything up-to-date")?,
                }
                if set_upstream {
                    writeln!(
                        self.writer,
                        "branch '{branch}' set up to track 'origin/{branch}'"
                    )?;
                }
            }
            Command::Pull => {
                let outcome = self.repository.pull()?;
                self.render_merge_outcome(outcome)?;
            }
            Command::WriteFile { path, content } => {
                self.repository.write_file(path, content)?;
            }
            Command::ReadFile { path } => {
                let content = self.repository.read_file(&path)?.to_string();
                writeln!(self.writer, "{content}")?;
            }
            Command::Exit => {}
        }

        Ok(())
    }

    fn render_status(&mut self) -> anyhow::Result<()> {
        let report = self.repository.status()?;

        if report.is_clean() {
            writeln!(self.writer, "nothing to commit, working tree clean")?;
            return Ok(());
        }

        for path in &report.staged {
            let code: &str = FileStatus::Staged.into();
            writeln!(self.writer, "{} {path}", code.green())?;
        }
        for path in &report.modified {
            let code: &str = FileStatus::Modified.into();
            writeln!(self.writer, "{} {path}", code.red())?;
        }
        for path in &report.untracked {
            let code: &str = FileStatus::Untracked.into();
            writeln!(self.writer, "{} {path}", code.red())?;
        }

        Ok(())
    }

    fn render_commit_summary(&mut self, commit: &Commit) -> anyhow::Result<()> {
        let branch = self.repository.refs().head_branch().clone();
        let root = if commit.first_parent().is_none() {
            "(root-commit) "
        } else {
            ""
        };
        writeln!(
            self.writer,
            "[{branch} {root}{}] {}",
            commit.id().to_short_oid(),
            commit.short_message()
        )?;
        Ok(())
    }

    fn render_log(&mut self, oneline: bool) -> anyhow::Result<()> {
        for commit in self.repository.log()? {
            if oneline {
                let short = commit.id().to_short_oid();
                writeln!(
                    self.writer,
                    "{} {}",
                    short.as_str().yellow(),
                    commit.short_message()
                )?;
            } else {
                let header = format!("commit {}", commit.id());
                writeln!(self.writer, "{}", header.as_str().yellow())?;
                writeln!(self.writer, "Author: {}", commit.author().display_name())?;
                writeln!(self.writer, "Date:   {}", commit.author().readable_timestamp())?;
                writeln!(self.writer)?;
                for line in commit.message().lines() {
                    writeln!(self.writer, "    {line}")?;
                }
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn render_merge_outcome(&mut self, outcome: MergeOutcome) -> anyhow::Result<()> {
        match outcome {
            MergeOutcome::AlreadyUpToDate => {
                writeln!(self.writer, "Already up to date.")?;
            }
            MergeOutcome::FastForward(tip) => {
                writeln!(self.writer, "Fast-forward to {}", tip.to_short_oid())?;
            }
            MergeOutcome::Merged(commit) => {
                writeln!(self.writer, "Merge made by the three-way strategy.")?;
                self.render_commit_summary(&commit)?;
            }
            MergeOutcome::Conflicted(paths) => {
                for path in &paths {
                    writeln!(self.writer, "CONFLICT (content): merge conflict in {path}")?;
                }
                writeln!(
                    self.writer,
                    "Automatic merge failed; fix conflicts and then commit the result."
                )?;
            }
        }
        Ok(())
    }
}
