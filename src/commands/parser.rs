//! Command-line grammar
//!
//! Turns a typed line into a command name and arguments. This is the thin
//! adapter boundary: everything here fails with `Parse` or `Unsupported`
//! before the engine is invoked.
//!
//! Tokenization supports single- and double-quoted arguments (commit
//! messages with spaces, file contents); an unterminated quote is a parse
//! error.

use crate::areas::remote::REMOTE_NAME;
use crate::commands::porcelain::{AddTarget, ConfigKey};
use crate::errors::Error;

/// A parsed command, ready to dispatch to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Config { key: ConfigKey, value: String },
    Init,
    Status,
    Add { target: AddTarget },
    Commit { message: String },
    Log { oneline: bool },
    BranchList,
    BranchCreate { name: String },
    Checkout { name: String, create: bool },
    Merge { name: String },
    RemoteAdd { name: String, url: String },
    Push { branch: String, set_upstream: bool },
    Pull,
    /// `echo <content> > <path>`: shell convenience for editing a file
    WriteFile { path: String, content: String },
    /// `cat <path>`: shell convenience for inspecting a file
    ReadFile { path: String },
    Exit,
}

/// Parse one typed line
///
/// # Returns
///
/// `None` for blank lines and `#` comments, otherwise the parsed command
pub fn parse_line(line: &str) -> crate::errors::Result<Option<Command>> {
    let tokens = tokenize(line)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.as_str() {
        "config" => match args {
            [key, value] => Command::Config {
                key: ConfigKey::try_parse(key)?,
                value: value.clone(),
            },
            _ => return Err(Error::Parse("usage: config <key> <value>".to_string())),
        },
        "init" => expect_no_args(args, Command::Init, "init")?,
        "status" => expect_no_args(args, Command::Status, "status")?,
        "add" => match args {
            [] => return Err(Error::Parse("nothing specified, nothing added".to_string())),
            [dot] if dot == "." => Command::Add {
                target: AddTarget::All,
            },
            paths => Command::Add {
                target: AddTarget::Paths(paths.to_vec()),
            },
        },
        "commit" => match args {
            [flag, message] if flag == "-m" => Command::Commit {
                message: message.clone(),
            },
            _ => return Err(Error::Parse("usage: commit -m \"<message>\"".to_string())),
        },
        "log" => match args {
            [] => Command::Log { oneline: false },
            [flag] if flag == "--oneline" => Command::Log { oneline: true },
            _ => return Err(Error::Parse("usage: log [--oneline]".to_string())),
        },
        "branch" => match args {
            [] => Command::BranchList,
            [name] => Command::BranchCreate { name: name.clone() },
            _ => return Err(Error::Parse("usage: branch [<name>]".to_string())),
        },
        "checkout" => match args {
            [flag, name] if flag == "-b" => Command::Checkout {
                name: name.clone(),
                create: true,
            },
            [name] => Command::Checkout {
                name: name.clone(),
                create: false,
            },
            _ => return Err(Error::Parse("usage: checkout [-b] <name>".to_string())),
        },
        "merge" => match args {
            [name] => Command::Merge { name: name.clone() },
            _ => return Err(Error::Parse("usage: merge <name>".to_string())),
        },
        "remote" => match args {
            [sub, name, url] if sub == "add" => Command::RemoteAdd {
                name: name.clone(),
                url: url.clone(),
            },
            [sub, ..] if sub != "add" => {
                return Err(Error::Unsupported(format!("remote sub-command '{sub}'")));
            }
            _ => return Err(Error::Parse("usage: remote add origin <url>".to_string())),
        },
        "push" => {
            let (set_upstream, rest) = match args.split_first() {
                Some((flag, rest)) if flag == "-u" => (true, rest),
                _ => (false, args),
            };
            match rest {
                [remote, branch] if remote == REMOTE_NAME => Command::Push {
                    branch: branch.clone(),
                    set_upstream,
                },
                [remote, _] => {
                    return Err(Error::Unsupported(format!(
                        "remote '{remote}' (only '{REMOTE_NAME}' is supported)"
                    )));
                }
                _ => return Err(Error::Parse("usage: push [-u] origin <branch>".to_string())),
            }
        }
        "pull" => expect_no_args(args, Command::Pull, "pull")?,
        "echo" => match args {
            [content, redirect, path] if redirect == ">" => Command::WriteFile {
                path: path.clone(),
                content: content.clone(),
            },
            _ => return Err(Error::Parse("usage: echo <content> > <path>".to_string())),
        },
        "cat" => match args {
            [path] => Command::ReadFile { path: path.clone() },
            _ => return Err(Error::Parse("usage: cat <path>".to_string())),
        },
        "exit" | "quit" => expect_no_args(args, Command::Exit, name)?,
        other => return Err(Error::Unsupported(format!("command '{other}'"))),
    };

    Ok(Some(command))
}

fn expect_no_args(
    args: &[String],
    command: Command,
    name: &str,
) -> crate::errors::Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(Error::Parse(format!("'{name}' takes no arguments")))
    }
}

/// Split a line into tokens, honoring single and double quotes
///
/// Quotes open at any point inside a token and may enclose spaces; `#`
/// outside quotes starts a comment that runs to the end of the line.
pub fn tokenize(line: &str) -> crate::errors::Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                in_token = true;
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == c {
                        closed = true;
                        break;
                    }
                    current.push(inner);
                }
                if !closed {
                    return Err(Error::Parse(format!("unterminated {c} quote")));
                }
            }
            '#' => break,
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}
