use anyhow::Result;
use clap::Parser;
use gitling::{Repository, Shell};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitling",
    version = "0.1.0",
    about = "An in-memory version-control sandbox",
    long_about = "gitling simulates a version-control workflow entirely in memory, \
    so git commands can be practiced against a safe sandbox. \
    Nothing touches the filesystem; every session starts from scratch.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Script of commands to run instead of an interactive session")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut shell = Shell::new(Repository::new(), std::io::stdout());

    match &cli.script {
        Some(path) => {
            let script = std::fs::read_to_string(path)?;
            for line in script.lines() {
                if !shell.execute_line(line)? {
                    break;
                }
            }
        }
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();

            loop {
                if interactive {
                    eprint!("gitling> ");
                    std::io::stderr().flush()?;
                }

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                if !shell.execute_line(&line)? {
                    break;
                }
            }
        }
    }

    Ok(())
}
