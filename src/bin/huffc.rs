use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::error;
use stack_huffman::shell::{Command, Mode, Reply, Session, MENU};
use stack_huffman::{Artifact, HuffmanCodec};

#[derive(Parser, Debug)]
#[command(about = "Compresses text files with a stack-merged Huffman code", long_about = None)]
struct Args {
    /// Increases the log verbosity, can be repeated.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compresses a text file into an artifact file.
    Compress { input: PathBuf, output: PathBuf },

    /// Restores the text stored in an artifact file.
    Decompress { input: PathBuf, output: PathBuf },

    /// Prints frequency table, code table, tree and statistics of a file.
    Inspect {
        input: PathBuf,

        /// Reads the input as an artifact instead of a text.
        #[clap(short, long)]
        artifact: bool,
    },

    /// Starts the interactive shell (the default).
    Shell,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(1 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    match args.command.unwrap_or(Commands::Shell) {
        Commands::Compress { input, output } => convert(Mode::Compress, input, output),
        Commands::Decompress { input, output } => convert(Mode::Decompress, input, output),
        Commands::Inspect { input, artifact } => inspect(input, artifact),
        Commands::Shell => interactive(),
    }
}

/// Runs a single load/store cycle in the given mode.
fn convert(mode: Mode, input: PathBuf, output: PathBuf) -> Result<()> {
    let mut session = Session::new(mode);

    session.execute(Command::Input(input))?;
    session.execute(Command::Output(output))?;
    Ok(())
}

fn inspect(input: PathBuf, artifact: bool) -> Result<()> {
    let codec = match artifact {
        true => {
            let artifact = Artifact::load(&input)?;
            HuffmanCodec::from_artifact(artifact.stream, artifact.frequencies)?
        }
        false => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Error reading file {}", input.display()))?;
            HuffmanCodec::from_text(&text)?
        }
    };

    println!("Frequencies:");
    for entry in codec.frequencies() {
        println!("{:?}: {}", entry.symbol, entry.count);
    }
    println!("\nCodes:\n{}", codec.codes());
    println!("Tree:\n{}", codec.tree());
    println!("Debug: {}", codec.debug_view());
    match codec.ratio() {
        Some(ratio) => println!("Level: {ratio}"),
        None => println!("Level: undefined (empty stream)"),
    }
    Ok(())
}

fn interactive() -> Result<()> {
    println!("{MENU}");

    let mut session = Session::default();
    let mut lines = io::stdin().lock().lines();

    while let Some(line) = lines.next() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("\n{e}\n");
                continue;
            }
        };

        match session.execute(command) {
            Ok(Reply::Message(message)) => println!("\n{message}\n"),
            Ok(Reply::Output(output)) => println!("{output}"),
            Ok(Reply::Exit) => break,
            Ok(Reply::ConfirmExit) => {
                if confirm_exit(&mut lines)? {
                    break;
                }
            }
            Err(e) => {
                error!("{e:#}");
                println!("\n{e}\n");
            }
        }
    }

    println!("\nExiting the program...");
    Ok(())
}

/// Asks whether to leave without saving until the answer is "yes" or "no".
fn confirm_exit(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    println!("\nYour file isn't saved in an output file!");

    loop {
        println!("\nDo you want to continue? (yes/no)\n");
        match lines.next() {
            None => return Ok(true),
            Some(answer) => match answer?.trim() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => continue,
            },
        }
    }
}
