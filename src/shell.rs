//! The interactive command shell.
//!
//! All the state of a shell run lives in a [`Session`]: the current [`Mode`], the codec loaded
//! last and whether it has been saved. Commands are parsed into [`Command`]s and executed against
//! the session, which answers with a [`Reply`] and never touches stdin/stdout itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::info;

use crate::artifact::Artifact;
use crate::huffman::HuffmanCodec;

pub const MENU: &str = "\
Huffman Compressor

- c[ompress]      -   Compress mode (default)
- d[ecompress]    -   Decompress mode
- i <filename>    -   Input file
- o <filename>    -   Output file
- e[xit]          -   exits the program
* de[bug]         -   Debug mode
* l[evel]         -   Level of compression
* h[elp]          -   Shows this menu
";

/// Only files with this extension are read or written.
const FILE_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Input files are texts, output files are artifacts.
    #[default]
    Compress,
    /// Input files are artifacts, output files are texts.
    Decompress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMode(Mode),
    Input(PathBuf),
    Output(PathBuf),
    Debug,
    Level,
    Help,
    Exit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches('\r');

        let command = match line {
            "c" | "compress" => Command::SetMode(Mode::Compress),
            "d" | "decompress" => Command::SetMode(Mode::Decompress),
            "de" | "debug" => Command::Debug,
            "l" | "level" => Command::Level,
            "h" | "help" => Command::Help,
            "e" | "exit" => Command::Exit,
            _ => match (line.strip_prefix("i "), line.strip_prefix("o ")) {
                (Some(path), _) if !path.is_empty() => Command::Input(PathBuf::from(path)),
                (_, Some(path)) if !path.is_empty() => Command::Output(PathBuf::from(path)),
                _ => bail!("Wrong command!"),
            },
        };
        Ok(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A status message.
    Message(String),
    /// Something the user asked to see.
    Output(String),
    /// The loaded codec hasn't been saved: the user should confirm before leaving.
    ConfirmExit,
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    codec: Option<HuffmanCodec>,
    saved: bool,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn codec(&self) -> Option<&HuffmanCodec> {
        self.codec.as_ref()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        match command {
            Command::SetMode(mode) => {
                self.mode = mode;
                self.codec = None;
                self.saved = false;

                Ok(Reply::Message(match mode {
                    Mode::Compress => "Compress mode...".to_owned(),
                    Mode::Decompress => "Decompress mode...".to_owned(),
                }))
            }
            Command::Input(path) => self.load(&path),
            Command::Output(path) => self.save(&path),
            Command::Debug => Ok(Reply::Output(self.loaded()?.debug_view())),
            Command::Level => match self.loaded()?.ratio() {
                Some(ratio) => Ok(Reply::Output(ratio.to_string())),
                None => Ok(Reply::Message(
                    "The encoded stream is empty: the level is undefined".to_owned(),
                )),
            },
            Command::Help => Ok(Reply::Output(MENU.to_owned())),
            Command::Exit => match self.codec.is_some() && !self.saved {
                true => Ok(Reply::ConfirmExit),
                false => Ok(Reply::Exit),
            },
        }
    }

    fn loaded(&self) -> Result<&HuffmanCodec> {
        self.codec.as_ref().context("There is no loaded file!")
    }

    fn load(&mut self, path: &Path) -> Result<Reply> {
        ensure_txt(path)?;

        let codec = match self.mode {
            Mode::Compress => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Error reading file {}", path.display()))?;
                HuffmanCodec::from_text(&text)?
            }
            Mode::Decompress => {
                let artifact = Artifact::load(path)
                    .with_context(|| format!("Error reading compressed file {}", path.display()))?;
                HuffmanCodec::from_artifact(artifact.stream, artifact.frequencies)?
            }
        };

        info!("loaded {} in {:?} mode", path.display(), self.mode);
        self.codec = Some(codec);
        self.saved = false;

        Ok(Reply::Message(format!("Loaded {}", path.display())))
    }

    fn save(&mut self, path: &Path) -> Result<Reply> {
        let codec = self.loaded()?;
        ensure_txt(path)?;

        match self.mode {
            Mode::Compress => Artifact::from(codec).store(path)?,
            Mode::Decompress => fs::write(path, codec.decoded())?,
        }

        info!("saved {}", path.display());
        self.saved = true;

        Ok(Reply::Message(format!("Saved {}", path.display())))
    }
}

fn ensure_txt(path: &Path) -> Result<()> {
    if !path.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
        bail!("This program works only with .{FILE_EXTENSION} files!");
    }
    Ok(())
}
