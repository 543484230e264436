//! Running the external string extraction tool.
//!
//! Extraction is opaque to tystrings: a program scans source files and
//! writes `Localizable.strings` into an output directory. Only its exit code
//! and its output are looked at.

use std::{
    fmt::{Display, Formatter},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{error::Error, logger::Logger};

/// Program used when nothing else is configured.
pub const DEFAULT_EXTRACTOR: &str = "genstrings";

/// Exit code and combined stdout/stderr of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub output: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl Display for ProcessOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(0) => write!(f, "success"),
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "termination by signal"),
        }
    }
}

/// Runs `command` to completion, handing each output line to `on_line` as
/// soon as it is read.
///
/// stdout and stderr share one pipe, so lines arrive interleaved the way a
/// terminal would show them. There is no timeout: a process that never exits
/// blocks the caller.
pub fn run_process(
    mut command: Command,
    mut on_line: impl FnMut(&str),
) -> Result<ProcessOutput, Error> {
    let program = command.get_program().to_string_lossy().into_owned();
    let spawn_error = |source: io::Error| Error::Spawn {
        program: program.clone(),
        source,
    };

    let (reader, writer) = io::pipe().map_err(spawn_error)?;
    let writer_clone = writer.try_clone().map_err(spawn_error)?;
    command
        .stdin(Stdio::null())
        .stdout(writer_clone)
        .stderr(writer);
    let mut child = command.spawn().map_err(spawn_error)?;
    // The command still owns the write ends; the reader only sees EOF once
    // they are gone.
    drop(command);

    let mut output = String::new();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        on_line(line.trim_end_matches(['\r', '\n']));
        output.push_str(&line);
    }

    let status = child.wait()?;
    Ok(ProcessOutput {
        code: status.code(),
        output,
    })
}

/// Something that produces a strings file from source files.
pub trait Extractor {
    /// Scans `files` and writes the strings file into `output_dir`.
    ///
    /// A non-zero exit is reported through [`ProcessOutput`], not as an error.
    fn extract(
        &self,
        files: &[PathBuf],
        output_dir: &Path,
        logger: &Logger,
    ) -> Result<ProcessOutput, Error>;
}

/// Xcode's `genstrings`, or any program with the same command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genstrings {
    pub program: String,
    /// Extra localization routines, passed as `-s <alias>`.
    pub aliases: Vec<String>,
}

impl Default for Genstrings {
    fn default() -> Self {
        Genstrings {
            program: DEFAULT_EXTRACTOR.to_string(),
            aliases: Vec::new(),
        }
    }
}

impl Genstrings {
    pub fn new(program: impl Into<String>) -> Self {
        Genstrings {
            program: program.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    fn command(&self, files: &[PathBuf], output_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(files);
        for alias in &self.aliases {
            command.arg("-s").arg(alias);
        }
        command.arg("-o").arg(output_dir);
        command
    }
}

impl Extractor for Genstrings {
    fn extract(
        &self,
        files: &[PathBuf],
        output_dir: &Path,
        logger: &Logger,
    ) -> Result<ProcessOutput, Error> {
        let command = self.command(files, output_dir);
        let args = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        logger.debug(format_args!("run: {} {}", self.program, args.join(" ")));

        let output = run_process(command, |line| logger.debug(line.trim()))?;
        logger.debug(format_args!("process finished with {}", output));
        Ok(output)
    }
}
