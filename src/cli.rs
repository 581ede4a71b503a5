use std::path::PathBuf;

use clap::Parser;

use crate::{batch, makefile::Makefile};

/// Convert a Makefile to a Batch (Windows) file.
///
/// Reads a Makefile, extracts its variables and rules, and writes an
/// equivalent batch script that dispatches on its first argument.
#[derive(Parser, Debug)]
#[clap(version, verbatim_doc_comment)]
pub struct Cli {
    /// The makefile to be converted
    #[clap(short, long, default_value = "./Makefile")]
    pub input: PathBuf,

    /// The name of the output batch file
    #[clap(short, long, default_value = "./make.bat")]
    pub output: PathBuf,
}

pub fn main(args: &Cli) -> anyhow::Result<()> {
    if !args.input.exists() {
        return Err(ConvertError::InputNotFound(args.input.clone()).into());
    }

    let content = std::fs::read_to_string(&args.input)?;
    let makefile = Makefile::parse(&content);

    let script = batch::render_with_observer(&makefile, |command| {
        log::debug!(
            "found command: {} options: {:?} parameters: {:?}",
            command.program,
            command.options,
            command.parameters,
        );
    });

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&args.output, script)?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("The Makefile '{}' does not exist.", .0.display())]
    InputNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_a_makefile_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Makefile");
        let output = dir.path().join("make.bat");
        std::fs::write(&input, "all:\n\techo ok\n").unwrap();

        main(&Cli { input, output: output.clone() }).unwrap();

        let script = std::fs::read_to_string(&output).unwrap();
        assert!(script.starts_with("@echo off\n"));
        assert!(script.contains("IF /I \"%1\"==\"all\" GOTO all\n"));
    }

    #[test]
    fn missing_input_is_an_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Makefile");
        let output = dir.path().join("make.bat");

        let err = main(&Cli { input: input.clone(), output: output.clone() }).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("The Makefile '{}' does not exist.", input.display()),
        );
        assert!(!output.exists());
    }

    /// Output directories are created as needed.
    #[test]
    fn creates_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Makefile");
        let output = dir.path().join("scripts").join("win").join("make.bat");
        std::fs::write(&input, "NAME = value\n").unwrap();

        main(&Cli { input, output: output.clone() }).unwrap();

        assert!(std::fs::read_to_string(&output).unwrap().contains("SET NAME=value\n"));
    }
}
