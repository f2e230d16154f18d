use tbl::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Missing command script. Usage: toy-bank-ledger <commands.csv>")]
    MissingScript,

    #[error("Unexpected argument {0:?}. Usage: toy-bank-ledger <commands.csv>")]
    UnexpectedArgument(String),

    #[error("Command script not found: {0}")]
    FileNotFound(String),
}

/// Reads the path of the command script from the process arguments
pub fn parse_input_arg() -> Result<PathBuf> {
    let filename = script_arg(env::args().skip(1))?;

    let path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}

/// The script must be the first and only argument
fn script_arg(
    mut args: impl Iterator<Item = String>,
) -> std::result::Result<String, InputArgsError> {
    let filename = args.next().ok_or(InputArgsError::MissingScript)?;

    if let Some(extra) = args.next() {
        return Err(InputArgsError::UnexpectedArgument(extra));
    }

    Ok(filename)
}
