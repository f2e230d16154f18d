use tbl::Result;

use std::{
    fs::File,
    path::PathBuf,
};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)?;

    return Ok(reader);
}
