use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write offsets: {0}")]
    Write(#[from] io::Error),
}
