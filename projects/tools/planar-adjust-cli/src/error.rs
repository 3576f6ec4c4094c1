use planar_adjust_kernels::KernelError;
use planar_adjust_ppm::PpmError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: PpmError },
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: PpmError },
    #[error(transparent)]
    Kernel(#[from] KernelError),
    #[error("Invalid menu choice '{0}'. Enter a number from 1 to 4")]
    InvalidMenuChoice(String),
}
