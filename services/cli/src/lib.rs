mod cli;
mod commands;
mod demo;
mod infra;

use eventwork::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
