use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    super_manager_cli::main_entry()
}
