//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::DatewiseError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `DatewiseError::Io` if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, DatewiseError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
