//! Force command - brute force ciphertext without the shift

use super::{io, IoArgs};
use anyhow::{Context, Result};
use caesar::config::UserConfig;
use console::style;

/// Run the brute-force search and write the recovered plaintext.
///
/// Fails when no candidate shift produces English, so scripts can tell a
/// miss from an empty plaintext by the exit status.
pub fn run(config: &UserConfig, args: &IoArgs, json_output: bool) -> Result<()> {
    let forcer = config
        .brute_forcer()
        .context("Failed to set up the English classifier")?;
    let cipher_text = io::read_input(args.input_file.as_deref())?;

    let Some(recovered) = forcer.crack(&cipher_text) else {
        eprintln!(
            "{} No plaintext found: no candidate shift looked like English",
            style("✗").red()
        );
        anyhow::bail!("brute force found no match");
    };

    let output = if json_output {
        format!("{}\n", serde_json::to_string_pretty(&recovered)?)
    } else {
        recovered.plaintext
    };
    io::write_output(args.output_file.as_deref(), &output)
}
