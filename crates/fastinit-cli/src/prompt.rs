//! Interactive selection prompts (`interactive` feature).

use std::io;

use dialoguer::{Confirm, Select, theme::ColorfulTheme};

use crate::error::{CliError, CliResult};

fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "failed to read interactive input".into(),
        source: io::Error::other(err),
    }
}

/// Pick one of `choices`, pre-selecting `default`.
pub fn select<T: Copy + PartialEq>(
    prompt: &str,
    choices: &[T],
    label: fn(&T) -> &'static str,
    default: T,
) -> CliResult<T> {
    let items: Vec<&str> = choices.iter().map(label).collect();
    let default_index = choices.iter().position(|c| *c == default).unwrap_or(0);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items[..])
        .default(default_index)
        .interact()
        .map_err(prompt_error)?;

    Ok(choices[index])
}

/// Yes/no question.
pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)
}
