use std::{io, process::ExitCode};

use item_form::items::ItemDraft;

pub(crate) fn run() -> Result<ExitCode, String> {
    serde_norway::to_writer(io::stdout().lock(), &ItemDraft::blank())
        .map_err(|error| format!("failed to write template: {error}"))?;

    Ok(ExitCode::SUCCESS)
}
