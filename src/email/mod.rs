//! Outbound email hand-off
//!
//! Builds a `mailto:` URI with the summary as the body and hands it to the
//! platform opener. No response handling; the mail client takes over.

use anyhow::{Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::process::{Command, Stdio};

// Keep unreserved URI characters readable; everything else is escaped.
const MAILTO_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build a `mailto:` URI with URL-encoded subject and body.
pub fn mailto_uri(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(subject, MAILTO_ESCAPE),
        utf8_percent_encode(body, MAILTO_ESCAPE)
    )
}

/// Open the URI with the platform handler.
pub fn open_uri(uri: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    Command::new(opener)
        .arg(uri)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch {opener}"))?;

    Ok(())
}
