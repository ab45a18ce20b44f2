//! Latest action - finds the newest release with an archive for the target platform.

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::http::FetchMetadata;
use crate::platform::Platform;
use crate::release::{Selection, decode, select_latest};
use crate::report::{report_releases, report_selection};

/// Fetch, decode, report, select, report. Fetch and decode failures end the
/// run before anything is written.
pub struct LatestAction<F: FetchMetadata> {
    fetcher: F,
    platform: Platform,
}

impl<F: FetchMetadata> LatestAction<F> {
    pub fn new(fetcher: F, platform: Platform) -> Self {
        Self { fetcher, platform }
    }

    /// Runs once and returns the selection, or `None` when no release matches.
    ///
    /// Errors are [`crate::http::TransportError`] or [`crate::release::DecodeError`]
    /// (recoverable with `downcast_ref`), or an I/O error writing the report.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Option<Selection>> {
        let fetched = self.fetcher.fetch().await?;
        debug!("Received {} bytes ({})", fetched.body.len(), fetched.status);

        let releases = decode(&fetched.body)?;
        info!("Decoded {} releases", releases.len());

        report_releases(out, &releases).context("Failed to write release listing")?;

        let selection = select_latest(&releases, &self.platform.os, &self.platform.arch);
        match &selection {
            Some(s) => debug!("Selected {} for {}", s.filename, self.platform),
            None => debug!("No archive for {} in any release", self.platform),
        }

        report_selection(out, selection.as_ref()).context("Failed to write selection")?;

        Ok(selection)
    }
}
