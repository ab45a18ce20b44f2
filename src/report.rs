//! Human-readable report of the release listing and the selection result.

use std::io::{self, Write};

use crate::release::{Release, Selection};

/// Writes every release version followed by its named files and their sizes.
pub fn report_releases<W: Write>(out: &mut W, releases: &[Release]) -> io::Result<()> {
    for release in releases {
        let Some(version) = release.version.as_deref() else {
            continue;
        };
        writeln!(out, "{}", version)?;

        for file in &release.files {
            let filename = match file.filename.as_deref() {
                Some(name) if !name.is_empty() => name,
                _ => continue,
            };
            match file.size {
                Some(size) => writeln!(out, "  {} ({})", filename, size)?,
                None => writeln!(out, "  {} (unknown size)", filename)?,
            }
        }
    }
    Ok(())
}

/// Writes the outcome of the latest-release selection.
pub fn report_selection<W: Write>(out: &mut W, selection: Option<&Selection>) -> io::Result<()> {
    match selection {
        Some(s) => writeln!(out, "latest version is: {} ({})", s.version, s.filename),
        None => writeln!(out, "cannot deduce latest version"),
    }
}

/// Full report: the listing, then the selection result.
pub fn report<W: Write>(
    out: &mut W,
    releases: &[Release],
    selection: Option<&Selection>,
) -> io::Result<()> {
    report_releases(out, releases)?;
    report_selection(out, selection)
}
