//! Latest-release selection.
//!
//! Versions are ordered as plain strings, so "go1.9.2" sorts after
//! "go1.20.1". Callers rely on this ordering; do not replace it with
//! semantic version parsing.

use super::{Release, ReleaseFile};

/// File kind of an installable distribution package.
pub const ARCHIVE_KIND: &str = "archive";

/// The newest matching release and the archive to install from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub version: String,
    pub filename: String,
}

/// Finds the highest-versioned release that ships an archive for `os`/`arch`.
///
/// Releases are scanned in list order. A release only replaces the current
/// best when its version is strictly greater and at least one of its files
/// matches; when several files of that release match, the last one wins.
///
/// Returns `None` when no release has a matching archive.
pub fn select_latest(releases: &[Release], os: &str, arch: &str) -> Option<Selection> {
    let mut best: Option<Selection> = None;

    for release in releases {
        let version = match release.version.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };

        if best.as_ref().is_some_and(|b| version <= b.version.as_str()) {
            continue;
        }

        for file in &release.files {
            if let Some(filename) = matching_filename(file, os, arch) {
                best = Some(Selection {
                    version: version.to_string(),
                    filename: filename.to_string(),
                });
            }
        }
    }

    best
}

fn matching_filename<'a>(file: &'a ReleaseFile, os: &str, arch: &str) -> Option<&'a str> {
    let eligible = file.kind.as_deref() == Some(ARCHIVE_KIND)
        && file.os.as_deref() == Some(os)
        && file.arch.as_deref() == Some(arch);

    if eligible { file.filename.as_deref() } else { None }
}
