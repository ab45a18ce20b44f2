//! Target platform detection.
//!
//! Release metadata names platforms the way the Go toolchain does
//! (`GOOS`/`GOARCH`), so the compile target is translated to those names.

/// The (OS, architecture) pair used as the match key for selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: go_os(std::env::consts::OS).to_string(),
            arch: go_arch(std::env::consts::ARCH).to_string(),
        }
    }

    /// The detected platform with either half replaced.
    pub fn detect_with(os: Option<String>, arch: Option<String>) -> Self {
        let detected = Self::detect();
        Self {
            os: os.unwrap_or(detected.os),
            arch: arch.unwrap_or(detected.arch),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

fn go_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        // linux, windows, freebsd, openbsd, netbsd, dragonfly, solaris,
        // illumos, android and ios already agree
        other => other,
    }
}

fn go_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" if cfg!(target_endian = "little") => "ppc64le",
        "powerpc64" => "ppc64",
        "mips" if cfg!(target_endian = "little") => "mipsle",
        "mips64" if cfg!(target_endian = "little") => "mips64le",
        "loongarch64" => "loong64",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = Platform::detect();

        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());

        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, "darwin");

        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, "linux");

        #[cfg(target_os = "windows")]
        assert_eq!(platform.os, "windows");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(platform.arch, "amd64");

        #[cfg(target_arch = "aarch64")]
        assert_eq!(platform.arch, "arm64");
    }

    #[test]
    fn test_detect_with_overrides() {
        let detected = Platform::detect();

        let platform = Platform::detect_with(Some("plan9".into()), None);
        assert_eq!(platform.os, "plan9");
        assert_eq!(platform.arch, detected.arch);

        let platform = Platform::detect_with(None, Some("riscv64".into()));
        assert_eq!(platform.os, detected.os);
        assert_eq!(platform.arch, "riscv64");

        assert_eq!(Platform::detect_with(None, None), detected);
    }

    #[test]
    fn test_go_names() {
        assert_eq!(go_os("macos"), "darwin");
        assert_eq!(go_os("linux"), "linux");
        assert_eq!(go_os("freebsd"), "freebsd");
        assert_eq!(go_arch("x86_64"), "amd64");
        assert_eq!(go_arch("aarch64"), "arm64");
        assert_eq!(go_arch("x86"), "386");
        assert_eq!(go_arch("arm"), "arm");
        assert_eq!(go_arch("loongarch64"), "loong64");
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::new("linux", "amd64").to_string(), "linux/amd64");
    }
}
