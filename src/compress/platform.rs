//! Host platform and architecture detection.

use std::fmt;

/// Operating system the compressor is running on.
///
/// Only Windows has a download path; Linux and macOS rely on a
/// system-installed `upx`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    /// Microsoft Windows
    Windows,
    /// Linux distributions
    Linux,
    /// Apple macOS
    MacOs,
    /// Anything else, carrying the raw OS identifier
    Other(String),
}

impl Platform {
    /// Detects the platform of the running process.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` style identifier to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }

    /// File name of the UPX executable on this platform.
    pub fn tool_file_name(&self) -> &'static str {
        match self {
            Self::Windows => "upx.exe",
            _ => "upx",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::Linux => f.write_str("linux"),
            Self::MacOs => f.write_str("macos"),
            Self::Other(os) => f.write_str(os),
        }
    }
}

/// Pointer width of the running process.
///
/// Selects between the `win64` and `win32` UPX release archives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// 64-bit process
    Bits64,
    /// 32-bit process (and anything not recognised as 64-bit)
    Bits32,
}

impl Arch {
    /// Detects the pointer width this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_pointer_width = "64") {
            Self::Bits64
        } else {
            Self::Bits32
        }
    }

    /// Parses a `"64bit"` / `"32bit"` style label.
    ///
    /// Any value other than `"64bit"` maps to [`Arch::Bits32`].
    pub fn from_label(label: &str) -> Self {
        if label == "64bit" {
            Self::Bits64
        } else {
            Self::Bits32
        }
    }

    /// Suffix used in UPX Windows release names.
    pub fn windows_suffix(self) -> &'static str {
        match self {
            Self::Bits64 => "win64",
            Self::Bits32 => "win32",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_64bit_label_selects_win64() {
        assert_eq!(Arch::from_label("64bit").windows_suffix(), "win64");
        assert_eq!(Arch::from_label("32bit").windows_suffix(), "win32");
        assert_eq!(Arch::from_label("").windows_suffix(), "win32");
    }

    #[test]
    fn unknown_os_is_preserved() {
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Other("freebsd".to_string())
        );
        assert_eq!(Platform::from_os("freebsd").to_string(), "freebsd");
    }
}
