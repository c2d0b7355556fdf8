//! Platform identity and capability table
//!
//! The OS identity is resolved once at startup and is immutable for the run.
//! Everything platform-conditional (package manager invocation, per-platform
//! package names, font directory, config file locations) lives in the
//! [`Capabilities`] table so individual checks never branch on the platform
//! themselves.

use std::fmt;
use std::path::{Path, PathBuf};

pub mod detection;

use crate::pkg::PackageSpec;

/// Closed set of supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsIdentity {
    MacOs,
    Debian,
    Fedora,
    Arch,
}

impl fmt::Display for OsIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsIdentity::MacOs => "macOS",
            OsIdentity::Debian => "Debian/Ubuntu",
            OsIdentity::Fedora => "Fedora",
            OsIdentity::Arch => "Arch Linux",
        };
        write!(f, "{}", name)
    }
}

/// Per-platform capability table consulted by checks
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub os: OsIdentity,
    /// Package manager binary, also the hard prerequisite probed up front
    pub package_manager: &'static str,
    /// Arguments between the manager binary and the package name
    install_args: &'static [&'static str],
    /// Linux package managers need root; brew refuses it
    elevate: bool,
    /// fontconfig cache refresh after font installs
    pub needs_font_cache_refresh: bool,
}

impl Capabilities {
    pub fn for_os(os: OsIdentity) -> Self {
        match os {
            OsIdentity::MacOs => Capabilities {
                os,
                package_manager: "brew",
                install_args: &["install"],
                elevate: false,
                needs_font_cache_refresh: false,
            },
            OsIdentity::Debian => Capabilities {
                os,
                package_manager: "apt-get",
                install_args: &["install", "-y"],
                elevate: true,
                needs_font_cache_refresh: true,
            },
            OsIdentity::Fedora => Capabilities {
                os,
                package_manager: "dnf",
                install_args: &["install", "-y"],
                elevate: true,
                needs_font_cache_refresh: true,
            },
            OsIdentity::Arch => Capabilities {
                os,
                package_manager: "pacman",
                install_args: &["-S", "--noconfirm", "--needed"],
                elevate: true,
                needs_font_cache_refresh: true,
            },
        }
    }

    /// Full command line installing one package, as (program, args)
    pub fn install_command(&self, package: &str) -> (String, Vec<String>) {
        let mut args: Vec<String> = Vec::new();
        let program = if self.elevate {
            args.push(self.package_manager.to_string());
            "sudo".to_string()
        } else {
            self.package_manager.to_string()
        };
        args.extend(self.install_args.iter().map(|a| (*a).to_string()));
        args.push(package.to_string());
        (program, args)
    }

    /// Platform-specific package name for a spec
    pub fn package_name(&self, spec: &PackageSpec) -> &'static str {
        match self.os {
            OsIdentity::MacOs => spec.brew,
            OsIdentity::Debian => spec.apt,
            OsIdentity::Fedora => spec.dnf,
            OsIdentity::Arch => spec.pacman,
        }
    }

    /// Where font faces are installed for the current user
    pub fn font_dir(&self, home: &Path) -> PathBuf {
        match self.os {
            OsIdentity::MacOs => home.join("Library/Fonts"),
            _ => home.join(".local/share/fonts"),
        }
    }

    /// Shell startup file the fragments are appended to
    pub fn zshrc_path(&self, home: &Path) -> PathBuf {
        home.join(".zshrc")
    }

    /// Terminal emulator config; kitty reads ~/.config/kitty on every platform
    pub fn kitty_conf_path(&self, home: &Path) -> PathBuf {
        home.join(".config/kitty/kitty.conf")
    }
}
