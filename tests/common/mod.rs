//! Common test utilities for Shellsmith integration tests

use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// A disposable home directory for integration tests
#[allow(dead_code)]
pub struct TestHome {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path used as --home
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    /// Create a new empty test home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write an os-release file outside the home tree; returns its path
    pub fn os_release(&self, content: &str) -> PathBuf {
        let dir = self.temp.path().join("etc");
        std::fs::create_dir_all(&dir).expect("Failed to create etc directory");
        let path = dir.join("os-release");
        std::fs::write(&path, content).expect("Failed to write os-release");
        path
    }

    pub fn ubuntu_os_release(&self) -> PathBuf {
        self.os_release("NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\n")
    }

    pub fn arch_os_release(&self) -> PathBuf {
        self.os_release("NAME=\"Arch Linux\"\nID=arch\n")
    }

    pub fn unsupported_os_release(&self) -> PathBuf {
        self.os_release("NAME=\"Gentoo\"\nID=gentoo\n")
    }
}

/// A listening socket the connectivity probe can reach; keep the listener
/// alive for the duration of the test
#[allow(dead_code)]
pub fn reachable_endpoint() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener has address");
    (listener, addr.to_string())
}

/// An address that refuses connections (bound once, then released)
#[allow(dead_code)]
pub fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener has address");
    drop(listener);
    addr.to_string()
}
