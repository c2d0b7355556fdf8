//! Network reachability probe and HTTP download
//!
//! The probe is the one external call with an explicit timeout: a single TCP
//! connect to the host every clone and download needs. It runs once, up
//! front, as a fatal precondition; all other external calls are unbounded
//! blocking calls owned by their collaborators.

use std::env;
use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{Result, ShellsmithError};

const DEFAULT_PROBE_ADDR: &str = "github.com:443";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Overrides the probe endpoint, for tests
pub const PROBE_ADDR_ENV: &str = "SHELLSMITH_PROBE_ADDR";

/// Fatal precondition: one TCP connect with a short timeout
pub fn probe_connectivity() -> Result<()> {
    let endpoint = env::var(PROBE_ADDR_ENV).unwrap_or_else(|_| DEFAULT_PROBE_ADDR.to_string());

    let addrs = endpoint
        .to_socket_addrs()
        .map_err(|_| ShellsmithError::NetworkUnreachable {
            endpoint: endpoint.clone(),
        })?;

    for addr in addrs {
        if TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok() {
            return Ok(());
        }
    }

    Err(ShellsmithError::NetworkUnreachable { endpoint })
}

/// Download a URL into a writer
pub fn download_to<W: io::Write>(url: &str, dest: &mut W) -> Result<()> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| ShellsmithError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    io::copy(&mut response.body_mut().as_reader(), dest).map_err(|e| {
        ShellsmithError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::net::TcpListener;

    #[test]
    #[serial]
    fn test_probe_succeeds_against_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");

        unsafe {
            env::set_var(PROBE_ADDR_ENV, addr.to_string());
        }
        let result = probe_connectivity();
        unsafe {
            env::remove_var(PROBE_ADDR_ENV);
        }
        result.expect("probe reaches listener");
    }

    #[test]
    #[serial]
    fn test_probe_fails_against_closed_port() {
        // Bind then drop to get a port that refuses connections
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        unsafe {
            env::set_var(PROBE_ADDR_ENV, addr.to_string());
        }
        let result = probe_connectivity();
        unsafe {
            env::remove_var(PROBE_ADDR_ENV);
        }
        let err = result.expect_err("probe refused");
        assert!(matches!(err, ShellsmithError::NetworkUnreachable { .. }));
    }

    #[test]
    #[serial]
    fn test_probe_fails_on_unresolvable_endpoint() {
        unsafe {
            env::set_var(PROBE_ADDR_ENV, "not-an-endpoint");
        }
        let result = probe_connectivity();
        unsafe {
            env::remove_var(PROBE_ADDR_ENV);
        }
        assert!(result.is_err());
    }
}
