//! Endpoint resolution — hostname → service base URL.
//!
//! Resolved once at startup and never recomputed mid-session.

/// Default analysis-service port.
pub const DEFAULT_PORT: u16 = 8000;

/// Resolve the base URL for the analysis service from a hostname.
///
/// Loopback names normalize to `http://localhost:<port>`; anything else is
/// used verbatim with the same fixed port.
pub fn resolve_base_url(host: &str, port: u16) -> String {
    if host == "localhost" || host == "127.0.0.1" {
        format!("http://localhost:{}", port)
    } else {
        format!("http://{}:{}", host, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_resolve_to_localhost() {
        assert_eq!(
            resolve_base_url("localhost", DEFAULT_PORT),
            "http://localhost:8000"
        );
        assert_eq!(
            resolve_base_url("127.0.0.1", DEFAULT_PORT),
            "http://localhost:8000"
        );
    }

    #[test]
    fn other_hosts_keep_their_name() {
        assert_eq!(
            resolve_base_url("example.com", DEFAULT_PORT),
            "http://example.com:8000"
        );
        assert_eq!(
            resolve_base_url("192.168.1.40", DEFAULT_PORT),
            "http://192.168.1.40:8000"
        );
    }

    #[test]
    fn port_is_configurable() {
        assert_eq!(resolve_base_url("localhost", 9001), "http://localhost:9001");
    }
}
