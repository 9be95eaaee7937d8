/// Protocols stripped from server addresses, longest first so that
/// `file:///` wins over `file://`.
const PROTOCOLS: &[&str] = &["https://", "file:///", "http://", "file://", "ftp://"];

/// Reduce a server address to its bare domain.
///
/// `https://www.example.org/path` → `example.org`
pub fn extract_host_name(url: &str) -> String {
    let mut host = url.trim();

    if let Some(rest) = PROTOCOLS.iter().find_map(|p| host.strip_prefix(p)) {
        host = rest;
    }
    if let Some(rest) = host.strip_prefix("www.") {
        host = rest;
    }
    // a slash in first position is kept, there would be nothing left otherwise
    if let Some(pos) = host.find('/').filter(|&p| p > 0) {
        host = &host[..pos];
    }

    host.to_string()
}
