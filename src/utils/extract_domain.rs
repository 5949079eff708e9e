//! Domain extraction from configured instance hosts.

use url::Url;

/// Extracts the display domain from a configured Shlink host.
///
/// Hosts are usually absolute URLs (`https://s.example.com/`), but settings are
/// free text, so a bare authority (`s.example.com:8080`) is accepted too.
/// Handles:
/// - IPv4 addresses (e.g., `192.168.1.1`)
/// - IPv6 addresses (e.g., `[::1]`)
/// - Hostnames with ports (e.g., `example.com:3000`)
/// - Plain hostnames (e.g., `example.com`)
///
/// Port numbers are stripped from the result. Falls back to the trimmed input
/// when nothing resembling a host can be found.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain("https://s.example.com/"), "s.example.com");
/// assert_eq!(extract_domain("localhost:8080"), "localhost");
/// ```
pub fn extract_domain(host: &str) -> String {
    let trimmed = host.trim();

    if let Ok(url) = Url::parse(trimmed)
        && let Some(domain) = url.host_str()
    {
        return domain.to_string();
    }

    let authority = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest)
        .split('/')
        .next()
        .unwrap_or(trimmed);

    let domain = if authority.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        if let Some(end_bracket) = authority.find(']') {
            &authority[..=end_bracket]
        } else {
            authority
        }
    } else {
        // IPv4, hostname, or localhost - strip port if present
        authority.split(':').next().unwrap_or(authority)
    };

    if domain.is_empty() {
        trimmed.to_string()
    } else {
        domain.to_string()
    }
}
