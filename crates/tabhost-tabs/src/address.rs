//! Turns address-bar input into a loadable URL.

use tabhost_config::schema::TabsConfig;

const QUERY_PLACEHOLDER: &str = "{query}";

#[derive(Debug, Clone)]
pub struct AddressResolver {
    home_url: String,
    search_url: String,
}

impl AddressResolver {
    pub fn new(home_url: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            home_url: home_url.into(),
            search_url: search_url.into(),
        }
    }

    pub fn from_config(config: &TabsConfig) -> Self {
        Self::new(config.home_url.clone(), config.search_url.clone())
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// Normalize user input:
    /// - empty -> home URL
    /// - has a scheme, or is an `about:` page -> unchanged
    /// - one token that looks like a host -> `https://` prefixed, or
    ///   `http://` for a loopback host
    /// - anything else -> search
    pub fn resolve(&self, input: &str) -> String {
        let input = input.trim();
        if input.is_empty() {
            return self.home_url.clone();
        }
        if input.contains("://") || input.starts_with("about:") {
            return input.to_string();
        }
        if let Some(scheme) = implied_scheme(input) {
            return format!("{scheme}://{input}");
        }
        self.search_url
            .replace(QUERY_PLACEHOLDER, &urlencoding::encode(input))
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::from_config(&TabsConfig::default())
    }
}

/// Scheme to prefix when `input` reads as a bare host, `None` otherwise.
fn implied_scheme(input: &str) -> Option<&'static str> {
    if input.chars().any(char::is_whitespace) {
        return None;
    }
    let host = input.split(['/', '?', '#']).next().unwrap_or(input);
    let host = host.split(':').next().unwrap_or(host);
    if host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" {
        Some("http")
    } else if host.contains('.') && !host.starts_with('.') && !host.ends_with('.') {
        Some("https")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AddressResolver {
        AddressResolver::new("https://home.example", "https://search.example/?q={query}")
    }

    #[test]
    fn empty_input_goes_home() {
        assert_eq!(resolver().resolve(""), "https://home.example");
        assert_eq!(resolver().resolve("   "), "https://home.example");
    }

    #[test]
    fn urls_with_scheme_pass_through() {
        let r = resolver();
        assert_eq!(r.resolve("https://x"), "https://x");
        assert_eq!(r.resolve("  http://y.org/path  "), "http://y.org/path");
        assert_eq!(r.resolve("about:blank"), "about:blank");
    }

    #[test]
    fn bare_hosts_get_a_scheme() {
        let r = resolver();
        assert_eq!(r.resolve("example.com"), "https://example.com");
        assert_eq!(r.resolve("docs.rs/wry"), "https://docs.rs/wry");
        assert_eq!(r.resolve("localhost:8080"), "http://localhost:8080");
        assert_eq!(r.resolve("LOCALHOST/app"), "http://LOCALHOST/app");
        assert_eq!(r.resolve("127.0.0.1:3000"), "http://127.0.0.1:3000");
    }

    #[test]
    fn everything_else_is_searched() {
        let r = resolver();
        assert_eq!(
            r.resolve("rust borrow checker"),
            "https://search.example/?q=rust%20borrow%20checker"
        );
        assert_eq!(r.resolve("tabs"), "https://search.example/?q=tabs");
        assert_eq!(r.resolve("a&b=c"), "https://search.example/?q=a%26b%3Dc");
        assert_eq!(r.resolve("trailing."), "https://search.example/?q=trailing.");
    }

    #[test]
    fn defaults_come_from_tabs_config() {
        let r = AddressResolver::default();
        assert_eq!(r.home_url(), TabsConfig::default().home_url);
    }
}
