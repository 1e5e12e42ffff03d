use clap::Parser;

/// Tabhost: a tabbed browser shell around embedded web content.
#[derive(Parser, Debug)]
#[command(name = "tabhost", version, about)]
pub struct Args {
    /// URL or search terms for the first tab.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Serve chrome assets from this directory instead of the bundled copy.
    #[arg(long)]
    pub assets: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Filter directive: CLI override, else the config level for our crates.
pub fn log_directive(cli_level: Option<&str>, config_level: &str) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("tabhost={level}"),
        None if !config_level.is_empty() => format!("tabhost={config_level}"),
        None => "tabhost=info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_flags() {
        let args = Args::parse_from([
            "tabhost",
            "example.com",
            "--config",
            "/tmp/t.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.url.as_deref(), Some("example.com"));
        assert_eq!(args.config.as_deref(), Some("/tmp/t.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.assets.is_none());
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["tabhost"]);
        assert!(args.url.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn directive_precedence() {
        assert_eq!(log_directive(Some("debug"), "warn"), "tabhost=debug");
        assert_eq!(log_directive(Some("wry=trace"), "warn"), "wry=trace");
        assert_eq!(log_directive(None, "warn"), "tabhost=warn");
        assert_eq!(log_directive(None, ""), "tabhost=info");
    }
}
