use std::path::PathBuf;

use clap::Parser;

/// Stoat for Desktop: every configured instance in one window.
#[derive(Parser, Debug, Default)]
#[command(name = "stoat-desktop", version, about)]
pub struct Args {
    /// Start with the main window hidden.
    #[arg(long)]
    pub hidden: bool,

    /// Load the first instance from this URL for this run only.
    #[arg(long, value_name = "URL")]
    pub force_server: Option<String>,

    /// Config file path override.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let args = Args::try_parse_from(["stoat-desktop"]).unwrap();
        assert!(!args.hidden);
        assert!(args.force_server.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn all_flags_parse() {
        let args = Args::try_parse_from([
            "stoat-desktop",
            "--hidden",
            "--force-server",
            "http://localhost:5173",
            "--config",
            "/tmp/stoat.toml",
            "--log-level",
            "stoat=debug",
        ])
        .unwrap();
        assert!(args.hidden);
        assert_eq!(args.force_server.as_deref(), Some("http://localhost:5173"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/stoat.toml")));
        assert_eq!(args.log_level.as_deref(), Some("stoat=debug"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["stoat-desktop", "--execute", "sh"]).is_err());
    }
}
