//! Command-line argument parsing.

use crate::config::DashboardConfig;
use crate::error::ConfigError;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Clear the stored session and exit
    Logout,
    /// Run the dashboard (default)
    RunTui,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-url <URL>`
    pub api_url: Option<String>,
    /// `--token <TOKEN>`: store this token before starting
    pub token: Option<String>,
    /// `--debug`
    pub debug: bool,
}

impl CliArgs {
    /// Layer the flags over a config built from the environment.
    pub fn apply(&self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.as_str());
        }
        if self.debug {
            config = config.with_debug(true);
        }
        config
    }
}

/// Parse command-line arguments. The first item is the program name.
///
/// # Examples
///
/// ```
/// use examdesk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["examdesk".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs {
        command: CliCommand::RunTui,
        api_url: None,
        token: None,
        debug: false,
    };

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => parsed.command = CliCommand::Version,
            "--logout" => {
                if parsed.command != CliCommand::Version {
                    parsed.command = CliCommand::Logout;
                }
            }
            "--debug" => parsed.debug = true,
            "--api-url" => parsed.api_url = Some(take_value(&mut args, "--api-url")?),
            "--token" => parsed.token = Some(take_value(&mut args, "--token")?),
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    parsed.api_url = Some(url.to_string());
                } else if let Some(token) = other.strip_prefix("--token=") {
                    parsed.token = Some(token.to_string());
                } else {
                    return Err(ConfigError::UnknownArgument(other.to_string()));
                }
            }
        }
    }

    Ok(parsed)
}

fn take_value<I>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    match args.next() {
        Some(value) if !value.starts_with("--") && !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingValue {
            flag: flag.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ConfigError> {
        let mut full = vec!["examdesk".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, CliCommand::RunTui);
        assert!(args.api_url.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_version_wins_over_logout() {
        assert_eq!(
            parse(&["--version", "--logout"]).unwrap().command,
            CliCommand::Version
        );
    }

    #[test]
    fn test_parse_logout() {
        assert_eq!(parse(&["--logout"]).unwrap().command, CliCommand::Logout);
    }

    #[test]
    fn test_parse_api_url_both_forms() {
        let spaced = parse(&["--api-url", "https://a.edu/api"]).unwrap();
        let joined = parse(&["--api-url=https://a.edu/api"]).unwrap();
        assert_eq!(spaced.api_url.as_deref(), Some("https://a.edu/api"));
        assert_eq!(spaced, joined);
    }

    #[test]
    fn test_parse_token() {
        let args = parse(&["--token", "abc123", "--debug"]).unwrap();
        assert_eq!(args.token.as_deref(), Some("abc123"));
        assert!(args.debug);
        assert_eq!(args.command, CliCommand::RunTui);
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--token"]),
            Err(ConfigError::MissingValue {
                flag: "--token".to_string()
            })
        );
        assert!(parse(&["--api-url", "--debug"]).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse(&["--sync"]),
            Err(ConfigError::UnknownArgument("--sync".to_string()))
        );
    }

    #[test]
    fn test_apply_overrides_config() {
        let args = parse(&["--api-url", "https://b.edu/api/", "--debug"]).unwrap();
        let config = args.apply(DashboardConfig::default());
        assert_eq!(config.api_base_url, "https://b.edu/api");
        assert!(config.debug);
    }
}
