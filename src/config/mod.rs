pub mod cli;
pub mod env;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_url, Validate};
use env::{AppConfig, HTTP_URL_KEY};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::ffi::OsString;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "json-sum")]
#[command(about = "Sums the integers of a JSON document and checks an HTTP endpoint")]
pub struct CliConfig {
    #[arg(short = 'f', long, help = "Path to JSON file (reads stdin when omitted)")]
    pub file: Option<String>,

    #[arg(short = 'o', long, help = "Path to output file (prints to stdout when omitted)")]
    pub output: Option<String>,

    #[arg(long, help = "Path to a dotenv file (default: search for .env)")]
    pub env_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn into_settings(self, app: AppConfig) -> Settings {
        Settings::new(app, self.file, self.output)
    }
}

#[cfg(feature = "cli")]
const LONG_FLAGS: &[&str] = &["file", "output", "env-file", "verbose", "log-json"];

/// Rewrites single-dash long flags (`-file x`, `-output=y`) into the
/// `--file x` form clap understands. Arguments after `--` are left alone.
#[cfg(feature = "cli")]
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(s) if is_legacy_flag(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

#[cfg(feature = "cli")]
fn is_legacy_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub http_url: String,
    pub input_path: Option<String>,
    pub output_path: Option<String>,
}

impl Settings {
    /// Empty paths mean "not given".
    pub fn new(app: AppConfig, input_path: Option<String>, output_path: Option<String>) -> Self {
        Self {
            http_url: app.http_url,
            input_path: input_path.filter(|p| !p.is_empty()),
            output_path: output_path.filter(|p| !p.is_empty()),
        }
    }
}

impl ConfigProvider for Settings {
    fn http_url(&self) -> &str {
        &self.http_url
    }

    fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url(HTTP_URL_KEY, &self.http_url)?;
        validate_optional_path("file", self.input_path())?;
        validate_optional_path("output", self.output_path())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_treat_empty_paths_as_absent() {
        let settings = Settings::new(AppConfig::default(), Some(String::new()), None);
        assert_eq!(settings.input_path(), None);
        assert_eq!(settings.output_path(), None);

        let settings = Settings::new(
            AppConfig::default(),
            Some("in.json".to_string()),
            Some("out.txt".to_string()),
        );
        assert_eq!(settings.input_path(), Some("in.json"));
        assert_eq!(settings.output_path(), Some("out.txt"));
    }

    #[test]
    fn test_settings_validation() {
        let settings = Settings::new(AppConfig::default(), None, None);
        assert!(settings.validate().is_ok());

        let settings = Settings::new(
            AppConfig {
                http_url: "ftp://example.com".to_string(),
            },
            None,
            None,
        );
        let err = settings.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[cfg(feature = "cli")]
    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_normalize_legacy_flags() {
        let normalized = normalize_legacy_flags(args(&[
            "json-sum",
            "-file",
            "in.json",
            "-output=out.txt",
            "--verbose",
            "-o",
        ]));
        assert_eq!(
            normalized,
            args(&[
                "json-sum",
                "--file",
                "in.json",
                "--output=out.txt",
                "--verbose",
                "-o"
            ])
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_normalize_stops_at_terminator() {
        let normalized = normalize_legacy_flags(args(&["json-sum", "--", "-file"]));
        assert_eq!(normalized, args(&["json-sum", "--", "-file"]));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_legacy_and_short_forms() {
        let cli = CliConfig::parse_from(normalize_legacy_flags(args(&[
            "json-sum",
            "-file",
            "numbers.json",
            "-output",
            "sum.txt",
        ])));
        assert_eq!(cli.file.as_deref(), Some("numbers.json"));
        assert_eq!(cli.output.as_deref(), Some("sum.txt"));
        assert!(!cli.verbose);

        let cli = CliConfig::parse_from(normalize_legacy_flags(args(&[
            "json-sum", "-f", "a.json", "-v",
        ])));
        assert_eq!(cli.file.as_deref(), Some("a.json"));
        assert_eq!(cli.output, None);
        assert!(cli.verbose);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_into_settings() {
        let cli = CliConfig::parse_from(args(&["json-sum", "--output", ""]));
        let settings = cli.into_settings(AppConfig {
            http_url: "http://localhost/health".to_string(),
        });
        assert_eq!(settings.http_url(), "http://localhost/health");
        assert_eq!(settings.input_path(), None);
        assert_eq!(settings.output_path(), None);
    }
}
