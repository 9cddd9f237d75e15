pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "reco-schema")]
#[command(about = "Validate recommendation request payloads")]
pub struct CliConfig {
    /// Payload file; `-` or omitted reads stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Require YYYY-MM-DD expiry dates and RFC 3339 login timestamps")]
    pub strict_dates: bool,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Print the request JSON Schema and exit")]
    pub schema: bool,

    #[arg(long, help = "Print an example request and exit")]
    pub example: bool,

    #[arg(short, long, help = "Enable verbose output (overrides the configured log level)")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn reads_stdin(&self) -> bool {
        matches!(self.input.as_deref(), None | Some("-"))
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn strict_dates(&self) -> bool {
        self.strict_dates
    }

    fn pretty_output(&self) -> bool {
        self.pretty
    }
}
