use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rentz", bin_name = "rentz", version = get_version())]
#[command(about = "In-memory vehicle rental desk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "RENTZ_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Start with no vehicles and no customers
    #[arg(long, global = true)]
    pub empty: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive rental desk (default)
    Shell,

    /// Print the starting fleet, every vehicle with its status
    Fleet {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price a rental without performing it
    Quote {
        /// Vehicle id (e.g. V3)
        vehicle_id: String,

        /// Number of rental days
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (currency, seed-catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["rentz"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.empty);
    }

    #[test]
    fn quote_accepts_negative_days() {
        let cli = Cli::try_parse_from(["rentz", "quote", "V1", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Quote { vehicle_id, days }) => {
                assert_eq!(vehicle_id, "V1");
                assert_eq!(days, -2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["rentz", "fleet", "--json", "--empty", "-v"]).unwrap();
        assert!(cli.empty);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Fleet { json: true })));
    }

    #[test]
    fn fleet_has_no_availability_filter() {
        assert!(Cli::try_parse_from(["rentz", "fleet", "--all"]).is_err());
    }
}
