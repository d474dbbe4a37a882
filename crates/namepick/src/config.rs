//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use namepick_core::constants::{DEFAULT_BASE_INTERVAL_MS, DEFAULT_FINAL_SPIN_MS, DEFAULT_SPIN_MS};
use namepick_core::SpinTiming;

/// namepick — random name picker with persistent groups.
///
/// Without an action flag the interactive TUI starts.
#[derive(Parser, Debug)]
#[command(name = "namepick", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Group store file (JSON).
    #[arg(long, env = "NAMEPICK_STORE")]
    pub store: Option<PathBuf>,

    /// Group to work on (created if it does not exist).
    #[arg(short, long, env = "NAMEPICK_GROUP")]
    pub group: Option<String>,

    /// Add names (comma separated).
    #[arg(short, long, value_name = "NAMES")]
    pub add: Option<String>,

    /// Remove a single name.
    #[arg(long, value_name = "NAME")]
    pub remove: Option<String>,

    /// Remove every name from the group.
    #[arg(long)]
    pub clear: bool,

    /// Draw names without replacement and print them.
    #[arg(short, long, value_name = "N", num_args = 0..=1, default_missing_value = "1")]
    pub pick: Option<usize>,

    /// Print the members of the group.
    #[arg(short, long)]
    pub list: bool,

    /// Print all groups.
    #[arg(long)]
    pub groups: bool,

    /// Rename the group.
    #[arg(long, value_name = "NEW_NAME")]
    pub rename_group: Option<String>,

    /// Delete the group.
    #[arg(long)]
    pub delete_group: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Seed for reproducible draws.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Base animation tick in ms (divided by the number of names).
    #[arg(long, default_value_t = DEFAULT_BASE_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Spin duration in ms.
    #[arg(long, default_value_t = DEFAULT_SPIN_MS)]
    pub spin_ms: u64,

    /// Spin duration in ms when one name is left.
    #[arg(long, default_value_t = DEFAULT_FINAL_SPIN_MS)]
    pub final_spin_ms: u64,

    /// Quiet mode (bare output).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether any non-interactive action was requested.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.add.is_some()
            || self.remove.is_some()
            || self.clear
            || self.pick.is_some()
            || self.list
            || self.groups
            || self.rename_group.is_some()
            || self.delete_group
    }

    /// Animation timings from the flags.
    #[must_use]
    pub fn timing(&self) -> SpinTiming {
        SpinTiming::from_millis(self.interval_ms, self.spin_ms, self.final_spin_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("namepick").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_flags_means_tui() {
        let config = parse(&[]);
        assert!(!config.has_action());
        assert_eq!(config.timing(), SpinTiming::default());
    }

    #[test]
    fn pick_defaults_to_one() {
        assert_eq!(parse(&["--pick"]).pick, Some(1));
        assert_eq!(parse(&["--pick", "3"]).pick, Some(3));
        assert!(parse(&["--pick"]).has_action());
    }

    #[test]
    fn group_actions() {
        let config = parse(&["-g", "Team", "--add", "A,B", "--list"]);
        assert_eq!(config.group.as_deref(), Some("Team"));
        assert_eq!(config.add.as_deref(), Some("A,B"));
        assert!(config.list);
    }

    #[test]
    fn custom_timing() {
        let config = parse(&["--interval-ms", "300", "--spin-ms", "2000", "--final-spin-ms", "100"]);
        assert_eq!(config.timing(), SpinTiming::from_millis(300, 2000, 100));
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }
}
