//! Common types and utilities shared across modules

use clap::Parser;
use std::path::PathBuf;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Only print warnings and errors")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,

    #[arg(long, global = true, help = "Do not print log messages to the console (still logged to file)")]
    pub no_stdout: bool,

    #[arg(long, global = true, value_name = "PATH", help = "Config file (default: $SLSGEN_CONFIG or ./slsgen.toml)")]
    pub config: Option<PathBuf>,
}

impl GlobalOpts {
    /// Get the effective verbosity level; `-q` also drops progress lines
    /// - 0: warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_verbose() {
        let opts = GlobalOpts {
            quiet: true,
            verbose: 2,
            ..Default::default()
        };
        assert_eq!(opts.verbosity_level(), 0);
    }

    #[test]
    fn test_verbose_count() {
        let opts = GlobalOpts {
            verbose: 2,
            ..Default::default()
        };
        assert_eq!(opts.verbosity_level(), 2);
    }
}
