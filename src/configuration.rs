//! Config for the generator behaviors
//!
//! This module provides options controlling how a game is generated and reported, as
//! opposed to the [`rules`](crate::rules) of the game itself.
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional. Set a flag to `"true"` (case-insensitive) to enable it.
//!
//! - `LINEUP_VERBOSE`: Print each inning as it is planned (default: `false`)
//! - `LINEUP_LOG`: Enable logging to a file (default: `false`)
//! - `LINEUP_SEED`: Seed for tie-breaking; unset means a fresh seed per run

use tracing::warn;

use crate::{logger::init_logger, tie_break::ShuffleTieBreak};

/// Configuration for generator behaviors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) verbose: bool,
    pub(crate) log: bool,
    pub(crate) seed: Option<u64>,
    /// `LINEUP_SEED` value that was set but could not be parsed
    invalid_seed: Option<String>,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Innings are not printed while planning.
    /// - Logging to file is disabled.
    /// - Ties are broken with a fresh random seed.
    pub fn new() -> Self {
        Self {
            verbose: false,
            log: false,
            seed: None,
            invalid_seed: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `LINEUP_VERBOSE`: if set to `"true"`, prints innings while planning (default: `false`)
    /// - `LINEUP_LOG`: if set to `"true"`, enables logging to file (default: `false`)
    /// - `LINEUP_SEED`: a `u64` seed for tie-breaking (default: none)
    ///
    /// Any other value (including unset) will result in using the default value for each field.
    /// An unparsable seed is reported by [`tie_break`](Self::tie_break) when it falls back to a
    /// fresh seed.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        let (seed, invalid_seed) = match std::env::var("LINEUP_SEED") {
            Ok(value) => match value.trim().parse() {
                Ok(seed) => (Some(seed), None),
                Err(_) => (None, Some(value)),
            },
            Err(_) => (None, None),
        };

        Self {
            verbose: get_env_flag("LINEUP_VERBOSE", false),
            log: get_env_flag("LINEUP_LOG", false),
            seed,
            invalid_seed,
        }
    }

    /// Enable or disable printing innings while planning.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Fix the tie-breaking seed, making the generated game reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.invalid_seed = None;
        self
    }

    /// True if innings are printed while planning.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// True if logs are written to a file.
    pub fn log(&self) -> bool {
        self.log
    }

    /// The configured tie-breaking seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The shuffle policy this configuration asks for.
    ///
    /// Warns when `LINEUP_SEED` was set to something other than a `u64`.
    pub fn tie_break(&self) -> ShuffleTieBreak {
        match self.seed {
            Some(seed) => ShuffleTieBreak::seeded(seed),
            None => {
                if let Some(value) = &self.invalid_seed {
                    warn!("ignoring LINEUP_SEED={value}: not a u64, using a fresh seed");
                }
                ShuffleTieBreak::from_entropy()
            }
        }
    }

    /// Installs the file logger if logging is enabled.
    ///
    /// Call it before reading other settings so their warnings reach the log file. Once the
    /// logger is installed, later calls do nothing.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be created or another global subscriber is
    /// already set.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        if self.log {
            init_logger()?;
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::FmtSubscriber;

    use super::*;
    use crate::{planner::Candidate, position::Position, tie_break::TieBreak};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn warnings_of(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = FmtSubscriber::builder()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn unparsable_seed_is_reported() {
        let config = Configuration {
            invalid_seed: Some("tomorrow".to_owned()),
            ..Configuration::new()
        };
        let output = warnings_of(|| {
            config.tie_break();
        });
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("LINEUP_SEED=tomorrow"), "{output}");

        // an explicit seed replaces the bad one
        let output = warnings_of(|| {
            config.clone().with_seed(3).tie_break();
        });
        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn logging_disabled_installs_nothing() {
        assert!(Configuration::new().init_logging().is_ok());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = Configuration::new().with_verbose(true).with_seed(42);
        assert!(config.verbose());
        assert!(!config.log());
        assert_eq!(config.seed(), Some(42));
        assert_eq!(Configuration::default(), Configuration::new());
    }

    #[test]
    fn seeded_config_gives_reproducible_tie_break() {
        let config = Configuration::new().with_seed(5);
        let mut a = (0..11)
            .map(|player| Candidate {
                player,
                position: Position::Bench,
                score: 0,
            })
            .collect::<Vec<_>>();
        let mut b = a.clone();
        config.tie_break().arrange(&mut a);
        config.tie_break().arrange(&mut b);
        assert_eq!(a, b);
    }
}
