//! CLI context - bundles settings and flags, validates them, and runs generation.

use std::io::Write;

use log::{debug, info};

use super::{CliFlags, help, prompts, quiet};
use crate::error::{Error, Result};
use crate::pass::{self, Classes};
use crate::rand::{OsSource, Rand, RandomSource};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};

/// Early exit carrying the process exit code.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    /// Run CLI, writing passwords to `out`. Returns `Err(Done)` for early exits.
    pub fn run<W: Write>(&mut self, out: &mut W) -> std::result::Result<(), Done> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        if let Err(e) = self.apply_flags() {
            prompts::error(&e.to_string());
            return Err(Done(1));
        }
        self.generate_output(out)
    }

    fn handle_info_flags(&self) -> std::result::Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("cyclepass {}", crate::VERSION);
            return Err(Done(0));
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<()> {
        if let Some(raw) = &self.flags.length {
            self.settings.pass_length = validate_length(raw)?;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        let flags = &self.flags;
        self.settings.classes = Classes::new(
            !flags.no_lower,
            !flags.no_upper,
            !flags.no_digits,
            !flags.no_symbols,
        );
        self.settings.use_os_rng = flags.urandom;
        debug!("settings: {:?}", self.settings);
        Ok(())
    }

    fn source(&self) -> Box<dyn RandomSource> {
        if self.settings.use_os_rng {
            Box::new(OsSource)
        } else {
            Box::new(Rand::new())
        }
    }

    /// Generate passwords and handle output.
    fn generate_output<W: Write>(&mut self, out: &mut W) -> std::result::Result<(), Done> {
        let mut source = self.source();
        let mut failed = false;
        let mut reporter = |msg: &str| {
            failed = true;
            prompts::error(msg);
        };

        let written = pass::generate_batch(
            self.settings.classes,
            self.settings.pass_length,
            self.settings.number_of_passwords,
            &mut source,
            &mut reporter,
            out,
        );

        if failed {
            return Err(Done(1));
        }
        info!("wrote {written} password(s) using {}", source.name());
        prompts::generated(written);
        Ok(())
    }
}

/// Whole number within the accepted range.
///
/// Numeric forms such as `5.0`, `+5` or `-3` count as whole numbers and are
/// then range-checked; a blank value reads as 0.
pub fn validate_length(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| Error::LengthNotWhole(raw.to_string()))?
    };
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::LengthNotWhole(raw.to_string()));
    }

    let length = value as i64;
    if length < MIN_LENGTH as i64 || length > MAX_LENGTH as i64 {
        return Err(Error::LengthOutOfRange {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(length as usize)
}
