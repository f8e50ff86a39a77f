//! The program-facing option set.
//!
//! A [`ParseOptions`] is built with a usage string, receives registrations,
//! and is read exactly once:
//!
//! ```
//! use parseopts::ParseOptions;
//!
//! let mut beam = 13.0f32;
//! let mut binary = false;
//! let mut po = ParseOptions::new("Usage: decode [options] <model>");
//! po.register("beam", &mut beam, "Decoding beam");
//! po.register("binary", &mut binary, "Write output in binary mode");
//! po.read(["decode", "--print-args=false", "--beam=75", "--binary", "tree.mdl"])
//!     .unwrap();
//! let args = po.into_parsed();
//! assert_eq!(args.get_arg(1), "tree.mdl");
//! assert_eq!((beam, binary), (75.0, true));
//! ```
//!
//! Every instance carries four implicit options of its own:
//! `--config`, `--print-args`, `--help` and `--verbose`.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::arguments::ParsedArguments;
use crate::binding::{parse_bool, OptionValue, Slot};
use crate::config::{load_config, CONFIG_OPTION};
use crate::errors::{OptionsError, Result};
use crate::group::{OptionsGroup, Prefixed, Registrar};
use crate::output;
use crate::parser::{option_region, parse_option, split_args};
use crate::registry::OptionRegistry;
use crate::usage;

pub const PRINT_ARGS_OPTION: &str = "print-args";
pub const HELP_OPTION: &str = "help";
pub const VERBOSE_OPTION: &str = "verbose";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Registering,
    Read,
}

#[derive(Debug)]
pub struct ParseOptions<'a> {
    usage: String,
    registry: OptionRegistry<'a>,
    argv: Vec<String>,
    parsed: ParsedArguments,
    state: State,
}

impl<'a> ParseOptions<'a> {
    pub fn new(usage: impl Into<String>) -> Self {
        let mut registry = OptionRegistry::new();
        let implicit = [
            (
                CONFIG_OPTION,
                String::bind(Slot::Owned(String::new())),
                "Configuration file to read; command-line options override it",
            ),
            (
                PRINT_ARGS_OPTION,
                bool::bind(Slot::Owned(true)),
                "Print the command line arguments to stderr",
            ),
            (
                HELP_OPTION,
                bool::bind(Slot::Owned(false)),
                "Print out usage message",
            ),
            (
                VERBOSE_OPTION,
                i32::bind(Slot::Owned(0)),
                "Verbose level (higher->more logging)",
            ),
        ];
        for (name, binding, description) in implicit {
            registry
                .insert(name, binding, description)
                .unwrap_or_else(|e| panic!("implicit option: {e}"));
        }
        Self {
            usage: usage.into(),
            registry,
            argv: Vec::new(),
            parsed: ParsedArguments::default(),
            state: State::Registering,
        }
    }

    /// Bind `name` to a caller-owned variable.
    ///
    /// # Panics
    /// If `name` is already registered, is not a valid option name, or
    /// [`read`](Self::read) has already run.
    pub fn register<T: OptionValue>(&mut self, name: &str, value: &'a mut T, description: &str) {
        if let Err(e) = self.try_register(name, value, description) {
            panic!("{e}");
        }
    }

    /// Like [`register`](Self::register) but reports invalid and duplicate
    /// names as errors.
    pub fn try_register<T: OptionValue>(
        &mut self,
        name: &str,
        value: &'a mut T,
        description: &str,
    ) -> Result<()> {
        assert!(
            self.state == State::Registering,
            "option --{name} registered after read()"
        );
        self.registry
            .insert(name, T::bind(Slot::Borrowed(value)), description)
    }

    pub fn register_group<G: OptionsGroup>(&mut self, group: &'a mut G) {
        group.register_into(self);
    }

    /// Register a group with every name prefixed by `prefix-`.
    pub fn register_group_with_prefix<G: OptionsGroup>(&mut self, prefix: &str, group: &'a mut G) {
        group.register_into(&mut Prefixed::new(prefix, self));
    }

    /// Parse `args` (program name first, as from [`std::env::args`]).
    ///
    /// Every `--config` file in the option region is merged first, in the
    /// order given; the remaining options are then applied left to right, so
    /// the command line overrides config values wherever `--config` appears.
    /// A failure leaves earlier assignments in place. A `--help` in the option region wins over every other
    /// token: nothing else is applied or validated and
    /// [`OptionsError::HelpRequested`] is returned.
    ///
    /// # Panics
    /// If called more than once.
    #[instrument(level = "debug", skip_all)]
    pub fn read<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        assert!(
            self.state == State::Registering,
            "ParseOptions::read called twice"
        );
        self.state = State::Read;
        self.argv = args.into_iter().map(Into::into).collect();
        let tokens = self.argv.get(1..).unwrap_or_default().to_vec();

        if help_requested(&tokens) {
            self.registry.assign(HELP_OPTION, None)?;
            return Err(self.help());
        }

        let split = split_args(&tokens)?;
        let mut supplied = BTreeSet::new();
        // Config files load before any command-line token, whatever their position.
        let (configs, command_line): (Vec<_>, Vec<_>) = split
            .options
            .iter()
            .partition(|t| t.name == CONFIG_OPTION);
        for token in configs {
            self.registry
                .assign(&token.name, token.value.as_deref())?;
            supplied.insert(token.name.clone());
            if let Some(path) = token.value.as_deref() {
                supplied.extend(load_config(path, &mut self.registry)?);
            }
        }
        for token in command_line {
            self.registry
                .assign(&token.name, token.value.as_deref())?;
            supplied.insert(token.name.clone());
        }
        self.parsed = ParsedArguments::new(split.positional, supplied);

        if self.flag(HELP_OPTION) {
            return Err(self.help());
        }
        if self.print_args_enabled() {
            output::echo(&self.print_args());
        }
        debug!(
            positional = self.parsed.num_args(),
            supplied = ?self.parsed.supplied().collect::<Vec<_>>(),
            "options read"
        );
        Ok(())
    }

    /// [`read`](Self::read) from the process arguments.
    pub fn read_env(&mut self) -> Result<()> {
        self.read(std::env::args())
    }

    /// Read `args`; on `--help` print the usage and exit 0, on any error
    /// print the usage and the error and exit non-zero.
    pub fn read_or_exit<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Err(e) = self.read(args) {
            if !matches!(e, OptionsError::HelpRequested { .. }) {
                output::echo(&self.usage());
            }
            e.exit()
        }
    }

    fn help(&self) -> OptionsError {
        OptionsError::HelpRequested {
            usage: self.usage(),
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.registry
            .resolve(name)
            .ok()
            .and_then(|o| o.binding.as_bool())
            .unwrap_or(false)
    }

    pub fn usage(&self) -> String {
        usage::render_usage(&self.usage, &self.registry)
    }

    /// The argument vector given to [`read`](Self::read), shell-quoted.
    pub fn print_args(&self) -> String {
        usage::render_args(&self.argv)
    }

    /// Current value of `--print-args`.
    pub fn print_args_enabled(&self) -> bool {
        self.flag(PRINT_ARGS_OPTION)
    }

    pub fn resolved_values(&self) -> String {
        usage::render_values(&self.registry)
    }

    pub fn registry(&self) -> &OptionRegistry<'a> {
        &self.registry
    }

    pub fn verbose(&self) -> i32 {
        self.registry
            .resolve(VERBOSE_OPTION)
            .ok()
            .and_then(|o| o.binding.as_int())
            .unwrap_or(0)
    }

    /// The last `--config` path seen, if any.
    pub fn config_file(&self) -> Option<&str> {
        self.registry
            .resolve(CONFIG_OPTION)
            .ok()
            .and_then(|o| o.binding.as_text())
            .filter(|p| !p.is_empty())
    }

    pub fn num_args(&self) -> usize {
        self.parsed.num_args()
    }

    /// See [`ParsedArguments::get_arg`].
    pub fn get_arg(&self, i: usize) -> &str {
        self.parsed.get_arg(i)
    }

    pub fn try_get_arg(&self, i: usize) -> Result<&str> {
        self.parsed.try_get_arg(i)
    }

    pub fn get_opt_arg(&self, i: usize) -> &str {
        self.parsed.get_opt_arg(i)
    }

    pub fn was_supplied(&self, name: &str) -> bool {
        self.parsed.was_supplied(name)
    }

    pub fn parsed(&self) -> &ParsedArguments {
        &self.parsed
    }

    /// Drop the option bindings, releasing the caller's variables, and keep
    /// the positional arguments.
    pub fn into_parsed(self) -> ParsedArguments {
        self.parsed
    }
}

impl<'a> Registrar<'a> for ParseOptions<'a> {
    fn register<T: OptionValue>(&mut self, name: &str, value: &'a mut T, description: &str) {
        ParseOptions::register(self, name, value, description);
    }
}

/// True if the option region holds a well-formed `--help` that resolves to
/// true. The last occurrence wins.
fn help_requested(tokens: &[String]) -> bool {
    option_region(tokens)
        .iter()
        .filter_map(|t| parse_option(t).ok())
        .rev()
        .find(|t| t.name == HELP_OPTION)
        .is_some_and(|t| t.value.as_deref().map_or(Some(true), parse_bool) == Some(true))
}
