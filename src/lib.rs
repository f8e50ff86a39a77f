//! Typed `--name=value` options for standalone programs.
//!
//! Programs register their own variables under option names, then hand the
//! process arguments to [`ParseOptions::read`]. Option tokens come first;
//! the first token not starting with `--` and everything after it are
//! positional arguments. `--config=FILE` merges a file of option lines in
//! place, so options later on the command line override it.
//!
//! ```no_run
//! use parseopts::{logging, ParseOptions};
//!
//! let mut beam = 13.0f32;
//! let mut words = String::new();
//! let mut po = ParseOptions::new(
//!     "Decode utterances.\nUsage: decode [options] <model> <wav>",
//! );
//! po.register("beam", &mut beam, "Decoding beam");
//! po.register("word-symbols", &mut words, "Symbol table for words");
//! po.read_or_exit(std::env::args());
//! logging::setup_logging(po.verbose());
//! if po.num_args() != 2 {
//!     eprintln!("{}", po.usage());
//!     std::process::exit(1);
//! }
//! let (model, wav) = (po.get_arg(1).to_string(), po.get_arg(2).to_string());
//! ```

pub mod arguments;
pub mod binding;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod group;
pub mod logging;
pub mod options;
pub mod output;
pub mod parser;
pub mod registry;
pub mod usage;
pub mod util;

pub use arguments::ParsedArguments;
pub use binding::{OptionValue, ValueKind};
pub use errors::{OptionsError, Result};
pub use group::{OptionsGroup, Prefixed, Registrar};
pub use options::ParseOptions;
