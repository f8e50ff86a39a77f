//! Structured option sets that register themselves.
//!
//! A group exposes its fields through [`OptionsGroup::register_into`]; the
//! registrar decides where they land. Wrapping the registrar in [`Prefixed`]
//! registers the same group under `prefix-name`, so two instances of one
//! group can coexist in a single program.
//!
//! ```
//! use parseopts::{OptionsGroup, ParseOptions, Registrar};
//!
//! struct DecoderOptions {
//!     beam: f32,
//!     max_active: i32,
//! }
//!
//! impl OptionsGroup for DecoderOptions {
//!     fn register_into<'a, R: Registrar<'a>>(&'a mut self, r: &mut R) {
//!         r.register("beam", &mut self.beam, "Decoding beam");
//!         r.register("max-active", &mut self.max_active, "Max active states");
//!     }
//! }
//!
//! let mut first = DecoderOptions { beam: 13.0, max_active: 7000 };
//! let mut second = DecoderOptions { beam: 13.0, max_active: 7000 };
//! let mut po = ParseOptions::new("Usage: decode [options]");
//! po.register_group(&mut first);
//! po.register_group_with_prefix("lattice", &mut second);
//! po.read(["decode", "--print-args=false", "--beam=9", "--lattice-beam=6"]).unwrap();
//! drop(po);
//! assert_eq!((first.beam, second.beam), (9.0, 6.0));
//! ```

use crate::binding::OptionValue;

/// Something options can be registered into.
///
/// `'a` is how long the registered variables stay borrowed.
pub trait Registrar<'a> {
    /// Bind `name` to `value`. Registering a name twice is a bug in the
    /// calling program and panics.
    fn register<T: OptionValue>(&mut self, name: &str, value: &'a mut T, description: &str);
}

/// A set of options that knows how to register itself.
pub trait OptionsGroup {
    fn register_into<'a, R: Registrar<'a>>(&'a mut self, registrar: &mut R);
}

/// Registrar adapter that prepends `prefix-` to every name.
pub struct Prefixed<'r, R> {
    prefix: String,
    inner: &'r mut R,
}

impl<'r, R> Prefixed<'r, R> {
    pub fn new(prefix: impl Into<String>, inner: &'r mut R) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn full_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", self.prefix, name)
        }
    }
}

impl<'a, R: Registrar<'a>> Registrar<'a> for Prefixed<'_, R> {
    fn register<T: OptionValue>(&mut self, name: &str, value: &'a mut T, description: &str) {
        let full = self.full_name(name);
        self.inner.register(&full, value, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl<'a> Registrar<'a> for Recorder {
        fn register<T: OptionValue>(&mut self, name: &str, _value: &'a mut T, _description: &str) {
            self.0.push(name.to_string());
        }
    }

    struct Pair {
        a: bool,
        b: String,
    }

    impl OptionsGroup for Pair {
        fn register_into<'a, R: Registrar<'a>>(&'a mut self, r: &mut R) {
            r.register("a", &mut self.a, "");
            r.register("b", &mut self.b, "");
        }
    }

    #[test]
    fn test_nested_prefixes() {
        let mut pair = Pair {
            a: false,
            b: String::new(),
        };
        let mut recorder = Recorder::default();
        {
            let mut outer = Prefixed::new("outer", &mut recorder);
            let mut inner = Prefixed::new("inner", &mut outer);
            pair.register_into(&mut inner);
        }
        assert_eq!(recorder.0, ["outer-inner-a", "outer-inner-b"]);
    }

    #[test]
    fn test_empty_prefix_keeps_name() {
        let mut recorder = Recorder::default();
        let prefixed = Prefixed::new("", &mut recorder);
        assert_eq!(prefixed.full_name("beam"), "beam");
    }
}
