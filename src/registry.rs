//! Registration-ordered map from option name to binding.

use indexmap::IndexMap;
use tracing::trace;

use crate::binding::Binding;
use crate::errors::{OptionsError, Result};
use crate::parser::is_valid_name;

#[derive(Debug)]
pub struct RegisteredOption<'a> {
    pub name: String,
    pub binding: Binding<'a>,
    pub description: String,
    /// Value the binding held when it was registered.
    pub default: String,
}

#[derive(Debug, Default)]
pub struct OptionRegistry<'a> {
    options: IndexMap<String, RegisteredOption<'a>>,
}

impl<'a> OptionRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new binding; fails on an invalid or already registered name.
    pub fn insert(&mut self, name: &str, binding: Binding<'a>, description: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(OptionsError::malformed(
                name,
                "option names may only contain letters, digits and '-'",
            ));
        }
        if self.options.contains_key(name) {
            return Err(OptionsError::DuplicateOption(name.to_string()));
        }
        trace!(option = name, kind = %binding.kind(), "register option");
        self.options.insert(
            name.to_string(),
            RegisteredOption {
                name: name.to_string(),
                default: binding.render(),
                binding,
                description: description.to_string(),
            },
        );
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&RegisteredOption<'a>> {
        self.options
            .get(name)
            .ok_or_else(|| OptionsError::UnknownOption(name.to_string()))
    }

    pub fn resolve_mut(&mut self, name: &str) -> Result<&mut RegisteredOption<'a>> {
        self.options
            .get_mut(name)
            .ok_or_else(|| OptionsError::UnknownOption(name.to_string()))
    }

    /// Resolve `name` and store `raw` into its variable.
    pub fn assign(&mut self, name: &str, raw: Option<&str>) -> Result<()> {
        let option = self.resolve_mut(name)?;
        option.binding.assign(name, raw)?;
        trace!(option = name, value = %option.binding.render(), "assigned");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredOption<'a>> {
        self.options.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{OptionValue, Slot};

    #[test]
    fn test_duplicate_rejected_regardless_of_type() {
        let mut beam = 1.0f32;
        let mut other = String::new();
        let mut registry = OptionRegistry::new();
        registry
            .insert("beam", f32::bind(Slot::Borrowed(&mut beam)), "Beam")
            .unwrap();
        let err = registry
            .insert("beam", String::bind(Slot::Borrowed(&mut other)), "Again")
            .unwrap_err();
        assert!(matches!(err, OptionsError::DuplicateOption(n) if n == "beam"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut registry = OptionRegistry::new();
        registry
            .insert("Beam", f64::bind(Slot::Owned(1.0)), "")
            .unwrap();
        assert!(registry.resolve("beam").is_err());
        assert!(registry.resolve("Beam").is_ok());
    }

    #[test]
    fn test_invalid_registration_name() {
        let mut registry = OptionRegistry::new();
        let err = registry
            .insert("max_active", i32::bind(Slot::Owned(0)), "")
            .unwrap_err();
        assert!(matches!(err, OptionsError::MalformedOption { .. }));
    }

    #[test]
    fn test_default_captured_and_order_kept() {
        let mut registry = OptionRegistry::new();
        registry.insert("b", i32::bind(Slot::Owned(7)), "").unwrap();
        registry.insert("a", bool::bind(Slot::Owned(false)), "").unwrap();
        registry.assign("b", Some("9")).unwrap();

        let names: Vec<_> = registry.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        let b = registry.resolve("b").unwrap();
        assert_eq!(b.default, "7");
        assert_eq!(b.binding.render(), "9");
    }

    #[test]
    fn test_rejected_duplicate_keeps_original_position() {
        let mut registry = OptionRegistry::new();
        registry.insert("a", i32::bind(Slot::Owned(1)), "first").unwrap();
        registry.insert("b", i32::bind(Slot::Owned(2)), "").unwrap();
        assert!(registry.insert("a", i32::bind(Slot::Owned(3)), "again").is_err());

        let names: Vec<_> = registry.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(registry.resolve("a").unwrap().description, "first");
        assert_eq!(registry.resolve("a").unwrap().default, "1");
    }

    #[test]
    fn test_assign_unknown() {
        let mut registry = OptionRegistry::new();
        let err = registry.assign("nope", Some("1")).unwrap_err();
        assert!(matches!(err, OptionsError::UnknownOption(_)));
    }
}
