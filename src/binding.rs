//! Typed slots bound to caller-owned variables
//!
//! A [`Binding`] never owns the variable a caller registered: it holds a
//! `&mut` to it for as long as the option set lives. Only the implicit
//! options (`--config`, `--help`, ...) keep their value inside the slot.

use std::fmt;

use crate::errors::{OptionsError, Result};

/// Type tag of a binding, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    UInt,
    Float,
    Double,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Text => "string",
        };
        f.write_str(name)
    }
}

/// A single typed cell: either the caller's variable or a local value.
#[derive(Debug)]
pub enum Slot<'a, T> {
    Borrowed(&'a mut T),
    Owned(T),
}

impl<T> Slot<'_, T> {
    pub fn get(&self) -> &T {
        match self {
            Slot::Borrowed(r) => &**r,
            Slot::Owned(v) => v,
        }
    }

    pub fn set(&mut self, value: T) {
        match self {
            Slot::Borrowed(r) => **r = value,
            Slot::Owned(v) => *v = value,
        }
    }
}

#[derive(Debug)]
pub enum Binding<'a> {
    Bool(Slot<'a, bool>),
    Int(Slot<'a, i32>),
    UInt(Slot<'a, u32>),
    Float(Slot<'a, f32>),
    Double(Slot<'a, f64>),
    Text(Slot<'a, String>),
}

impl Binding<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Binding::Bool(_) => ValueKind::Bool,
            Binding::Int(_) => ValueKind::Int,
            Binding::UInt(_) => ValueKind::UInt,
            Binding::Float(_) => ValueKind::Float,
            Binding::Double(_) => ValueKind::Double,
            Binding::Text(_) => ValueKind::Text,
        }
    }

    /// Current value as text.
    pub fn render(&self) -> String {
        match self {
            Binding::Bool(s) => s.get().to_string(),
            Binding::Int(s) => s.get().to_string(),
            Binding::UInt(s) => s.get().to_string(),
            Binding::Float(s) => s.get().to_string(),
            Binding::Double(s) => s.get().to_string(),
            Binding::Text(s) => s.get().clone(),
        }
    }

    /// Convert `raw` to the bound type and store it.
    ///
    /// `None` means the token carried no `=value`, which is only legal for
    /// booleans and sets them to `true`.
    pub fn assign(&mut self, name: &str, raw: Option<&str>) -> Result<()> {
        let kind = self.kind();
        let Some(text) = raw else {
            return match self {
                Binding::Bool(slot) => {
                    slot.set(true);
                    Ok(())
                }
                _ => Err(OptionsError::malformed(
                    format!("--{name}"),
                    format!("option requires a value of type {kind}"),
                )),
            };
        };

        let mismatch = || OptionsError::TypeMismatch {
            name: name.to_string(),
            value: text.to_string(),
            expected: kind,
        };
        match self {
            Binding::Bool(slot) => slot.set(parse_bool(text).ok_or_else(mismatch)?),
            Binding::Int(slot) => slot.set(text.parse().map_err(|_| mismatch())?),
            Binding::UInt(slot) => slot.set(text.parse().map_err(|_| mismatch())?),
            Binding::Float(slot) => slot.set(text.parse().map_err(|_| mismatch())?),
            Binding::Double(slot) => slot.set(text.parse().map_err(|_| mismatch())?),
            Binding::Text(slot) => slot.set(text.to_string()),
        }
        Ok(())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Binding::Bool(s) => Some(*s.get()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Binding::Int(s) => Some(*s.get()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Binding::Text(s) => Some(s.get().as_str()),
            _ => None,
        }
    }
}

/// Accepts `true/false/yes/no/1/0`, ignoring ASCII case.
pub fn parse_bool(text: &str) -> Option<bool> {
    const TRUE: [&str; 3] = ["true", "yes", "1"];
    const FALSE: [&str; 3] = ["false", "no", "0"];
    if TRUE.iter().any(|t| t.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE.iter().any(|f| f.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Types that can back an option.
pub trait OptionValue: sealed::Sealed + Sized {
    fn bind(slot: Slot<'_, Self>) -> Binding<'_>;
}

macro_rules! option_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl OptionValue for $ty {
                fn bind(slot: Slot<'_, Self>) -> Binding<'_> {
                    Binding::$variant(slot)
                }
            }
        )*
    };
}

option_value!(
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    f32 => Float,
    f64 => Double,
    String => Text,
);
