//! APT message shapes, field values, and well-known addresses

use std::fmt;

use bytes::Bytes;

/// Header/body shape of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MessageShape {
    /// Header only; two inline parameter bytes
    Short,
    /// Header followed by a payload whose length the header carries
    Long,
}

impl fmt::Display for MessageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Long => write!(f, "long"),
        }
    }
}

/// Value carried by one named field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// Any integer kind, widened
    Int(i64),
    /// Opaque fixed-width block
    Bytes(Bytes),
}

impl Value {
    /// Integer value, if this is one
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Bytes(_) => None,
        }
    }

    /// Byte block, if this is one
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Int(_) => None,
            Self::Bytes(bytes) => Some(bytes),
        }
    }
}

macro_rules! impl_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_value_from_int!(u8, u16, i16, u32, i32, i64);

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bytes(bytes) => {
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// Named field values in schema order
///
/// Names are `'static` because they come from descriptor tables; callers
/// building requests pass string literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fields(Vec<(&'static str, Value)>);

impl Fields {
    /// Create an empty field set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty field set with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Set a field, keeping its position if it already exists
    pub fn insert(&mut self, name: &'static str, value: impl Into<Value>) {
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`Fields::insert`]
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get a field value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    /// Get an integer field
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Get a byte block field
    #[must_use]
    pub fn bytes(&self, name: &str) -> Option<&Bytes> {
        self.get(name).and_then(Value::as_bytes)
    }

    /// Iterate fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }

    /// Field names in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.0.push((name, value));
    }

    pub(crate) fn entries(&self) -> &[(&'static str, Value)] {
        &self.0
    }
}

impl FromIterator<(&'static str, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// Well-known source and destination addresses
///
/// Addresses are 7 bits wide; bit 7 of the destination byte is the
/// payload flag and never part of an address.
#[derive(Debug, Clone, Copy)]
pub struct Address;

impl Address {
    /// Host controller (the PC)
    pub const HOST: u8 = 0x01;
    /// Rack controller, motherboard in a card-slot system
    pub const RACK: u8 = 0x11;
    /// Bay 0 in a card-slot system; bays follow consecutively
    pub const BAY_0: u8 = 0x21;
    /// Last addressable bay
    pub const BAY_9: u8 = 0x2A;
    /// Generic USB hardware unit
    pub const GENERIC_USB: u8 = 0x50;

    /// Address of bay `index` (0-9) in a card-slot system
    #[must_use]
    pub const fn bay(index: u8) -> Option<u8> {
        if index <= Self::BAY_9 - Self::BAY_0 {
            Some(Self::BAY_0 + index)
        } else {
            None
        }
    }
}
