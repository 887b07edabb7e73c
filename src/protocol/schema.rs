//! Payload field layouts

use std::fmt;

/// Wire representation of one payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldKind {
    /// Unsigned 8-bit integer
    UInt8,
    /// Unsigned 16-bit integer, little-endian
    UInt16,
    /// Signed 16-bit integer, little-endian two's complement
    Int16,
    /// Unsigned 32-bit integer, little-endian
    UInt32,
    /// Signed 32-bit integer, little-endian two's complement
    Int32,
    /// Opaque byte block of fixed width
    FixedBytes(usize),
    /// Placeholder bytes with no meaning: skipped on decode, zeroed on encode
    Reserved(usize),
}

impl FieldKind {
    /// Bytes the field occupies on the wire
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::UInt8 => 1,
            Self::UInt16 | Self::Int16 => 2,
            Self::UInt32 | Self::Int32 => 4,
            Self::FixedBytes(n) | Self::Reserved(n) => n,
        }
    }

    /// Inclusive integer range the kind can carry, `None` for byte blocks
    #[must_use]
    pub const fn int_range(self) -> Option<(i64, i64)> {
        match self {
            Self::UInt8 => Some((0, u8::MAX as i64)),
            Self::UInt16 => Some((0, u16::MAX as i64)),
            Self::Int16 => Some((i16::MIN as i64, i16::MAX as i64)),
            Self::UInt32 => Some((0, u32::MAX as i64)),
            Self::Int32 => Some((i32::MIN as i64, i32::MAX as i64)),
            Self::FixedBytes(_) | Self::Reserved(_) => None,
        }
    }

    /// Check if the kind is a reserved placeholder
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Reserved(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt8 => write!(f, "u8"),
            Self::UInt16 => write!(f, "u16"),
            Self::Int16 => write!(f, "i16"),
            Self::UInt32 => write!(f, "u32"),
            Self::Int32 => write!(f, "i32"),
            Self::FixedBytes(n) => write!(f, "bytes[{n}]"),
            Self::Reserved(n) => write!(f, "reserved[{n}]"),
        }
    }
}

/// One named (or reserved) slot in a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: Option<&'static str>,
    kind: FieldKind,
}

impl Field {
    /// Named `u8` field
    #[must_use]
    pub const fn u8(name: &'static str) -> Self {
        Self::named(name, FieldKind::UInt8)
    }

    /// Named `u16` field
    #[must_use]
    pub const fn u16(name: &'static str) -> Self {
        Self::named(name, FieldKind::UInt16)
    }

    /// Named `i16` field
    #[must_use]
    pub const fn i16(name: &'static str) -> Self {
        Self::named(name, FieldKind::Int16)
    }

    /// Named `u32` field
    #[must_use]
    pub const fn u32(name: &'static str) -> Self {
        Self::named(name, FieldKind::UInt32)
    }

    /// Named `i32` field
    #[must_use]
    pub const fn i32(name: &'static str) -> Self {
        Self::named(name, FieldKind::Int32)
    }

    /// Named opaque byte block
    #[must_use]
    pub const fn bytes(name: &'static str, width: usize) -> Self {
        Self::named(name, FieldKind::FixedBytes(width))
    }

    /// Unnamed placeholder
    #[must_use]
    pub const fn reserved(width: usize) -> Self {
        Self {
            name: None,
            kind: FieldKind::Reserved(width),
        }
    }

    /// Field with an explicit kind.
    ///
    /// Passing [`FieldKind::Reserved`] here yields a malformed field that
    /// registry construction rejects.
    #[must_use]
    pub const fn named(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name: Some(name),
            kind,
        }
    }

    /// Field name, `None` for reserved slots
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Wire kind
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Bytes the field occupies
    #[must_use]
    pub const fn width(&self) -> usize {
        self.kind.width()
    }
}

/// Ordered payload layout of a long message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    fields: &'static [Field],
}

impl FieldSchema {
    /// Wrap a static field list
    #[must_use]
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Total payload width in bytes
    #[must_use]
    pub const fn width(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width();
            i += 1;
        }
        total
    }

    /// All fields, reserved ones included, in wire order
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Names of the caller-visible fields in wire order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter_map(Field::name)
    }

    /// Look up a named field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STATUS: [Field; 4] = [
        Field::u16("chan_ident"),
        Field::i32("position"),
        Field::reserved(4),
        Field::u32("status_bits"),
    ];

    #[test]
    fn test_schema_width_counts_reserved() {
        let schema = FieldSchema::new(&STATUS);
        assert_eq!(schema.width(), 14);
    }

    #[test]
    fn test_names_skip_reserved() {
        let schema = FieldSchema::new(&STATUS);
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, ["chan_ident", "position", "status_bits"]);
    }

    #[test]
    fn test_int_ranges() {
        assert_eq!(FieldKind::Int16.int_range(), Some((-32768, 32767)));
        assert_eq!(FieldKind::UInt32.int_range(), Some((0, 4_294_967_295)));
        assert_eq!(FieldKind::FixedBytes(16).int_range(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::FixedBytes(16).to_string(), "bytes[16]");
        assert_eq!(FieldKind::Reserved(2).to_string(), "reserved[2]");
    }
}
