//! APT message record

use super::{Codec, Fields, MessageShape, Result, Value};

/// One APT message with its fields resolved by name
///
/// Decoding always yields a message with a known shape. When building a
/// message to encode, the shape may be left unset for ids that exist in
/// only one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    id: u16,
    shape: Option<MessageShape>,
    dest: u8,
    source: u8,
    fields: Fields,
}

impl Message {
    /// Create a new message with no fields
    #[must_use]
    pub const fn new(id: u16, dest: u8, source: u8) -> Self {
        Self {
            id,
            shape: None,
            dest,
            source,
            fields: Fields::new(),
        }
    }

    /// Create a message from decoded parts
    #[must_use]
    pub const fn from_parts(
        id: u16,
        shape: MessageShape,
        dest: u8,
        source: u8,
        fields: Fields,
    ) -> Self {
        Self {
            id,
            shape: Some(shape),
            dest,
            source,
            fields,
        }
    }

    /// Set a field, appending it if new
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.insert(name, value);
        self
    }

    /// Replace all fields
    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    /// Pick a shape explicitly (required for dual-shape ids)
    #[must_use]
    pub fn with_shape(mut self, shape: MessageShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Get message ID
    #[must_use]
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Shape, if known or chosen
    #[must_use]
    pub const fn shape(&self) -> Option<MessageShape> {
        self.shape
    }

    /// Destination address (payload flag never included)
    #[must_use]
    pub const fn dest(&self) -> u8 {
        self.dest
    }

    /// Get source address
    #[must_use]
    pub const fn source(&self) -> u8 {
        self.source
    }

    /// Get fields
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Get a field value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get an integer field
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.fields.int(name)
    }

    /// Take ownership of the fields
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Encode with the built-in catalog
    pub fn encode(&self) -> Result<Vec<u8>> {
        Codec::default().encode(self)
    }

    /// Decode with the built-in catalog
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Codec::default().decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::new(0x0443, 0x50, 0x01).with("chan_ident", 1u8);

        assert_eq!(msg.id(), 0x0443);
        assert_eq!(msg.shape(), None);
        assert_eq!(msg.int("chan_ident"), Some(1));
        assert_eq!(msg.fields().len(), 1);
    }

    #[test]
    fn test_message_roundtrip() {
        let original = Message::new(0x0412, 0x01, 0x50)
            .with("chan_ident", 1u16)
            .with("position", 123_456i32);
        let encoded = original.encode().unwrap();
        let decoded = Message::decode(&encoded).unwrap();

        assert_eq!(decoded.shape(), Some(MessageShape::Long));
        assert_eq!(decoded.fields(), original.fields());
        assert_eq!(decoded, original.with_shape(MessageShape::Long));
    }
}
