//! Static message descriptors

use super::{Error, FieldKind, FieldSchema, MAX_PAYLOAD_SIZE, MessageShape, Result};

/// Body layout of one message shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Header-only message; each slot is a named `u8` parameter or reserved
    Short {
        /// Roles of header bytes 2 and 3
        params: [Option<&'static str>; 2],
    },
    /// Header plus payload laid out by the schema
    Long {
        /// Payload fields in wire order
        fields: FieldSchema,
    },
}

/// Shape and field metadata for one message id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    id: u16,
    name: &'static str,
    layout: Layout,
}

impl MessageDescriptor {
    /// Descriptor of a short message
    #[must_use]
    pub const fn short(id: u16, name: &'static str, params: [Option<&'static str>; 2]) -> Self {
        Self {
            id,
            name,
            layout: Layout::Short { params },
        }
    }

    /// Descriptor of a long message
    #[must_use]
    pub const fn long(id: u16, name: &'static str, fields: FieldSchema) -> Self {
        Self {
            id,
            name,
            layout: Layout::Long { fields },
        }
    }

    /// Get message ID
    #[must_use]
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Protocol name, for logs and lookups
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get layout
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get message shape
    #[must_use]
    pub const fn shape(&self) -> MessageShape {
        match self.layout {
            Layout::Short { .. } => MessageShape::Short,
            Layout::Long { .. } => MessageShape::Long,
        }
    }

    /// Payload schema, present only for long messages
    #[must_use]
    pub const fn fields(&self) -> Option<&FieldSchema> {
        match &self.layout {
            Layout::Short { .. } => None,
            Layout::Long { fields } => Some(fields),
        }
    }

    /// Bytes that follow the header
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        match &self.layout {
            Layout::Short { .. } => 0,
            Layout::Long { fields } => fields.width(),
        }
    }

    /// Check internal consistency
    pub(crate) fn validate(&self) -> Result<()> {
        let malformed = |reason| Error::MalformedDescriptor {
            id: self.id,
            reason,
        };

        let mut names: Vec<&str> = Vec::new();
        match &self.layout {
            Layout::Short { params } => {
                names.extend(params.iter().flatten());
            }
            Layout::Long { fields } => {
                if fields.width() > MAX_PAYLOAD_SIZE {
                    return Err(malformed("payload wider than the header can declare"));
                }
                for field in fields.fields() {
                    match (field.name(), field.kind()) {
                        (Some(_), FieldKind::Reserved(_)) => {
                            return Err(malformed("reserved field carries a name"));
                        }
                        (None, kind) if !kind.is_reserved() => {
                            return Err(malformed("value field has no name"));
                        }
                        (Some(name), _) => names.push(name),
                        (None, _) => {}
                    }
                }
            }
        }

        if names.iter().any(|name| name.is_empty()) {
            return Err(malformed("empty field name"));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(malformed("duplicate field name"));
            }
        }

        Ok(())
    }
}
