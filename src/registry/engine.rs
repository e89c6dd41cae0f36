//! Host engine seam.
//!
//! The registry never owns a schema; it hands each active codec to the
//! embedding engine through this outbound-only trait.

use crate::scalars::ScalarCodec;

/// Receives assembled scalar codecs from the registry.
pub trait SchemaEngine {
    /// Registers one codec under its exposed type name on the named schema.
    fn register(&mut self, name: &str, schema_name: &str, codec: Box<dyn ScalarCodec>);
}

/// One registration captured by [`RecordingEngine`].
pub struct RegisteredScalar {
    pub name: String,
    pub schema_name: String,
    pub codec: Box<dyn ScalarCodec>,
}

/// In-memory engine that records registrations, for tests and embedders
/// that defer wiring.
#[derive(Default)]
pub struct RecordingEngine {
    pub registered: Vec<RegisteredScalar>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exposed names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.registered.iter().map(|r| r.name.as_str()).collect()
    }

    /// The codec registered under an exposed name, if any.
    pub fn codec(&self, name: &str) -> Option<&dyn ScalarCodec> {
        self.registered
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.codec.as_ref())
    }
}

impl SchemaEngine for RecordingEngine {
    fn register(&mut self, name: &str, schema_name: &str, codec: Box<dyn ScalarCodec>) {
        self.registered.push(RegisteredScalar {
            name: name.to_string(),
            schema_name: schema_name.to_string(),
            codec,
        });
    }
}
