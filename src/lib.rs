//! wirescalar - A strict, configurable library of schema scalar
//! validators and coercers
//!
//! Each scalar kind implements the same three-operation codec contract
//! (`parse_literal` / `coerce_input` / `coerce_output`); the registry
//! assembles the active set from configuration and hands it to the
//! embedding engine.

pub mod literal;
pub mod registry;
pub mod scalars;
pub mod value;

pub use literal::Literal;
pub use registry::{bake, RegistryError, ScalarsConfig, SchemaEngine};
pub use scalars::{ScalarCodec, ScalarError, ScalarResult};
pub use value::ScalarValue;
