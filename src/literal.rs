//! Literal AST surface consumed from the host query engine.
//!
//! The engine owns its AST; codecs only ever inspect a node's tag and
//! raw value. Numeric literals keep the raw source text so digits that
//! overflow the wire integer width still reach the codec that decides
//! whether they are in range.

/// A literal value as written directly in a query document.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal, raw source digits
    Int(String),
    /// Float literal, raw source text
    Float(String),
    /// String literal, unquoted content
    String(String),
    /// Boolean literal
    Boolean(bool),
    /// Enum literal name
    Enum(String),
    /// Null literal
    Null,
    /// List literal
    List(Vec<Literal>),
    /// Object literal
    Object(Vec<(String, Literal)>),
}

impl Literal {
    /// Convenience constructor for integer literals.
    pub fn int(digits: impl Into<String>) -> Self {
        Literal::Int(digits.into())
    }

    /// Convenience constructor for float literals.
    pub fn float(text: impl Into<String>) -> Self {
        Literal::Float(text.into())
    }

    /// Convenience constructor for string literals.
    pub fn string(value: impl Into<String>) -> Self {
        Literal::String(value.into())
    }

    /// Returns the tag name of this literal.
    pub fn tag(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::String(_) => "string",
            Literal::Boolean(_) => "boolean",
            Literal::Enum(_) => "enum",
            Literal::Null => "null",
            Literal::List(_) => "list",
            Literal::Object(_) => "object",
        }
    }
}
