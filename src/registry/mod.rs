//! Scalar assembly.
//!
//! A fixed descriptor table maps config keys to default type names and
//! codec factories. [`bake`] walks the table in declared order, applies
//! the supplied configuration (disable, rename), registers each active
//! codec with the host engine, and returns the SDL declaration text.

pub mod config;
pub mod engine;

use log::debug;
use thiserror::Error;

use crate::scalars::{self, ScalarCodec};

pub use config::{ScalarConfig, ScalarOptions, ScalarsConfig};
pub use engine::{RecordingEngine, RegisteredScalar, SchemaEngine};

/// Result type for scalar assembly
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while assembling the active scalar set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// An option key was supplied to a codec that accepts none
    #[error("{scalar} scalar accepts no option: < {option} >")]
    UnknownOption { scalar: String, option: String },
}

/// Constructs a boxed codec for one table entry.
type CodecFactory = fn(&str, &ScalarOptions) -> RegistryResult<Box<dyn ScalarCodec>>;

/// Factory for codecs that accept no construction options.
fn no_option_codec<C>(scalar: &str, options: &ScalarOptions) -> RegistryResult<Box<dyn ScalarCodec>>
where
    C: ScalarCodec + Default + 'static,
{
    if let Some(option) = options.keys().next() {
        return Err(RegistryError::UnknownOption {
            scalar: scalar.to_string(),
            option: option.clone(),
        });
    }
    Ok(Box::new(C::default()))
}

/// One entry of the assembly table.
pub struct ScalarDescriptor {
    /// Key under which configuration addresses this scalar.
    pub config_key: &'static str,

    /// Default exposed type name.
    pub type_name: &'static str,

    factory: CodecFactory,
}

macro_rules! descriptor {
    ($config_key:literal, $type_name:literal, $codec:ty) => {
        ScalarDescriptor {
            config_key: $config_key,
            type_name: $type_name,
            factory: no_option_codec::<$codec>,
        }
    };
}

/// Every available scalar, in declaration order.
pub static SCALAR_TABLE: &[ScalarDescriptor] = &[
    descriptor!("email_address", "EmailAddress", scalars::EmailAddress),
    descriptor!("datetime", "DateTime", scalars::DateTime),
    descriptor!("naive_datetime", "NaiveDateTime", scalars::NaiveDateTime),
    descriptor!("duration", "Duration", scalars::Duration),
    descriptor!("negative_float", "NegativeFloat", scalars::NegativeFloat),
    descriptor!("negative_int", "NegativeInt", scalars::NegativeInt),
    descriptor!("non_negative_float", "NonNegativeFloat", scalars::NonNegativeFloat),
    descriptor!("non_negative_int", "NonNegativeInt", scalars::NonNegativeInt),
    descriptor!("non_positive_float", "NonPositiveFloat", scalars::NonPositiveFloat),
    descriptor!("non_positive_int", "NonPositiveInt", scalars::NonPositiveInt),
    descriptor!("positive_float", "PositiveFloat", scalars::PositiveFloat),
    descriptor!("positive_int", "PositiveInt", scalars::PositiveInt),
    descriptor!("long", "Long", scalars::Long),
    descriptor!("big_int", "BigInt", scalars::BigInt),
    descriptor!("unsigned_int", "UnsignedInt", scalars::UnsignedInt),
    descriptor!("phone_number", "PhoneNumber", scalars::PhoneNumber),
    descriptor!("postal_code", "PostalCode", scalars::PostalCode),
    descriptor!("url", "URL", scalars::Url),
    descriptor!("guid", "GUID", scalars::Guid),
    descriptor!("uuid", "UUID", scalars::Uuid),
    descriptor!("hex_color_code", "HexColorCode", scalars::HexColorCode),
    descriptor!("hsl", "HSL", scalars::Hsl),
    descriptor!("hsla", "HSLA", scalars::Hsla),
    descriptor!("rgb", "RGB", scalars::Rgb),
    descriptor!("rgba", "RGBA", scalars::Rgba),
    descriptor!("ipv4", "IPv4", scalars::Ipv4),
    descriptor!("ipv6", "IPv6", scalars::Ipv6),
    descriptor!("isbn", "ISBN", scalars::Isbn),
    descriptor!("mac", "MAC", scalars::Mac),
    descriptor!("port", "Port", scalars::Port),
    descriptor!("us_currency", "USCurrency", scalars::UsCurrency),
    descriptor!("json", "JSON", scalars::Json),
    descriptor!("json_object", "JSONObject", scalars::JsonObject),
    descriptor!("geo_json", "GeoJSON", scalars::GeoJson),
];

/// Assembles the active scalar set.
///
/// Walks the descriptor table in declared order, skipping entries the
/// configuration disables; each remaining codec is constructed with its
/// configured options, registered with the engine under its exposed
/// name, and contributes one `scalar <Name>` line to the returned
/// declaration text.
pub fn bake(
    schema_name: &str,
    config: &ScalarsConfig,
    engine: &mut dyn SchemaEngine,
) -> RegistryResult<String> {
    let default_config = ScalarConfig::default();
    let mut declarations = Vec::with_capacity(SCALAR_TABLE.len());

    for descriptor in SCALAR_TABLE {
        let scalar_config = config
            .get(descriptor.config_key)
            .unwrap_or(&default_config);
        if !scalar_config.is_enabled() {
            debug!("scalar {} disabled, skipping", descriptor.type_name);
            continue;
        }

        let name = scalar_config.exposed_name(descriptor.type_name);
        let codec = (descriptor.factory)(descriptor.type_name, &scalar_config.options)?;
        debug!(
            "registering scalar {} as {} on schema {}",
            descriptor.type_name, name, schema_name
        );
        engine.register(name, schema_name, codec);
        declarations.push(format!("scalar {}", name));
    }

    Ok(declarations.join("\n"))
}
