//! Network address scalars: URL and the two IP families.
//!
//! URLs must carry a network location (a non-empty host). The IP
//! scalars are family-exact: a well-formed address of the other family
//! is a domain error, not a representation error.

use std::net::IpAddr;

use crate::literal::Literal;
use crate::scalars::{string_literal, ScalarCodec, ScalarError, ScalarResult};
use crate::value::ScalarValue;

fn has_host(url: &url::Url) -> bool {
    url.host_str().is_some_and(|h| !h.is_empty())
}

/// Scalar which handles absolute URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct Url;

impl Url {
    fn parse(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let parsed = match value {
            ScalarValue::String(s) => url::Url::parse(&s)
                .map_err(|_| ScalarError::invalid("URL", &s))?,
            ScalarValue::Url(u) => u,
            other => {
                return Err(ScalarError::Type(format!(
                    "URL cannot represent values other than strings and URLs: < {} >",
                    other
                )))
            }
        };
        if !has_host(&parsed) {
            return Err(ScalarError::invalid("URL", &parsed));
        }
        Ok(ScalarValue::Url(parsed))
    }
}

impl ScalarCodec for Url {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        self.parse(ScalarValue::from(s)).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        self.parse(value)
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Url(u) if has_host(&u) => Ok(ScalarValue::String(u.to_string())),
            other => Err(ScalarError::Value(format!(
                "URL cannot represent value: < {} >",
                other
            ))),
        }
    }
}

fn parse_ip(scalar: &str, value: &str) -> ScalarResult<IpAddr> {
    value
        .parse::<IpAddr>()
        .map_err(|_| ScalarError::invalid(&format!("{} address", scalar), value))
}

/// Scalar which handles Internet Protocol version 4 addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4;

impl Ipv4 {
    fn parse(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let addr = match value {
            ScalarValue::String(s) => parse_ip("IPv4", &s)?,
            ScalarValue::Ip(addr) => addr,
            other => {
                return Err(ScalarError::Type(format!(
                    "IPv4 cannot represent values other than strings and IPv4 addresses: < {} >",
                    other
                )))
            }
        };
        match addr {
            IpAddr::V4(_) => Ok(ScalarValue::Ip(addr)),
            IpAddr::V6(_) => Err(ScalarError::Value(
                "IPv4 cannot be used to represent IPv6 addresses".to_string(),
            )),
        }
    }
}

impl ScalarCodec for Ipv4 {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        self.parse(ScalarValue::from(s)).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        self.parse(value)
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Ip(addr @ IpAddr::V4(_)) => Ok(ScalarValue::String(addr.to_string())),
            other => Err(ScalarError::unrepresentable("IPv4", &other)),
        }
    }
}

/// Scalar which handles Internet Protocol version 6 addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv6;

impl Ipv6 {
    fn parse(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let addr = match value {
            ScalarValue::String(s) => parse_ip("IPv6", &s)?,
            ScalarValue::Ip(addr) => addr,
            other => {
                return Err(ScalarError::Type(format!(
                    "IPv6 cannot represent values other than strings and IPv6 addresses: < {} >",
                    other
                )))
            }
        };
        match addr {
            IpAddr::V6(_) => Ok(ScalarValue::Ip(addr)),
            IpAddr::V4(_) => Err(ScalarError::Value(
                "IPv6 cannot be used to represent IPv4 addresses".to_string(),
            )),
        }
    }
}

impl ScalarCodec for Ipv6 {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        self.parse(ScalarValue::from(s)).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        self.parse(value)
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Ip(addr @ IpAddr::V6(_)) => Ok(ScalarValue::String(addr.to_string())),
            other => Err(ScalarError::unrepresentable("IPv6", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_requires_host() {
        let parsed = Url
            .coerce_input(ScalarValue::from("https://example.com/a?b=c"))
            .unwrap();
        assert!(matches!(parsed, ScalarValue::Url(_)));

        assert!(Url
            .coerce_input(ScalarValue::from("nok"))
            .unwrap_err()
            .is_value());
        // scheme-only, no network location
        assert!(Url
            .coerce_input(ScalarValue::from("data:text/plain,hello"))
            .unwrap_err()
            .is_value());
        assert!(Url
            .coerce_input(ScalarValue::Int(4))
            .unwrap_err()
            .is_type());
    }

    #[test]
    fn test_url_output_recomposes() {
        let parsed = Url
            .coerce_input(ScalarValue::from("https://example.com/path"))
            .unwrap();
        assert_eq!(
            Url.coerce_output(parsed).unwrap(),
            ScalarValue::from("https://example.com/path")
        );
        assert!(Url
            .coerce_output(ScalarValue::from("https://example.com"))
            .unwrap_err()
            .is_value());
    }

    #[test]
    fn test_ipv4_family_exact() {
        let parsed = Ipv4.coerce_input(ScalarValue::from("127.0.0.1")).unwrap();
        assert_eq!(
            Ipv4.coerce_output(parsed).unwrap(),
            ScalarValue::from("127.0.0.1")
        );

        let cross = Ipv4.coerce_input(ScalarValue::from("::1")).unwrap_err();
        assert!(cross.is_value());
        assert!(cross.to_string().contains("IPv6"));

        assert!(Ipv4
            .coerce_input(ScalarValue::from("256.0.0.1"))
            .unwrap_err()
            .is_value());
        assert!(Ipv4
            .coerce_input(ScalarValue::Boolean(true))
            .unwrap_err()
            .is_type());
    }

    #[test]
    fn test_ipv6_family_exact() {
        let parsed = Ipv6
            .coerce_input(ScalarValue::from("2001:db8:0:0:0:0:0:1"))
            .unwrap();
        // canonical compressed form on output
        assert_eq!(
            Ipv6.coerce_output(parsed).unwrap(),
            ScalarValue::from("2001:db8::1")
        );

        let cross = Ipv6.coerce_input(ScalarValue::from("127.0.0.1")).unwrap_err();
        assert!(cross.is_value());
        assert!(cross.to_string().contains("IPv4"));
    }

    #[test]
    fn test_ip_output_rejects_cross_family() {
        let v6 = Ipv6.coerce_input(ScalarValue::from("::1")).unwrap();
        assert!(Ipv4.coerce_output(v6).unwrap_err().is_type());
    }

    #[test]
    fn test_literals() {
        assert!(Url
            .parse_literal(&Literal::string("https://example.com"))
            .is_some());
        assert_eq!(Url.parse_literal(&Literal::string("nok")), None);
        assert_eq!(Url.parse_literal(&Literal::int("3")), None);
        assert!(Ipv4.parse_literal(&Literal::string("10.0.0.1")).is_some());
        assert_eq!(Ipv4.parse_literal(&Literal::string("::1")), None);
    }
}
