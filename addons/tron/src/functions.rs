use serde_json::{json, Value as JsonValue};
use weft_addon_kit::types::diagnostics::Diagnostic;
use weft_addon_kit::types::functions::FunctionSpecification;
use weft_addon_kit::types::operations::Type;

use crate::constants::SUN_PER_TRX;

lazy_static! {
    pub static ref FUNCTIONS: Vec<FunctionSpecification> =
        vec![TO_SUN.clone(), FROM_SUN.clone(), VALIDATE_ADDRESS.clone()];
    pub static ref TO_SUN: FunctionSpecification = define_function! {
        ToSun => {
            name: "to_sun",
            documentation: "Convert a TRX amount to Sun (1 TRX = 1,000,000 Sun). Fractional Sun are floored.",
            example: "tron::to_sun(1.5) // 1500000",
            inputs: [
                trx: {
                    documentation: "Amount in TRX.",
                    typing: Type::float()
                }
            ],
            output: { documentation: "Amount in Sun.", typing: Type::integer() },
        }
    };
    pub static ref FROM_SUN: FunctionSpecification = define_function! {
        FromSun => {
            name: "from_sun",
            documentation: "Convert a Sun amount to TRX. Accepts a number or a numeric string.",
            example: "tron::from_sun(1000000) // 1.0",
            inputs: [
                sun: {
                    documentation: "Amount in Sun.",
                    typing: Type::integer()
                }
            ],
            output: { documentation: "Amount in TRX.", typing: Type::float() },
        }
    };
    pub static ref VALIDATE_ADDRESS: FunctionSpecification = define_function! {
        ValidateAddress => {
            name: "validate_address",
            documentation: "Classify an address as base58, hex, or invalid.",
            example: r#"tron::validate_address("TJCnKsPa7y5okkXvQAidZBzqx3QyQ6sxMW")"#,
            inputs: [
                address: {
                    documentation: "Address to inspect.",
                    typing: Type::string()
                }
            ],
            output: { documentation: "Validation verdict and detected format.", typing: Type::object() },
        }
    };
}

pub struct ToSun;
impl ToSun {
    fn run(_spec: &FunctionSpecification, args: &[JsonValue]) -> Result<JsonValue, Diagnostic> {
        let trx = args
            .first()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| diagnosed_error!("to_sun: expected a numeric TRX amount"))?;
        Ok(json!((trx * SUN_PER_TRX as f64).floor() as i64))
    }
}

pub struct FromSun;
impl FromSun {
    fn run(_spec: &FunctionSpecification, args: &[JsonValue]) -> Result<JsonValue, Diagnostic> {
        let sun = match args.first() {
            Some(JsonValue::String(raw)) => raw
                .parse::<f64>()
                .map_err(|_| diagnosed_error!("from_sun: '{}' is not a numeric amount", raw))?,
            Some(value) => value
                .as_f64()
                .ok_or_else(|| diagnosed_error!("from_sun: expected a numeric Sun amount"))?,
            None => return Err(diagnosed_error!("from_sun: expected a numeric Sun amount")),
        };
        Ok(json!(sun / SUN_PER_TRX as f64))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AddressFormat {
    Base58,
    Hex,
    Invalid,
}

impl AddressFormat {
    fn classify(address: &str) -> Self {
        if address.len() == 34 && address.starts_with('T') {
            AddressFormat::Base58
        } else if address.len() == 42
            && address.starts_with("41")
            && address.chars().all(|c| c.is_ascii_hexdigit())
        {
            AddressFormat::Hex
        } else {
            AddressFormat::Invalid
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            AddressFormat::Base58 => "base58",
            AddressFormat::Hex => "hex",
            AddressFormat::Invalid => "invalid",
        }
    }
}

pub struct ValidateAddress;
impl ValidateAddress {
    fn run(_spec: &FunctionSpecification, args: &[JsonValue]) -> Result<JsonValue, Diagnostic> {
        let address = args
            .first()
            .and_then(|v| v.as_str())
            .ok_or_else(|| diagnosed_error!("validate_address: expected an address string"))?;
        let format = AddressFormat::classify(address);
        Ok(json!({
            "address": address,
            "isValid": format != AddressFormat::Invalid,
            "format": format.as_str(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn trx_converts_to_floored_sun() {
        assert_eq!(TO_SUN.run(&[json!(1)]).unwrap(), json!(1_000_000));
        assert_eq!(TO_SUN.run(&[json!(1.5)]).unwrap(), json!(1_500_000));
        assert_eq!(TO_SUN.run(&[json!(0.0000014)]).unwrap(), json!(1));
    }

    #[test]
    fn sun_converts_back_to_trx() {
        assert_eq!(FROM_SUN.run(&[json!(1_000_000)]).unwrap(), json!(1.0));
        assert_eq!(FROM_SUN.run(&[json!("1500000")]).unwrap(), json!(1.5));
        assert!(FROM_SUN.run(&[json!("a lot")]).is_err());
    }

    #[test_case("TJCnKsPa7y5okkXvQAidZBzqx3QyQ6sxMW", "base58")]
    #[test_case("41a614f803b6fd780986a42c78ec9c7f77e6ded13c", "hex")]
    #[test_case("0x1234", "invalid")]
    #[test_case("Tshort", "invalid")]
    fn addresses_classify_by_shape(address: &str, expected: &str) {
        let verdict = VALIDATE_ADDRESS.run(&[json!(address)]).unwrap();
        assert_eq!(verdict["format"], json!(expected));
        assert_eq!(verdict["isValid"], json!(expected != "invalid"));
    }
}
