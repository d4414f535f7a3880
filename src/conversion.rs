use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mm`, `cm`, `m`, `inch`, `ft`, `lb/ft3`, `kg/m3`,
/// `₹/kg`, `₹/ton` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::Price => {
            let from = parse_price_unit(from_unit_str)?;
            let to = parse_price_unit(to_unit_str)?;
            Ok(convert_price(value, from, to))
        }
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "lb/ft3" | "lb/ft^3" | "pcf" => Ok(DensityUnit::PoundPerCubicFoot),
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KilogramPerCubicMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_price_unit(s: &str) -> Result<PriceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "₹/kg" | "rs/kg" | "inr/kg" | "kg" => Ok(PriceUnit::RupeePerKg),
        "₹/ton" | "rs/ton" | "inr/ton" | "ton" => Ok(PriceUnit::RupeePerTon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
