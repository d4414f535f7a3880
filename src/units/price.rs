use serde::{Deserialize, Serialize};

/// 단가 단위. 내부 기준은 ₹/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    RupeePerKg,
    RupeePerTon,
}

impl PriceUnit {
    pub fn as_code(&self) -> &'static str {
        match self {
            PriceUnit::RupeePerKg => "₹/kg",
            PriceUnit::RupeePerTon => "₹/ton",
        }
    }

    /// 두 단위를 번갈아 전환한다(폼의 단가 단위 토글용).
    pub fn toggled(&self) -> Self {
        match self {
            PriceUnit::RupeePerKg => PriceUnit::RupeePerTon,
            PriceUnit::RupeePerTon => PriceUnit::RupeePerKg,
        }
    }
}

/// 단가를 다른 단위로 변환한다. 같은 단위면 그대로, 아니면 1000을 곱하거나 나눈다.
pub fn convert_price(value: f64, from: PriceUnit, to: PriceUnit) -> f64 {
    match (from, to) {
        (PriceUnit::RupeePerKg, PriceUnit::RupeePerTon) => value * 1000.0,
        (PriceUnit::RupeePerTon, PriceUnit::RupeePerKg) => value / 1000.0,
        _ => value,
    }
}

/// 임의 단위의 단가를 ₹/kg 기준으로 환산한다.
pub fn to_per_kg(value: f64, unit: PriceUnit) -> f64 {
    convert_price(value, unit, PriceUnit::RupeePerKg)
}
