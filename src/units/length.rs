use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// UI 표기용 단위 코드.
    pub fn as_code(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "ft",
        }
    }

    /// 단위 코드를 파싱한다. 알 수 없는 코드는 mm로 간주한다(입력 폼 정책).
    pub fn from_code_lossy(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "cm" => LengthUnit::Centimeter,
            "m" | "meter" | "metre" => LengthUnit::Meter,
            "in" | "inch" => LengthUnit::Inch,
            "ft" | "foot" => LengthUnit::Foot,
            _ => LengthUnit::Millimeter,
        }
    }
}

/// 길이 값을 미터로 환산한다.
pub fn to_meters(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Meter => value,
        LengthUnit::Inch => value * 0.0254,
        LengthUnit::Foot => value * 0.3048,
    }
}

fn from_meters(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Meter => value_m,
        LengthUnit::Inch => value_m / 0.0254,
        LengthUnit::Foot => value_m / 0.3048,
    }
}

/// 길이를 다른 단위로 변환한다. 같은 단위면 값을 그대로 돌려준다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    from_meters(to_meters(value, from), to)
}
