//! 무게/가격 계산 오케스트레이션.
//!
//! 입력 스냅샷(재질, 형상, 치수, 단가)을 받아 SI 기준으로 부피→무게→가격을
//! 차례로 계산한다. 필수 입력이 하나라도 빠지면 결과 대신 Incomplete를
//! 돌려주고, 이는 오류가 아니라 정상적인 미완성 상태다.

use crate::material_db::MaterialData;
use crate::pricing::{self, PriceSource};
use crate::shape::{self, DimensionField, DimensionValues};
use crate::units::{self, LengthUnit, PriceUnit};

/// 한 치수 필드의 원시 입력. 문자열 값 + 선택된 단위.
#[derive(Debug, Clone)]
pub struct DimensionInput {
    pub raw: String,
    pub unit: LengthUnit,
}

impl DimensionInput {
    pub fn new(unit: LengthUnit) -> Self {
        Self {
            raw: String::new(),
            unit,
        }
    }

    /// 유한하고 0보다 큰 수로 파싱될 때만 Some.
    pub fn parsed(&self) -> Option<f64> {
        self.raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }

    /// 미터 기준 환산값.
    pub fn meters(&self) -> Option<f64> {
        self.parsed().map(|v| units::to_meters(v, self.unit))
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// 값이 있는데 유효하지 않은 상태. 인라인 경고 표시용.
    pub fn is_invalid(&self) -> bool {
        !self.is_blank() && self.parsed().is_none()
    }
}

/// 다섯 치수 필드의 입력 집합. 단위 기본값은 mm이다.
#[derive(Debug, Clone)]
pub struct DimensionInputs {
    inputs: [DimensionInput; 5],
}

impl Default for DimensionInputs {
    fn default() -> Self {
        Self {
            inputs: std::array::from_fn(|_| DimensionInput::new(LengthUnit::Millimeter)),
        }
    }
}

impl DimensionInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DimensionField) -> &DimensionInput {
        &self.inputs[field.index()]
    }

    pub fn get_mut(&mut self, field: DimensionField) -> &mut DimensionInput {
        &mut self.inputs[field.index()]
    }

    /// 모든 필드가 비어 있는지. 원본 앱은 이때 단가 덮어쓰기를 지운다.
    pub fn all_blank(&self) -> bool {
        self.inputs.iter().all(|i| i.is_blank())
    }

    pub fn clear_values(&mut self) {
        for input in &mut self.inputs {
            input.raw.clear();
        }
    }
}

/// 단가 입력: 덮어쓰기 문자열 + 단위 + 조회된 참고 시세(₹/kg).
#[derive(Debug, Clone)]
pub struct PriceInput {
    pub raw: String,
    pub unit: PriceUnit,
    pub fetched_per_kg: Option<f64>,
}

impl Default for PriceInput {
    fn default() -> Self {
        Self {
            raw: String::new(),
            unit: PriceUnit::RupeePerKg,
            fetched_per_kg: None,
        }
    }
}

impl PriceInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 계산 결과 스냅샷. 저장/표시용으로만 쓰이고 상태를 갖지 않는다.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    pub material_id: String,
    pub material: String,
    pub shape: String,
    /// 입력 단위 기준으로 파싱된 치수값(필수 필드 순서).
    pub dimensions: Vec<(DimensionField, f64)>,
    pub volume_m3: f64,
    pub weight_kg: f64,
    /// 적용된 유효 단가 [₹/kg]와 그 출처.
    pub price_per_kg: f64,
    pub price_source: PriceSource,
    pub total_price: f64,
}

/// 재계산 결과. Incomplete는 0이 계산된 것과 구별되는 미완성 상태다.
#[derive(Debug, Clone, Default)]
pub enum Computation {
    Complete(CalculationResult),
    #[default]
    Incomplete,
}

impl Computation {
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Computation::Complete(r) => Some(r),
            Computation::Incomplete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Computation::Complete(_))
    }
}

/// 현재 입력 스냅샷으로 무게와 가격을 계산한다.
///
/// 형상이 요구하는 필드만 본다. 필수 필드가 비었거나 0 이하이면
/// Incomplete를 돌려주고 아무것도 계산하지 않는다(부분 결과 없음).
pub fn recompute(
    material: &MaterialData,
    shape_type: &str,
    dims: &DimensionInputs,
    price: &PriceInput,
) -> Computation {
    let fields = shape::required_fields(shape_type);
    let mut values = DimensionValues::default();
    let mut entered = Vec::with_capacity(fields.len());
    for field in fields {
        let input = dims.get(*field);
        let Some(v) = input.parsed() else {
            return Computation::Incomplete;
        };
        values.set(*field, units::to_meters(v, input.unit));
        entered.push((*field, v));
    }

    let Some(volume_m3) = shape::volume_m3(shape_type, &values) else {
        return Computation::Incomplete;
    };

    let weight_kg = volume_m3 * material.density_kg_per_m3();
    let effective = pricing::resolve_price(
        material,
        shape_type,
        &price.raw,
        price.unit,
        price.fetched_per_kg,
    );

    Computation::Complete(CalculationResult {
        material_id: material.id.to_string(),
        material: material.name.to_string(),
        shape: shape_type.to_string(),
        dimensions: entered,
        volume_m3,
        weight_kg,
        price_per_kg: effective.per_kg,
        price_source: effective.source,
        total_price: weight_kg * effective.per_kg,
    })
}

/// 프레젠테이션 경계. 마지막 계산을 보관하고, 재계산 때마다(Incomplete로의
/// 전이 포함) 리스너에 밀어준다.
#[derive(Default)]
pub struct Engine {
    last: Computation,
    listener: Option<Box<dyn FnMut(&Computation)>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&Computation) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn recompute(
        &mut self,
        material: &MaterialData,
        shape_type: &str,
        dims: &DimensionInputs,
        price: &PriceInput,
    ) -> &Computation {
        self.last = recompute(material, shape_type, dims, price);
        self.notify();
        &self.last
    }

    /// 선택 해제 등으로 결과를 비운다. 이것도 전이이므로 통지한다.
    pub fn reset(&mut self) {
        self.last = Computation::Incomplete;
        self.notify();
    }

    pub fn last(&self) -> &Computation {
        &self.last
    }

    fn notify(&mut self) {
        if let Some(listener) = &mut self.listener {
            listener(&self.last);
        }
    }
}
