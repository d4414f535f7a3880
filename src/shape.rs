//! 단면 형상별 필요 치수와 부피 공식.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::units::LengthUnit;

/// 치수 입력 필드 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionField {
    Diameter,
    Thickness,
    Length,
    Width,
    Height,
}

impl DimensionField {
    pub const ALL: [DimensionField; 5] = [
        DimensionField::Diameter,
        DimensionField::Thickness,
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Height,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            DimensionField::Diameter => "diameter",
            DimensionField::Thickness => "thickness",
            DimensionField::Length => "length",
            DimensionField::Width => "width",
            DimensionField::Height => "height",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            DimensionField::Diameter => 0,
            DimensionField::Thickness => 1,
            DimensionField::Length => 2,
            DimensionField::Width => 3,
            DimensionField::Height => 4,
        }
    }

    /// 필드별 허용 단위. 직경/두께는 짧은 치수라 mm/cm/inch만 허용한다.
    pub fn allowed_units(&self) -> &'static [LengthUnit] {
        match self {
            DimensionField::Diameter | DimensionField::Thickness => &[
                LengthUnit::Millimeter,
                LengthUnit::Centimeter,
                LengthUnit::Inch,
            ],
            _ => &[
                LengthUnit::Millimeter,
                LengthUnit::Centimeter,
                LengthUnit::Meter,
                LengthUnit::Inch,
                LengthUnit::Foot,
            ],
        }
    }
}

/// 미터 기준으로 환산된 치수 집합. 0 이하나 비정상 값은 없는 것으로 취급한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionValues {
    values: [Option<f64>; 5],
}

impl DimensionValues {
    pub fn set(&mut self, field: DimensionField, meters: f64) {
        self.values[field.index()] = Some(meters);
    }

    pub fn get(&self, field: DimensionField) -> Option<f64> {
        self.values[field.index()].filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// 단면 형상 계열. 같은 계열은 같은 필수 필드와 부피 공식을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFamily {
    /// 중공 원통 (Pipe, Tube)
    HollowCylinder,
    /// 솔리드 원통 (Rod, Bar, Wire, TMT Bar, Rebar)
    SolidCylinder,
    /// 얇은 직사각 판 (Sheet, Plate, Plank, Board, Slab)
    Slab,
    /// 직육면체 (Block, Column)
    Block,
    /// 중공 직사각 단면 근사 (Channel, Angle, Beam, SHS, RHS)
    HollowRectangle,
    /// 미지 형상 폴백: 길이값을 부피로 그대로 쓴다.
    LengthOnly,
}

/// 계열별 규칙: 필수 필드 목록 + 부피 공식. 형상 추가는 이 테이블과
/// `FAMILY_BY_NAME`에 항목을 더하는 것으로 끝난다.
pub struct ShapeRule {
    pub family: ShapeFamily,
    pub fields: &'static [DimensionField],
    pub volume: fn(&DimensionValues) -> Option<f64>,
}

static RULES: &[ShapeRule] = &[
    ShapeRule {
        family: ShapeFamily::HollowCylinder,
        fields: &[
            DimensionField::Diameter,
            DimensionField::Thickness,
            DimensionField::Length,
        ],
        volume: hollow_cylinder_volume,
    },
    ShapeRule {
        family: ShapeFamily::SolidCylinder,
        fields: &[DimensionField::Diameter, DimensionField::Length],
        volume: solid_cylinder_volume,
    },
    ShapeRule {
        family: ShapeFamily::Slab,
        fields: &[
            DimensionField::Length,
            DimensionField::Width,
            DimensionField::Thickness,
        ],
        volume: slab_volume,
    },
    ShapeRule {
        family: ShapeFamily::Block,
        fields: &[
            DimensionField::Length,
            DimensionField::Width,
            DimensionField::Height,
        ],
        volume: block_volume,
    },
    ShapeRule {
        family: ShapeFamily::HollowRectangle,
        fields: &[
            DimensionField::Height,
            DimensionField::Width,
            DimensionField::Thickness,
            DimensionField::Length,
        ],
        volume: hollow_rectangle_volume,
    },
    ShapeRule {
        family: ShapeFamily::LengthOnly,
        fields: &[DimensionField::Length],
        volume: length_only_volume,
    },
];

const FAMILY_BY_NAME: &[(&str, ShapeFamily)] = &[
    ("Pipe", ShapeFamily::HollowCylinder),
    ("Tube", ShapeFamily::HollowCylinder),
    ("Rod", ShapeFamily::SolidCylinder),
    ("Bar", ShapeFamily::SolidCylinder),
    ("Wire", ShapeFamily::SolidCylinder),
    ("TMT Bar", ShapeFamily::SolidCylinder),
    ("Rebar", ShapeFamily::SolidCylinder),
    ("Sheet", ShapeFamily::Slab),
    ("Plate", ShapeFamily::Slab),
    ("Plank", ShapeFamily::Slab),
    ("Board", ShapeFamily::Slab),
    ("Slab", ShapeFamily::Slab),
    ("Block", ShapeFamily::Block),
    ("Column", ShapeFamily::Block),
    ("Channel", ShapeFamily::HollowRectangle),
    ("Angle", ShapeFamily::HollowRectangle),
    ("Beam", ShapeFamily::HollowRectangle),
    ("SHS", ShapeFamily::HollowRectangle),
    ("RHS", ShapeFamily::HollowRectangle),
];

/// 형상 이름을 계열로 분류한다. "Angle (ISA)"처럼 괄호 한정어가 붙은
/// 이름은 한정어를 떼고 비교하고, 알 수 없는 이름은 길이 전용 폴백이다.
pub fn classify(type_name: &str) -> ShapeFamily {
    let base = type_name
        .split(" (")
        .next()
        .unwrap_or(type_name)
        .trim();
    FAMILY_BY_NAME
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(base))
        .map(|(_, family)| *family)
        .unwrap_or(ShapeFamily::LengthOnly)
}

/// 형상 이름에 해당하는 규칙을 돌려준다.
pub fn rule_for(type_name: &str) -> &'static ShapeRule {
    let family = classify(type_name);
    RULES
        .iter()
        .find(|r| r.family == family)
        .unwrap_or(&RULES[RULES.len() - 1])
}

/// 형상이 요구하는 치수 필드 목록.
pub fn required_fields(type_name: &str) -> &'static [DimensionField] {
    rule_for(type_name).fields
}

/// 부피를 m³ 단위로 계산한다. 필수 필드가 빠졌거나 0 이하이면 None.
pub fn volume_m3(type_name: &str, dims: &DimensionValues) -> Option<f64> {
    (rule_for(type_name).volume)(dims)
}

fn hollow_cylinder_volume(dims: &DimensionValues) -> Option<f64> {
    let d = dims.get(DimensionField::Diameter)?;
    let t = dims.get(DimensionField::Thickness)?;
    let l = dims.get(DimensionField::Length)?;
    let outer_r = d / 2.0;
    // 벽이 직경의 절반 이상이면 속이 꽉 찬 것으로 본다(내경 0으로 클램프).
    let inner_r = ((d - 2.0 * t) / 2.0).max(0.0);
    Some(PI * (outer_r * outer_r - inner_r * inner_r) * l)
}

fn solid_cylinder_volume(dims: &DimensionValues) -> Option<f64> {
    let d = dims.get(DimensionField::Diameter)?;
    let l = dims.get(DimensionField::Length)?;
    let r = d / 2.0;
    Some(PI * r * r * l)
}

fn slab_volume(dims: &DimensionValues) -> Option<f64> {
    let l = dims.get(DimensionField::Length)?;
    let w = dims.get(DimensionField::Width)?;
    let t = dims.get(DimensionField::Thickness)?;
    Some(l * w * t)
}

fn block_volume(dims: &DimensionValues) -> Option<f64> {
    let l = dims.get(DimensionField::Length)?;
    let w = dims.get(DimensionField::Width)?;
    let h = dims.get(DimensionField::Height)?;
    Some(l * w * h)
}

fn hollow_rectangle_volume(dims: &DimensionValues) -> Option<f64> {
    let h = dims.get(DimensionField::Height)?;
    let w = dims.get(DimensionField::Width)?;
    let t = dims.get(DimensionField::Thickness)?;
    let l = dims.get(DimensionField::Length)?;
    let inner_h = (h - 2.0 * t).max(0.0);
    let inner_w = (w - 2.0 * t).max(0.0);
    Some((h * w - inner_h * inner_w) * l)
}

fn length_only_volume(dims: &DimensionValues) -> Option<f64> {
    dims.get(DimensionField::Length)
}
