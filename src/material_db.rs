//! 재질 카탈로그. 밀도는 원본 자료 단위인 lb/ft³로 적고 계산 시
//! kg/m³로 환산한다. 값은 참고용 공칭치이다.

use crate::units::{convert_density, DensityUnit};

#[derive(Debug)]
pub struct MaterialData {
    pub id: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 밀도 [lb/ft³]
    pub density_lb_per_ft3: f64,
    /// 기본 단가 [₹/kg]. 백업 단가표에도 없을 때의 최종 폴백.
    pub default_price_per_kg: f64,
    /// 이 재질로 선택 가능한 단면 형상 이름들.
    pub shapes: &'static [&'static str],
}

impl MaterialData {
    /// 계산 기준 밀도 [kg/m³].
    pub fn density_kg_per_m3(&self) -> f64 {
        convert_density(
            self.density_lb_per_ft3,
            DensityUnit::PoundPerCubicFoot,
            DensityUnit::KilogramPerCubicMeter,
        )
    }
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// id 또는 표시 이름으로 재질을 찾는다(대소문자 무시).
pub fn find_material(key: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        id: "ms",
        name: "Mild Steel (MS)",
        notes: "General structural steel; pipes, sections, TMT bars",
        density_lb_per_ft3: 490.0,
        default_price_per_kg: 55.0,
        shapes: &[
            "Pipe",
            "Rod",
            "Sheet",
            "Plate",
            "Angle (ISA)",
            "Channel (ISMC)",
            "Beam (ISMB)",
            "SHS",
            "RHS",
            "TMT Bar",
            "Wire",
            "Bar",
        ],
    },
    MaterialData {
        id: "stainless",
        name: "Stainless Steel",
        notes: "Corrosion-resistant austenitic grades",
        density_lb_per_ft3: 500.0,
        default_price_per_kg: 180.0,
        shapes: &[
            "Pipe", "Rod", "Sheet", "Plate", "Channel", "Wire", "Tube", "Bar",
        ],
    },
    MaterialData {
        id: "aluminum",
        name: "Aluminum",
        notes: "Lightweight, corrosion-resistant",
        density_lb_per_ft3: 168.0,
        default_price_per_kg: 220.0,
        shapes: &[
            "Pipe", "Rod", "Sheet", "Plate", "Channel", "Wire", "Tube", "Bar", "Angle",
        ],
    },
    MaterialData {
        id: "copper",
        name: "Copper",
        notes: "High thermal/electrical conductivity",
        density_lb_per_ft3: 559.0,
        default_price_per_kg: 800.0,
        shapes: &[
            "Pipe", "Rod", "Sheet", "Plate", "Channel", "Wire", "Tube", "Bar",
        ],
    },
    MaterialData {
        id: "brass",
        name: "Brass",
        notes: "Cu-Zn alloy; fittings and decorative work",
        density_lb_per_ft3: 532.0,
        default_price_per_kg: 500.0,
        shapes: &[
            "Pipe", "Rod", "Sheet", "Plate", "Channel", "Wire", "Tube", "Bar",
        ],
    },
    MaterialData {
        id: "bronze",
        name: "Bronze",
        notes: "Cu-Sn alloy; bushings and marine hardware",
        density_lb_per_ft3: 548.0,
        default_price_per_kg: 600.0,
        shapes: &[
            "Pipe", "Rod", "Sheet", "Plate", "Channel", "Wire", "Tube", "Bar",
        ],
    },
    MaterialData {
        id: "castiron",
        name: "Cast Iron",
        notes: "Gray iron castings and pipe",
        density_lb_per_ft3: 450.0,
        default_price_per_kg: 60.0,
        shapes: &["Pipe", "Rod", "Bar", "Plate"],
    },
    MaterialData {
        id: "concrete",
        name: "Concrete",
        notes: "Plain concrete structural elements",
        density_lb_per_ft3: 150.0,
        default_price_per_kg: 7.0,
        shapes: &["Beam", "Block", "Slab", "Column"],
    },
    MaterialData {
        id: "plastic",
        name: "Plastic",
        notes: "Generic engineering plastic stock",
        density_lb_per_ft3: 75.0,
        default_price_per_kg: 120.0,
        shapes: &["Pipe", "Sheet", "Rod", "Block", "Tube", "Bar"],
    },
    MaterialData {
        id: "lead",
        name: "Lead",
        notes: "Shielding and roofing sheet",
        density_lb_per_ft3: 708.0,
        default_price_per_kg: 200.0,
        shapes: &["Sheet", "Pipe", "Rod", "Bar"],
    },
    MaterialData {
        id: "zinc",
        name: "Zinc",
        notes: "Galvanizing and die-cast stock",
        density_lb_per_ft3: 446.0,
        default_price_per_kg: 250.0,
        shapes: &["Sheet", "Rod", "Bar", "Plate"],
    },
    MaterialData {
        id: "titanium",
        name: "Titanium",
        notes: "High strength-to-weight alloy stock",
        density_lb_per_ft3: 281.0,
        default_price_per_kg: 1800.0,
        shapes: &["Pipe", "Rod", "Sheet", "Plate", "Bar"],
    },
    MaterialData {
        id: "nickel",
        name: "Nickel",
        notes: "Corrosion/heat-resistant alloy stock",
        density_lb_per_ft3: 556.0,
        default_price_per_kg: 1600.0,
        shapes: &["Pipe", "Rod", "Sheet", "Plate", "Bar"],
    },
    MaterialData {
        id: "tin",
        name: "Tin",
        notes: "Plating and solder stock",
        density_lb_per_ft3: 455.0,
        default_price_per_kg: 900.0,
        shapes: &["Sheet", "Rod", "Bar"],
    },
    MaterialData {
        id: "glass",
        name: "Glass",
        notes: "Flat glass and cast blocks",
        density_lb_per_ft3: 156.0,
        default_price_per_kg: 40.0,
        shapes: &["Sheet", "Rod", "Block"],
    },
    MaterialData {
        id: "wood",
        name: "Wood",
        notes: "Sawn timber sections",
        density_lb_per_ft3: 45.0,
        default_price_per_kg: 60.0,
        shapes: &["Beam", "Plank", "Board", "Block"],
    },
];
