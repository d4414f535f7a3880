//! 단가 결정 정책: 사용자 덮어쓰기 > 조회된 시세 > 백업 단가표 > 재질 기본값.

use crate::material_db::MaterialData;
use crate::units::{to_per_kg, PriceUnit};

/// 유효 단가가 어느 출처에서 왔는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    /// 사용자가 직접 입력한 값
    Override,
    /// 외부에서 조회된 참고 시세
    Fetched,
    /// (재질, 형상) 백업 단가표
    Backup,
    /// 재질 기본 단가
    MaterialDefault,
}

/// 정책 적용 결과. 단가는 항상 ₹/kg 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct EffectivePrice {
    pub per_kg: f64,
    pub source: PriceSource,
}

/// 유효 단가를 결정한다.
///
/// 덮어쓰기 입력은 비어 있지 않고 유한한 0 이상의 수로 파싱될 때만 쓰며,
/// 입력 단위에서 ₹/kg로 환산한다. 조회 시세는 ₹/kg 기준이고 0 이하는
/// 없는 것으로 친다. 그다음 백업 단가표, 마지막으로 재질 기본값이다.
pub fn resolve_price(
    material: &MaterialData,
    shape_type: &str,
    override_raw: &str,
    override_unit: PriceUnit,
    fetched_per_kg: Option<f64>,
) -> EffectivePrice {
    if let Some(v) = parse_override(override_raw) {
        return EffectivePrice {
            per_kg: to_per_kg(v, override_unit),
            source: PriceSource::Override,
        };
    }
    if let Some(p) = fetched_per_kg.filter(|p| p.is_finite() && *p > 0.0) {
        return EffectivePrice {
            per_kg: p,
            source: PriceSource::Fetched,
        };
    }
    if let Some(p) = backup_price(material.id, shape_type) {
        return EffectivePrice {
            per_kg: p,
            source: PriceSource::Backup,
        };
    }
    EffectivePrice {
        per_kg: material.default_price_per_kg,
        source: PriceSource::MaterialDefault,
    }
}

fn parse_override(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// (재질 id, 형상 이름)으로 백업 단가를 찾는다 [₹/kg].
pub fn backup_price(material_id: &str, shape_type: &str) -> Option<f64> {
    BACKUP_PRICES
        .iter()
        .find(|row| row.material.eq_ignore_ascii_case(material_id))
        .and_then(|row| {
            row.prices
                .iter()
                .find(|(shape, _)| shape.eq_ignore_ascii_case(shape_type))
                .map(|(_, price)| *price)
        })
}

struct BackupPriceRow {
    material: &'static str,
    prices: &'static [(&'static str, f64)],
}

const BACKUP_PRICES: &[BackupPriceRow] = &[
    BackupPriceRow {
        material: "ms",
        prices: &[
            ("Pipe", 55.0),
            ("Rod", 55.0),
            ("Sheet", 55.0),
            ("Plate", 55.0),
            ("Angle (ISA)", 55.0),
            ("Channel (ISMC)", 55.0),
            ("Beam (ISMB)", 55.0),
            ("SHS", 55.0),
            ("RHS", 55.0),
            ("TMT Bar", 55.0),
            ("Wire", 55.0),
            ("Bar", 55.0),
        ],
    },
    BackupPriceRow {
        material: "stainless",
        prices: &[
            ("Pipe", 180.0),
            ("Rod", 180.0),
            ("Sheet", 180.0),
            ("Plate", 180.0),
            ("Channel", 180.0),
            ("Wire", 180.0),
            ("Tube", 180.0),
            ("Bar", 180.0),
        ],
    },
    BackupPriceRow {
        material: "aluminum",
        prices: &[
            ("Pipe", 220.0),
            ("Rod", 220.0),
            ("Sheet", 220.0),
            ("Plate", 220.0),
            ("Channel", 220.0),
            ("Wire", 220.0),
            ("Tube", 220.0),
            ("Bar", 220.0),
            ("Angle", 220.0),
        ],
    },
    BackupPriceRow {
        material: "copper",
        prices: &[
            ("Pipe", 800.0),
            ("Rod", 800.0),
            ("Sheet", 800.0),
            ("Plate", 800.0),
            ("Channel", 800.0),
            ("Wire", 800.0),
            ("Tube", 800.0),
            ("Bar", 800.0),
        ],
    },
    BackupPriceRow {
        material: "brass",
        prices: &[
            ("Pipe", 500.0),
            ("Rod", 500.0),
            ("Sheet", 500.0),
            ("Plate", 500.0),
            ("Channel", 500.0),
            ("Wire", 500.0),
            ("Tube", 500.0),
            ("Bar", 500.0),
        ],
    },
    BackupPriceRow {
        material: "bronze",
        prices: &[
            ("Pipe", 600.0),
            ("Rod", 600.0),
            ("Sheet", 600.0),
            ("Plate", 600.0),
            ("Channel", 600.0),
            ("Wire", 600.0),
            ("Tube", 600.0),
            ("Bar", 600.0),
        ],
    },
    BackupPriceRow {
        material: "castiron",
        prices: &[("Pipe", 60.0), ("Rod", 60.0), ("Bar", 60.0), ("Plate", 60.0)],
    },
    BackupPriceRow {
        material: "concrete",
        prices: &[("Beam", 7.0), ("Block", 7.0), ("Slab", 7.0), ("Column", 7.0)],
    },
    BackupPriceRow {
        material: "plastic",
        prices: &[
            ("Pipe", 120.0),
            ("Sheet", 120.0),
            ("Rod", 120.0),
            ("Block", 120.0),
            ("Tube", 120.0),
            ("Bar", 120.0),
        ],
    },
    BackupPriceRow {
        material: "lead",
        prices: &[
            ("Sheet", 200.0),
            ("Pipe", 200.0),
            ("Rod", 200.0),
            ("Bar", 200.0),
        ],
    },
    BackupPriceRow {
        material: "zinc",
        prices: &[
            ("Sheet", 250.0),
            ("Rod", 250.0),
            ("Bar", 250.0),
            ("Plate", 250.0),
        ],
    },
    BackupPriceRow {
        material: "titanium",
        prices: &[
            ("Pipe", 1800.0),
            ("Rod", 1800.0),
            ("Sheet", 1800.0),
            ("Plate", 1800.0),
            ("Bar", 1800.0),
        ],
    },
    BackupPriceRow {
        material: "nickel",
        prices: &[
            ("Pipe", 1600.0),
            ("Rod", 1600.0),
            ("Sheet", 1600.0),
            ("Plate", 1600.0),
            ("Bar", 1600.0),
        ],
    },
    BackupPriceRow {
        material: "tin",
        prices: &[("Sheet", 900.0), ("Rod", 900.0), ("Bar", 900.0)],
    },
    BackupPriceRow {
        material: "glass",
        prices: &[("Sheet", 40.0), ("Rod", 40.0), ("Block", 40.0)],
    },
    BackupPriceRow {
        material: "wood",
        prices: &[
            ("Beam", 60.0),
            ("Plank", 60.0),
            ("Board", 60.0),
            ("Block", 60.0),
        ],
    },
];

/// 외부 시세 조회 협력자.
///
/// 원격 구현은 `GET /api/price?material=<id>&type=<shape>&unit=₹/kg`를
/// 한 번 호출하고, 2xx가 아니거나 본문이 깨졌거나 price가 0 이하이면
/// None을 돌려준다. 실패는 사용자에게 드러내지 않는다.
pub trait PriceLookup {
    fn fetch(&self, material_id: &str, shape_type: &str) -> Option<f64>;
}

/// 오프라인 기본 구현: 백업 단가표에서 답하고, 표에 없으면 재질 기본값.
#[derive(Debug, Default)]
pub struct StaticPriceLookup;

impl PriceLookup for StaticPriceLookup {
    fn fetch(&self, material_id: &str, shape_type: &str) -> Option<f64> {
        backup_price(material_id, shape_type).or_else(|| {
            crate::material_db::find_material(material_id).map(|m| m.default_price_per_kg)
        })
    }
}

/// 시세 조회 응답의 신선도를 지키는 요청 세대 토큰.
///
/// 재질/형상이 바뀔 때마다 `begin()`으로 새 토큰을 받고, 응답은
/// `accept()`로 넘긴다. 최신 토큰이 아닌 응답은 버려져서 뒤늦게 도착한
/// 응답이 더 새로운 상태를 덮어쓰지 못한다.
#[derive(Debug, Default)]
pub struct PriceFeed {
    generation: u64,
    latest: Option<f64>,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 조회를 시작하고 토큰을 돌려준다.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// 응답을 반영한다. 최신 토큰이면서 유한한 양수일 때만 받아들인다.
    pub fn accept(&mut self, token: u64, price: Option<f64>) -> bool {
        if token != self.generation {
            return false;
        }
        match price.filter(|p| p.is_finite() && *p > 0.0) {
            Some(p) => {
                self.latest = Some(p);
                true
            }
            None => false,
        }
    }

    /// 마지막으로 받아들인 참고 시세 [₹/kg].
    pub fn latest(&self) -> Option<f64> {
        self.latest
    }

    /// 캐시된 시세를 비운다(재질 변경 등으로 무의미해졌을 때).
    pub fn clear(&mut self) {
        self.latest = None;
    }
}
