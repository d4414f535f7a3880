//! 단가 결정 정책과 시세 토큰 가드 테스트.
use inducalc::engine::{self, DimensionInputs, PriceInput};
use inducalc::material_db::find_material;
use inducalc::pricing::{
    backup_price, resolve_price, PriceFeed, PriceLookup, PriceSource, StaticPriceLookup,
};
use inducalc::shape::DimensionField;
use inducalc::units::PriceUnit;

#[test]
fn override_beats_everything() {
    // 덮어쓰기/조회/백업이 모두 있어도 덮어쓰기 50이 이긴다.
    let material = find_material("ms").expect("ms");
    let effective = resolve_price(material, "Pipe", "50", PriceUnit::RupeePerKg, Some(48.0));
    assert_eq!(effective.per_kg, 50.0);
    assert_eq!(effective.source, PriceSource::Override);
}

#[test]
fn override_in_ton_is_normalized_to_kg() {
    let material = find_material("ms").expect("ms");
    let effective = resolve_price(material, "Pipe", "50000", PriceUnit::RupeePerTon, None);
    assert!((effective.per_kg - 50.0).abs() < 1e-9);
    assert_eq!(effective.source, PriceSource::Override);
}

#[test]
fn garbage_override_falls_through() {
    let material = find_material("ms").expect("ms");
    let effective = resolve_price(material, "Pipe", "abc", PriceUnit::RupeePerKg, None);
    assert_eq!(effective.source, PriceSource::Backup);
    assert_eq!(effective.per_kg, 55.0);
}

#[test]
fn fetched_beats_backup() {
    let material = find_material("ms").expect("ms");
    let effective = resolve_price(material, "Pipe", "", PriceUnit::RupeePerKg, Some(62.5));
    assert_eq!(effective.per_kg, 62.5);
    assert_eq!(effective.source, PriceSource::Fetched);
}

#[test]
fn non_positive_fetched_is_ignored() {
    let material = find_material("ms").expect("ms");
    for bad in [Some(0.0), Some(-3.0), Some(f64::NAN), None] {
        let effective = resolve_price(material, "Pipe", "", PriceUnit::RupeePerKg, bad);
        assert_eq!(effective.source, PriceSource::Backup, "fetched={bad:?}");
        assert_eq!(effective.per_kg, 55.0);
    }
}

#[test]
fn unknown_shape_falls_back_to_material_default() {
    let material = find_material("ms").expect("ms");
    assert_eq!(backup_price("ms", "Gusset"), None);
    let effective = resolve_price(material, "Gusset", "", PriceUnit::RupeePerKg, None);
    assert_eq!(effective.source, PriceSource::MaterialDefault);
    assert_eq!(effective.per_kg, material.default_price_per_kg);
}

#[test]
fn backup_table_matches_catalog() {
    assert_eq!(backup_price("ms", "TMT Bar"), Some(55.0));
    assert_eq!(backup_price("stainless", "Tube"), Some(180.0));
    assert_eq!(backup_price("titanium", "Plate"), Some(1800.0));
    assert_eq!(backup_price("concrete", "Slab"), Some(7.0));
    assert_eq!(backup_price("nope", "Pipe"), None);
}

#[test]
fn static_lookup_answers_from_backup_table() {
    assert_eq!(StaticPriceLookup.fetch("copper", "Wire"), Some(800.0));
    // 표에 없는 형상은 재질 기본 단가로 답한다.
    assert_eq!(StaticPriceLookup.fetch("ms", "Gusset"), Some(55.0));
    assert_eq!(StaticPriceLookup.fetch("nope", "Pipe"), None);
}

#[test]
fn price_feed_rejects_stale_token() {
    let mut feed = PriceFeed::new();
    let stale = feed.begin();
    let fresh = feed.begin();
    // 늦게 도착한 이전 세대 응답은 버려진다.
    assert!(!feed.accept(stale, Some(999.0)));
    assert_eq!(feed.latest(), None);
    assert!(feed.accept(fresh, Some(62.5)));
    assert_eq!(feed.latest(), Some(62.5));
}

#[test]
fn price_feed_rejects_non_positive_responses() {
    let mut feed = PriceFeed::new();
    let token = feed.begin();
    assert!(!feed.accept(token, Some(0.0)));
    assert!(!feed.accept(token, Some(-1.0)));
    assert!(!feed.accept(token, None));
    assert_eq!(feed.latest(), None);
    assert!(feed.accept(token, Some(55.0)));
    feed.clear();
    assert_eq!(feed.latest(), None);
}

#[test]
fn total_price_is_weight_times_effective_rate() {
    // 시트 1000×500×5mm 알루미늄, 덮어쓰기 100 ₹/kg.
    let material = find_material("aluminum").expect("aluminum");
    let mut dims = DimensionInputs::new();
    dims.get_mut(DimensionField::Length).raw = "1000".into();
    dims.get_mut(DimensionField::Width).raw = "500".into();
    dims.get_mut(DimensionField::Thickness).raw = "5".into();
    let price = PriceInput {
        raw: "100".into(),
        unit: PriceUnit::RupeePerKg,
        fetched_per_kg: Some(220.0),
    };
    let result = engine::recompute(material, "Sheet", &dims, &price);
    let r = result.result().expect("complete");
    assert_eq!(r.price_source, PriceSource::Override);
    assert!((r.total_price - r.weight_kg * 100.0).abs() < 1e-9);
}
