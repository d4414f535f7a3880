//! 저장된 프로젝트 목록 동작 테스트.
use inducalc::engine::CalculationResult;
use inducalc::pricing::PriceSource;
use inducalc::project::ProjectBook;
use inducalc::shape::DimensionField;

fn sample_result() -> CalculationResult {
    CalculationResult {
        material_id: "ms".into(),
        material: "Mild Steel (MS)".into(),
        shape: "Rod".into(),
        dimensions: vec![
            (DimensionField::Diameter, 20.0),
            (DimensionField::Length, 2000.0),
        ],
        volume_m3: 0.00062832,
        weight_kg: 4.93,
        price_per_kg: 55.0,
        price_source: PriceSource::Backup,
        total_price: 271.15,
    }
}

#[test]
fn empty_name_is_a_noop() {
    let mut book = ProjectBook::new();
    assert_eq!(book.save("", &sample_result()), None);
    assert_eq!(book.save("   ", &sample_result()), None);
    assert!(book.is_empty());
}

#[test]
fn delete_nonexistent_is_a_noop() {
    let mut book = ProjectBook::new();
    book.save("girder", &sample_result());
    assert!(!book.remove(999));
    assert_eq!(book.len(), 1);
}

#[test]
fn newest_project_comes_first() {
    let mut book = ProjectBook::new();
    let first = book.save("first", &sample_result()).expect("saved");
    let second = book.save("second", &sample_result()).expect("saved");
    assert_ne!(first, second);
    let names: Vec<&str> = book.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["second", "first"]);
}

#[test]
fn total_value_sums_prices() {
    let mut book = ProjectBook::new();
    book.save("a", &sample_result());
    book.save("b", &sample_result());
    assert!((book.total_value() - 2.0 * 271.15).abs() < 1e-9);
}

#[test]
fn name_is_trimmed_on_save() {
    let mut book = ProjectBook::new();
    book.save("  girder  ", &sample_result());
    assert_eq!(book.iter().next().map(|p| p.name.as_str()), Some("girder"));
}

#[test]
fn json_export_import_roundtrip() {
    let mut book = ProjectBook::new();
    book.save("girder", &sample_result());
    book.save("column", &sample_result());
    let json = book.to_json().expect("serialize");

    let mut restored = ProjectBook::new();
    let count = restored.merge_json(&json).expect("deserialize");
    assert_eq!(count, 2);
    assert_eq!(restored.len(), 2);
    let names: Vec<&str> = restored.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["column", "girder"]);
    assert!((restored.total_value() - book.total_value()).abs() < 1e-9);

    // 병합이므로 다시 넣으면 누적되고 id는 새로 매겨진다.
    let more = restored.merge_json(&json).expect("merge");
    assert_eq!(more, 2);
    assert_eq!(restored.len(), 4);
    let mut ids: Vec<u64> = restored.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn dimension_summary_joins_values() {
    let mut book = ProjectBook::new();
    book.save("rod", &sample_result());
    let p = book.iter().next().expect("one project");
    assert_eq!(p.dimension_summary(), "20 × 2000");
}
