//! 부피/무게 계산 검증. 수치는 원단위(mm) 입력 기준의 수작업 계산값이다.
use std::cell::RefCell;
use std::rc::Rc;

use inducalc::engine::{self, Computation, DimensionInputs, Engine, PriceInput};
use inducalc::material_db::find_material;
use inducalc::shape::{self, DimensionField, DimensionValues, ShapeFamily};

fn dims_mm(entries: &[(DimensionField, &str)]) -> DimensionInputs {
    let mut dims = DimensionInputs::new();
    for (field, raw) in entries {
        dims.get_mut(*field).raw = raw.to_string();
    }
    dims
}

#[test]
fn pipe_volume_and_weight() {
    // d=100mm, t=10mm, l=1000mm, MS(490 lb/ft3 = 7849.065 kg/m3)
    // 외반경 0.05m, 내반경 0.03m, 부피 = π(0.0025-0.0009)·1 ≈ 0.0050265 m³
    let material = find_material("ms").expect("ms material");
    let dims = dims_mm(&[
        (DimensionField::Diameter, "100"),
        (DimensionField::Thickness, "10"),
        (DimensionField::Length, "1000"),
    ]);
    let result = engine::recompute(material, "Pipe", &dims, &PriceInput::new());
    let r = result.result().expect("complete");
    assert!((r.volume_m3 - 0.0050265).abs() < 1e-5, "vol={}", r.volume_m3);
    assert!((r.weight_kg - 39.46).abs() < 0.05, "weight={}", r.weight_kg);
}

#[test]
fn rod_volume_and_weight() {
    // d=20mm, l=2000mm: 부피 = π·0.01²·2 ≈ 0.00062832 m³, 무게 ≈ 4.93 kg
    let material = find_material("ms").expect("ms material");
    let dims = dims_mm(&[
        (DimensionField::Diameter, "20"),
        (DimensionField::Length, "2000"),
    ]);
    let result = engine::recompute(material, "Rod", &dims, &PriceInput::new());
    let r = result.result().expect("complete");
    assert!((r.volume_m3 - 0.00062832).abs() < 1e-7, "vol={}", r.volume_m3);
    assert!((r.weight_kg - 4.93).abs() < 0.01, "weight={}", r.weight_kg);
}

#[test]
fn sheet_volume_and_weight() {
    // 1000×500×5mm 알루미늄(168 lb/ft3 ≈ 2691 kg/m3): 부피 0.0025 m³
    let material = find_material("aluminum").expect("aluminum material");
    let dims = dims_mm(&[
        (DimensionField::Length, "1000"),
        (DimensionField::Width, "500"),
        (DimensionField::Thickness, "5"),
    ]);
    let result = engine::recompute(material, "Sheet", &dims, &PriceInput::new());
    let r = result.result().expect("complete");
    assert!((r.volume_m3 - 0.0025).abs() < 1e-9);
    assert!((r.weight_kg - 6.75).abs() < 0.05, "weight={}", r.weight_kg);
}

#[test]
fn block_volume() {
    let mut values = DimensionValues::default();
    values.set(DimensionField::Length, 2.0);
    values.set(DimensionField::Width, 0.5);
    values.set(DimensionField::Height, 0.25);
    let vol = shape::volume_m3("Block", &values).expect("volume");
    assert!((vol - 0.25).abs() < 1e-12);
}

#[test]
fn channel_volume_uses_hollow_rectangle() {
    // h=100mm, w=50mm, t=5mm, l=1000mm:
    // (0.1·0.05 − 0.09·0.04)·1 = 0.0014 m³
    let mut values = DimensionValues::default();
    values.set(DimensionField::Height, 0.1);
    values.set(DimensionField::Width, 0.05);
    values.set(DimensionField::Thickness, 0.005);
    values.set(DimensionField::Length, 1.0);
    let vol = shape::volume_m3("Channel", &values).expect("volume");
    assert!((vol - 0.0014).abs() < 1e-9, "vol={vol}");
}

#[test]
fn full_wall_pipe_equals_solid_cylinder() {
    // 두께 = 직경/2 이면 내반경이 0이라 솔리드 원통과 같아야 한다.
    let mut values = DimensionValues::default();
    values.set(DimensionField::Diameter, 0.1);
    values.set(DimensionField::Thickness, 0.05);
    values.set(DimensionField::Length, 1.0);
    let pipe = shape::volume_m3("Pipe", &values).expect("pipe volume");
    let rod = shape::volume_m3("Rod", &values).expect("rod volume");
    assert!((pipe - rod).abs() < 1e-12);
}

#[test]
fn over_thick_wall_clamps_to_solid() {
    // 두께가 직경의 절반을 넘어도 내경을 0으로 클램프해 부피가 부풀지 않는다.
    let mut values = DimensionValues::default();
    values.set(DimensionField::Diameter, 0.1);
    values.set(DimensionField::Thickness, 0.08);
    values.set(DimensionField::Length, 1.0);
    let pipe = shape::volume_m3("Pipe", &values).expect("pipe volume");
    let solid = std::f64::consts::PI * 0.05 * 0.05;
    assert!((pipe - solid).abs() < 1e-12);
}

#[test]
fn unknown_shape_falls_back_to_length_only() {
    assert_eq!(shape::classify("Gusset"), ShapeFamily::LengthOnly);
    assert_eq!(
        shape::required_fields("Gusset"),
        &[DimensionField::Length][..]
    );
    let mut values = DimensionValues::default();
    values.set(DimensionField::Length, 2.0);
    assert_eq!(shape::volume_m3("Gusset", &values), Some(2.0));
}

#[test]
fn qualified_shape_names_classify_by_base_name() {
    assert_eq!(shape::classify("Angle (ISA)"), ShapeFamily::HollowRectangle);
    assert_eq!(shape::classify("Channel (ISMC)"), ShapeFamily::HollowRectangle);
    assert_eq!(shape::classify("Beam (ISMB)"), ShapeFamily::HollowRectangle);
    assert_eq!(shape::classify("TMT Bar"), ShapeFamily::SolidCylinder);
}

#[test]
fn missing_field_yields_incomplete() {
    // Pipe인데 두께가 없다: 결과도 통지 결과 객체도 없어야 한다.
    let material = find_material("ms").expect("ms material");
    let dims = dims_mm(&[
        (DimensionField::Diameter, "100"),
        (DimensionField::Length, "1000"),
    ]);
    let result = engine::recompute(material, "Pipe", &dims, &PriceInput::new());
    assert!(result.result().is_none());
}

#[test]
fn non_positive_or_garbage_input_yields_incomplete() {
    let material = find_material("ms").expect("ms material");
    for bad in ["0", "-5", "abc", ""] {
        let dims = dims_mm(&[
            (DimensionField::Diameter, bad),
            (DimensionField::Length, "1000"),
        ]);
        let result = engine::recompute(material, "Rod", &dims, &PriceInput::new());
        assert!(result.result().is_none(), "input {bad:?} should suppress");
    }
}

#[test]
fn engine_notifies_on_every_recompute_including_incomplete() {
    let material = find_material("ms").expect("ms material");
    let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut engine = Engine::new();
    engine.set_listener(move |c: &Computation| sink.borrow_mut().push(c.is_complete()));

    let incomplete = dims_mm(&[(DimensionField::Diameter, "20")]);
    engine.recompute(material, "Rod", &incomplete, &PriceInput::new());

    let complete = dims_mm(&[
        (DimensionField::Diameter, "20"),
        (DimensionField::Length, "2000"),
    ]);
    engine.recompute(material, "Rod", &complete, &PriceInput::new());
    engine.reset();

    assert_eq!(&*seen.borrow(), &[false, true, false]);
}
