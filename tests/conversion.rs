//! 길이/단가 변환 회귀 테스트.
use inducalc::conversion;
use inducalc::quantity::QuantityKind;
use inducalc::units::{convert_length, convert_price, to_meters, LengthUnit, PriceUnit};

const LENGTH_UNITS: [LengthUnit; 5] = [
    LengthUnit::Millimeter,
    LengthUnit::Centimeter,
    LengthUnit::Meter,
    LengthUnit::Inch,
    LengthUnit::Foot,
];

#[test]
fn length_to_meters_factors() {
    assert!((to_meters(1000.0, LengthUnit::Millimeter) - 1.0).abs() < 1e-12);
    assert!((to_meters(100.0, LengthUnit::Centimeter) - 1.0).abs() < 1e-12);
    assert!((to_meters(2.5, LengthUnit::Meter) - 2.5).abs() < 1e-12);
    assert!((to_meters(1.0, LengthUnit::Inch) - 0.0254).abs() < 1e-12);
    assert!((to_meters(1.0, LengthUnit::Foot) - 0.3048).abs() < 1e-12);
}

#[test]
fn length_roundtrip_all_unit_pairs() {
    let x = 37.21;
    for from in LENGTH_UNITS {
        for to in LENGTH_UNITS {
            let back = convert_length(convert_length(x, from, to), to, from);
            let rel = ((back - x) / x).abs();
            assert!(
                rel < 0.01,
                "roundtrip {from:?}->{to:?}: {x} -> {back}, rel={rel}"
            );
        }
    }
}

#[test]
fn length_same_unit_is_exact_identity() {
    // 같은 단위 변환은 미터 왕복을 타지 않으므로 비트 단위로 같아야 한다.
    let v = 123.456;
    for unit in LENGTH_UNITS {
        assert_eq!(convert_length(v, unit, unit), v);
    }
}

#[test]
fn unknown_unit_code_means_millimeter() {
    assert_eq!(LengthUnit::from_code_lossy("furlong"), LengthUnit::Millimeter);
    assert_eq!(LengthUnit::from_code_lossy(""), LengthUnit::Millimeter);
    assert_eq!(LengthUnit::from_code_lossy("inch"), LengthUnit::Inch);
}

#[test]
fn price_conversion_is_involutive() {
    let p = 55.0;
    let there = convert_price(p, PriceUnit::RupeePerKg, PriceUnit::RupeePerTon);
    assert_eq!(there, 55_000.0);
    let back = convert_price(there, PriceUnit::RupeePerTon, PriceUnit::RupeePerKg);
    assert_eq!(back, p);
    // 같은 단위면 항등
    assert_eq!(
        convert_price(p, PriceUnit::RupeePerKg, PriceUnit::RupeePerKg),
        p
    );
}

#[test]
fn string_front_parses_unit_codes() {
    let v = conversion::convert(QuantityKind::Length, 1.0, "m", "mm").unwrap();
    assert!((v - 1000.0).abs() < 1e-9);
    let v = conversion::convert(QuantityKind::Price, 55.0, "₹/kg", "₹/ton").unwrap();
    assert!((v - 55_000.0).abs() < 1e-9);
    let v = conversion::convert(QuantityKind::Density, 490.0, "lb/ft3", "kg/m3").unwrap();
    assert!((v - 7849.065).abs() < 1e-6);
    assert!(conversion::convert(QuantityKind::Length, 1.0, "smoot", "m").is_err());
}
