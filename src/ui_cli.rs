use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::engine::{self, Computation, DimensionInputs, PriceInput};
use crate::i18n::{keys, Translator};
use crate::material_db::{self, MaterialData};
use crate::pricing::{PriceFeed, PriceLookup, PriceSource, StaticPriceLookup};
use crate::project::ProjectBook;
use crate::quantity::QuantityKind;
use crate::shape::{self, DimensionField};
use crate::units::LengthUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator,
    UnitConversion,
    Projects,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATOR));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculator),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Projects),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산기 메뉴를 처리한다: 재질/형상 선택 → 치수 입력 → 결과 → 저장.
pub fn handle_calculator(
    tr: &Translator,
    cfg: &Config,
    book: &mut ProjectBook,
    feed: &mut PriceFeed,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));

    let Some(material) = select_material(tr)? else {
        return Ok(());
    };
    let Some(shape_name) = select_shape(tr, material)? else {
        return Ok(());
    };

    // 재질/형상이 정해지면 참고 시세를 한 번 조회한다(베스트에포트).
    let token = feed.begin();
    feed.accept(token, StaticPriceLookup.fetch(material.id, &shape_name));

    let mut dims = DimensionInputs::new();
    for field in shape::required_fields(&shape_name) {
        let label = field_label(tr, *field);
        let default_unit = default_unit_for(cfg, *field);
        let value = read_line(&format!("{label} [{}]: ", default_unit.as_code()))?;
        let unit_raw = read_line(&format!("  {}: ", unit_codes(*field)))?;
        let unit = if unit_raw.trim().is_empty() {
            default_unit
        } else {
            LengthUnit::from_code_lossy(&unit_raw)
        };
        let input = dims.get_mut(*field);
        input.raw = value.trim().to_string();
        input.unit = unit;
    }

    let price_raw = read_line(&format!(
        "{} [{}]: ",
        tr.t(keys::PRICE_ENTER),
        cfg.default_units.price.as_code()
    ))?;
    let price = PriceInput {
        raw: price_raw.trim().to_string(),
        unit: cfg.default_units.price,
        fetched_per_kg: feed.latest(),
    };

    match engine::recompute(material, &shape_name, &dims, &price) {
        Computation::Complete(result) => {
            println!(
                "{}: {:.2} {}",
                tr.t(keys::CALC_WEIGHT),
                result.weight_kg,
                tr.t(keys::CALC_KG)
            );
            println!(
                "{}: ₹{:.2} ({} ₹{:.2}/kg)",
                tr.t(keys::CALC_TOTAL_COST),
                result.total_price,
                price_source_label(tr, result.price_source),
                result.price_per_kg
            );
            let name = read_line(tr.t(keys::PROJECT_NAME_PROMPT))?;
            if book.save(&name, &result).is_some() {
                println!("{}", tr.t(keys::PROJECT_SAVED));
            } else {
                println!("{}", tr.t(keys::PROJECT_EMPTY_NAME));
            }
        }
        Computation::Incomplete => {
            println!("{}", tr.t(keys::CALC_INVALID_VALUE));
        }
    }
    Ok(())
}

fn select_material(tr: &Translator) -> Result<Option<&'static MaterialData>, AppError> {
    println!("{}", tr.t(keys::CALC_SELECT_MATERIAL));
    let materials = material_db::materials();
    for (i, m) in materials.iter().enumerate() {
        let name = tr.material_name(m.id).unwrap_or(m.name);
        println!("{:2}) {name}", i + 1);
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let Ok(n) = sel.trim().parse::<usize>() else {
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
        return Ok(None);
    };
    Ok(n.checked_sub(1).and_then(|i| materials.get(i)))
}

fn select_shape(
    tr: &Translator,
    material: &MaterialData,
) -> Result<Option<String>, AppError> {
    println!("{}", tr.t(keys::CALC_SELECT_SHAPE));
    for (i, s) in material.shapes.iter().enumerate() {
        let name = tr.shape_name(s).unwrap_or(s);
        println!("{:2}) {name}", i + 1);
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let Ok(n) = sel.trim().parse::<usize>() else {
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
        return Ok(None);
    };
    Ok(n
        .checked_sub(1)
        .and_then(|i| material.shapes.get(i))
        .map(|s| s.to_string()))
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{} {result} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            to_unit.trim()
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Length),
        2 => Some(QuantityKind::Density),
        3 => Some(QuantityKind::Price),
        _ => None,
    }
}

/// 저장된 프로젝트 메뉴를 처리한다.
pub fn handle_projects(tr: &Translator, book: &mut ProjectBook) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTS_HEADING));
    if book.is_empty() {
        println!("{}", tr.t(keys::PROJECT_NONE));
    } else {
        for p in book.iter() {
            println!(
                "[{}] {} | {} {} | {} | {:.2} {} | ₹{:.2} | {}",
                p.id,
                p.name,
                p.material,
                p.shape,
                p.dimension_summary(),
                p.weight_kg,
                tr.t(keys::CALC_KG),
                p.price,
                p.created_at.format("%Y-%m-%d")
            );
        }
        println!("{} ₹{:.2}", tr.t(keys::PROJECT_TOTAL), book.total_value());
    }
    println!("{}", tr.t(keys::PROJECTS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" | "" => {}
        "2" => {
            let id_raw = read_line(tr.t(keys::PROJECT_DELETE_PROMPT))?;
            match id_raw.trim().parse::<u64>() {
                Ok(id) if book.remove(id) => println!("{}", tr.t(keys::PROJECT_DELETED)),
                Ok(_) => println!("{}", tr.t(keys::PROJECT_NOT_FOUND)),
                Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
            }
        }
        "3" => {
            let json = book.to_json()?;
            std::fs::write("projects.json", json)?;
            println!("{} projects.json", tr.t(keys::PROJECT_EXPORT));
        }
        "4" => {
            let path = read_line("projects.json: ")?;
            let path = if path.trim().is_empty() {
                "projects.json"
            } else {
                path.trim()
            };
            let content = std::fs::read_to_string(path)?;
            let count = book.merge_json(&content)?;
            println!("{} +{count}", tr.t(keys::PROJECT_IMPORT));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?} / {}: {}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system,
        tr.t(keys::SETTINGS_LANGUAGE),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let system = match sel.trim() {
        "" => None,
        "1" => Some(crate::config::UnitSystem::Metric),
        "2" => Some(crate::config::UnitSystem::Imperial),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            None
        }
    };
    if let Some(system) = system {
        cfg.unit_system = system;
        cfg.default_units = crate::config::DefaultUnits::for_system(system);
        println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), system);
    }
    let lang = read_line(&format!("{} (auto/en/hi): ", tr.t(keys::SETTINGS_LANGUAGE)))?;
    let lang = lang.trim();
    if !lang.is_empty() {
        cfg.language = lang.to_string();
        println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    }
    Ok(())
}

fn field_label(tr: &Translator, field: DimensionField) -> &'static str {
    match field {
        DimensionField::Diameter => tr.t(keys::FIELD_DIAMETER),
        DimensionField::Thickness => tr.t(keys::FIELD_THICKNESS),
        DimensionField::Length => tr.t(keys::FIELD_LENGTH),
        DimensionField::Width => tr.t(keys::FIELD_WIDTH),
        DimensionField::Height => tr.t(keys::FIELD_HEIGHT),
    }
}

fn default_unit_for(cfg: &Config, field: DimensionField) -> LengthUnit {
    match field {
        DimensionField::Diameter | DimensionField::Thickness => cfg.default_units.compact,
        _ => cfg.default_units.length,
    }
}

fn unit_codes(field: DimensionField) -> String {
    field
        .allowed_units()
        .iter()
        .map(|u| u.as_code())
        .collect::<Vec<_>>()
        .join("/")
}

fn price_source_label(tr: &Translator, source: PriceSource) -> &'static str {
    match source {
        PriceSource::Override => tr.t(keys::PRICE_SOURCE_OVERRIDE),
        PriceSource::Fetched => tr.t(keys::PRICE_SOURCE_FETCHED),
        PriceSource::Backup => tr.t(keys::PRICE_SOURCE_BACKUP),
        PriceSource::MaterialDefault => tr.t(keys::PRICE_SOURCE_DEFAULT),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        if let Ok(v) = line.trim().parse::<f64>() {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}
