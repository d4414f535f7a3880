#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use inducalc::{
    config, conversion,
    engine::{self, Computation, DimensionInput, DimensionInputs, PriceInput},
    i18n,
    material_db::{self, MaterialData},
    pricing::{PriceFeed, PriceLookup, PriceSource, StaticPriceLookup},
    project::ProjectBook,
    quantity::QuantityKind,
    shape::{self, DimensionField},
    units::{convert_length, convert_price, LengthUnit, PriceUnit},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/hi)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "InduCalc",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["InduCalc.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 힌디(데바나가리)를 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 의 Noto Sans Devanagari
/// 2) Windows 시스템 폰트(Nirmala UI/Mangal)
/// 3) Linux noto 폰트 경로
/// 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/NotoSansDevanagari-Regular.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "devanagari_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["Nirmala.ttf", "NirmalaB.ttf", "mangal.ttf"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "devanagari_font");
                return Ok(());
            }
        }
    }

    let linux_candidates = [
        "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read system font ({cand}): {e}"))?;
            apply_font_bytes(ctx, bytes, "devanagari_font");
            return Ok(());
        }
    }

    Err("Devanagari font not found. Please set a user font (.ttf) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// CLI용 헤딩 문자열에서 장식 문자를 떼어낸 표시용 제목.
fn heading_text(s: &str) -> &str {
    s.trim()
        .trim_start_matches("--")
        .trim_end_matches("--")
        .trim()
}

/// 치수 입력의 단위를 허용 목록 안에서 한 칸 순환시킨다.
/// 입력된 값이 숫자라면 새 단위 기준으로 다시 표기한다(소수 2자리).
fn cycle_unit(input: &mut DimensionInput, field: DimensionField) {
    let allowed = field.allowed_units();
    let idx = allowed
        .iter()
        .position(|u| *u == input.unit)
        .unwrap_or(0);
    let next = allowed[(idx + 1) % allowed.len()];
    if let Ok(v) = input.raw.trim().parse::<f64>() {
        if v.is_finite() {
            input.raw = format!("{:.2}", convert_length(v, input.unit, next));
        }
    }
    input.unit = next;
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    apply_initial_view_size: bool,
    // 계산기
    material_id: String,
    shape_type: String,
    dims: DimensionInputs,
    price_raw: String,
    price_unit: PriceUnit,
    price_feed: PriceFeed,
    engine: engine::Engine,
    // 단위 변환
    conv_value: f64,
    conv_kind: QuantityKind,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 프로젝트
    book: ProjectBook,
    project_name: String,
    project_status: Option<String>,
    // 설정
    show_settings_modal: bool,
    show_help_modal: bool,
    ui_scale: f32,
    always_on_top: bool,
    window_alpha: f32,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    UnitConv,
    Projects,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, None);
        let lang_input = config.language.clone();
        let mut dims = DimensionInputs::new();
        for field in DimensionField::ALL {
            dims.get_mut(field).unit = default_unit_for(&config, field);
        }
        Self {
            price_unit: config.default_units.price,
            config,
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Calculator,
            apply_initial_view_size: true,
            material_id: String::new(),
            shape_type: String::new(),
            dims,
            price_raw: String::new(),
            price_feed: PriceFeed::new(),
            engine: engine::Engine::new(),
            conv_value: 100.0,
            conv_kind: QuantityKind::Length,
            conv_from: "mm".into(),
            conv_to: "inch".into(),
            conv_result: None,
            book: ProjectBook::new(),
            project_name: String::new(),
            project_status: None,
            show_settings_modal: false,
            show_help_modal: false,
            ui_scale: 1.0,
            always_on_top: false,
            window_alpha: 1.0,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    fn material(&self) -> Option<&'static MaterialData> {
        if self.material_id.is_empty() {
            None
        } else {
            material_db::find_material(&self.material_id)
        }
    }

    /// 현재 입력 스냅샷으로 엔진을 다시 돌린다. 재질/형상이 없으면 결과를 비운다.
    fn recompute_now(&mut self) {
        let Some(material) = self.material() else {
            self.engine.reset();
            return;
        };
        if self.shape_type.is_empty() {
            self.engine.reset();
            return;
        }
        let price = PriceInput {
            raw: self.price_raw.clone(),
            unit: self.price_unit,
            fetched_per_kg: self.price_feed.latest(),
        };
        self.engine
            .recompute(material, &self.shape_type, &self.dims, &price);
    }

    /// 재질/형상이 바뀔 때 참고 시세를 한 번 조회한다(베스트에포트).
    /// 토큰이 세대와 어긋난 응답은 버려진다.
    fn refresh_price(&mut self) {
        let token = self.price_feed.begin();
        if let Some(material) = self.material() {
            if !self.shape_type.is_empty() {
                let fetched = StaticPriceLookup.fetch(material.id, &self.shape_type);
                self.price_feed.accept(token, fetched);
            }
        }
    }

    /// 덮어쓰기 입력이 비어 있을 때 자리표시자로 보여줄 유효 단가 문자열.
    fn price_placeholder(&self) -> String {
        let Some(material) = self.material() else {
            return String::new();
        };
        if self.shape_type.is_empty() {
            return String::new();
        }
        let effective = inducalc::pricing::resolve_price(
            material,
            &self.shape_type,
            "",
            self.price_unit,
            self.price_feed.latest(),
        );
        let shown = convert_price(effective.per_kg, PriceUnit::RupeePerKg, self.price_unit);
        format!(
            "{} ({:.2} {})",
            self.tr.t(i18n::keys::PRICE_ENTER),
            shown,
            self.price_unit.as_code()
        )
    }

    fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        self.config.unit_system = system;
        self.config.default_units = config::DefaultUnits::for_system(system);
        self.price_unit = self.config.default_units.price;
        for field in DimensionField::ALL {
            let unit = default_unit_for(&self.config, field);
            self.dims.get_mut(field).unit = unit;
        }
    }

    fn field_label(&self, field: DimensionField) -> &'static str {
        use i18n::keys::*;
        match field {
            DimensionField::Diameter => self.tr.t(FIELD_DIAMETER),
            DimensionField::Thickness => self.tr.t(FIELD_THICKNESS),
            DimensionField::Length => self.tr.t(FIELD_LENGTH),
            DimensionField::Width => self.tr.t(FIELD_WIDTH),
            DimensionField::Height => self.tr.t(FIELD_HEIGHT),
        }
    }

    fn field_placeholder(&self, field: DimensionField) -> &'static str {
        use i18n::keys::*;
        match field {
            DimensionField::Diameter => self.tr.t(ENTER_DIAMETER),
            DimensionField::Thickness => self.tr.t(ENTER_THICKNESS),
            DimensionField::Length => self.tr.t(ENTER_LENGTH),
            DimensionField::Width => self.tr.t(ENTER_WIDTH),
            DimensionField::Height => self.tr.t(ENTER_HEIGHT),
        }
    }

    fn price_source_label(&self, source: PriceSource) -> &'static str {
        use i18n::keys::*;
        match source {
            PriceSource::Override => self.tr.t(PRICE_SOURCE_OVERRIDE),
            PriceSource::Fetched => self.tr.t(PRICE_SOURCE_FETCHED),
            PriceSource::Backup => self.tr.t(PRICE_SOURCE_BACKUP),
            PriceSource::MaterialDefault => self.tr.t(PRICE_SOURCE_DEFAULT),
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        let entries = [
            (Tab::Calculator, self.tr.t(i18n::keys::CALC_HEADING)),
            (Tab::UnitConv, self.tr.t(i18n::keys::UNIT_CONVERSION_HEADING)),
            (Tab::Projects, self.tr.t(i18n::keys::PROJECTS_HEADING)),
        ];
        for (tab, label) in entries {
            if ui
                .selectable_label(self.tab == tab, heading_text(label))
                .clicked()
            {
                self.tab = tab;
            }
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(i18n::keys::CALC_SELECT_MATERIAL));
        ui.add_space(4.0);

        let mut changed = false;

        // 재질 선택
        let selected_material_label = self
            .material()
            .map(|m| {
                self.tr
                    .material_name(m.id)
                    .unwrap_or(m.name)
                    .to_string()
            })
            .unwrap_or_else(|| self.tr.t(i18n::keys::CALC_SELECT_MATERIAL).to_string());
        let before_material = self.material_id.clone();
        egui::ComboBox::from_id_source("material_choice")
            .selected_text(selected_material_label)
            .width(240.0)
            .show_ui(ui, |ui| {
                for m in material_db::materials() {
                    let label = self.tr.material_name(m.id).unwrap_or(m.name);
                    ui.selectable_value(&mut self.material_id, m.id.to_string(), label);
                }
            });
        if before_material != self.material_id {
            // 재질이 바뀌면 이전 형상/시세는 의미가 없다.
            self.shape_type.clear();
            self.price_feed.clear();
            changed = true;
        }

        if let Some(material) = self.material() {
            ui.small(material.notes);
            ui.add_space(4.0);

            let selected_shape_label = if self.shape_type.is_empty() {
                self.tr.t(i18n::keys::CALC_SELECT_SHAPE).to_string()
            } else {
                self.tr
                    .shape_name(&self.shape_type)
                    .unwrap_or(self.shape_type.as_str())
                    .to_string()
            };
            let before_shape = self.shape_type.clone();
            egui::ComboBox::from_id_source("shape_choice")
                .selected_text(selected_shape_label)
                .width(240.0)
                .show_ui(ui, |ui| {
                    for s in material.shapes {
                        let label = self.tr.shape_name(s).unwrap_or(s);
                        ui.selectable_value(&mut self.shape_type, s.to_string(), label);
                    }
                });
            if before_shape != self.shape_type {
                self.refresh_price();
                changed = true;
            }
        } else {
            ui.add_space(8.0);
            ui.label(self.tr.t(i18n::keys::CALC_CHOOSE_MATERIAL_HINT));
            self.engine.reset();
            return;
        }

        if self.shape_type.is_empty() {
            ui.add_space(8.0);
            ui.label(self.tr.t(i18n::keys::CALC_CHOOSE_SHAPE_HINT));
            return;
        }

        ui.add_space(8.0);
        ui.separator();

        // 형상이 요구하는 치수 필드만 그린다.
        let fields = shape::required_fields(&self.shape_type);
        let mut cycle_field: Option<DimensionField> = None;
        let mut dims_changed = false;
        egui::Grid::new("dimension_grid")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for field in fields {
                    ui.label(self.field_label(*field));
                    let placeholder = self.field_placeholder(*field);
                    let input = self.dims.get_mut(*field);
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut input.raw)
                            .hint_text(placeholder)
                            .desired_width(140.0),
                    );
                    if response.changed() {
                        changed = true;
                        dims_changed = true;
                    }
                    if ui
                        .button(input.unit.as_code())
                        .on_hover_text(format!(
                            "Switch unit (current: {})",
                            input.unit.as_code()
                        ))
                        .clicked()
                    {
                        cycle_field = Some(*field);
                    }
                    ui.end_row();
                    if self.dims.get(*field).is_invalid() {
                        ui.label("");
                        ui.colored_label(
                            egui::Color32::RED,
                            self.tr.t(i18n::keys::CALC_INVALID_VALUE),
                        );
                        ui.label("");
                        ui.end_row();
                    }
                }

                // 단가 입력 행. 자리표시자는 현재 유효 단가를 보여준다.
                ui.label(self.tr.t(i18n::keys::PRICE_LABEL));
                let placeholder = self.price_placeholder();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.price_raw)
                        .hint_text(placeholder)
                        .desired_width(140.0),
                );
                if response.changed() {
                    changed = true;
                }
                ui.horizontal(|ui| {
                    if ui
                        .button(self.price_unit.as_code())
                        .on_hover_text(format!(
                            "Switch price unit (current: {})",
                            self.price_unit.as_code()
                        ))
                        .clicked()
                    {
                        let next = self.price_unit.toggled();
                        if let Ok(v) = self.price_raw.trim().parse::<f64>() {
                            if v.is_finite() {
                                self.price_raw =
                                    format!("{}", convert_price(v, self.price_unit, next));
                            }
                        }
                        self.price_unit = next;
                        changed = true;
                    }
                    if ui.button(self.tr.t(i18n::keys::PRICE_REFRESH)).clicked() {
                        self.refresh_price();
                        changed = true;
                    }
                });
                ui.end_row();
            });

        if let Some(field) = cycle_field {
            cycle_unit(self.dims.get_mut(field), field);
            changed = true;
        }

        ui.add_space(4.0);
        if ui.button(self.tr.t(i18n::keys::CALC_CLEAR_ALL)).clicked() {
            self.dims.clear_values();
            self.price_raw.clear();
            changed = true;
        }
        // 치수를 전부 지우면 덮어쓰기 단가도 함께 지운다.
        if dims_changed && self.dims.all_blank() && !self.price_raw.is_empty() {
            self.price_raw.clear();
        }

        if changed {
            self.recompute_now();
        }

        ui.add_space(8.0);
        ui.separator();

        let (weight, total, source) = match self.engine.last() {
            Computation::Complete(r) => (r.weight_kg, r.total_price, Some(r.price_source)),
            Computation::Incomplete => (0.0, 0.0, None),
        };
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(self.tr.t(i18n::keys::CALC_WEIGHT));
                ui.heading(format!("{weight:.2} {}", self.tr.t(i18n::keys::CALC_KG)));
            });
            ui.add_space(32.0);
            ui.vertical(|ui| {
                ui.label(self.tr.t(i18n::keys::CALC_TOTAL_COST));
                ui.heading(format!("₹{total:.2}"));
                if let Some(source) = source {
                    ui.small(self.price_source_label(source));
                }
            });
        });
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        use i18n::keys::*;
        ui.heading(heading_text(self.tr.t(UNIT_CONVERSION_HEADING)));
        ui.add_space(8.0);
        let kinds = [
            (QuantityKind::Length, self.tr.t(FIELD_LENGTH)),
            (QuantityKind::Density, "Density"),
            (QuantityKind::Price, self.tr.t(PRICE_LABEL)),
        ];
        let before = self.conv_kind;
        let selected = kinds
            .iter()
            .find(|(k, _)| *k == self.conv_kind)
            .map(|(_, l)| *l)
            .unwrap_or_default();
        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(UNIT_CONVERSION_PROMPT_KIND).trim_end_matches(": "));
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (k, label) in kinds {
                            ui.selectable_value(&mut self.conv_kind, k, label);
                        }
                    });
                ui.end_row();

                ui.label(self.tr.t(UNIT_CONVERSION_PROMPT_VALUE).trim_end_matches(": "));
                ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                ui.end_row();

                ui.label("From");
                egui::ComboBox::from_id_source("conv_from")
                    .selected_text(self.conv_from.clone())
                    .show_ui(ui, |ui| {
                        for code in unit_options(self.conv_kind) {
                            ui.selectable_value(&mut self.conv_from, code.to_string(), *code);
                        }
                    });
                ui.end_row();

                ui.label("To");
                egui::ComboBox::from_id_source("conv_to")
                    .selected_text(self.conv_to.clone())
                    .show_ui(ui, |ui| {
                        for code in unit_options(self.conv_kind) {
                            ui.selectable_value(&mut self.conv_to, code.to_string(), *code);
                        }
                    });
                ui.end_row();
            });
        if before != self.conv_kind {
            let (f, t) = default_units_for_kind(self.conv_kind);
            self.conv_from = f.to_string();
            self.conv_to = t.to_string();
        }
        ui.add_space(8.0);
        if ui.button(self.tr.t(UNIT_CONVERSION_RUN)).clicked() {
            self.conv_result = match conversion::convert(
                self.conv_kind,
                self.conv_value,
                self.conv_from.trim(),
                self.conv_to.trim(),
            ) {
                Ok(v) => Some(format!("{v:.4} {}", self.conv_to.trim())),
                Err(e) => Some(format!("{}: {e}", self.tr.t(ERROR_PREFIX))),
            };
        }
        if let Some(res) = &self.conv_result {
            ui.label(res);
        }
    }

    fn ui_projects(&mut self, ui: &mut egui::Ui) {
        use i18n::keys::*;
        ui.heading(heading_text(self.tr.t(PROJECTS_HEADING)));
        ui.add_space(8.0);

        let can_save = self.engine.last().is_complete();
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.project_name)
                    .hint_text(self.tr.t(PROJECT_NAME_PROMPT).trim_end_matches(": "))
                    .desired_width(200.0),
            );
            let save_clicked = ui
                .add_enabled(can_save, egui::Button::new(self.tr.t(PROJECT_SAVE)))
                .clicked();
            if save_clicked {
                if let Computation::Complete(result) = self.engine.last().clone() {
                    if self.book.save(&self.project_name, &result).is_some() {
                        self.project_name.clear();
                        self.project_status = Some(self.tr.t(PROJECT_SAVED).to_string());
                    } else {
                        self.project_status = Some(self.tr.t(PROJECT_EMPTY_NAME).to_string());
                    }
                }
            }
        });
        if !can_save {
            ui.small(self.tr.t(PROJECT_NOTHING_TO_SAVE));
        }
        if let Some(status) = &self.project_status {
            ui.label(status);
        }
        ui.add_space(8.0);
        ui.separator();

        if self.book.is_empty() {
            ui.label(self.tr.t(PROJECT_NONE));
        } else {
            ui.label(format!(
                "{} ₹{:.2}",
                self.tr.t(PROJECT_TOTAL),
                self.book.total_value()
            ));
            ui.add_space(4.0);
            let mut delete_id: Option<u64> = None;
            for p in self.book.iter() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&p.name);
                            ui.small(p.created_at.format("%Y-%m-%d %H:%M").to_string());
                            ui.label(format!(
                                "{} {} | {}",
                                p.material,
                                p.shape,
                                p.dimension_summary()
                            ));
                            ui.small(format!(
                                "{:.2} {} • ₹{:.2}",
                                p.weight_kg,
                                self.tr.t(CALC_KG),
                                p.price
                            ));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(self.tr.t(PROJECT_DELETE)).clicked() {
                                delete_id = Some(p.id);
                            }
                        });
                    });
                });
            }
            if let Some(id) = delete_id {
                self.book.remove(id);
            }
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(self.tr.t(PROJECT_EXPORT)).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("projects.json")
                    .save_file()
                {
                    match self.book.to_json() {
                        Ok(json) => {
                            if let Err(e) = fs::write(&path, json) {
                                self.project_status = Some(format!("Export error: {e}"));
                            } else {
                                self.project_status =
                                    Some(format!("{} {}", self.tr.t(PROJECT_EXPORT), path.display()));
                            }
                        }
                        Err(e) => self.project_status = Some(format!("Export error: {e}")),
                    }
                }
            }
            if ui.button(self.tr.t(PROJECT_IMPORT)).clicked() {
                if let Some(path) = FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
                    match fs::read_to_string(&path) {
                        Ok(content) => match self.book.merge_json(&content) {
                            Ok(count) => {
                                self.project_status =
                                    Some(format!("{} +{count}", self.tr.t(PROJECT_IMPORT)));
                            }
                            Err(e) => self.project_status = Some(format!("Import error: {e}")),
                        },
                        Err(e) => self.project_status = Some(format!("Import error: {e}")),
                    }
                }
            }
        });
    }
}

fn default_unit_for(cfg: &config::Config, field: DimensionField) -> LengthUnit {
    match field {
        DimensionField::Diameter | DimensionField::Thickness => cfg.default_units.compact,
        _ => cfg.default_units.length,
    }
}

fn unit_options(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Length => &["mm", "cm", "m", "inch", "ft"],
        QuantityKind::Density => &["lb/ft3", "kg/m3"],
        QuantityKind::Price => &["₹/kg", "₹/ton"],
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Length => ("mm", "inch"),
        QuantityKind::Density => ("lb/ft3", "kg/m3"),
        QuantityKind::Price => ("₹/kg", "₹/ton"),
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.5).max(820.0), (screen.y * 0.6).max(620.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("InduCalc");
                ui.separator();
                // 원본 앱의 언어 전환 버튼: 영어 <-> 힌디.
                let (next_lang, label) = match self.tr.language() {
                    i18n::Language::En => ("hi", "हिन्दी"),
                    i18n::Language::Hi => ("en", "English"),
                };
                if ui.button(label).clicked() {
                    self.config.language = next_lang.to_string();
                    self.lang_input = next_lang.to_string();
                    self.tr = i18n::Translator::new_with_pack(next_lang, None);
                    if let Err(e) = self.config.save() {
                        self.lang_save_status = Some(format!("Save error: {e}"));
                    }
                }
                if ui
                    .button(self.tr.t(i18n::keys::MAIN_MENU_SETTINGS).trim_start_matches("4) "))
                    .clicked()
                {
                    self.show_settings_modal = true;
                }
                if ui.button("?").clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            let mut font_pick: Option<String> = None;
            egui::Window::new(self.tr.t(i18n::keys::MAIN_MENU_SETTINGS).trim_start_matches("4) "))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(self.tr.t(i18n::keys::SETTINGS_CURRENT_UNIT_SYSTEM));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("Metric", config::UnitSystem::Metric),
                            ("Imperial", config::UnitSystem::Imperial),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label("UI scale");
                    if ui
                        .add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x"))
                        .changed()
                    {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.checkbox(&mut self.always_on_top, "Always on top");
                    ui.label("Window transparency");
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(self.tr.t(i18n::keys::SETTINGS_LANGUAGE));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "System");
                            ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "hi".into(), "हिन्दी");
                        });
                    if ui.button(self.tr.t(i18n::keys::PROJECT_SAVE)).clicked() {
                        self.config.language = self.lang_input.clone();
                        let resolved =
                            i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(&resolved, None);
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status =
                                Some(self.tr.t(i18n::keys::SETTINGS_SAVED).to_string());
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                    ui.separator();
                    ui.label("Custom font (.ttf)");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.custom_font_path)
                                .desired_width(220.0),
                        );
                        if ui.button("...").clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc"])
                                .pick_file()
                            {
                                font_pick = Some(path.display().to_string());
                            }
                        }
                        if ui.button("Load").clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::RED, err);
                    }
                });
            if let Some(path) = font_pick {
                self.custom_font_path = path;
            }
            if new_unit_system != self.config.unit_system {
                self.apply_unit_preset(new_unit_system);
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading("InduCalc");
                    ui.label("Fabrication and structural material weight & cost calculator.");
                    ui.label("Version: 1.0.0");
                    ui.separator();
                    ui.label("- Diameter/thickness accept mm, cm, inch.");
                    ui.label("- Length/width/height accept mm, cm, m, inch, ft.");
                    ui.label("- Price can be entered per kg or per ton.");
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::Projects => self.ui_projects(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_metric_applies_mm_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Metric);
        assert_eq!(
            app.dims.get(DimensionField::Length).unit,
            LengthUnit::Millimeter
        );
        assert_eq!(
            app.dims.get(DimensionField::Diameter).unit,
            LengthUnit::Millimeter
        );
        assert_eq!(app.price_unit, PriceUnit::RupeePerKg);
    }

    #[test]
    fn preset_imperial_applies_imperial_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(config::UnitSystem::Imperial);
        assert_eq!(app.dims.get(DimensionField::Length).unit, LengthUnit::Foot);
        assert_eq!(
            app.dims.get(DimensionField::Thickness).unit,
            LengthUnit::Inch
        );
    }

    #[test]
    fn cycle_unit_reexpresses_value() {
        let mut input = DimensionInput::new(LengthUnit::Millimeter);
        input.raw = "25.4".to_string();
        // mm -> cm
        cycle_unit(&mut input, DimensionField::Diameter);
        assert_eq!(input.unit, LengthUnit::Centimeter);
        assert_eq!(input.raw, "2.54");
        // cm -> inch
        cycle_unit(&mut input, DimensionField::Diameter);
        assert_eq!(input.unit, LengthUnit::Inch);
        assert_eq!(input.raw, "1.00");
        // inch -> mm (순환)
        cycle_unit(&mut input, DimensionField::Diameter);
        assert_eq!(input.unit, LengthUnit::Millimeter);
        assert_eq!(input.raw, "25.40");
    }

    #[test]
    fn price_placeholder_uses_backup_when_no_override() {
        let mut app = GuiApp::new(config::Config::default());
        app.material_id = "ms".to_string();
        app.shape_type = "Pipe".to_string();
        let placeholder = app.price_placeholder();
        assert!(placeholder.contains("55.00"), "placeholder={placeholder}");
    }

    #[test]
    fn stale_fetch_does_not_overwrite_newer_state() {
        let mut app = GuiApp::new(config::Config::default());
        app.material_id = "ms".to_string();
        app.shape_type = "Pipe".to_string();
        let stale = app.price_feed.begin();
        let _fresh = app.price_feed.begin();
        assert!(!app.price_feed.accept(stale, Some(999.0)));
        assert_eq!(app.price_feed.latest(), None);
    }
}
