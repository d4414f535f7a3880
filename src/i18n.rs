use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATOR: &str = "main_menu.calculator";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_PROJECTS: &str = "main_menu.projects";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_SELECT_MATERIAL: &str = "calc.select_material";
    pub const CALC_SELECT_SHAPE: &str = "calc.select_shape";
    pub const CALC_CHOOSE_MATERIAL_HINT: &str = "calc.choose_material_hint";
    pub const CALC_CHOOSE_SHAPE_HINT: &str = "calc.choose_shape_hint";
    pub const CALC_WEIGHT: &str = "calc.weight";
    pub const CALC_TOTAL_COST: &str = "calc.total_cost";
    pub const CALC_KG: &str = "calc.kg";
    pub const CALC_INVALID_VALUE: &str = "calc.invalid_value";
    pub const CALC_CLEAR_ALL: &str = "calc.clear_all";

    pub const FIELD_DIAMETER: &str = "field.diameter";
    pub const FIELD_THICKNESS: &str = "field.thickness";
    pub const FIELD_LENGTH: &str = "field.length";
    pub const FIELD_WIDTH: &str = "field.width";
    pub const FIELD_HEIGHT: &str = "field.height";
    pub const ENTER_DIAMETER: &str = "field.enter_diameter";
    pub const ENTER_THICKNESS: &str = "field.enter_thickness";
    pub const ENTER_LENGTH: &str = "field.enter_length";
    pub const ENTER_WIDTH: &str = "field.enter_width";
    pub const ENTER_HEIGHT: &str = "field.enter_height";

    pub const PRICE_LABEL: &str = "price.label";
    pub const PRICE_ENTER: &str = "price.enter";
    pub const PRICE_REFRESH: &str = "price.refresh";
    pub const PRICE_SOURCE_OVERRIDE: &str = "price.source_override";
    pub const PRICE_SOURCE_FETCHED: &str = "price.source_fetched";
    pub const PRICE_SOURCE_BACKUP: &str = "price.source_backup";
    pub const PRICE_SOURCE_DEFAULT: &str = "price.source_default";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RUN: &str = "unit_conversion.run";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const PROJECTS_HEADING: &str = "projects.heading";
    pub const PROJECTS_OPTIONS: &str = "projects.options";
    pub const PROJECT_NAME_PROMPT: &str = "projects.name_prompt";
    pub const PROJECT_SAVE: &str = "projects.save";
    pub const PROJECT_SAVED: &str = "projects.saved";
    pub const PROJECT_EMPTY_NAME: &str = "projects.empty_name";
    pub const PROJECT_DELETE: &str = "projects.delete";
    pub const PROJECT_DELETE_PROMPT: &str = "projects.delete_prompt";
    pub const PROJECT_DELETED: &str = "projects.deleted";
    pub const PROJECT_NOT_FOUND: &str = "projects.not_found";
    pub const PROJECT_NONE: &str = "projects.none";
    pub const PROJECT_TOTAL: &str = "projects.total";
    pub const PROJECT_EXPORT: &str = "projects.export";
    pub const PROJECT_IMPORT: &str = "projects.import";
    pub const PROJECT_NOTHING_TO_SAVE: &str = "projects.nothing_to_save";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Hi,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("hi") {
            Language::Hi
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/hi)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 힌디 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Hi => hi(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    /// 재질 표시 이름. 힌디에서만 번역이 있고 없으면 카탈로그 이름을 쓴다.
    pub fn material_name(&self, id: &str) -> Option<&'static str> {
        match self.lang {
            Language::Hi => hi_material(id),
            Language::En => None,
        }
    }

    /// 형상 표시 이름. 힌디에서만 번역이 있고 없으면 원래 이름을 쓴다.
    pub fn shape_name(&self, shape: &str) -> Option<&'static str> {
        match self.lang {
            Language::Hi => hi_shape(shape),
            Language::En => None,
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "en" | "en-us" | "en-in" | "en-uk" => Some("en".into()),
        "hi" | "hi-in" => Some("hi".into()),
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("hi") => Some("hi".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" => Some("en".into()),
        "hi" => Some("hi".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== InduCalc ===",
        MAIN_MENU_CALCULATOR => "1) Weight & Cost Calculator",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit Converter",
        MAIN_MENU_PROJECTS => "3) Saved Projects",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- Calculator --",
        CALC_SELECT_MATERIAL => "Select Material Type",
        CALC_SELECT_SHAPE => "Select Type",
        CALC_CHOOSE_MATERIAL_HINT => "Choose A Material Type Above To Start Calculating",
        CALC_CHOOSE_SHAPE_HINT => "Choose A Type Above To Start Calculating",
        CALC_WEIGHT => "Weight",
        CALC_TOTAL_COST => "Total Cost",
        CALC_KG => "kg",
        CALC_INVALID_VALUE => "Enter a valid positive value",
        CALC_CLEAR_ALL => "Clear All",
        FIELD_DIAMETER => "Diameter",
        FIELD_THICKNESS => "Thickness",
        FIELD_LENGTH => "Length",
        FIELD_WIDTH => "Width",
        FIELD_HEIGHT => "Height",
        ENTER_DIAMETER => "Enter Diameter",
        ENTER_THICKNESS => "Enter Thickness",
        ENTER_LENGTH => "Enter Length",
        ENTER_WIDTH => "Enter Width",
        ENTER_HEIGHT => "Enter Height",
        PRICE_LABEL => "Price",
        PRICE_ENTER => "Enter Price",
        PRICE_REFRESH => "Refresh Price",
        PRICE_SOURCE_OVERRIDE => "user price",
        PRICE_SOURCE_FETCHED => "market price",
        PRICE_SOURCE_BACKUP => "reference price",
        PRICE_SOURCE_DEFAULT => "default price",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Length  2) Density  3) Price",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: mm, inch, ₹/kg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: m, ft, ₹/ton): ",
        UNIT_CONVERSION_RUN => "Convert",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        PROJECTS_HEADING => "\n-- Saved Projects --",
        PROJECTS_OPTIONS => "1) List  2) Delete  3) Export JSON  4) Import JSON",
        PROJECT_NAME_PROMPT => "Enter project name: ",
        PROJECT_SAVE => "Save",
        PROJECT_SAVED => "Project saved.",
        PROJECT_EMPTY_NAME => "Project name is empty; nothing saved.",
        PROJECT_DELETE => "Delete",
        PROJECT_DELETE_PROMPT => "Project id to delete: ",
        PROJECT_DELETED => "Project deleted.",
        PROJECT_NOT_FOUND => "No project with that id.",
        PROJECT_NONE => "No Project",
        PROJECT_TOTAL => "Total value:",
        PROJECT_EXPORT => "Export",
        PROJECT_IMPORT => "Import",
        PROJECT_NOTHING_TO_SAVE => "Nothing to save yet; complete a calculation first.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Metric  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved:",
        _ => "[missing translation]",
    }
}

fn hi(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "त्रुटि",
        APP_EXIT => "एप्लिकेशन बंद हो रहा है।",
        MAIN_MENU_CALCULATOR => "1) वजन और लागत कैलकुलेटर",
        MAIN_MENU_UNIT_CONVERSION => "2) इकाई परिवर्तक",
        MAIN_MENU_PROJECTS => "3) सहेजे गए प्रोजेक्ट्स",
        MAIN_MENU_SETTINGS => "4) सेटिंग्स",
        MAIN_MENU_EXIT => "0) बाहर निकलें",
        PROMPT_MENU_SELECT => "मेनू चुनें: ",
        PROMPT_SELECT => "चुनें: ",
        INVALID_SELECTION_RETRY => "गलत इनपुट। फिर से चुनें।",
        ERROR_INVALID_NUMBER => "कृपया संख्या दर्ज करें।",
        CALC_HEADING => "\n-- कैलकुलेटर --",
        CALC_SELECT_MATERIAL => "सामग्री प्रकार चुनें",
        CALC_SELECT_SHAPE => "प्रकार चुनें",
        CALC_CHOOSE_MATERIAL_HINT => "ऊपर सामग्री प्रकार चुनें",
        CALC_CHOOSE_SHAPE_HINT => "ऊपर प्रकार चुनें",
        CALC_WEIGHT => "वजन",
        CALC_TOTAL_COST => "कुल लागत",
        CALC_KG => "किलोग्राम",
        CALC_INVALID_VALUE => "सही मान दर्ज करें",
        CALC_CLEAR_ALL => "सभी साफ करें",
        FIELD_DIAMETER => "व्यास",
        FIELD_THICKNESS => "मोटाई",
        FIELD_LENGTH => "लंबाई",
        FIELD_WIDTH => "चौड़ाई",
        FIELD_HEIGHT => "ऊंचाई",
        ENTER_DIAMETER => "व्यास दर्ज करें",
        ENTER_THICKNESS => "मोटाई दर्ज करें",
        ENTER_LENGTH => "लंबाई दर्ज करें",
        ENTER_WIDTH => "चौड़ाई दर्ज करें",
        ENTER_HEIGHT => "ऊंचाई दर्ज करें",
        PRICE_LABEL => "मूल्य",
        PRICE_ENTER => "मूल्य दर्ज करें",
        PRICE_REFRESH => "मूल्य ताज़ा करें",
        UNIT_CONVERSION_HEADING => "\n-- इकाई परिवर्तन --",
        UNIT_CONVERSION_RUN => "परिवर्तित करें",
        PROJECTS_HEADING => "\n-- सहेजे गए प्रोजेक्ट्स --",
        PROJECT_NAME_PROMPT => "प्रोजेक्ट नाम दर्ज करें: ",
        PROJECT_SAVE => "सेव करें",
        PROJECT_SAVED => "प्रोजेक्ट सेव हुआ।",
        PROJECT_EMPTY_NAME => "प्रोजेक्ट नाम खाली है; कुछ सेव नहीं हुआ।",
        PROJECT_DELETE => "हटाएं",
        PROJECT_DELETE_PROMPT => "हटाने के लिए प्रोजेक्ट id: ",
        PROJECT_DELETED => "प्रोजेक्ट हटाया गया।",
        PROJECT_NOT_FOUND => "इस id का कोई प्रोजेक्ट नहीं।",
        PROJECT_NONE => "कोई प्रोजेक्ट नहीं",
        PROJECT_TOTAL => "कुल मूल्य:",
        PROJECT_EXPORT => "निर्यात करें",
        PROJECT_IMPORT => "आयात करें",
        SETTINGS_HEADING => "\n-- सेटिंग्स --",
        SETTINGS_LANGUAGE => "भाषा",
        _ => return None,
    })
}

fn hi_material(id: &str) -> Option<&'static str> {
    Some(match id {
        "ms" => "माइल्ड स्टील (MS)",
        "stainless" => "स्टेनलेस स्टील",
        "aluminum" => "एल्यूमिनियम",
        "copper" => "तांबा",
        "brass" => "पीतल",
        "bronze" => "कांसा",
        "castiron" => "कास्ट आयरन",
        "concrete" => "कंक्रीट",
        "plastic" => "प्लास्टिक",
        "lead" => "सीसा",
        "zinc" => "जस्ता",
        "titanium" => "टाइटेनियम",
        "nickel" => "निकेल",
        "tin" => "टिन",
        "glass" => "कांच",
        "wood" => "लकड़ी",
        _ => return None,
    })
}

fn hi_shape(shape: &str) -> Option<&'static str> {
    Some(match shape {
        "Pipe" => "पाइप",
        "Rod" => "रॉड",
        "Sheet" => "शीट",
        "Plate" => "प्लेट",
        "Angle (ISA)" => "एंगल (ISA)",
        "Channel (ISMC)" => "चैनल (ISMC)",
        "Beam (ISMB)" => "बीम (ISMB)",
        "SHS" => "एसएचएस",
        "RHS" => "आरएचएस",
        "TMT Bar" => "टीएमटी बार",
        "Wire" => "वायर",
        "Bar" => "बार",
        "Tube" => "ट्यूब",
        "Plank" => "प्लैंक",
        "Board" => "बोर्ड",
        "Block" => "ब्लॉक",
        "Column" => "कॉलम",
        "Slab" => "स्लैब",
        "Rebar" => "रीबार",
        "Channel" => "चैनल",
        "Angle" => "एंगल",
        "Beam" => "बीम",
        _ => return None,
    })
}
