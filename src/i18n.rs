use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// Namespace com as chaves de texto da interface.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYSIS: &str = "main_menu.analysis";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const ANALYSIS_INPUT_INTRO: &str = "analysis.input_intro";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_BEAM: &str = "prompt.beam";
    pub const PROMPT_DRAFT: &str = "prompt.draft";
    pub const PROMPT_CB: &str = "prompt.cb";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_LENGTH: &str = "summary.length";
    pub const SUMMARY_BEAM: &str = "summary.beam";
    pub const SUMMARY_DRAFT: &str = "summary.draft";
    pub const SUMMARY_CB: &str = "summary.cb";
    pub const SUMMARY_CM: &str = "summary.cm";
    pub const SUMMARY_LCB: &str = "summary.lcb";
    pub const SUMMARY_DISPLACEMENT: &str = "summary.displacement";
    pub const SUMMARY_WETTED: &str = "summary.wetted_surface";
    pub const SUMMARY_APPENDAGE: &str = "summary.appendage_area";

    pub const RECOMMEND_TITLE: &str = "recommend.title";
    pub const RECOMMEND_MAX_SPEED: &str = "recommend.max_speed";
    pub const RECOMMEND_MIN_SPEED: &str = "recommend.min_speed";
    pub const RECOMMEND_MAX_FROUDE: &str = "recommend.max_froude";

    pub const SETUP_HEADING: &str = "setup.heading";
    pub const SETUP_TIP: &str = "setup.tip";
    pub const PROMPT_MIN_SPEED: &str = "prompt.min_speed";
    pub const PROMPT_MAX_SPEED: &str = "prompt.max_speed";
    pub const PROMPT_SPEED_STEP: &str = "prompt.speed_step";

    pub const METHOD_TIP_HOLTROP: &str = "method.tip_holtrop";
    pub const METHOD_TIP_SIMPLE: &str = "method.tip_simple";
    pub const PROMPT_METHOD: &str = "prompt.method";
    pub const METHOD_HOLTROP: &str = "method.holtrop";
    pub const METHOD_SIMPLE: &str = "method.simple";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULTS_METHOD: &str = "results.method";
    pub const TABLE_HEADER: &str = "results.table_header";
    pub const TABLE_TRUNCATED: &str = "results.table_truncated";
    pub const FLAG_NOTE: &str = "results.flag_note";
    pub const FLAG_FROUDE: &str = "flag.froude";
    pub const FLAG_CB: &str = "flag.cb";
    pub const FLAG_LB: &str = "flag.lb";
    pub const FLAG_REYNOLDS: &str = "flag.reynolds";

    pub const STATS_TITLE: &str = "stats.title";
    pub const STATS_MAX_RESISTANCE: &str = "stats.max_resistance";
    pub const STATS_AT: &str = "stats.at";
    pub const STATS_MAX_POWER: &str = "stats.max_power";
    pub const STATS_FROUDE_RANGE: &str = "stats.froude_range";

    pub const PROMPT_EXPORT: &str = "export.prompt";
    pub const EXPORTED: &str = "export.done";
    pub const ANALYSIS_DONE: &str = "analysis.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_CURRENT_SPEED_UNIT: &str = "settings.current_speed_unit";
    pub const SETTINGS_SPEED_UNIT_OPTIONS: &str = "settings.speed_unit_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("pt") {
            Language::Pt
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

/// Fornece o pacote de textos em tempo de execução.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Cria o tradutor para um código de idioma (pt/en).
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Cria o tradutor com um diretório de pacotes de idioma (locales/ etc).
    /// Sem diretório ou arquivo, valem apenas os textos embutidos.
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

    /// Busca o texto de uma chave. Sem tradução em inglês, cai para o
    /// português.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// Resolve o idioma na ordem: flag de CLI, configuração, locale do sistema.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "pt" => Some("pt".into()),
        "pt-br" => Some("pt-br".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
        "pt" => Some("pt".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Deduz o idioma a partir do locale do sistema.
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

/// Carrega um pacote de idioma TOML: mapa plano key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) código completo (ex.: pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) código base (ex.: pt)
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

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Obrigado por usar a Calculadora de Resistência!",
        MAIN_MENU_TITLE => "\n=== Calculadora de Resistência ao Avanço ===",
        MAIN_MENU_ANALYSIS => "1) Nova análise de resistência",
        MAIN_MENU_SETTINGS => "2) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Menu: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Escolha novamente.",
        ERROR_INVALID_NUMBER => "Digite um número válido.",
        ANALYSIS_HEADING => "\n-- Parâmetros do casco --",
        ANALYSIS_INPUT_INTRO => "Digite os parâmetros (Enter para o valor padrão):",
        PROMPT_LENGTH => "Comprimento LWL (m)",
        PROMPT_BEAM => "Boca (m)",
        PROMPT_DRAFT => "Calado (m)",
        PROMPT_CB => "Coeficiente de bloco CB",
        SUMMARY_HEADING => "\nPARÂMETROS DO CASCO",
        SUMMARY_LENGTH => "Comprimento (LWL):",
        SUMMARY_BEAM => "Boca (B):",
        SUMMARY_DRAFT => "Calado (T):",
        SUMMARY_CB => "Coef. de bloco (CB):",
        SUMMARY_CM => "Coef. de seção mestra (CM):",
        SUMMARY_LCB => "Centro de carena (LCB):",
        SUMMARY_DISPLACEMENT => "Volume de deslocamento:",
        SUMMARY_WETTED => "Área molhada:",
        SUMMARY_APPENDAGE => "Área de apêndices:",
        RECOMMEND_TITLE => "\nRecomendação para este casco:",
        RECOMMEND_MAX_SPEED => "Velocidade máxima recomendada:",
        RECOMMEND_MIN_SPEED => "Velocidade mínima sugerida:",
        RECOMMEND_MAX_FROUDE => "Número de Froude máximo:",
        SETUP_HEADING => "\n-- Configuração da análise --",
        SETUP_TIP => "Dica: passos menores geram curvas mais suaves.",
        PROMPT_MIN_SPEED => "Velocidade mínima",
        PROMPT_MAX_SPEED => "Velocidade máxima",
        PROMPT_SPEED_STEP => "Passo de velocidade",
        METHOD_TIP_HOLTROP => "Dica: Holtrop & Mennen é mais preciso para navios mercantes.",
        METHOD_TIP_SIMPLE => "Dica: o método simples serve para estimativas iniciais.",
        PROMPT_METHOD => "Método (1-Holtrop, 2-Simples) [1]: ",
        METHOD_HOLTROP => "Holtrop & Mennen",
        METHOD_SIMPLE => "Simplificado",
        RESULTS_HEADING => "\n======== RESULTADOS DA ANÁLISE ========",
        RESULTS_METHOD => "Método:",
        TABLE_HEADER => {
            " Veloc (nós)  Veloc (m/s)   Froude  Fricção (kN)  Residual (kN)  Total (kN)  Potência (kW)"
        }
        TABLE_TRUNCATED => "... (tabela truncada; o CSV contém todos os pontos)",
        FLAG_NOTE => "(*) ponto fora da faixa de aplicabilidade do método:",
        FLAG_FROUDE => "Fn fora de (0.15, 0.45)",
        FLAG_CB => "CB fora de [0.55, 0.85]",
        FLAG_LB => "L/B fora de [3.9, 14.0]",
        FLAG_REYNOLDS => "Re ≤ 1: fricção indefinida",
        STATS_TITLE => "\nESTATÍSTICAS:",
        STATS_MAX_RESISTANCE => "Resistência máxima:",
        STATS_AT => "a",
        STATS_MAX_POWER => "Potência máxima:",
        STATS_FROUDE_RANGE => "Faixa de Froude:",
        PROMPT_EXPORT => "\nExportar resultados para CSV? (s/n) [s]: ",
        EXPORTED => "Resultados exportados:",
        ANALYSIS_DONE => "\nAnálise concluída com sucesso!",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT_LANGUAGE => "Idioma atual:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Português  2) English  3) Automático",
        SETTINGS_CURRENT_SPEED_UNIT => "Unidade de velocidade atual:",
        SETTINGS_SPEED_UNIT_OPTIONS => "1) nós  2) m/s",
        SETTINGS_PROMPT_CHANGE => "Número para alterar (Enter para cancelar): ",
        SETTINGS_INVALID => "Entrada inválida; nada foi alterado.",
        SETTINGS_SAVED => "Configuração salva.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Thank you for using the Resistance Calculator!",
        MAIN_MENU_TITLE => "\n=== Hull Resistance Calculator ===",
        MAIN_MENU_ANALYSIS => "1) New resistance analysis",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a valid number.",
        ANALYSIS_HEADING => "\n-- Hull parameters --",
        ANALYSIS_INPUT_INTRO => "Enter the parameters (Enter for defaults):",
        PROMPT_LENGTH => "Length LWL (m)",
        PROMPT_BEAM => "Beam (m)",
        PROMPT_DRAFT => "Draft (m)",
        PROMPT_CB => "Block coefficient CB",
        SUMMARY_HEADING => "\nHULL PARAMETERS",
        SUMMARY_LENGTH => "Length (LWL):",
        SUMMARY_BEAM => "Beam (B):",
        SUMMARY_DRAFT => "Draft (T):",
        SUMMARY_CB => "Block coefficient (CB):",
        SUMMARY_CM => "Midship coefficient (CM):",
        SUMMARY_LCB => "Center of buoyancy (LCB):",
        SUMMARY_DISPLACEMENT => "Displacement volume:",
        SUMMARY_WETTED => "Wetted surface area:",
        SUMMARY_APPENDAGE => "Appendage area:",
        RECOMMEND_TITLE => "\nRecommendation for this hull:",
        RECOMMEND_MAX_SPEED => "Recommended maximum speed:",
        RECOMMEND_MIN_SPEED => "Suggested minimum speed:",
        RECOMMEND_MAX_FROUDE => "Maximum Froude number:",
        SETUP_HEADING => "\n-- Analysis setup --",
        SETUP_TIP => "Tip: smaller steps give smoother curves.",
        PROMPT_MIN_SPEED => "Minimum speed",
        PROMPT_MAX_SPEED => "Maximum speed",
        PROMPT_SPEED_STEP => "Speed step",
        METHOD_TIP_HOLTROP => "Tip: Holtrop & Mennen is more accurate for merchant ships.",
        METHOD_TIP_SIMPLE => "Tip: the simple method suits initial estimates.",
        PROMPT_METHOD => "Method (1-Holtrop, 2-Simple) [1]: ",
        METHOD_HOLTROP => "Holtrop & Mennen",
        METHOD_SIMPLE => "Simplified",
        RESULTS_HEADING => "\n======== ANALYSIS RESULTS ========",
        RESULTS_METHOD => "Method:",
        TABLE_HEADER => {
            " Speed (kts)  Speed (m/s)   Froude  Friction (kN)  Residual (kN)  Total (kN)   Power (kW)"
        }
        TABLE_TRUNCATED => "... (table truncated; the CSV holds every point)",
        FLAG_NOTE => "(*) point outside the method's applicability range:",
        FLAG_FROUDE => "Fn outside (0.15, 0.45)",
        FLAG_CB => "CB outside [0.55, 0.85]",
        FLAG_LB => "L/B outside [3.9, 14.0]",
        FLAG_REYNOLDS => "Re ≤ 1: friction undefined",
        STATS_TITLE => "\nSTATISTICS:",
        STATS_MAX_RESISTANCE => "Maximum resistance:",
        STATS_AT => "at",
        STATS_MAX_POWER => "Maximum power:",
        STATS_FROUDE_RANGE => "Froude range:",
        PROMPT_EXPORT => "\nExport results to CSV? (y/n) [y]: ",
        EXPORTED => "Results exported:",
        ANALYSIS_DONE => "\nAnalysis completed successfully!",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Português  2) English  3) Automatic",
        SETTINGS_CURRENT_SPEED_UNIT => "Current speed unit:",
        SETTINGS_SPEED_UNIT_OPTIONS => "1) knots  2) m/s",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
