use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::export;
use crate::hull::{self, HullDerivedGeometry, HullPrincipalDimensions};
use crate::i18n::{keys, Translator};
use crate::resistance::{
    self, ApplicabilityFlag, CalculationMethod, HullAppendages, ResistanceResult, SpeedRange,
};
use crate::units::{convert_speed, SpeedUnit};

/// Opções do menu principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analysis,
    Settings,
    Exit,
}

/// Exibe o menu principal e devolve a opção escolhida.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYSIS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analysis),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Conduz uma análise completa: parâmetros, varredura, tabela e exportação.
pub fn handle_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYSIS_HEADING));
    println!("{}", tr.t(keys::ANALYSIS_INPUT_INTRO));

    // Valores padrão da calculadora de origem.
    let lwl = read_f64_default(tr, tr.t(keys::PROMPT_LENGTH), 150.0)?;
    let beam = read_f64_default(tr, tr.t(keys::PROMPT_BEAM), 20.0)?;
    let draft = read_f64_default(tr, tr.t(keys::PROMPT_DRAFT), 8.0)?;
    let cb = read_f64_default(tr, tr.t(keys::PROMPT_CB), 0.70)?;

    let dims = match HullPrincipalDimensions::new(lwl, beam, draft, cb) {
        Ok(dims) => dims,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };
    let geometry = hull::derive_geometry(&dims);
    print_hull_summary(tr, &dims, &geometry);

    let unit = cfg.speed_unit;
    let (v_min_rec, v_max_rec) = recommend_speed_range(tr, &dims, cfg);

    println!("{}", tr.t(keys::SETUP_HEADING));
    println!("{}", tr.t(keys::SETUP_TIP));
    let sym = unit.symbol();
    let min_speed = read_f64_default(
        tr,
        &format!("{} ({sym})", tr.t(keys::PROMPT_MIN_SPEED)),
        v_min_rec,
    )?;
    let max_speed = read_f64_default(
        tr,
        &format!("{} ({sym})", tr.t(keys::PROMPT_MAX_SPEED)),
        v_max_rec,
    )?;
    let default_step = convert_speed(1.0, SpeedUnit::Knot, unit);
    let step = read_f64_default(
        tr,
        &format!("{} ({sym})", tr.t(keys::PROMPT_SPEED_STEP)),
        default_step,
    )?;

    println!("{}", tr.t(keys::METHOD_TIP_HOLTROP));
    println!("{}", tr.t(keys::METHOD_TIP_SIMPLE));
    let method = match read_line(tr.t(keys::PROMPT_METHOD))?.trim() {
        "2" => CalculationMethod::Simplified,
        _ => CalculationMethod::HoltropMennen,
    };

    let range = SpeedRange {
        start_m_s: convert_speed(min_speed, unit, SpeedUnit::MeterPerSecond),
        end_m_s: convert_speed(max_speed, unit, SpeedUnit::MeterPerSecond),
        step_m_s: convert_speed(step, unit, SpeedUnit::MeterPerSecond),
    };
    let appendages = HullAppendages::default();
    let results = match resistance::compute_sweep(
        &dims,
        &geometry,
        &appendages,
        range,
        method,
        &cfg.constants,
    ) {
        Ok(results) => results,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    print_results(tr, method, &results);
    print_statistics(tr, cfg, &results);

    let answer = read_line(tr.t(keys::PROMPT_EXPORT))?;
    if is_yes_or_default(answer.trim()) {
        let filename = export::default_filename();
        export::write_csv(&filename, &results)?;
        println!("{} {filename}", tr.t(keys::EXPORTED));
    }
    println!("{}", tr.t(keys::ANALYSIS_DONE));
    Ok(())
}

/// Menu de configurações: idioma e unidade de velocidade. Devolve `true`
/// quando alguma configuração foi de fato alterada.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let mut changed = match apply_language_selection(sel.trim(), cfg) {
        Some(changed) => changed,
        None => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            false
        }
    };

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_SPEED_UNIT),
        cfg.speed_unit.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_SPEED_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match apply_speed_unit_selection(sel.trim(), cfg) {
        Some(c) => changed |= c,
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    if changed {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    }
    Ok(changed)
}

/// Aplica a seleção de idioma. `None` para entrada não reconhecida;
/// `Some(true)` somente quando o valor mudou.
pub fn apply_language_selection(sel: &str, cfg: &mut Config) -> Option<bool> {
    let lang = match sel {
        "" => return Some(false),
        "1" => "pt-br",
        "2" => "en-us",
        "3" => "auto",
        _ => return None,
    };
    let changed = cfg.language != lang;
    cfg.language = lang.to_string();
    Some(changed)
}

/// Aplica a seleção da unidade de velocidade, com a mesma convenção de
/// retorno da seleção de idioma.
pub fn apply_speed_unit_selection(sel: &str, cfg: &mut Config) -> Option<bool> {
    let unit = match sel {
        "" => return Some(false),
        "1" => SpeedUnit::Knot,
        "2" => SpeedUnit::MeterPerSecond,
        _ => return None,
    };
    let changed = cfg.speed_unit != unit;
    cfg.speed_unit = unit;
    Some(changed)
}

fn print_hull_summary(tr: &Translator, dims: &HullPrincipalDimensions, geo: &HullDerivedGeometry) {
    println!("{}", tr.t(keys::SUMMARY_HEADING));
    println!("{} {:.2} m", tr.t(keys::SUMMARY_LENGTH), dims.lwl_m);
    println!("{} {:.2} m", tr.t(keys::SUMMARY_BEAM), dims.beam_m);
    println!("{} {:.2} m", tr.t(keys::SUMMARY_DRAFT), dims.draft_m);
    println!("{} {:.3}", tr.t(keys::SUMMARY_CB), dims.cb);
    println!("{} {:.3}", tr.t(keys::SUMMARY_CM), geo.cm);
    println!("{} {:.2}% L", tr.t(keys::SUMMARY_LCB), geo.lcb_percent);
    println!(
        "{} {:.0} m³",
        tr.t(keys::SUMMARY_DISPLACEMENT),
        geo.displacement_m3
    );
    println!(
        "{} {:.0} m²",
        tr.t(keys::SUMMARY_WETTED),
        geo.wetted_surface_m2
    );
    println!(
        "{} {:.1} m²",
        tr.t(keys::SUMMARY_APPENDAGE),
        geo.appendage_area_m2
    );
}

/// Sugere a faixa de velocidades com base no tipo de casco e devolve
/// (mínima, máxima) na unidade configurada.
fn recommend_speed_range(
    tr: &Translator,
    dims: &HullPrincipalDimensions,
    cfg: &Config,
) -> (f64, f64) {
    // Fn máximo recomendado: cascos finos toleram Froude mais alto.
    let fn_max = if dims.cb < 0.5 { 0.45 } else { 0.35 };
    let v_max_mps = fn_max * (cfg.constants.gravity_m_s2 * dims.lwl_m).sqrt();
    let v_max = convert_speed(v_max_mps, SpeedUnit::MeterPerSecond, cfg.speed_unit);
    let v_min = convert_speed(2.0, SpeedUnit::Knot, cfg.speed_unit);

    let sym = cfg.speed_unit.symbol();
    println!("{}", tr.t(keys::RECOMMEND_TITLE));
    println!("{} {:.1} {sym}", tr.t(keys::RECOMMEND_MAX_SPEED), v_max);
    println!("{} {:.1} {sym}", tr.t(keys::RECOMMEND_MIN_SPEED), v_min);
    println!("{} {:.2}", tr.t(keys::RECOMMEND_MAX_FROUDE), fn_max);
    (v_min, v_max)
}

/// Linhas exibidas da tabela; o CSV carrega a varredura completa.
const TABLE_MAX_ROWS: usize = 10;

fn print_results(tr: &Translator, method: CalculationMethod, results: &[ResistanceResult]) {
    println!("{}", tr.t(keys::RESULTS_HEADING));
    let method_name = match method {
        CalculationMethod::HoltropMennen => tr.t(keys::METHOD_HOLTROP),
        CalculationMethod::Simplified => tr.t(keys::METHOD_SIMPLE),
    };
    println!("{} {method_name}", tr.t(keys::RESULTS_METHOD));
    println!("{}", tr.t(keys::TABLE_HEADER));

    for r in results.iter().take(TABLE_MAX_ROWS) {
        let friction = match r.friction_kn {
            Some(f) => format!("{f:>13.1}"),
            None => format!("{:>13}", "-"),
        };
        let marker = if r.flags.is_empty() { "" } else { " *" };
        println!(
            "{:>12.1} {:>12.2} {:>8.3} {friction} {:>14.1} {:>11.1} {:>13.1}{marker}",
            r.speed_knots, r.speed_m_s, r.froude, r.residual_kn, r.total_kn, r.effective_power_kw
        );
    }
    if results.len() > TABLE_MAX_ROWS {
        println!("{}", tr.t(keys::TABLE_TRUNCATED));
    }

    let mut seen: Vec<ApplicabilityFlag> = Vec::new();
    for r in results {
        for f in &r.flags {
            if !seen.contains(f) {
                seen.push(*f);
            }
        }
    }
    if !seen.is_empty() {
        println!("{}", tr.t(keys::FLAG_NOTE));
        for f in seen {
            let key = match f {
                ApplicabilityFlag::FroudeOutOfRange => keys::FLAG_FROUDE,
                ApplicabilityFlag::BlockCoefficientOutOfRange => keys::FLAG_CB,
                ApplicabilityFlag::LengthBeamRatioOutOfRange => keys::FLAG_LB,
                ApplicabilityFlag::DegenerateReynolds => keys::FLAG_REYNOLDS,
            };
            println!("    - {}", tr.t(key));
        }
    }
}

fn print_statistics(tr: &Translator, cfg: &Config, results: &[ResistanceResult]) {
    let Some(worst) = results
        .iter()
        .max_by(|a, b| a.total_kn.total_cmp(&b.total_kn))
    else {
        return;
    };
    let max_power = results
        .iter()
        .map(|r| r.effective_power_kw)
        .fold(f64::NEG_INFINITY, f64::max);
    let fn_min = results.iter().map(|r| r.froude).fold(f64::INFINITY, f64::min);
    let fn_max = results
        .iter()
        .map(|r| r.froude)
        .fold(f64::NEG_INFINITY, f64::max);

    let speed = convert_speed(worst.speed_m_s, SpeedUnit::MeterPerSecond, cfg.speed_unit);
    println!("{}", tr.t(keys::STATS_TITLE));
    println!(
        "{} {:.1} kN {} {:.1} {}",
        tr.t(keys::STATS_MAX_RESISTANCE),
        worst.total_kn,
        tr.t(keys::STATS_AT),
        speed,
        cfg.speed_unit.symbol()
    );
    println!("{} {max_power:.1} kW", tr.t(keys::STATS_MAX_POWER));
    println!(
        "{} {fn_min:.3} - {fn_max:.3}",
        tr.t(keys::STATS_FROUDE_RANGE)
    );
}

fn is_yes_or_default(answer: &str) -> bool {
    let a = answer.to_lowercase();
    a.is_empty() || matches!(a.as_str(), "s" | "sim" | "y" | "yes")
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
