use hull_resistance_calculator::config::Config;
use hull_resistance_calculator::export;
use hull_resistance_calculator::hull::{derive_geometry, HullPrincipalDimensions};
use hull_resistance_calculator::i18n::{keys, resolve_language, Translator};
use hull_resistance_calculator::resistance::{
    compute_sweep, CalculationMethod, HullAppendages, PhysicalConstants, SpeedRange,
};
use hull_resistance_calculator::units::{convert_speed, SpeedUnit};

fn knots(v: f64) -> f64 {
    convert_speed(v, SpeedUnit::Knot, SpeedUnit::MeterPerSecond)
}

fn sweep_5_to_25() -> Vec<hull_resistance_calculator::resistance::ResistanceResult> {
    let dims = HullPrincipalDimensions::new(120.0, 18.0, 7.5, 0.72).expect("dimensões válidas");
    let geo = derive_geometry(&dims);
    let range = SpeedRange {
        start_m_s: knots(5.0),
        end_m_s: knots(25.0),
        step_m_s: knots(5.0),
    };
    compute_sweep(
        &dims,
        &geo,
        &HullAppendages::default(),
        range,
        CalculationMethod::HoltropMennen,
        &PhysicalConstants::default(),
    )
    .expect("varredura válida")
}

#[test]
fn sweep_5_to_25_knots_step_5_yields_five_ascending_points() {
    let results = sweep_5_to_25();
    assert_eq!(results.len(), 5);
    for pair in results.windows(2) {
        assert!(pair[1].speed_m_s > pair[0].speed_m_s);
    }
    assert!((results[0].speed_knots - 5.0).abs() < 1e-9);
    assert!((results[4].speed_knots - 25.0).abs() < 1e-9);
}

#[test]
fn sweep_rejects_invalid_ranges() {
    let dims = HullPrincipalDimensions::new(120.0, 18.0, 7.5, 0.72).expect("dimensões válidas");
    let geo = derive_geometry(&dims);
    let k = PhysicalConstants::default();
    let bad_ranges = [
        SpeedRange {
            start_m_s: 0.0,
            end_m_s: 10.0,
            step_m_s: 1.0,
        },
        SpeedRange {
            start_m_s: 5.0,
            end_m_s: 10.0,
            step_m_s: 0.0,
        },
        SpeedRange {
            start_m_s: 10.0,
            end_m_s: 5.0,
            step_m_s: 1.0,
        },
    ];
    for range in bad_ranges {
        assert!(compute_sweep(
            &dims,
            &geo,
            &HullAppendages::default(),
            range,
            CalculationMethod::HoltropMennen,
            &k,
        )
        .is_err());
    }
}

#[test]
fn csv_export_writes_one_row_per_point() {
    let results = sweep_5_to_25();
    let dir = tempfile::tempdir().expect("diretório temporário");
    let path = dir.path().join("results.csv");
    export::write_csv(&path, &results).expect("exportação válida");

    let content = std::fs::read_to_string(&path).expect("arquivo gravado");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + results.len());
    assert!(lines[0].starts_with("speed_knots,speed_mps,froude"));
    // 5 nós fica abaixo de Fn 0.15 neste casco: coluna de avisos preenchida.
    assert!(lines[1].ends_with("Fn"));
    // 15 nós está dentro da janela: sem avisos.
    assert!(lines[3].ends_with(","));
}

#[test]
fn default_filename_is_timestamped() {
    let name = export::default_filename();
    assert!(name.starts_with("resistance_results_"));
    assert!(name.ends_with(".csv"));
}

#[test]
fn speed_conversion_round_trip() {
    assert!((convert_speed(1.0, SpeedUnit::Knot, SpeedUnit::MeterPerSecond) - 0.514444).abs() < 1e-9);
    let v = convert_speed(15.0, SpeedUnit::Knot, SpeedUnit::MeterPerSecond);
    let back = convert_speed(v, SpeedUnit::MeterPerSecond, SpeedUnit::Knot);
    assert!((back - 15.0).abs() < 1e-12);
}

#[test]
fn config_defaults_are_seawater_at_15c() {
    let cfg = Config::default();
    assert_eq!(cfg.constants.water_density_kg_m3, 1025.0);
    assert_eq!(cfg.constants.gravity_m_s2, 9.81);
    assert_eq!(cfg.constants.kinematic_viscosity_m2_s, 1.1892e-6);
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.speed_unit, SpeedUnit::Knot);
}

#[test]
fn settings_selection_reports_change_only_when_modified() {
    use hull_resistance_calculator::ui_cli::{apply_language_selection, apply_speed_unit_selection};

    let mut cfg = Config::default();
    // Entrada vazia e entrada inválida não alteram nada.
    assert_eq!(apply_language_selection("", &mut cfg), Some(false));
    assert_eq!(apply_language_selection("9", &mut cfg), None);
    assert_eq!(cfg.language, "auto");

    assert_eq!(apply_language_selection("1", &mut cfg), Some(true));
    assert_eq!(cfg.language, "pt-br");
    // Reaplicar o mesmo idioma não conta como alteração.
    assert_eq!(apply_language_selection("1", &mut cfg), Some(false));

    assert_eq!(apply_speed_unit_selection("1", &mut cfg), Some(false));
    assert_eq!(apply_speed_unit_selection("2", &mut cfg), Some(true));
    assert_eq!(cfg.speed_unit, SpeedUnit::MeterPerSecond);
}

#[test]
fn language_resolution_prefers_cli_then_config() {
    assert_eq!(resolve_language("pt", Some("en-us")), "pt");
    assert_eq!(resolve_language("auto", Some("pt-br")), "pt-br");
    assert_eq!(resolve_language("en-uk", Some("pt-br")), "en-us");
}

#[test]
fn translator_falls_back_to_portuguese() {
    let en = Translator::new("en-us");
    assert_eq!(en.t(keys::MAIN_MENU_EXIT), "0) Exit");
    let pt = Translator::new("pt-br");
    assert_eq!(pt.t(keys::MAIN_MENU_EXIT), "0) Sair");
}
