//! Exportação da varredura para CSV, uma linha por ponto de velocidade.

use std::path::Path;

use chrono::Local;

use crate::resistance::ResistanceResult;

/// Erro de exportação.
#[derive(Debug)]
pub enum ExportError {
    /// Erro de entrada/saída de arquivo.
    Io(std::io::Error),
    /// Erro do escritor CSV.
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            ExportError::Csv(e) => write!(f, "erro ao gravar o CSV: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        ExportError::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        ExportError::Csv(value)
    }
}

/// Nome de arquivo padrão com carimbo de data/hora.
pub fn default_filename() -> String {
    format!(
        "resistance_results_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => String::new(),
    }
}

fn fmt_opt_exp(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4e}"),
        None => String::new(),
    }
}

/// Grava a sequência de resultados em CSV. Termos indefinidos (Re ≤ 1)
/// viram campos vazios; os avisos vão na última coluna como códigos
/// separados por ponto e vírgula.
pub fn write_csv<P: AsRef<Path>>(path: P, results: &[ResistanceResult]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "speed_knots",
        "speed_mps",
        "froude",
        "reynolds",
        "cf_coefficient",
        "resistance_friction_kN",
        "resistance_residual_kN",
        "resistance_total_kN",
        "effective_power_kW",
        "flags",
    ])?;
    for r in results {
        let flags = r
            .flags
            .iter()
            .map(|f| f.code())
            .collect::<Vec<_>>()
            .join(";");
        writer.write_record([
            format!("{:.4}", r.speed_knots),
            format!("{:.4}", r.speed_m_s),
            format!("{:.4}", r.froude),
            format!("{:.4e}", r.reynolds),
            fmt_opt_exp(r.cf),
            fmt_opt(r.friction_kn),
            format!("{:.4}", r.residual_kn),
            format!("{:.4}", r.total_kn),
            format!("{:.4}", r.effective_power_kw),
            flags,
        ])?;
    }
    writer.flush()?;
    Ok(())
}
