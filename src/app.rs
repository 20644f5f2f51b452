use crate::config::Config;
use crate::export;
use crate::hull;
use crate::i18n::{self, Translator};
use crate::resistance;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// Erros possíveis durante a execução da aplicação.
#[derive(Debug)]
pub enum AppError {
    /// Erro de entrada/saída.
    Io(std::io::Error),
    /// Erro ao carregar/salvar a configuração.
    Config(crate::config::ConfigError),
    /// Dimensões do casco inválidas.
    Geometry(hull::GeometryError),
    /// Erro do motor de resistência.
    Resistance(resistance::ResistanceError),
    /// Erro na exportação de resultados.
    Export(export::ExportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            AppError::Config(e) => write!(f, "erro de configuração: {e}"),
            AppError::Geometry(e) => write!(f, "erro de geometria: {e}"),
            AppError::Resistance(e) => write!(f, "erro de cálculo: {e}"),
            AppError::Export(e) => write!(f, "erro de exportação: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<hull::GeometryError> for AppError {
    fn from(value: hull::GeometryError) -> Self {
        AppError::Geometry(value)
    }
}

impl From<resistance::ResistanceError> for AppError {
    fn from(value: resistance::ResistanceError) -> Self {
        AppError::Resistance(value)
    }
}

impl From<export::ExportError> for AppError {
    fn from(value: export::ExportError) -> Self {
        AppError::Export(value)
    }
}

/// Executa o laço principal da aplicação CLI.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Analysis => ui_cli::handle_analysis(tr, config)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save()?;
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
