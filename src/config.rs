use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::resistance::PhysicalConstants;
use crate::units::SpeedUnit;

/// Configuração da aplicação, persistida em config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Idioma da interface: "auto", "pt-br" ou "en-us".
    pub language: String,
    /// Unidade padrão para entrada de velocidades.
    pub speed_unit: SpeedUnit,
    /// Constantes físicas; os padrões valem para água do mar a 15 °C.
    pub constants: PhysicalConstants,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            speed_unit: SpeedUnit::Knot,
            constants: PhysicalConstants::default(),
        }
    }
}

/// Erros possíveis ao carregar/salvar a configuração.
#[derive(Debug)]
pub enum ConfigError {
    /// Erro de entrada/saída de arquivo.
    Io(std::io::Error),
    /// Erro ao interpretar o TOML.
    Serde(toml::de::Error),
    /// Erro ao serializar o TOML.
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            ConfigError::Serde(e) => write!(f, "erro ao ler a configuração: {e}"),
            ConfigError::Serialize(e) => write!(f, "erro ao gravar a configuração: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Carrega config.toml ou, na primeira execução, grava e devolve o padrão.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Grava a configuração em config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
