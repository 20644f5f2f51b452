use serde::{Deserialize, Serialize};

/// Unidade de velocidade. A base interna é m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    MeterPerSecond,
    Knot,
}

/// 1 nó = 1852 m / 3600 s.
pub const M_PER_S_PER_KNOT: f64 = 0.514444;

fn to_mps(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MeterPerSecond => value,
        SpeedUnit::Knot => value * M_PER_S_PER_KNOT,
    }
}

fn from_mps(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MeterPerSecond => value,
        SpeedUnit::Knot => value / M_PER_S_PER_KNOT,
    }
}

/// Converte uma velocidade entre unidades.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}

impl SpeedUnit {
    /// Símbolo para exibição.
    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::MeterPerSecond => "m/s",
            SpeedUnit::Knot => "kn",
        }
    }
}
