use serde::{Deserialize, Serialize};

/// Constantes físicas usadas pelo motor de resistência.
///
/// São configuração, não estado: o chamador pode substituir densidade e
/// viscosidade para água doce ou outra temperatura. Os padrões valem para
/// água do mar a 15 °C.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Densidade da água [kg/m³].
    pub water_density_kg_m3: f64,
    /// Aceleração da gravidade [m/s²].
    pub gravity_m_s2: f64,
    /// Viscosidade cinemática [m²/s].
    pub kinematic_viscosity_m2_s: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            water_density_kg_m3: 1025.0,
            gravity_m_s2: 9.81,
            kinematic_viscosity_m2_s: 1.1892e-6,
        }
    }
}
