//! Método simplificado: regressão grosseira do termo residual em função de
//! CB, deslocamento e velocidade, para estimativas iniciais rápidas.

use crate::hull::{HullDerivedGeometry, HullPrincipalDimensions};
use crate::resistance::PhysicalConstants;

/// Resistência residual aproximada [N].
///
/// R_R = ∇·ρ·g·c3·c12^0.004·c13·exp(−0.9/Fn), com
/// c3 = 0.56·(B·T)^1.5 / (∇·(0.31·√(B·T) + T)), c12 = L³/∇ e
/// c13 = 1 + 0.003·LCB. A calculadora de origem multiplicava ainda um fator
/// de bulbo c2 derivado de um c1 incorreto, que subfluía a zero; sem bulbo o
/// fator vale 1 e é omitido aqui.
pub fn residual(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    froude: f64,
    k: &PhysicalConstants,
) -> f64 {
    let bt = dims.beam_m * dims.draft_m;
    let vol = geometry.displacement_m3;
    let c3 = 0.56 * bt.powf(1.5) / (vol * (0.31 * bt.sqrt() + dims.draft_m));
    let c12 = dims.lwl_m.powi(3) / vol;
    let c13 = 1.0 + 0.003 * geometry.lcb_percent;

    vol * k.water_density_kg_m3
        * k.gravity_m_s2
        * c3
        * c12.powf(0.004)
        * c13
        * (-0.9 / froude).exp()
}
