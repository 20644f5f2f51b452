//! Regressão de Holtrop & Mennen, "An Approximate Power Prediction Method"
//! (International Shipbuilding Progress, 1984). Todos os coeficientes vêm do
//! artigo; qualquer desvio está anotado no ponto em que ocorre.

use crate::hull::{HullDerivedGeometry, HullPrincipalDimensions};
use crate::resistance::{ApplicabilityFlag, HullAppendages, PhysicalConstants};

/// Faixa nominal de validade da regressão.
const FROUDE_MIN: f64 = 0.15;
const FROUDE_MAX: f64 = 0.45;
const CB_MIN: f64 = 0.55;
const CB_MAX: f64 = 0.85;
const LB_MIN: f64 = 3.9;
const LB_MAX: f64 = 14.0;

/// Fator equivalente (1+k2) para apêndices carenados.
const APPENDAGE_FORM_FACTOR: f64 = 1.5;

/// Avisos de aplicabilidade para um ponto da varredura. Violações não
/// interrompem o cálculo: o resultado sai marcado como extrapolado.
pub fn applicability_flags(dims: &HullPrincipalDimensions, froude: f64) -> Vec<ApplicabilityFlag> {
    let mut flags = Vec::new();
    if froude <= FROUDE_MIN || froude >= FROUDE_MAX {
        flags.push(ApplicabilityFlag::FroudeOutOfRange);
    }
    if dims.cb < CB_MIN || dims.cb > CB_MAX {
        flags.push(ApplicabilityFlag::BlockCoefficientOutOfRange);
    }
    let lb = dims.length_beam_ratio();
    if !(LB_MIN..=LB_MAX).contains(&lb) {
        flags.push(ApplicabilityFlag::LengthBeamRatioOutOfRange);
    }
    flags
}

/// Comprimento da seção de saída L_R [m].
fn run_length(dims: &HullPrincipalDimensions, geometry: &HullDerivedGeometry) -> f64 {
    let cp = geometry.prismatic(dims);
    let lcb = geometry.lcb_percent;
    let lr = dims.lwl_m * (1.0 - cp + 0.06 * cp * lcb / (4.0 * cp - 1.0));
    // Fora da janela de CP a fórmula pode ficar ≤ 0; piso em 5% de L.
    lr.clamp(0.05 * dims.lwl_m, dims.lwl_m)
}

/// Fator de forma (1+k1) do casco nu.
pub fn form_factor(dims: &HullPrincipalDimensions, geometry: &HullDerivedGeometry) -> f64 {
    let l = dims.lwl_m;
    let cp = geometry.prismatic(dims);
    let lr = run_length(dims, geometry);
    // c14 cobre a forma da popa; Cstern = 0 para seções normais.
    let c14 = 1.0;
    0.93 + 0.487118
        * c14
        * (dims.beam_m / l).powf(1.06806)
        * (dims.draft_m / l).powf(0.46106)
        * (l / lr).powf(0.121563)
        * (l.powi(3) / geometry.displacement_m3).powf(0.36486)
        * (1.0 - cp).powf(-0.604247)
}

/// Meio-ângulo de entrada da linha d'água i_E [graus].
fn half_angle_of_entrance(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    lr: f64,
) -> f64 {
    let l = dims.lwl_m;
    let cp = geometry.prismatic(dims);
    let lcb = geometry.lcb_percent;
    // A base 1 − CP − 0.0225·lcb fica negativa para CP > 0.91; piso pequeno
    // mantém i_E definido em toda a faixa de CB.
    let exponent = -(l / dims.beam_m).powf(0.80856)
        * (1.0 - geometry.cwp).powf(0.30484)
        * (1.0 - cp - 0.0225 * lcb).max(0.01).powf(0.6367)
        * (lr / dims.beam_m).powf(0.34574)
        * (100.0 * geometry.displacement_m3 / l.powi(3)).powf(0.16302);
    1.0 + 89.0 * exponent.exp()
}

/// Resistência de onda R_W [N].
///
/// O termo cos(λ·Fn⁻²) do artigo é oscilatório: para cascos muito cheios
/// (CB próximo de 0.85) o RT total apresenta um vale local raso mesmo
/// dentro da janela nominal de Froude. Os coeficientes publicados são
/// mantidos; o crescimento de RT com a velocidade é estrito apenas para
/// formas moderadas.
fn wave_resistance(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    appendages: &HullAppendages,
    froude: f64,
    k: &PhysicalConstants,
) -> f64 {
    let l = dims.lwl_m;
    let b = dims.beam_m;
    let t = dims.draft_m;
    let cp = geometry.prismatic(dims);
    let lr = run_length(dims, geometry);

    let b_over_l = b / l;
    let c7 = if b_over_l < 0.11 {
        0.229577 * b_over_l.powf(0.33333)
    } else if b_over_l <= 0.25 {
        b_over_l
    } else {
        0.5 - 0.0625 * l / b
    };

    let i_e = half_angle_of_entrance(dims, geometry, lr);
    let c1 = 2223105.0 * c7.powf(3.78613) * (t / b).powf(1.07961) * (90.0 - i_e).powf(-1.37565);

    // c3/c2: redução pela presença do bulbo; sem bulbo, c3 = 0 e c2 = 1.
    let c3 = bulb_coefficient(dims, appendages);
    let c2 = (-1.89 * c3.sqrt()).exp();

    // c5: influência do espelho de popa imerso; sem espelho, c5 = 1.
    let c5 = 1.0 - 0.8 * appendages.transom_area_m2 / (b * t * geometry.cm);

    let lambda = if l / b < 12.0 {
        1.446 * cp - 0.03 * l / b
    } else {
        1.446 * cp - 0.36
    };

    let c16 = if cp < 0.8 {
        8.07981 * cp - 13.8673 * cp.powi(2) + 6.984388 * cp.powi(3)
    } else {
        1.73014 - 0.7067 * cp
    };

    let m1 = 0.0140407 * l / t
        - 1.75254 * geometry.displacement_m3.cbrt() / l
        - 4.79323 * b / l
        - c16;

    let l3_over_vol = l.powi(3) / geometry.displacement_m3;
    let c15 = if l3_over_vol < 512.0 {
        -1.69385
    } else if l3_over_vol < 1726.91 {
        -1.69385 + (l / geometry.displacement_m3.cbrt() - 8.0) / 2.36
    } else {
        0.0
    };
    let m2 = c15 * cp.powi(2) * (-0.1 * froude.powi(-2)).exp();

    let d = -0.9;
    c1 * c2
        * c5
        * geometry.displacement_m3
        * k.water_density_kg_m3
        * k.gravity_m_s2
        * (m1 * froude.powf(d) + m2 * (lambda * froude.powi(-2)).cos()).exp()
}

/// Coeficiente c3 do bulbo. Zero quando não há bulbo.
fn bulb_coefficient(dims: &HullPrincipalDimensions, appendages: &HullAppendages) -> f64 {
    let abt = appendages.bulb_area_m2;
    if abt <= 0.0 {
        return 0.0;
    }
    let tf = dims.draft_m;
    0.56 * abt.powf(1.5)
        / (dims.beam_m * dims.draft_m * (0.31 * abt.sqrt() + tf - appendages.bulb_center_height_m))
}

/// Resistência adicional do bulbo próximo à superfície R_B [N].
fn bulb_resistance(
    dims: &HullPrincipalDimensions,
    appendages: &HullAppendages,
    speed_m_s: f64,
    k: &PhysicalConstants,
) -> f64 {
    let abt = appendages.bulb_area_m2;
    if abt <= 0.0 {
        return 0.0;
    }
    let tf = dims.draft_m;
    let hb = appendages.bulb_center_height_m;
    // P_B mede a emersão do bulbo; Fn_i é o Froude de imersão.
    let pb = 0.56 * abt.sqrt() / (tf - 1.5 * hb);
    let fni = speed_m_s
        / (k.gravity_m_s2 * (tf - hb - 0.25 * abt.sqrt()) + 0.15 * speed_m_s * speed_m_s).sqrt();
    0.11 * (-3.0 * pb.powi(-2)).exp() * fni.powi(3) * abt.powf(1.5) * k.water_density_kg_m3
        * k.gravity_m_s2
        / (1.0 + fni.powi(2))
}

/// Resistência do espelho de popa imerso R_TR [N].
fn transom_resistance(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    appendages: &HullAppendages,
    speed_m_s: f64,
    k: &PhysicalConstants,
) -> f64 {
    let at = appendages.transom_area_m2;
    if at <= 0.0 {
        return 0.0;
    }
    let fnt = speed_m_s
        / (2.0 * k.gravity_m_s2 * at / (dims.beam_m + dims.beam_m * geometry.cwp)).sqrt();
    let c6 = if fnt < 5.0 { 0.2 * (1.0 - 0.2 * fnt) } else { 0.0 };
    0.5 * k.water_density_kg_m3 * speed_m_s * speed_m_s * at * c6
}

/// Correlação modelo-navio C_A e resistência associada R_A [N]. Cobre
/// rugosidade do casco e ar parado, conforme a prática ITTC adotada no
/// artigo.
fn correlation_resistance(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    speed_m_s: f64,
    k: &PhysicalConstants,
) -> f64 {
    let ca = 0.006 * (dims.lwl_m + 100.0).powf(-0.16) - 0.00205;
    0.5 * k.water_density_kg_m3 * speed_m_s * speed_m_s * geometry.wetted_surface_m2 * ca
}

/// Resistência de apêndices R_APP [N], proporcional ao CF do ponto.
fn appendage_resistance(
    geometry: &HullDerivedGeometry,
    speed_m_s: f64,
    cf: Option<f64>,
    k: &PhysicalConstants,
) -> f64 {
    match cf {
        Some(cf) => {
            0.5 * k.water_density_kg_m3
                * speed_m_s
                * speed_m_s
                * geometry.appendage_area_m2
                * APPENDAGE_FORM_FACTOR
                * cf
        }
        None => 0.0,
    }
}

/// Soma dos termos não friccionais do método: onda, bulbo, espelho,
/// apêndices e correlação [N].
pub fn residual(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    appendages: &HullAppendages,
    speed_m_s: f64,
    froude: f64,
    cf: Option<f64>,
    k: &PhysicalConstants,
) -> f64 {
    wave_resistance(dims, geometry, appendages, froude, k)
        + bulb_resistance(dims, appendages, speed_m_s, k)
        + transom_resistance(dims, geometry, appendages, speed_m_s, k)
        + appendage_resistance(geometry, speed_m_s, cf, k)
        + correlation_resistance(dims, geometry, speed_m_s, k)
}
