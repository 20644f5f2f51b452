//! Motor de resistência: fricção ITTC-1957 mais o termo residual do método
//! escolhido, ponto a ponto de velocidade.

pub mod constants;
pub mod holtrop;
pub mod simplified;

pub use constants::PhysicalConstants;

use crate::hull::{HullDerivedGeometry, HullPrincipalDimensions};
use crate::units::speed::M_PER_S_PER_KNOT;

/// Método de cálculo selecionado para a análise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMethod {
    /// Regressão completa de Holtrop & Mennen (1984).
    HoltropMennen,
    /// Aproximação grosseira baseada em CB e deslocamento.
    Simplified,
}

/// Apêndices opcionais do casco. O padrão é "nenhum": sem bulbo e sem
/// espelho de popa imerso.
#[derive(Debug, Clone, Copy, Default)]
pub struct HullAppendages {
    /// Área transversal do bulbo A_BT [m²].
    pub bulb_area_m2: f64,
    /// Altura do centro do bulbo acima da quilha h_B [m].
    pub bulb_center_height_m: f64,
    /// Área imersa do espelho de popa A_T [m²].
    pub transom_area_m2: f64,
}

/// Aviso de aplicabilidade anexado ao resultado, nunca um erro.
///
/// Filosofia do programa: sempre produzir um número e sinalizar quando ele
/// pode não ser confiável.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicabilityFlag {
    /// Fn fora de (0.15, 0.45) para Holtrop & Mennen.
    FroudeOutOfRange,
    /// CB fora de [0.55, 0.85] para Holtrop & Mennen.
    BlockCoefficientOutOfRange,
    /// L/B fora de [3.9, 14.0] para Holtrop & Mennen.
    LengthBeamRatioOutOfRange,
    /// Re ≤ 1: coeficiente de fricção indefinido.
    DegenerateReynolds,
}

impl ApplicabilityFlag {
    /// Código curto para exportação em CSV.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicabilityFlag::FroudeOutOfRange => "Fn",
            ApplicabilityFlag::BlockCoefficientOutOfRange => "CB",
            ApplicabilityFlag::LengthBeamRatioOutOfRange => "L/B",
            ApplicabilityFlag::DegenerateReynolds => "Re",
        }
    }
}

/// Resultado de resistência para um ponto de velocidade.
#[derive(Debug, Clone)]
pub struct ResistanceResult {
    pub speed_m_s: f64,
    pub speed_knots: f64,
    /// Número de Froude Fn = v / √(g·L).
    pub froude: f64,
    /// Número de Reynolds Re = v·L / ν.
    pub reynolds: f64,
    /// Coeficiente de fricção ITTC-1957; None quando Re ≤ 1.
    pub cf: Option<f64>,
    /// Resistência friccional [kN]; None quando Re ≤ 1.
    pub friction_kn: Option<f64>,
    /// Resistência residual [kN].
    pub residual_kn: f64,
    /// Resistência total [kN].
    pub total_kn: f64,
    /// Potência efetiva [kW].
    pub effective_power_kw: f64,
    pub flags: Vec<ApplicabilityFlag>,
}

/// Erro do motor de resistência.
#[derive(Debug)]
pub enum ResistanceError {
    /// Velocidade ou faixa de varredura não física.
    InvalidInput(&'static str),
}

impl std::fmt::Display for ResistanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResistanceError::InvalidInput(msg) => write!(f, "entrada inválida: {msg}"),
        }
    }
}

impl std::error::Error for ResistanceError {}

/// Faixa de varredura de velocidades, em m/s. O chamador normaliza as
/// unidades antes de chamar o núcleo.
#[derive(Debug, Clone, Copy)]
pub struct SpeedRange {
    pub start_m_s: f64,
    pub end_m_s: f64,
    pub step_m_s: f64,
}

impl SpeedRange {
    /// Pontos de velocidade em ordem crescente, incluindo o fim quando o
    /// passo cai exatamente sobre ele.
    pub fn points(&self) -> Vec<f64> {
        let n = ((self.end_m_s - self.start_m_s) / self.step_m_s + 1e-9).floor() as usize + 1;
        (0..n)
            .map(|i| self.start_m_s + i as f64 * self.step_m_s)
            .collect()
    }

    fn validate(&self) -> Result<(), ResistanceError> {
        if !self.start_m_s.is_finite() || self.start_m_s <= 0.0 {
            return Err(ResistanceError::InvalidInput(
                "a velocidade inicial deve ser positiva",
            ));
        }
        if !self.step_m_s.is_finite() || self.step_m_s <= 0.0 {
            return Err(ResistanceError::InvalidInput(
                "o passo de velocidade deve ser positivo",
            ));
        }
        if !self.end_m_s.is_finite() || self.end_m_s < self.start_m_s {
            return Err(ResistanceError::InvalidInput(
                "a velocidade final deve ser maior ou igual à inicial",
            ));
        }
        Ok(())
    }
}

/// Calcula a resistência em uma velocidade [m/s].
///
/// Função pura: entradas idênticas produzem resultados bit a bit idênticos.
pub fn compute_at_speed(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    appendages: &HullAppendages,
    speed_m_s: f64,
    method: CalculationMethod,
    k: &PhysicalConstants,
) -> Result<ResistanceResult, ResistanceError> {
    if !speed_m_s.is_finite() || speed_m_s <= 0.0 {
        return Err(ResistanceError::InvalidInput(
            "a velocidade deve ser positiva",
        ));
    }

    let froude = speed_m_s / (k.gravity_m_s2 * dims.lwl_m).sqrt();
    let reynolds = speed_m_s * dims.lwl_m / k.kinematic_viscosity_m2_s;

    let mut flags = Vec::new();

    // Linha ITTC-1957: CF = 0.075 / (log10 Re − 2)². Indefinida para Re ≤ 1;
    // nesse caso o termo friccional é reportado como indefinido em vez de
    // propagar NaN.
    let cf = if reynolds > 1.0 {
        Some(0.075 / (reynolds.log10() - 2.0).powi(2))
    } else {
        flags.push(ApplicabilityFlag::DegenerateReynolds);
        None
    };

    let half_rho_v2 = 0.5 * k.water_density_kg_m3 * speed_m_s * speed_m_s;

    let (friction_n, residual_n) = match method {
        CalculationMethod::HoltropMennen => {
            flags.extend(holtrop::applicability_flags(dims, froude));
            let form_factor = holtrop::form_factor(dims, geometry);
            let friction_n = cf.map(|cf| half_rho_v2 * geometry.wetted_surface_m2 * cf * form_factor);
            let residual_n =
                holtrop::residual(dims, geometry, appendages, speed_m_s, froude, cf, k);
            (friction_n, residual_n)
        }
        CalculationMethod::Simplified => {
            // Fator de forma fixo (1+k1) = 1.0: fricção de placa plana pura.
            let friction_n = cf.map(|cf| half_rho_v2 * geometry.wetted_surface_m2 * cf);
            let residual_n = simplified::residual(dims, geometry, froude, k);
            (friction_n, residual_n)
        }
    };

    let total_n = friction_n.unwrap_or(0.0) + residual_n;
    let total_kn = total_n / 1000.0;

    Ok(ResistanceResult {
        speed_m_s,
        speed_knots: speed_m_s / M_PER_S_PER_KNOT,
        froude,
        reynolds,
        cf,
        friction_kn: friction_n.map(|f| f / 1000.0),
        residual_kn: residual_n / 1000.0,
        total_kn,
        // kN · m/s = kW.
        effective_power_kw: total_kn * speed_m_s,
        flags,
    })
}

/// Varre a faixa de velocidades e devolve um resultado por ponto, em ordem
/// estritamente crescente de velocidade.
///
/// Cada ponto é independente dos demais: não há estado carregado entre as
/// avaliações.
pub fn compute_sweep(
    dims: &HullPrincipalDimensions,
    geometry: &HullDerivedGeometry,
    appendages: &HullAppendages,
    range: SpeedRange,
    method: CalculationMethod,
    k: &PhysicalConstants,
) -> Result<Vec<ResistanceResult>, ResistanceError> {
    range.validate()?;
    range
        .points()
        .into_iter()
        .map(|v| compute_at_speed(dims, geometry, appendages, v, method, k))
        .collect()
}
