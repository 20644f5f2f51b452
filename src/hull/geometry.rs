use std::f64::consts::PI;

/// Erro de validação das dimensões principais.
#[derive(Debug)]
pub enum GeometryError {
    /// Alguma dimensão não é física (≤ 0 ou CB fora de (0,1)).
    InvalidInput(&'static str),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidInput(msg) => write!(f, "entrada inválida: {msg}"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Dimensões principais do casco, imutáveis após a validação.
#[derive(Debug, Clone, Copy)]
pub struct HullPrincipalDimensions {
    /// Comprimento na linha d'água [m].
    pub lwl_m: f64,
    /// Boca [m].
    pub beam_m: f64,
    /// Calado [m].
    pub draft_m: f64,
    /// Coeficiente de bloco.
    pub cb: f64,
}

impl HullPrincipalDimensions {
    /// Valida e constrói as dimensões principais.
    pub fn new(lwl_m: f64, beam_m: f64, draft_m: f64, cb: f64) -> Result<Self, GeometryError> {
        if !lwl_m.is_finite() || lwl_m <= 0.0 {
            return Err(GeometryError::InvalidInput(
                "o comprimento deve ser positivo",
            ));
        }
        if !beam_m.is_finite() || beam_m <= 0.0 {
            return Err(GeometryError::InvalidInput("a boca deve ser positiva"));
        }
        if !draft_m.is_finite() || draft_m <= 0.0 {
            return Err(GeometryError::InvalidInput("o calado deve ser positivo"));
        }
        if !cb.is_finite() || cb <= 0.0 || cb >= 1.0 {
            return Err(GeometryError::InvalidInput(
                "o coeficiente de bloco deve estar entre 0 e 1",
            ));
        }
        Ok(Self {
            lwl_m,
            beam_m,
            draft_m,
            cb,
        })
    }

    /// Razão comprimento/boca.
    pub fn length_beam_ratio(&self) -> f64 {
        self.lwl_m / self.beam_m
    }

    /// Razão boca/calado.
    pub fn beam_draft_ratio(&self) -> f64 {
        self.beam_m / self.draft_m
    }
}

/// Parâmetros secundários derivados das dimensões principais.
///
/// Calculados uma única vez por análise e reutilizados em toda a varredura
/// de velocidades.
#[derive(Debug, Clone, Copy)]
pub struct HullDerivedGeometry {
    /// Volume de deslocamento ∇ [m³].
    pub displacement_m3: f64,
    /// Área molhada S [m²].
    pub wetted_surface_m2: f64,
    /// Coeficiente de seção mestra CM.
    pub cm: f64,
    /// Coeficiente de linha d'água CWP.
    pub cwp: f64,
    /// Centro de carena longitudinal [% L, positivo a vante da seção mestra].
    pub lcb_percent: f64,
    /// Área de apêndices [m²] (estimativa pelo disco do hélice).
    pub appendage_area_m2: f64,
}

impl HullDerivedGeometry {
    /// Coeficiente prismático CP = CB / CM.
    pub fn prismatic(&self, dims: &HullPrincipalDimensions) -> f64 {
        dims.cb / self.cm
    }
}

/// Deriva a geometria secundária a partir das dimensões principais.
///
/// Função pura e total para dimensões positivas: nunca falha, mesmo fora da
/// faixa de aplicabilidade dos métodos de resistência.
pub fn derive_geometry(dims: &HullPrincipalDimensions) -> HullDerivedGeometry {
    let l = dims.lwl_m;
    let b = dims.beam_m;
    let t = dims.draft_m;
    let cb = dims.cb;

    // ∇ = L · B · T · CB, identidade algébrica.
    let displacement_m3 = l * b * t * cb;

    // Coeficiente de seção mestra pela regressão de Kerlen (1970). Para
    // cascos muito finos a regressão colapsa (fica negativa abaixo de
    // CB ≈ 0.23); abaixo de CB 0.40 vale a forma de Jensen, total em (0, 1)
    // e sempre maior que CB.
    let cm = if cb >= 0.40 {
        1.006 - 0.0056 * cb.powf(-3.56)
    } else {
        1.0 / (1.0 + (1.0 - cb).powf(3.5))
    };

    // Coeficiente de linha d'água, aproximação usual em função de CB.
    let cwp = (1.0 + 2.0 * cb) / 3.0;

    // Área molhada pela fórmula de Holtrop & Mennen (1984), sem bulbo
    // (A_BT = 0). O script de origem usava uma variante corrompida desta
    // regressão; aqui valem os coeficientes publicados.
    let wetted_surface_m2 = l
        * (2.0 * t + b)
        * cm.sqrt()
        * (0.453 + 0.4425 * cb - 0.2862 * cm - 0.003467 * b / t + 0.3696 * cwp);

    // LCB recomendado em função de CP (Parsons), em % de L a vante da
    // seção mestra.
    let cp = cb / cm;
    let lcb_percent = -13.5 + 19.4 * cp;

    // Área de apêndices estimada pelo disco do hélice, D ≈ 0.7 T.
    let appendage_area_m2 = 0.5 * PI * (0.7 * t).powi(2);

    HullDerivedGeometry {
        displacement_m3,
        wetted_surface_m2,
        cm,
        cwp,
        lcb_percent,
        appendage_area_m2,
    }
}
