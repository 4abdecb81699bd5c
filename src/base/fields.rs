/// Number of state parameters reported by the user-defined soil model
pub const N_STATE_PARAMETER: usize = 33;

/// Number of result fields extracted for each step
pub const N_RESULT_FIELD: usize = 51;

/// Number of material parameters
pub const N_MATERIAL_FIELD: usize = 27;

/// Defines the kind of result requested from the host result service
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResultSource {
    /// User-defined state parameter (zero-based index)
    StateParameter(usize),
    DeviatoricStress,
    MeanEffStress,
    SigxxE,
    SigyyE,
    SigzzE,
    Sigxy,
    SigmaEffective1,
    SigmaEffective2,
    SigmaEffective3,
    Eps1,
    Eps2,
    Eps3,
    Epsxx,
    Epsyy,
    TotalVolumetricStrain,
    PGamxy,
    PhaseDeviatoricStrain,
}

impl ResultSource {
    /// Returns the key identifying this source in a result dump
    pub fn key(&self) -> String {
        match self {
            Self::StateParameter(i) => format!("StateParameter{}", i),
            other => format!("{:?}", other),
        }
    }
}

/// Defines the named scalar fields of a row of the result table
///
/// The discriminant is the column index within [crate::post::ResultRow].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResultField {
    Q,
    P,
    Sx,
    Sy,
    Sz,
    Sxy,
    Ea,
    EpsV,
    Gamxy,
    Gams,
    Eps1,
    Eps2,
    Eps3,
    EpsXx,
    EpsYy,
    S1,
    S2,
    S3,
    SuRatio,
    Su,
    RuMax,
    PMin,
    ZMax,
    Cs,
    M,
    Gamma,
    Pcs,
    Xi,
    E,
    MCurrent,
    K,
    G,
    AlphaStatic,
    Kc,
    K0,
    SigmaV0,
    Ru,
    RuExtreme,
    GammaMaxHalfExtreme,
    Bci,
    GammaHalfMax,
    Md,
    Mb,
    D,
    AlphaXx,
    AlphaYy,
    AlphaXy,
    RuLimit,
    Lpr,
    TxyRatio,
    TxyRatioExtreme,
}

impl ResultField {
    /// Holds all fields in column order
    pub const ALL: [ResultField; N_RESULT_FIELD] = [
        Self::Q,
        Self::P,
        Self::Sx,
        Self::Sy,
        Self::Sz,
        Self::Sxy,
        Self::Ea,
        Self::EpsV,
        Self::Gamxy,
        Self::Gams,
        Self::Eps1,
        Self::Eps2,
        Self::Eps3,
        Self::EpsXx,
        Self::EpsYy,
        Self::S1,
        Self::S2,
        Self::S3,
        Self::SuRatio,
        Self::Su,
        Self::RuMax,
        Self::PMin,
        Self::ZMax,
        Self::Cs,
        Self::M,
        Self::Gamma,
        Self::Pcs,
        Self::Xi,
        Self::E,
        Self::MCurrent,
        Self::K,
        Self::G,
        Self::AlphaStatic,
        Self::Kc,
        Self::K0,
        Self::SigmaV0,
        Self::Ru,
        Self::RuExtreme,
        Self::GammaMaxHalfExtreme,
        Self::Bci,
        Self::GammaHalfMax,
        Self::Md,
        Self::Mb,
        Self::D,
        Self::AlphaXx,
        Self::AlphaYy,
        Self::AlphaXy,
        Self::RuLimit,
        Self::Lpr,
        Self::TxyRatio,
        Self::TxyRatioExtreme,
    ];

    /// Returns the column index
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the column name used in reports and labels
    pub fn key(&self) -> &'static str {
        match self {
            Self::Q => "q",
            Self::P => "p",
            Self::Sx => "sx",
            Self::Sy => "sy",
            Self::Sz => "sz",
            Self::Sxy => "sxy",
            Self::Ea => "ea",
            Self::EpsV => "eps_v",
            Self::Gamxy => "gamxy",
            Self::Gams => "gams",
            Self::Eps1 => "eps_1",
            Self::Eps2 => "eps_2",
            Self::Eps3 => "eps_3",
            Self::EpsXx => "eps_xx",
            Self::EpsYy => "eps_yy",
            Self::S1 => "s1",
            Self::S2 => "s2",
            Self::S3 => "s3",
            Self::SuRatio => "suratio",
            Self::Su => "su",
            Self::RuMax => "rumax",
            Self::PMin => "pmin",
            Self::ZMax => "zmax",
            Self::Cs => "Cs",
            Self::M => "M",
            Self::Gamma => "Gamma",
            Self::Pcs => "pcs",
            Self::Xi => "xi",
            Self::E => "e",
            Self::MCurrent => "Mcurrent",
            Self::K => "K",
            Self::G => "G",
            Self::AlphaStatic => "alphastatic",
            Self::Kc => "Kc",
            Self::K0 => "K0",
            Self::SigmaV0 => "sigmav0",
            Self::Ru => "ru",
            Self::RuExtreme => "ruextreme",
            Self::GammaMaxHalfExtreme => "gmax/2extreme",
            Self::Bci => "BCI",
            Self::GammaHalfMax => "g/2max",
            Self::Md => "Md",
            Self::Mb => "Mb",
            Self::D => "D",
            Self::AlphaXx => "alphaxx",
            Self::AlphaYy => "alphayy",
            Self::AlphaXy => "alphaxy",
            Self::RuLimit => "rulimit",
            Self::Lpr => "lpr",
            Self::TxyRatio => "txyratio",
            Self::TxyRatioExtreme => "txyratioextreme",
        }
    }

    /// Returns the host result queried for this field
    pub fn source(&self) -> ResultSource {
        match self {
            Self::Q => ResultSource::DeviatoricStress,
            Self::P => ResultSource::MeanEffStress,
            Self::Sx => ResultSource::SigxxE,
            Self::Sy => ResultSource::SigyyE,
            Self::Sz => ResultSource::SigzzE,
            Self::Sxy => ResultSource::Sigxy,
            Self::Ea => ResultSource::Eps1,
            Self::EpsV => ResultSource::TotalVolumetricStrain,
            Self::Gamxy => ResultSource::PGamxy,
            Self::Gams => ResultSource::PhaseDeviatoricStrain,
            Self::Eps1 => ResultSource::Eps1,
            Self::Eps2 => ResultSource::Eps2,
            Self::Eps3 => ResultSource::Eps3,
            Self::EpsXx => ResultSource::Epsxx,
            Self::EpsYy => ResultSource::Epsyy,
            Self::S1 => ResultSource::SigmaEffective1,
            Self::S2 => ResultSource::SigmaEffective2,
            Self::S3 => ResultSource::SigmaEffective3,
            // the state parameters follow the column order
            state => ResultSource::StateParameter(state.index() - Self::SuRatio.index()),
        }
    }

    /// Returns the factor applied to the queried value
    ///
    /// Stresses and strains become compression-positive; `ea` and `eps_v` become percentages.
    pub fn scale(&self) -> f64 {
        match self {
            Self::Q => 1.0,
            Self::P | Self::Sx | Self::Sy | Self::Sz | Self::Sxy => -1.0,
            Self::S1 | Self::S2 | Self::S3 => -1.0,
            Self::Ea => -100.0,
            Self::EpsV => 100.0,
            Self::Gamxy | Self::Gams => -1.0,
            Self::Eps1 | Self::Eps2 | Self::Eps3 | Self::EpsXx | Self::EpsYy => -1.0,
            _ => 1.0,
        }
    }
}

/// Defines the named constants of the PM4Silt material
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MaterialField {
    SuRatio,
    Su,
    G0,
    Hp0,
    Patm,
    Ng,
    H0,
    E0,
    Lambda,
    PhiCv,
    NbWet,
    NbDry,
    Nd,
    Ad0,
    RuMax,
    ZMax,
    Cz,
    CEps,
    Cgd,
    Ckaf,
    Nu,
    CgConsol,
    FsU,
    PsiR,
    DR,
    PhiC,
    Cc,
}

impl MaterialField {
    /// Holds all fields in registry order
    pub const ALL: [MaterialField; N_MATERIAL_FIELD] = [
        Self::SuRatio,
        Self::Su,
        Self::G0,
        Self::Hp0,
        Self::Patm,
        Self::Ng,
        Self::H0,
        Self::E0,
        Self::Lambda,
        Self::PhiCv,
        Self::NbWet,
        Self::NbDry,
        Self::Nd,
        Self::Ad0,
        Self::RuMax,
        Self::ZMax,
        Self::Cz,
        Self::CEps,
        Self::Cgd,
        Self::Ckaf,
        Self::Nu,
        Self::CgConsol,
        Self::FsU,
        Self::PsiR,
        Self::DR,
        Self::PhiC,
        Self::Cc,
    ];

    /// Returns the parameter name
    pub fn key(&self) -> &'static str {
        match self {
            Self::SuRatio => "Suratio",
            Self::Su => "Su",
            Self::G0 => "G0",
            Self::Hp0 => "hp0",
            Self::Patm => "patm",
            Self::Ng => "ng",
            Self::H0 => "h0",
            Self::E0 => "e0",
            Self::Lambda => "lambda",
            Self::PhiCv => "phicv",
            Self::NbWet => "nbwet",
            Self::NbDry => "nbdry",
            Self::Nd => "nd",
            Self::Ad0 => "Ad0",
            Self::RuMax => "rumax",
            Self::ZMax => "zmax",
            Self::Cz => "cz",
            Self::CEps => "Ceps",
            Self::Cgd => "CGD",
            Self::Ckaf => "ckaf",
            Self::Nu => "nu",
            Self::CgConsol => "CGconsol",
            Self::FsU => "FSu",
            Self::PsiR => "psiR",
            Self::DR => "dR",
            Self::PhiC => "phic",
            Self::Cc => "cc",
        }
    }

    /// Returns the one-based user slot holding this parameter in the material registry
    ///
    /// Slot 22 is not used by the model.
    pub fn user_slot(&self) -> usize {
        let i = *self as usize;
        if i < Self::CgConsol as usize {
            i + 1
        } else {
            i + 2
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
