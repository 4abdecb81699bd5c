/// Defines the diagnostic charts
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ChartKind {
    /// Shear stress τxy versus shear strain γxy (percent)
    ShearStressStrain,

    /// Shear stress τxy versus vertical effective stress σ'y
    ShearStressVerticalStress,

    /// Back-stress ratios αxx, αyy, αxy versus step index
    BackStress,

    /// Stress path q* versus p* with the M, Mb, and Md surfaces
    StressPathSurfaces,

    /// Void ratio versus p* with the critical state line and the state parameter ξ
    VoidRatioMeanStress,

    /// Shear stress τxy versus σ'y with the M, Mb, and Md surfaces mapped onto stress space
    StressSpaceSurfaces,

    /// Pore pressure ratios ru and ru,extreme versus step index
    PorePressureRatio,
}

impl ChartKind {
    /// Holds all charts in mosaic order
    pub const ALL: [ChartKind; 7] = [
        Self::ShearStressStrain,
        Self::ShearStressVerticalStress,
        Self::StressPathSurfaces,
        Self::StressSpaceSurfaces,
        Self::VoidRatioMeanStress,
        Self::BackStress,
        Self::PorePressureRatio,
    ];

    /// Returns the suffix used in file names
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::ShearStressStrain => "sxy_vs_gxy",
            Self::ShearStressVerticalStress => "sxy_vs_sy",
            Self::BackStress => "alpha_vs_n",
            Self::StressPathSurfaces => "q_vs_p",
            Self::VoidRatioMeanStress => "e_vs_logp",
            Self::StressSpaceSurfaces => "sxy_vs_sy_surfaces",
            Self::PorePressureRatio => "ru_vs_n",
        }
    }

    /// Returns the labels of the (x, y) axes
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Self::ShearStressStrain => (
                "Shear strain, $\\gamma_{xy}$ [%]",
                "Shear stress, $\\tau_{xy}$ [kPa]",
            ),
            Self::ShearStressVerticalStress | Self::StressSpaceSurfaces => (
                "Vertical effective stress, $\\sigma'_{y}$ [kPa]",
                "Shear stress, $\\tau_{xy}$ [kPa]",
            ),
            Self::BackStress => ("Step index, $N$ [-]", "Back stress ratio, $\\alpha_{ii}$ [-]"),
            Self::StressPathSurfaces => (
                "Mid stress, $p^{*} = (\\sigma_{x}+\\sigma_{y})/2$ [kPa]",
                "Deviatoric stress, $q^{*} = \\sqrt{2} \\cdot |\\sigma-pI|$ [kPa]",
            ),
            Self::VoidRatioMeanStress => (
                "Mid stress, $p^{*} = (\\sigma_{x}+\\sigma_{y})/2$ [kPa]",
                "Void ratio, $e$ [-]",
            ),
            Self::PorePressureRatio => ("Step index, $N$ [-]", "Pore pressure ratio, $r_u$ [-]"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
