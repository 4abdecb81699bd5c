use crate::base::{MaterialField, N_MATERIAL_FIELD};
use crate::StrError;

/// Defines the capability of reading the user-defined constants of a material
pub trait MaterialRegistry {
    /// Returns the value stored in the one-based user slot of a material
    fn user_value(&self, material: usize, slot: usize) -> Result<f64, StrError>;
}

/// Holds the constants of the PM4Silt material
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParams {
    /// Undrained shear strength ratio
    pub su_ratio: f64,

    /// Undrained shear strength
    pub su: f64,

    /// Shear modulus coefficient
    pub g0: f64,

    /// Contraction rate parameter
    pub hp0: f64,

    /// Atmospheric pressure
    pub patm: f64,

    /// Shear modulus exponent
    pub ng: f64,

    /// Plastic modulus ratio
    pub h0: f64,

    /// Initial void ratio
    pub e0: f64,

    /// Slope of the critical state line in e-ln(p) space
    pub lambda: f64,

    /// Critical state friction angle (degrees)
    pub phi_cv: f64,

    /// Bounding surface parameter (loose of critical)
    pub nb_wet: f64,

    /// Bounding surface parameter (dense of critical)
    pub nb_dry: f64,

    /// Dilatancy surface parameter
    pub nd: f64,

    /// Dilatancy parameter
    pub ad0: f64,

    /// Maximum pore pressure ratio
    pub ru_max: f64,

    /// Fabric tensor capacity
    pub z_max: f64,

    /// Fabric growth parameter
    pub cz: f64,

    /// Parameter controlling the rate of strain accumulation
    pub c_eps: f64,

    /// Shear modulus degradation factor
    pub cgd: f64,

    /// Fabric-dilatancy affinity parameter
    pub ckaf: f64,

    /// Poisson's coefficient
    pub nu: f64,

    /// Shear modulus reduction during consolidation
    pub cg_consol: f64,

    /// Post-shaking strength reduction factor
    pub fs_u: f64,

    /// Reference state parameter
    pub psi_r: f64,

    /// Reference relative density
    pub d_r: f64,

    /// Friction angle (degrees)
    pub phi_c: f64,

    /// Cohesion-like parameter
    pub cc: f64,
}

impl MaterialParams {
    /// Reads all constants of a material from the registry
    ///
    /// Returns the first error reported by the registry; no partial set is returned.
    pub fn load<M: MaterialRegistry>(registry: &M, material: usize) -> Result<Self, StrError> {
        let mut values = [0.0; N_MATERIAL_FIELD];
        for (i, field) in MaterialField::ALL.iter().enumerate() {
            values[i] = registry.user_value(material, field.user_slot()).map_err(|err| {
                log::error!("cannot read parameter {} of material {}: {}", field.key(), material, err);
                err
            })?;
        }
        let [
            su_ratio, su, g0, hp0, patm, ng, h0, e0, lambda, phi_cv, nb_wet, nb_dry, nd, ad0, ru_max, z_max, cz, c_eps,
            cgd, ckaf, nu, cg_consol, fs_u, psi_r, d_r, phi_c, cc,
        ] = values;
        log::info!("loaded {} parameters of material {}", values.len(), material);
        Ok(MaterialParams {
            su_ratio,
            su,
            g0,
            hp0,
            patm,
            ng,
            h0,
            e0,
            lambda,
            phi_cv,
            nb_wet,
            nb_dry,
            nd,
            ad0,
            ru_max,
            z_max,
            cz,
            c_eps,
            cgd,
            ckaf,
            nu,
            cg_consol,
            fs_u,
            psi_r,
            d_r,
            phi_c,
            cc,
        })
    }

    /// Returns the value of a parameter by name
    pub fn get(&self, field: MaterialField) -> f64 {
        match field {
            MaterialField::SuRatio => self.su_ratio,
            MaterialField::Su => self.su,
            MaterialField::G0 => self.g0,
            MaterialField::Hp0 => self.hp0,
            MaterialField::Patm => self.patm,
            MaterialField::Ng => self.ng,
            MaterialField::H0 => self.h0,
            MaterialField::E0 => self.e0,
            MaterialField::Lambda => self.lambda,
            MaterialField::PhiCv => self.phi_cv,
            MaterialField::NbWet => self.nb_wet,
            MaterialField::NbDry => self.nb_dry,
            MaterialField::Nd => self.nd,
            MaterialField::Ad0 => self.ad0,
            MaterialField::RuMax => self.ru_max,
            MaterialField::ZMax => self.z_max,
            MaterialField::Cz => self.cz,
            MaterialField::CEps => self.c_eps,
            MaterialField::Cgd => self.cgd,
            MaterialField::Ckaf => self.ckaf,
            MaterialField::Nu => self.nu,
            MaterialField::CgConsol => self.cg_consol,
            MaterialField::FsU => self.fs_u,
            MaterialField::PsiR => self.psi_r,
            MaterialField::DR => self.d_r,
            MaterialField::PhiC => self.phi_c,
            MaterialField::Cc => self.cc,
        }
    }

    /// Returns the (name, value) pairs in registry order
    pub fn to_pairs(&self) -> Vec<(&'static str, f64)> {
        MaterialField::ALL.iter().map(|f| (f.key(), self.get(*f))).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{MaterialParams, MaterialRegistry};
    use crate::base::MaterialField;
    use crate::StrError;

    /// Stores slot × 10 + material in every slot except the missing one
    struct SampleRegistry {
        missing_slot: Option<usize>,
    }

    impl MaterialRegistry for SampleRegistry {
        fn user_value(&self, material: usize, slot: usize) -> Result<f64, StrError> {
            if material > 1 {
                return Err("material index is out of range");
            }
            if self.missing_slot == Some(slot) {
                return Err("user slot is not available");
            }
            Ok((slot * 10 + material) as f64)
        }
    }

    #[test]
    fn load_works() {
        let registry = SampleRegistry { missing_slot: None };
        let params = MaterialParams::load(&registry, 1).unwrap();
        assert_eq!(params.su_ratio, 11.0);
        assert_eq!(params.phi_cv, 101.0);
        assert_eq!(params.nb_wet, 111.0);
        assert_eq!(params.nb_dry, 121.0);
        assert_eq!(params.nd, 131.0);
        assert_eq!(params.nu, 211.0);
        assert_eq!(params.cg_consol, 231.0);
        assert_eq!(params.cc, 281.0);
        for field in MaterialField::ALL {
            assert_eq!(params.get(field), (field.user_slot() * 10 + 1) as f64);
        }
        let pairs = params.to_pairs();
        assert_eq!(pairs.len(), 27);
        assert_eq!(pairs[9], ("phicv", 101.0));
    }

    #[test]
    fn load_captures_errors() {
        let registry = SampleRegistry { missing_slot: Some(13) };
        assert_eq!(
            MaterialParams::load(&registry, 0).err(),
            Some("user slot is not available")
        );
        let registry = SampleRegistry { missing_slot: None };
        assert_eq!(
            MaterialParams::load(&registry, 2).err(),
            Some("material index is out of range")
        );
    }
}
