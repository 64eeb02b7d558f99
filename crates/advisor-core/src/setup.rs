use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Turbulence model is set to Other but no custom model is named")]
    MissingCustomModel,

    #[error("Unknown turbulence model: {0}")]
    UnknownModel(String),
}

/// The fixed set of selectable turbulence closures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurbulenceModel {
    #[serde(rename = "k-epsilon (RANS)")]
    KEpsilon,
    #[default]
    #[serde(rename = "k-omega SST (RANS)")]
    KOmegaSst,
    #[serde(rename = "Spalart-Allmaras (RANS)")]
    SpalartAllmaras,
    #[serde(rename = "Large Eddy Simulation (LES)")]
    Les,
    #[serde(rename = "Detached Eddy Simulation (DES)")]
    Des,
    #[serde(rename = "Direct Numerical Simulation (DNS)")]
    Dns,
    #[serde(rename = "Other")]
    Other,
}

impl TurbulenceModel {
    pub const ALL: [TurbulenceModel; 7] = [
        TurbulenceModel::KEpsilon,
        TurbulenceModel::KOmegaSst,
        TurbulenceModel::SpalartAllmaras,
        TurbulenceModel::Les,
        TurbulenceModel::Des,
        TurbulenceModel::Dns,
        TurbulenceModel::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TurbulenceModel::KEpsilon => "k-epsilon (RANS)",
            TurbulenceModel::KOmegaSst => "k-omega SST (RANS)",
            TurbulenceModel::SpalartAllmaras => "Spalart-Allmaras (RANS)",
            TurbulenceModel::Les => "Large Eddy Simulation (LES)",
            TurbulenceModel::Des => "Detached Eddy Simulation (DES)",
            TurbulenceModel::Dns => "Direct Numerical Simulation (DNS)",
            TurbulenceModel::Other => "Other",
        }
    }
}

impl fmt::Display for TurbulenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TurbulenceModel {
    type Err = SetupError;

    /// Accepts both the full display name and a short CLI-friendly alias.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        let model = match normalized.as_str() {
            "k-epsilon (rans)" | "k-epsilon" => TurbulenceModel::KEpsilon,
            "k-omega sst (rans)" | "k-omega-sst" | "k-omega sst" => TurbulenceModel::KOmegaSst,
            "spalart-allmaras (rans)" | "spalart-allmaras" => TurbulenceModel::SpalartAllmaras,
            "large eddy simulation (les)" | "les" => TurbulenceModel::Les,
            "detached eddy simulation (des)" | "des" => TurbulenceModel::Des,
            "direct numerical simulation (dns)" | "dns" => TurbulenceModel::Dns,
            "other" => TurbulenceModel::Other,
            _ => return Err(SetupError::UnknownModel(raw.trim().to_string())),
        };
        Ok(model)
    }
}

/// Keys for the string fields of [`SimulationSetup`], used by the
/// field-by-field update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Geometry,
    Velocity,
    CharacteristicLength,
    Density,
    Viscosity,
    CustomTurbulenceModel,
    MeshDetails,
    YPlus,
    Numerics,
    DomainExtents,
}

/// A user-described simulation setup.
///
/// Numeric quantities are kept as raw strings: an unparseable value is a
/// normal state of the form, not an error, and only the Reynolds derivation
/// cares whether they parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSetup {
    pub geometry: String,
    /// m/s
    pub velocity: String,
    /// m
    pub characteristic_length: String,
    /// kg/m^3
    pub density: String,
    /// Pa.s
    pub viscosity: String,
    pub turbulence_model: TurbulenceModel,
    #[serde(default)]
    pub custom_turbulence_model: String,
    #[serde(default)]
    pub mesh_details: String,
    #[serde(default)]
    pub y_plus: String,
    #[serde(default)]
    pub numerics: String,
    #[serde(default)]
    pub domain_extents: String,
}

impl Default for SimulationSetup {
    fn default() -> Self {
        Self {
            geometry: String::new(),
            velocity: String::new(),
            characteristic_length: String::new(),
            // water at 20 C, the original form's initial value
            density: "998.2".to_string(),
            viscosity: String::new(),
            turbulence_model: TurbulenceModel::KOmegaSst,
            custom_turbulence_model: String::new(),
            mesh_details: String::new(),
            y_plus: String::new(),
            numerics: String::new(),
            domain_extents: String::new(),
        }
    }
}

impl SimulationSetup {
    pub fn set_field(&mut self, field: SetupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SetupField::Geometry => self.geometry = value,
            SetupField::Velocity => self.velocity = value,
            SetupField::CharacteristicLength => self.characteristic_length = value,
            SetupField::Density => self.density = value,
            SetupField::Viscosity => self.viscosity = value,
            SetupField::CustomTurbulenceModel => self.custom_turbulence_model = value,
            SetupField::MeshDetails => self.mesh_details = value,
            SetupField::YPlus => self.y_plus = value,
            SetupField::Numerics => self.numerics = value,
            SetupField::DomainExtents => self.domain_extents = value,
        }
    }

    /// Check the submission preconditions, reporting the first violated rule.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.geometry.trim().is_empty() {
            return Err(SetupError::MissingField("geometry"));
        }
        if self.velocity.trim().is_empty() {
            return Err(SetupError::MissingField("velocity"));
        }
        if self.characteristic_length.trim().is_empty() {
            return Err(SetupError::MissingField("characteristic length"));
        }
        if self.turbulence_model == TurbulenceModel::Other
            && self.custom_turbulence_model.trim().is_empty()
        {
            return Err(SetupError::MissingCustomModel);
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// The turbulence model name as it should appear downstream: the custom
    /// name replaces the literal `Other`.
    pub fn resolved_turbulence_model(&self) -> &str {
        match self.turbulence_model {
            TurbulenceModel::Other => self.custom_turbulence_model.trim(),
            model => model.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submittable_setup() -> SimulationSetup {
        SimulationSetup {
            geometry: "Flow over a cylinder".to_string(),
            velocity: "10".to_string(),
            characteristic_length: "0.1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_setup_matches_initial_form_state() {
        let setup = SimulationSetup::default();
        assert_eq!(setup.density, "998.2");
        assert_eq!(setup.turbulence_model, TurbulenceModel::KOmegaSst);
        assert!(setup.geometry.is_empty());
    }

    #[test]
    fn validate_accepts_complete_setup() {
        assert!(submittable_setup().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_fields() {
        let mut setup = submittable_setup();
        setup.geometry = "   ".to_string();
        assert_eq!(setup.validate(), Err(SetupError::MissingField("geometry")));

        let mut setup = submittable_setup();
        setup.velocity.clear();
        assert_eq!(setup.validate(), Err(SetupError::MissingField("velocity")));

        let mut setup = submittable_setup();
        setup.characteristic_length.clear();
        assert_eq!(
            setup.validate(),
            Err(SetupError::MissingField("characteristic length"))
        );
    }

    #[test]
    fn validate_rejects_other_without_custom_name() {
        let mut setup = submittable_setup();
        setup.turbulence_model = TurbulenceModel::Other;
        assert_eq!(setup.validate(), Err(SetupError::MissingCustomModel));
        assert!(!setup.is_submittable());

        setup.custom_turbulence_model = "Reynolds Stress Model (RSM)".to_string();
        assert!(setup.is_submittable());
    }

    #[test]
    fn resolved_model_substitutes_custom_name() {
        let mut setup = submittable_setup();
        setup.turbulence_model = TurbulenceModel::Other;
        setup.custom_turbulence_model = " Reynolds Stress Model (RSM) ".to_string();
        assert_eq!(
            setup.resolved_turbulence_model(),
            "Reynolds Stress Model (RSM)"
        );

        setup.turbulence_model = TurbulenceModel::Les;
        assert_eq!(
            setup.resolved_turbulence_model(),
            "Large Eddy Simulation (LES)"
        );
    }

    #[test]
    fn set_field_updates_the_named_field() {
        let mut setup = SimulationSetup::default();
        setup.set_field(SetupField::Geometry, "NACA 0012 airfoil");
        setup.set_field(SetupField::YPlus, "<1");
        assert_eq!(setup.geometry, "NACA 0012 airfoil");
        assert_eq!(setup.y_plus, "<1");
    }

    #[test]
    fn model_parses_display_names_and_aliases() {
        assert_eq!(
            "k-omega SST (RANS)".parse::<TurbulenceModel>().unwrap(),
            TurbulenceModel::KOmegaSst
        );
        assert_eq!(
            "k-omega-sst".parse::<TurbulenceModel>().unwrap(),
            TurbulenceModel::KOmegaSst
        );
        assert_eq!(
            "LES".parse::<TurbulenceModel>().unwrap(),
            TurbulenceModel::Les
        );
        assert!(matches!(
            "k-tau".parse::<TurbulenceModel>(),
            Err(SetupError::UnknownModel(_))
        ));
    }

    #[test]
    fn model_round_trips_through_display() {
        for model in TurbulenceModel::ALL {
            assert_eq!(model.as_str().parse::<TurbulenceModel>().unwrap(), model);
        }
    }
}
