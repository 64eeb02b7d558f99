//! Deterministic prompt assembly.
//!
//! Identical input must produce byte-identical output; the line order and
//! wording are part of the request contract.

use crate::setup::SimulationSetup;

/// Literal substituted for optional fields left empty.
pub const NOT_SPECIFIED: &str = "Not specified.";

/// Render the setup (plus the already-derived Reynolds text) into the user
/// prompt sent to the service.
pub fn build_prompt(setup: &SimulationSetup, reynolds: &str) -> String {
    let prompt = format!(
        "Analyze the convergence likelihood for the following CFD setup:\n\
         - Geometry: {geometry}\n\
         - Characteristic Velocity: {velocity} m/s\n\
         - Characteristic Length: {length} m\n\
         - Fluid Density: {density}\n\
         - Dynamic Viscosity: {viscosity}\n\
         - Reynolds Number: {reynolds}\n\
         - Turbulence Model: {model}\n\
         - Mesh Details: {mesh}\n\
         - y+ Range: {y_plus}\n\
         - Numerics: {numerics}\n\
         - Domain Extents: {domain}\n\
         - Other notes: Please consider potential issues related to boundary conditions, \
         numerical schemes, mesh quality, and the flow regime implied by the Reynolds number, \
         even if not fully specified.",
        geometry = setup.geometry.trim(),
        velocity = setup.velocity.trim(),
        length = setup.characteristic_length.trim(),
        density = with_unit(&setup.density, "kg/m^3"),
        viscosity = with_unit(&setup.viscosity, "Pa\u{b7}s"),
        reynolds = reynolds,
        model = setup.resolved_turbulence_model(),
        mesh = or_not_specified(&setup.mesh_details),
        y_plus = or_not_specified(&setup.y_plus),
        numerics = or_not_specified(&setup.numerics),
        domain = or_not_specified(&setup.domain_extents),
    );
    prompt.trim().to_string()
}

fn or_not_specified(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED
    } else {
        trimmed
    }
}

/// Optional numeric field with its unit, or the bare "Not specified." line.
fn with_unit(raw: &str, unit: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        format!("{trimmed} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reynolds::{reynolds_text, NOT_CALCULATED};
    use crate::setup::TurbulenceModel;

    fn cylinder_setup() -> SimulationSetup {
        SimulationSetup {
            geometry: "cylinder".to_string(),
            velocity: "10".to_string(),
            characteristic_length: "0.1".to_string(),
            density: "998.2".to_string(),
            viscosity: "0.001002".to_string(),
            ..Default::default()
        }
    }

    fn derived_reynolds(setup: &SimulationSetup) -> String {
        reynolds_text(
            &setup.density,
            &setup.velocity,
            &setup.characteristic_length,
            &setup.viscosity,
        )
    }

    #[test]
    fn is_deterministic() {
        let setup = cylinder_setup();
        let reynolds = derived_reynolds(&setup);
        assert_eq!(build_prompt(&setup, &reynolds), build_prompt(&setup, &reynolds));
    }

    #[test]
    fn embeds_the_computed_reynolds_number() {
        let setup = cylinder_setup();
        let prompt = build_prompt(&setup, &derived_reynolds(&setup));
        assert!(prompt.contains("- Reynolds Number: ~9.96e+5"));
        assert!(prompt.contains("- Geometry: cylinder"));
        assert!(prompt.contains("- Characteristic Velocity: 10 m/s"));
        assert!(prompt.contains("- Turbulence Model: k-omega SST (RANS)"));
    }

    #[test]
    fn empty_viscosity_degrades_to_markers() {
        let mut setup = cylinder_setup();
        setup.viscosity = String::new();
        let reynolds = derived_reynolds(&setup);
        assert_eq!(reynolds, NOT_CALCULATED);

        let prompt = build_prompt(&setup, &reynolds);
        assert!(prompt.contains("- Dynamic Viscosity: Not specified.\n"));
        assert!(prompt.contains(&format!("- Reynolds Number: {NOT_CALCULATED}")));
    }

    #[test]
    fn optional_fields_render_as_not_specified() {
        let setup = cylinder_setup();
        let prompt = build_prompt(&setup, "~9.96e+5");
        assert!(prompt.contains("- Mesh Details: Not specified."));
        assert!(prompt.contains("- y+ Range: Not specified."));
        assert!(prompt.contains("- Numerics: Not specified."));
        assert!(prompt.contains("- Domain Extents: Not specified."));
    }

    #[test]
    fn filled_optional_fields_are_rendered_verbatim() {
        let mut setup = cylinder_setup();
        setup.mesh_details = "Structured hex, 2M cells".to_string();
        setup.numerics = "SIMPLE, second-order upwind, Co < 1".to_string();
        let prompt = build_prompt(&setup, "~9.96e+5");
        assert!(prompt.contains("- Mesh Details: Structured hex, 2M cells"));
        assert!(prompt.contains("- Numerics: SIMPLE, second-order upwind, Co < 1"));
    }

    #[test]
    fn other_model_is_replaced_by_the_custom_name() {
        let mut setup = cylinder_setup();
        setup.turbulence_model = TurbulenceModel::Other;
        setup.custom_turbulence_model = "Reynolds Stress Model (RSM)".to_string();
        let prompt = build_prompt(&setup, "~9.96e+5");
        assert!(prompt.contains("- Turbulence Model: Reynolds Stress Model (RSM)"));
        assert!(!prompt.contains("- Turbulence Model: Other"));
    }

    #[test]
    fn output_is_trimmed() {
        let setup = cylinder_setup();
        let prompt = build_prompt(&setup, "~9.96e+5");
        assert_eq!(prompt, prompt.trim());
        assert!(prompt.starts_with("Analyze the convergence likelihood"));
    }
}
