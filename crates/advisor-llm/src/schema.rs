//! The fixed system instruction and the response-schema contract.
//!
//! Together these pin down the only non-trivial agreement in the system:
//! what the service is asked to do and the exact JSON shape it must answer
//! with. `advisor_core::Assessment` deserialization is the enforcement side
//! of the same contract.

use serde_json::{json, Value};

pub const SYSTEM_INSTRUCTION: &str = r#"You are a world-class CFD (Computational Fluid Dynamics) Convergence Advisor. Your role is to analyze a user's simulation setup and provide a structured assessment of its convergence likelihood. You must be precise, practical, and adhere strictly to the requested output format.

Key principles to follow:
1.  Analyze the provided Reynolds number to determine the flow regime (laminar, transitional, turbulent) and ensure the chosen turbulence model is appropriate.
2.  Assume the flow is incompressible unless explicitly stated otherwise.
3.  If wall functions are mentioned, always include a reminder about maintaining consistent y+ targets in your recommendations or checklist.
4.  Be vigilant for common CFD pitfalls: short simulation domains, inconsistent boundary conditions (e.g., mass imbalance), unstable numerical schemes (e.g., high Courant numbers), and poor mesh quality (high skewness, non-orthogonality).
5.  Your response must be a JSON object that validates against the provided schema. Do not add any extra text, explanations, or markdown formatting outside of the JSON structure.
6.  Generate 3-7 items for 'Potential Issues' and 'Recommendations', and at least 3 items for 'Quick Checklist'.
"#;

/// Schema for the structured assessment, in Gemini's OpenAPI-subset form.
pub fn assessment_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallLikelihood": {
                "type": "OBJECT",
                "properties": {
                    "level": {
                        "type": "STRING",
                        "enum": ["High", "Medium", "Low"],
                        "description": "The overall likelihood of convergence."
                    },
                    "reason": {
                        "type": "STRING",
                        "description": "A concise, one-line justification for the likelihood."
                    }
                },
                "required": ["level", "reason"]
            },
            "potentialIssues": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": "A potential issue that could hinder convergence."
                },
                "description": "A list of 3-7 concise bullet points on potential issues."
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": "A recommendation to improve convergence."
                },
                "description": "A list of 3-7 concise bullet points with recommendations."
            },
            "quickChecklist": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": "A short, actionable checklist item."
                },
                "description": "A short, actionable checklist."
            }
        },
        "required": ["overallLikelihood", "potentialIssues", "recommendations", "quickChecklist"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_top_level_keys_are_required() {
        let schema = assessment_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            [
                "overallLikelihood",
                "potentialIssues",
                "recommendations",
                "quickChecklist"
            ]
        );
    }

    #[test]
    fn level_enum_is_exactly_the_three_values() {
        let schema = assessment_response_schema();
        let levels = &schema["properties"]["overallLikelihood"]["properties"]["level"]["enum"];
        assert_eq!(*levels, json!(["High", "Medium", "Low"]));
    }

    #[test]
    fn instruction_mentions_the_output_rules() {
        assert!(SYSTEM_INSTRUCTION.contains("Reynolds number"));
        assert!(SYSTEM_INSTRUCTION.contains("incompressible"));
        assert!(SYSTEM_INSTRUCTION.contains("JSON object"));
        assert!(SYSTEM_INSTRUCTION.contains("3-7 items"));
    }
}
