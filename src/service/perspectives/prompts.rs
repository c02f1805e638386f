//! Prompts for perspective generation

pub const PERSPECTIVE_PREAMBLE: &str = "You generate alternative viewpoints on claims. \
Respond with a JSON array only, no text outside it.";

/// Build the perspective-generation prompt for a claim
pub fn build_perspective_prompt(claim: &str) -> String {
    format!(
        r#"You are analyzing this specific claim: "{claim}"

Generate EXACTLY 3 different perspectives on THIS CLAIM ONLY.

Your response must be a JSON array with 3 objects, each containing:
- "name": Brief title of perspective (e.g., "Scientific" or "Ethical")
- "description": One sentence explaining this viewpoint
- "assessment": One sentence evaluating THE CLAIM from this perspective
- "score": A score from 0.0 to 1.0 representing how well the claim aligns with this perspective

Do not add any text outside the JSON array.
Example format (but about the provided claim, not this example):
[
  {{
    "name": "Perspective1",
    "description": "Description of this perspective.",
    "assessment": "Assessment of the original claim from this perspective.",
    "score": 0.7
  }},
  {{
    "name": "Perspective2",
    "description": "Description of perspective 2.",
    "assessment": "Assessment from perspective 2.",
    "score": 0.5
  }},
  {{
    "name": "Perspective3",
    "description": "Description of perspective 3.",
    "assessment": "Assessment from perspective 3.",
    "score": 0.3
  }}
]"#
    )
}
