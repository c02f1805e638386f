//! Absolute-term and fallacy-based assumption detection
//!
//! A pure function over a fixed ordered term list. The first matching term in
//! declared order wins, so the order below is part of the contract.

/// Absolute/universal terms, in match order
const ABSOLUTE_TERMS: &[&str] = &[
    "all",
    "everyone",
    "always",
    "never",
    "nobody",
    "certainly",
    "definitely",
    "obviously",
    "clearly",
    "absolutely",
    "undoubtedly",
    "every",
    "no one",
    "must",
    "should",
    "will",
    "won't",
    "proven",
];

/// Message returned when neither absolutes nor fallacies are found
const NO_ASSUMPTIONS: &str = "No obvious absolutes or fallacies identified";

/// Describe the assumptions carried by a claim
///
/// Scans the space-padded, lower-cased claim for whole-word absolute terms;
/// falls back to the logical arbiter's fallacy list, then to a fixed message.
pub fn detect_assumptions(claim: &str, fallacies: &[String]) -> String {
    let padded = format!(" {} ", claim.to_lowercase());

    for term in ABSOLUTE_TERMS {
        if padded.contains(&format!(" {term} ")) {
            return format!("Contains absolute terms (e.g., '{term}')");
        }
    }

    if !fallacies.is_empty() {
        return format!("May contain logical fallacies: {}", fallacies.join(", "));
    }

    NO_ASSUMPTIONS.to_string()
}
