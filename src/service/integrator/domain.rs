//! Keyword-based domain detection
//!
//! A pure function over a fixed ordered table. Declared order is part of the
//! contract: ties between equally-scoring categories resolve to the first
//! one listed here.

/// Domain returned when no category keyword matches
pub const GENERAL_DOMAIN: &str = "general";

/// Category keyword table, in tie-break order
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "science",
        &[
            "scientific",
            "science",
            "research",
            "study",
            "evidence",
            "data",
            "experiment",
            "theory",
            "hypothesis",
        ],
    ),
    (
        "philosophy",
        &[
            "philosophy",
            "philosophical",
            "ethics",
            "moral",
            "metaphysics",
            "epistemology",
            "knowledge",
            "reality",
            "existence",
        ],
    ),
    (
        "politics",
        &[
            "politics",
            "political",
            "government",
            "policy",
            "election",
            "democracy",
            "republican",
            "democrat",
            "liberal",
            "conservative",
        ],
    ),
    (
        "religion",
        &[
            "religion",
            "religious",
            "god",
            "faith",
            "belief",
            "spiritual",
            "divine",
            "sacred",
            "holy",
            "soul",
        ],
    ),
    (
        "health",
        &[
            "health",
            "medical",
            "medicine",
            "disease",
            "treatment",
            "doctor",
            "patient",
            "therapy",
            "diagnosis",
            "symptom",
        ],
    ),
    (
        "technology",
        &[
            "technology",
            "tech",
            "computer",
            "digital",
            "software",
            "hardware",
            "internet",
            "ai",
            "algorithm",
            "device",
        ],
    ),
    (
        "conspiracy",
        &[
            "conspiracy",
            "cover-up",
            "secret",
            "hidden",
            "truth",
            "reveal",
            "government cover",
            "they don't want you to know",
        ],
    ),
];

/// Detect the domain of a claim by counting keyword hits per category
///
/// Each keyword counts at most once, as a plain substring of the lower-cased
/// claim. The strictly-highest count wins; an all-zero scan yields "general".
pub fn detect_domain(claim: &str) -> &'static str {
    let claim_lower = claim.to_lowercase();

    let mut best_domain = GENERAL_DOMAIN;
    let mut best_count = 0usize;
    for (domain, keywords) in DOMAIN_KEYWORDS {
        let count = keywords
            .iter()
            .filter(|keyword| claim_lower.contains(*keyword))
            .count();
        if count > best_count {
            best_domain = domain;
            best_count = count;
        }
    }

    best_domain
}
