//! Analysis integration
//!
//! Combines the three arbiters' verdicts into one composite report. Pure and
//! deterministic: no I/O, no model calls, total over all valid inputs.

use crate::model::{
    ArbiterSummary, DimensionScore, IntegratedAnalysis, LogicalSummary, PragmaticSummary,
    VerifactComponents, VerifactScore,
};

pub mod assumptions;
pub mod domain;

/// Policy constant scaling the arbiters' score spread into [0, 1].
/// Preserved exactly for compatibility with downstream consumers.
const MDQ_SCALE: f64 = 5.0;

/// Combine the three arbiter analyses into an integrated report
///
/// The verifact score is the geometric mean of the empirical and logical
/// scores only; the pragmatic score measures a different, non-truth-evaluating
/// dimension and enters the composite metrics instead.
pub fn integrate(
    claim: &str,
    empirical: &DimensionScore,
    logical: &DimensionScore,
    pragmatic: &DimensionScore,
) -> IntegratedAnalysis {
    let empirical_score = empirical.overall;
    let logical_score = logical.overall;
    let pragmatic_score = pragmatic.overall;

    let verifact_score = (empirical_score * logical_score).sqrt();

    // Model Diversity Quotient: scaled population standard deviation of the
    // three overall scores; 0 = perfect agreement, capped at 1
    let scores = [empirical_score, logical_score, pragmatic_score];
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
    let mdq = (variance.sqrt() * MDQ_SCALE).min(1.0);

    // Contextual Sensitivity Index: mean of four cross-arbiter sub-scores
    let csi = (empirical.component("observability")
        + logical.component("consistency")
        + pragmatic.component("stakeholderValue")
        + pragmatic.component("adaptability"))
        / 4.0;

    // Reflective Index: assumption/consequence awareness
    let reflective_index =
        (logical.component("fallacies") + pragmatic.component("consequences")) / 2.0;

    let falsifiability = empirical.component("testability");

    let analysis = IntegratedAnalysis {
        claim: claim.to_string(),
        domain: domain::detect_domain(claim).to_string(),
        assumptions: assumptions::detect_assumptions(claim, &logical.notes),
        verifact_score: VerifactScore {
            overall_score: round2(verifact_score),
            components: VerifactComponents {
                empirical_verifiability: round2(empirical_score),
                logical_consistency: round2(logical_score),
                pragmatic_utility: round2(pragmatic_score),
                model_diversity: round2(mdq),
                contextual_sensitivity: round2(csi),
                reflective_index: round2(reflective_index),
                falsifiability: round2(falsifiability),
            },
        },
        empirical_analysis: ArbiterSummary {
            score: empirical_score,
            reasoning: empirical.reasoning.clone(),
        },
        logical_analysis: LogicalSummary {
            score: logical_score,
            reasoning: logical.reasoning.clone(),
            fallacies: logical.notes.clone(),
        },
        pragmatic_analysis: PragmaticSummary {
            score: pragmatic_score,
            reasoning: pragmatic.reasoning.clone(),
            stakeholders: pragmatic.notes.clone(),
        },
        perspectives: Vec::new(),
    };

    tracing::debug!(
        domain = %analysis.domain,
        verifact_score = analysis.verifact_score.overall_score,
        mdq = analysis.verifact_score.components.model_diversity,
        "Integrated arbiter analyses"
    );

    analysis
}

/// Round to 2 decimal places for presentation
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NEUTRAL_SCORE;
    use crate::service::arbiter::ArbiterKind;

    fn score_with_overall(kind: ArbiterKind, overall: f64) -> DimensionScore {
        DimensionScore {
            overall,
            ..kind.default_score()
        }
    }

    #[test]
    fn verifact_is_rounded_geometric_mean_of_empirical_and_logical() {
        let empirical = score_with_overall(ArbiterKind::Empirical, 0.8);
        let logical = score_with_overall(ArbiterKind::Logical, 0.6);
        // Pragmatic deliberately extreme to prove it is excluded
        let pragmatic = score_with_overall(ArbiterKind::Pragmatic, 0.0);

        let analysis = integrate("claim", &empirical, &logical, &pragmatic);
        let expected = round2((0.8_f64 * 0.6).sqrt());
        assert_eq!(analysis.verifact_score.overall_score, expected);
        assert_eq!(analysis.verifact_score.overall_score, 0.69);
    }

    #[test]
    fn mdq_is_zero_when_arbiters_agree() {
        let empirical = score_with_overall(ArbiterKind::Empirical, 0.7);
        let logical = score_with_overall(ArbiterKind::Logical, 0.7);
        let pragmatic = score_with_overall(ArbiterKind::Pragmatic, 0.7);

        let analysis = integrate("claim", &empirical, &logical, &pragmatic);
        assert_eq!(analysis.verifact_score.components.model_diversity, 0.0);
    }

    #[test]
    fn mdq_grows_with_spread_and_is_clamped() {
        let mdq_for = |e: f64, l: f64, p: f64| {
            let analysis = integrate(
                "claim",
                &score_with_overall(ArbiterKind::Empirical, e),
                &score_with_overall(ArbiterKind::Logical, l),
                &score_with_overall(ArbiterKind::Pragmatic, p),
            );
            analysis.verifact_score.components.model_diversity
        };

        let narrow = mdq_for(0.5, 0.55, 0.6);
        let wide = mdq_for(0.2, 0.5, 0.8);
        assert!(narrow > 0.0);
        assert!(wide > narrow);

        // Maximum spread exceeds the x5 scale and is clamped to 1
        assert_eq!(mdq_for(0.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn composite_metrics_read_specific_components() {
        let mut empirical = ArbiterKind::Empirical.default_score();
        empirical.components.insert("observability".to_string(), 0.9);
        empirical.components.insert("testability".to_string(), 0.8);

        let mut logical = ArbiterKind::Logical.default_score();
        logical.components.insert("consistency".to_string(), 0.7);
        logical.components.insert("fallacies".to_string(), 0.6);

        let mut pragmatic = ArbiterKind::Pragmatic.default_score();
        pragmatic.components.insert("stakeholderValue".to_string(), 0.5);
        pragmatic.components.insert("adaptability".to_string(), 0.3);
        pragmatic.components.insert("consequences".to_string(), 0.4);

        let analysis = integrate("claim", &empirical, &logical, &pragmatic);
        let components = &analysis.verifact_score.components;

        assert_eq!(components.contextual_sensitivity, round2((0.9 + 0.7 + 0.5 + 0.3) / 4.0));
        assert_eq!(components.reflective_index, round2((0.6 + 0.4) / 2.0));
        assert_eq!(components.falsifiability, 0.8);
    }

    #[test]
    fn defaults_produce_a_neutral_report() {
        let analysis = integrate(
            "An unremarkable sentence about cats",
            &ArbiterKind::Empirical.default_score(),
            &ArbiterKind::Logical.default_score(),
            &ArbiterKind::Pragmatic.default_score(),
        );

        assert_eq!(analysis.verifact_score.overall_score, NEUTRAL_SCORE);
        assert_eq!(analysis.verifact_score.components.model_diversity, 0.0);
        assert_eq!(analysis.domain, "general");
        assert_eq!(
            analysis.assumptions,
            "No obvious absolutes or fallacies identified"
        );
        assert!(analysis.logical_analysis.fallacies.is_empty());
        assert!(analysis.perspectives.is_empty());
    }

    #[test]
    fn fallacies_flow_into_summary_and_assumptions() {
        let mut logical = ArbiterKind::Logical.default_score();
        logical.notes = vec!["slippery slope".to_string()];

        let analysis = integrate(
            "One thing leads to another thing entirely",
            &ArbiterKind::Empirical.default_score(),
            &logical,
            &ArbiterKind::Pragmatic.default_score(),
        );

        assert_eq!(analysis.logical_analysis.fallacies, vec!["slippery slope"]);
        assert_eq!(
            analysis.assumptions,
            "May contain logical fallacies: slippery slope"
        );
    }
}
