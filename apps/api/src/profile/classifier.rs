//! Personality Classifier — maps a DISC score to one closed-vocabulary label.
//!
//! Rules are priority-ordered and the first match wins. Thresholds overlap, so
//! the evaluation order below is part of the contract:
//!
//! 1. Special overrides (historically named blends)
//! 2. Pure dominant: primary ≥ 50 and secondary < 15
//! 3. Strong dual blend: primary ≥ 40 and secondary ≥ 15 (ordered pair table)
//! 4. Moderate blend: primary ≥ 35 and secondary > 25 (second ordered pair table)
//! 5. Fallback: Balanced Professional
//!
//! The final branch is unconditional, so classification never fails.
//! Independent of `strengths::generate_strengths`, which may disagree.

use serde::{Deserialize, Serialize};

use crate::profile::disc::{DiscAxis, DiscScore};

// ────────────────────────────────────────────────────────────────────────────
// Closed label set
// ────────────────────────────────────────────────────────────────────────────

/// Every label the canonical classifier can emit. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    // Overrides
    #[serde(rename = "Strategic Perfectionist")]
    StrategicPerfectionist,
    #[serde(rename = "Steadfast Anchor")]
    SteadfastAnchor,

    // Pure dominant
    #[serde(rename = "Results Dynamo")]
    ResultsDynamo,
    #[serde(rename = "Social Butterfly")]
    SocialButterfly,
    #[serde(rename = "Steady Supporter")]
    SteadySupporter,
    #[serde(rename = "Quality Guardian")]
    QualityGuardian,

    // Strong dual blends
    #[serde(rename = "Dynamic Motivator")]
    DynamicMotivator,
    #[serde(rename = "Steady Driver")]
    SteadyDriver,
    #[serde(rename = "Strategic Achiever")]
    StrategicAchiever,
    #[serde(rename = "Supportive Connector")]
    SupportiveConnector,
    #[serde(rename = "Creative Analyst")]
    CreativeAnalyst,
    #[serde(rename = "Determined Stabilizer")]
    DeterminedStabilizer,
    #[serde(rename = "Collaborative Facilitator")]
    CollaborativeFacilitator,
    #[serde(rename = "Reliable Specialist")]
    ReliableSpecialist,
    #[serde(rename = "Precision Driver")]
    PrecisionDriver,
    #[serde(rename = "Methodical Planner")]
    MethodicalPlanner,

    // Moderate blends
    #[serde(rename = "Energetic Leader")]
    EnergeticLeader,
    #[serde(rename = "Grounded Achiever")]
    GroundedAchiever,
    #[serde(rename = "Analytical Challenger")]
    AnalyticalChallenger,
    #[serde(rename = "Persuasive Influencer")]
    PersuasiveInfluencer,
    #[serde(rename = "Team Harmonizer")]
    TeamHarmonizer,
    #[serde(rename = "Insightful Communicator")]
    InsightfulCommunicator,
    #[serde(rename = "Dependable Doer")]
    DependableDoer,
    #[serde(rename = "Empathetic Collaborator")]
    EmpatheticCollaborator,
    #[serde(rename = "Careful Supporter")]
    CarefulSupporter,
    #[serde(rename = "Systematic Problem Solver")]
    SystematicProblemSolver,
    #[serde(rename = "Thoughtful Presenter")]
    ThoughtfulPresenter,
    #[serde(rename = "Diligent Analyst")]
    DiligentAnalyst,

    // Fallback
    #[serde(rename = "Balanced Professional")]
    BalancedProfessional,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 29] = [
        PersonalityType::StrategicPerfectionist,
        PersonalityType::SteadfastAnchor,
        PersonalityType::ResultsDynamo,
        PersonalityType::SocialButterfly,
        PersonalityType::SteadySupporter,
        PersonalityType::QualityGuardian,
        PersonalityType::DynamicMotivator,
        PersonalityType::SteadyDriver,
        PersonalityType::StrategicAchiever,
        PersonalityType::SupportiveConnector,
        PersonalityType::CreativeAnalyst,
        PersonalityType::DeterminedStabilizer,
        PersonalityType::CollaborativeFacilitator,
        PersonalityType::ReliableSpecialist,
        PersonalityType::PrecisionDriver,
        PersonalityType::MethodicalPlanner,
        PersonalityType::EnergeticLeader,
        PersonalityType::GroundedAchiever,
        PersonalityType::AnalyticalChallenger,
        PersonalityType::PersuasiveInfluencer,
        PersonalityType::TeamHarmonizer,
        PersonalityType::InsightfulCommunicator,
        PersonalityType::DependableDoer,
        PersonalityType::EmpatheticCollaborator,
        PersonalityType::CarefulSupporter,
        PersonalityType::SystematicProblemSolver,
        PersonalityType::ThoughtfulPresenter,
        PersonalityType::DiligentAnalyst,
        PersonalityType::BalancedProfessional,
    ];

    /// Display label, also the catalog key.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::StrategicPerfectionist => "Strategic Perfectionist",
            PersonalityType::SteadfastAnchor => "Steadfast Anchor",
            PersonalityType::ResultsDynamo => "Results Dynamo",
            PersonalityType::SocialButterfly => "Social Butterfly",
            PersonalityType::SteadySupporter => "Steady Supporter",
            PersonalityType::QualityGuardian => "Quality Guardian",
            PersonalityType::DynamicMotivator => "Dynamic Motivator",
            PersonalityType::SteadyDriver => "Steady Driver",
            PersonalityType::StrategicAchiever => "Strategic Achiever",
            PersonalityType::SupportiveConnector => "Supportive Connector",
            PersonalityType::CreativeAnalyst => "Creative Analyst",
            PersonalityType::DeterminedStabilizer => "Determined Stabilizer",
            PersonalityType::CollaborativeFacilitator => "Collaborative Facilitator",
            PersonalityType::ReliableSpecialist => "Reliable Specialist",
            PersonalityType::PrecisionDriver => "Precision Driver",
            PersonalityType::MethodicalPlanner => "Methodical Planner",
            PersonalityType::EnergeticLeader => "Energetic Leader",
            PersonalityType::GroundedAchiever => "Grounded Achiever",
            PersonalityType::AnalyticalChallenger => "Analytical Challenger",
            PersonalityType::PersuasiveInfluencer => "Persuasive Influencer",
            PersonalityType::TeamHarmonizer => "Team Harmonizer",
            PersonalityType::InsightfulCommunicator => "Insightful Communicator",
            PersonalityType::DependableDoer => "Dependable Doer",
            PersonalityType::EmpatheticCollaborator => "Empathetic Collaborator",
            PersonalityType::CarefulSupporter => "Careful Supporter",
            PersonalityType::SystematicProblemSolver => "Systematic Problem Solver",
            PersonalityType::ThoughtfulPresenter => "Thoughtful Presenter",
            PersonalityType::DiligentAnalyst => "Diligent Analyst",
            PersonalityType::BalancedProfessional => "Balanced Professional",
        }
    }

    /// Case-insensitive reverse lookup of [`PersonalityType::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Thresholds
// ────────────────────────────────────────────────────────────────────────────

const DOMINANT_PRIMARY_MIN: f64 = 50.0;
/// Pure dominant requires the secondary axis strictly below this.
const DOMINANT_SECONDARY_MAX: f64 = 15.0;
const STRONG_PRIMARY_MIN: f64 = 40.0;
const STRONG_SECONDARY_MIN: f64 = 15.0;
const MODERATE_PRIMARY_MIN: f64 = 35.0;
/// Moderate blend requires the secondary axis strictly above this.
const MODERATE_SECONDARY_FLOOR: f64 = 25.0;

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a DISC score. Pure, deterministic, total.
pub fn classify(score: &DiscScore) -> PersonalityType {
    if let Some(label) = special_override(score) {
        return label;
    }

    let ranked = score.ranked();
    let (primary, secondary) = (ranked[0], ranked[1]);

    if primary.value >= DOMINANT_PRIMARY_MIN && secondary.value < DOMINANT_SECONDARY_MAX {
        return dominant_type(primary.axis);
    }

    if primary.value >= STRONG_PRIMARY_MIN && secondary.value >= STRONG_SECONDARY_MIN {
        if let Some(label) = strong_blend(primary.axis, secondary.axis) {
            return label;
        }
    }

    if primary.value >= MODERATE_PRIMARY_MIN && secondary.value > MODERATE_SECONDARY_FLOOR {
        if let Some(label) = moderate_blend(primary.axis, secondary.axis) {
            return label;
        }
    }

    PersonalityType::BalancedProfessional
}

/// Axis-pair combinations with historically assigned names.
fn special_override(score: &DiscScore) -> Option<PersonalityType> {
    if score.blue >= 50.0 && score.red >= 30.0 {
        return Some(PersonalityType::StrategicPerfectionist);
    }
    if score.green >= 70.0 {
        return Some(PersonalityType::SteadfastAnchor);
    }
    None
}

fn dominant_type(axis: DiscAxis) -> PersonalityType {
    match axis {
        DiscAxis::Red => PersonalityType::ResultsDynamo,
        DiscAxis::Yellow => PersonalityType::SocialButterfly,
        DiscAxis::Green => PersonalityType::SteadySupporter,
        DiscAxis::Blue => PersonalityType::QualityGuardian,
    }
}

/// Ordered (primary, secondary) table. Red/yellow and yellow/blue are mirrored on purpose.
fn strong_blend(primary: DiscAxis, secondary: DiscAxis) -> Option<PersonalityType> {
    use DiscAxis::*;
    let label = match (primary, secondary) {
        (Red, Yellow) | (Yellow, Red) => PersonalityType::DynamicMotivator,
        (Red, Green) => PersonalityType::SteadyDriver,
        (Red, Blue) => PersonalityType::StrategicAchiever,
        (Yellow, Green) => PersonalityType::SupportiveConnector,
        (Yellow, Blue) | (Blue, Yellow) => PersonalityType::CreativeAnalyst,
        (Green, Red) => PersonalityType::DeterminedStabilizer,
        (Green, Yellow) => PersonalityType::CollaborativeFacilitator,
        (Green, Blue) => PersonalityType::ReliableSpecialist,
        (Blue, Red) => PersonalityType::PrecisionDriver,
        (Blue, Green) => PersonalityType::MethodicalPlanner,
        _ => return None,
    };
    Some(label)
}

fn moderate_blend(primary: DiscAxis, secondary: DiscAxis) -> Option<PersonalityType> {
    use DiscAxis::*;
    let label = match (primary, secondary) {
        (Red, Yellow) => PersonalityType::EnergeticLeader,
        (Red, Green) => PersonalityType::GroundedAchiever,
        (Red, Blue) => PersonalityType::AnalyticalChallenger,
        (Yellow, Red) => PersonalityType::PersuasiveInfluencer,
        (Yellow, Green) => PersonalityType::TeamHarmonizer,
        (Yellow, Blue) => PersonalityType::InsightfulCommunicator,
        (Green, Red) => PersonalityType::DependableDoer,
        (Green, Yellow) => PersonalityType::EmpatheticCollaborator,
        (Green, Blue) => PersonalityType::CarefulSupporter,
        (Blue, Red) => PersonalityType::SystematicProblemSolver,
        (Blue, Yellow) => PersonalityType::ThoughtfulPresenter,
        (Blue, Green) => PersonalityType::DiligentAnalyst,
        _ => return None,
    };
    Some(label)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
