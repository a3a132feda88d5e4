//! Legacy classifier — the older "The Rocket Launcher" style labels.
//!
//! Kept as its own function with its own thresholds. It is never consulted by
//! `classifier::classify`; its only job is to reproduce labels already stored on
//! older profile records and to alias them onto the canonical label set so the
//! content catalog can still resolve them.

use serde::{Deserialize, Serialize};

use crate::profile::classifier::PersonalityType;
use crate::profile::disc::{DiscAxis, DiscScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyPersonalityType {
    #[serde(rename = "The Rocket Launcher")]
    RocketLauncher,
    #[serde(rename = "The Spark Plug")]
    SparkPlug,
    #[serde(rename = "The Rock")]
    Rock,
    #[serde(rename = "The Architect")]
    Architect,
    #[serde(rename = "The Strategic Ninja")]
    StrategicNinja,
    #[serde(rename = "The Firestarter")]
    Firestarter,
    #[serde(rename = "The Anchor")]
    Anchor,
    #[serde(rename = "The Diplomat")]
    Diplomat,
    #[serde(rename = "The Inventor")]
    Inventor,
    #[serde(rename = "The Steady Hand")]
    SteadyHand,
    #[serde(rename = "The Chameleon")]
    Chameleon,
}

impl LegacyPersonalityType {
    pub const ALL: [LegacyPersonalityType; 11] = [
        LegacyPersonalityType::RocketLauncher,
        LegacyPersonalityType::SparkPlug,
        LegacyPersonalityType::Rock,
        LegacyPersonalityType::Architect,
        LegacyPersonalityType::StrategicNinja,
        LegacyPersonalityType::Firestarter,
        LegacyPersonalityType::Anchor,
        LegacyPersonalityType::Diplomat,
        LegacyPersonalityType::Inventor,
        LegacyPersonalityType::SteadyHand,
        LegacyPersonalityType::Chameleon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LegacyPersonalityType::RocketLauncher => "The Rocket Launcher",
            LegacyPersonalityType::SparkPlug => "The Spark Plug",
            LegacyPersonalityType::Rock => "The Rock",
            LegacyPersonalityType::Architect => "The Architect",
            LegacyPersonalityType::StrategicNinja => "The Strategic Ninja",
            LegacyPersonalityType::Firestarter => "The Firestarter",
            LegacyPersonalityType::Anchor => "The Anchor",
            LegacyPersonalityType::Diplomat => "The Diplomat",
            LegacyPersonalityType::Inventor => "The Inventor",
            LegacyPersonalityType::SteadyHand => "The Steady Hand",
            LegacyPersonalityType::Chameleon => "The Chameleon",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
    }

    /// Canonical label whose catalog content stands in for this legacy label.
    pub fn canonical_alias(&self) -> PersonalityType {
        match self {
            LegacyPersonalityType::RocketLauncher => PersonalityType::ResultsDynamo,
            LegacyPersonalityType::SparkPlug => PersonalityType::SocialButterfly,
            LegacyPersonalityType::Rock => PersonalityType::SteadySupporter,
            LegacyPersonalityType::Architect => PersonalityType::QualityGuardian,
            LegacyPersonalityType::StrategicNinja => PersonalityType::StrategicAchiever,
            LegacyPersonalityType::Firestarter => PersonalityType::DynamicMotivator,
            LegacyPersonalityType::Anchor => PersonalityType::DeterminedStabilizer,
            LegacyPersonalityType::Diplomat => PersonalityType::CollaborativeFacilitator,
            LegacyPersonalityType::Inventor => PersonalityType::CreativeAnalyst,
            LegacyPersonalityType::SteadyHand => PersonalityType::ReliableSpecialist,
            LegacyPersonalityType::Chameleon => PersonalityType::BalancedProfessional,
        }
    }
}

/// Resolves a stored label that may come from either classifier generation.
pub fn resolve_label(label: &str) -> Option<PersonalityType> {
    PersonalityType::from_label(label)
        .or_else(|| LegacyPersonalityType::from_label(label).map(|l| l.canonical_alias()))
}

/// The older classifier: single-axis at 60+, unordered pairs at 45/25, else The Chameleon.
pub fn classify_legacy(score: &DiscScore) -> LegacyPersonalityType {
    let ranked = score.ranked();
    let (primary, secondary) = (ranked[0], ranked[1]);

    if primary.value >= 60.0 {
        return match primary.axis {
            DiscAxis::Red => LegacyPersonalityType::RocketLauncher,
            DiscAxis::Yellow => LegacyPersonalityType::SparkPlug,
            DiscAxis::Green => LegacyPersonalityType::Rock,
            DiscAxis::Blue => LegacyPersonalityType::Architect,
        };
    }

    if primary.value >= 45.0 && secondary.value >= 25.0 {
        // Unordered: normalize so the canonically earlier axis comes first.
        let pair = if primary.axis <= secondary.axis {
            (primary.axis, secondary.axis)
        } else {
            (secondary.axis, primary.axis)
        };
        return match pair {
            (DiscAxis::Red, DiscAxis::Blue) => LegacyPersonalityType::StrategicNinja,
            (DiscAxis::Red, DiscAxis::Yellow) => LegacyPersonalityType::Firestarter,
            (DiscAxis::Red, DiscAxis::Green) => LegacyPersonalityType::Anchor,
            (DiscAxis::Yellow, DiscAxis::Green) => LegacyPersonalityType::Diplomat,
            (DiscAxis::Yellow, DiscAxis::Blue) => LegacyPersonalityType::Inventor,
            (DiscAxis::Green, DiscAxis::Blue) => LegacyPersonalityType::SteadyHand,
            _ => LegacyPersonalityType::Chameleon,
        };
    }

    LegacyPersonalityType::Chameleon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::classifier::classify;

    #[test]
    fn test_rocket_launcher_for_high_red() {
        let score = DiscScore::new(70.0, 10.0, 10.0, 10.0);
        assert_eq!(classify_legacy(&score), LegacyPersonalityType::RocketLauncher);
    }

    #[test]
    fn test_pairs_are_unordered() {
        let a = DiscScore::new(50.0, 0.0, 0.0, 30.0);
        let b = DiscScore::new(30.0, 0.0, 0.0, 50.0);
        assert_eq!(classify_legacy(&a), LegacyPersonalityType::StrategicNinja);
        assert_eq!(classify_legacy(&b), LegacyPersonalityType::StrategicNinja);
    }

    #[test]
    fn test_everything_else_is_chameleon() {
        assert_eq!(
            classify_legacy(&DiscScore::default()),
            LegacyPersonalityType::Chameleon
        );
        assert_eq!(
            classify_legacy(&DiscScore::new(44.0, 40.0, 0.0, 0.0)),
            LegacyPersonalityType::Chameleon
        );
    }

    #[test]
    fn test_thresholds_differ_from_canonical() {
        // 55/10 is pure dominant red canonically but below the legacy 60 cut-off.
        let score = DiscScore::new(55.0, 10.0, 5.0, 5.0);
        assert_eq!(classify(&score), PersonalityType::ResultsDynamo);
        assert_eq!(classify_legacy(&score), LegacyPersonalityType::Chameleon);
    }

    #[test]
    fn test_resolve_label_accepts_both_generations() {
        assert_eq!(
            resolve_label("The Rocket Launcher"),
            Some(PersonalityType::ResultsDynamo)
        );
        assert_eq!(
            resolve_label("Quality Guardian"),
            Some(PersonalityType::QualityGuardian)
        );
        assert_eq!(resolve_label("the strategic ninja"), Some(PersonalityType::StrategicAchiever));
        assert_eq!(resolve_label("Mystery Type"), None);
    }

    #[test]
    fn test_every_legacy_label_has_an_alias() {
        for legacy in LegacyPersonalityType::ALL {
            assert!(PersonalityType::ALL.contains(&legacy.canonical_alias()));
        }
    }
}
