//! Strength Generator — derives 1–3 key strengths straight from the raw DISC score.
//!
//! Deliberately independent of `classifier::classify`: both read the same score
//! through different rule tables and are allowed to disagree. Do not route one
//! through the other.

use serde::{Deserialize, Serialize};

use crate::profile::disc::DiscScore;

/// Maximum number of strengths returned.
pub const MAX_STRENGTHS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStrength {
    pub title: String,
    pub description: String,
}

impl KeyStrength {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Branches are evaluated in order; the first matching branch supplies the list.
pub fn generate_strengths(score: &DiscScore) -> Vec<KeyStrength> {
    let DiscScore {
        red,
        yellow,
        green,
        blue,
    } = *score;

    let mut strengths = Vec::with_capacity(MAX_STRENGTHS);

    if yellow >= 50.0 {
        strengths.push(KeyStrength::new(
            "Natural Communicator",
            "Builds rapport quickly and keeps people informed, engaged and aligned.",
        ));
        if red >= 20.0 {
            strengths.push(KeyStrength::new(
                "Inspiring Leader",
                "Rallies teams around a shared goal and keeps momentum high.",
            ));
        } else {
            strengths.push(KeyStrength::new(
                "Relationship Connector",
                "Brings the right people together and strengthens working relationships.",
            ));
        }
        strengths.push(KeyStrength::new(
            "Creative Problem Solver",
            "Finds fresh angles on problems and is comfortable brainstorming out loud.",
        ));
    } else if red >= 50.0 {
        strengths.push(KeyStrength::new(
            "Results-Driven Leader",
            "Takes ownership of outcomes and pushes decisively toward the finish line.",
        ));
        if blue >= 30.0 {
            strengths.push(KeyStrength::new(
                "Strategic Problem Solver",
                "Pairs urgency with analysis to pick the approach most likely to work.",
            ));
        } else {
            strengths.push(KeyStrength::new(
                "Change Agent",
                "Challenges the status quo and moves quickly when priorities shift.",
            ));
        }
        strengths.push(KeyStrength::new(
            "Goal-Oriented Achiever",
            "Sets ambitious targets and tracks progress against them relentlessly.",
        ));
    } else if blue >= 50.0 {
        strengths.push(KeyStrength::new(
            "Quality Focused",
            "Holds work to a high standard and catches issues before they ship.",
        ));
        strengths.push(KeyStrength::new(
            "Analytical Thinker",
            "Grounds decisions in data, evidence and careful reasoning.",
        ));
        strengths.push(KeyStrength::new(
            "Detail-Oriented Precision",
            "Notices the small inconsistencies that others overlook.",
        ));
    } else if green >= 50.0 {
        strengths.push(KeyStrength::new(
            "Reliable Team Player",
            "Follows through on commitments and is someone the team can count on.",
        ));
        strengths.push(KeyStrength::new(
            "Patient Listener",
            "Gives colleagues room to be heard and responds with empathy.",
        ));
        strengths.push(KeyStrength::new(
            "Consistent Performer",
            "Delivers steady, dependable work over the long haul.",
        ));
    } else if blue >= 40.0 && red >= 30.0 && blue > red {
        strengths.push(KeyStrength::new(
            "Quality-Driven Analyst",
            "Combines high standards with a drive to get things right the first time.",
        ));
        strengths.push(KeyStrength::new(
            "Systematic Approach",
            "Breaks complex work into clear, repeatable steps.",
        ));
        strengths.push(KeyStrength::new(
            "Independent Worker",
            "Works autonomously and needs little supervision to deliver.",
        ));
    } else if red >= 40.0 && blue >= 30.0 && red >= blue - 10.0 {
        strengths.push(KeyStrength::new(
            "Results with Rigor",
            "Drives toward outcomes without cutting corners on quality.",
        ));
        strengths.push(KeyStrength::new(
            "Quality Champion",
            "Raises the bar for the team's output and processes.",
        ));
        strengths.push(KeyStrength::new(
            "Strategic Thinker",
            "Looks beyond the immediate task to long-term impact.",
        ));
    } else {
        strengths.push(KeyStrength::new(
            "Adaptable Professional",
            "Adjusts style to the situation and works well across different teams.",
        ));
        strengths.push(KeyStrength::new(
            "Thoughtful Contributor",
            "Considers multiple perspectives before committing to a course of action.",
        ));
        strengths.push(KeyStrength::new(
            "Versatile Team Member",
            "Comfortable stepping into whatever role the team needs.",
        ));
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}
