//! Viewer-specific profile assembly.
//!
//! Joins the classifier label, its catalog bundle and the dynamic strengths
//! into one JSON-ready view. Job seekers read the first-person copy, and
//! employers read the third-person copy personalized for the subject.

use serde::{Deserialize, Serialize};

use crate::profile::catalog::{ProfileCatalog, ProfileContent, RoleTypes, TextBlock, WorkEnvironment};
use crate::profile::classifier::classify;
use crate::profile::disc::DiscScore;
use crate::profile::personalizer::{personalize_for, SubjectGender};
use crate::profile::strengths::{generate_strengths, KeyStrength};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    JobSeeker,
    #[default]
    Employer,
    Admin,
}

/// Who is looking at the profile and who it describes. Built per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronounContext {
    #[serde(default)]
    pub viewer_role: ViewerRole,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub subject_gender: SubjectGender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub personality_type: String,
    pub emoji: String,
    pub brief_summary: String,
    pub communication_style: TextBlock,
    pub decision_making_style: TextBlock,
    pub career_motivators: Vec<String>,
    pub work_style_strengths: Vec<String>,
    pub ideal_work_environment: WorkEnvironment,
    pub compatible_role_types: RoleTypes,
    pub key_strengths: Vec<KeyStrength>,
    pub blurb: String,
    pub dynamic_strengths: Vec<KeyStrength>,
    pub disc: DiscScore,
}

pub fn build_profile_view(
    score: &DiscScore,
    catalog: &ProfileCatalog,
    ctx: &PronounContext,
) -> ProfileView {
    let personality_type = classify(score);
    let content = catalog.lookup_type(personality_type);
    let (key_strengths, blurb) = voice_for(content, ctx);

    ProfileView {
        personality_type: personality_type.label().to_string(),
        emoji: content.emoji.clone(),
        brief_summary: content.brief_summary.clone(),
        communication_style: content.communication_style.clone(),
        decision_making_style: content.decision_making_style.clone(),
        career_motivators: content.career_motivators.clone(),
        work_style_strengths: content.work_style_strengths.clone(),
        ideal_work_environment: content.ideal_work_environment.clone(),
        compatible_role_types: content.compatible_role_types.clone(),
        key_strengths,
        blurb,
        dynamic_strengths: generate_strengths(score),
        disc: *score,
    }
}

/// Key strengths and blurb in the voice the viewer should read.
fn voice_for(content: &ProfileContent, ctx: &PronounContext) -> (Vec<KeyStrength>, String) {
    let blurb = content.behavioral_blurb.as_ref();

    let (strengths, text) = match ctx.viewer_role {
        ViewerRole::JobSeeker => (
            content.job_seeker_key_strengths.clone(),
            blurb.map(|b| b.job_seeker.clone()),
        ),
        ViewerRole::Employer => {
            let name = ctx.subject_name.as_deref().unwrap_or_default();
            let personalize = |text: &str| personalize_for(text, name, ctx.subject_gender);
            let strengths = content
                .employer_key_strengths
                .iter()
                .map(|s| KeyStrength {
                    title: s.title.clone(),
                    description: personalize(&s.description),
                })
                .collect();
            (strengths, blurb.map(|b| personalize(&b.employer)))
        }
        ViewerRole::Admin => (
            content.employer_key_strengths.clone(),
            blurb.map(|b| b.employer.clone()),
        ),
    };

    (strengths, text.unwrap_or_else(|| content.brief_summary.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::classifier::PersonalityType;

    fn facilitator() -> DiscScore {
        DiscScore::new(18.0, 25.0, 52.0, 5.0)
    }

    fn ctx(role: ViewerRole, name: Option<&str>, gender: SubjectGender) -> PronounContext {
        PronounContext {
            viewer_role: role,
            subject_name: name.map(str::to_string),
            subject_gender: gender,
        }
    }

    #[test]
    fn test_job_seeker_reads_first_person() {
        let catalog = ProfileCatalog::embedded().unwrap();
        let view = build_profile_view(
            &facilitator(),
            &catalog,
            &ctx(ViewerRole::JobSeeker, Some("Priya Singh"), SubjectGender::She),
        );
        assert_eq!(
            view.personality_type,
            PersonalityType::CollaborativeFacilitator.label()
        );
        assert!(view.blurb.starts_with("You bring"));
        assert!(view.key_strengths[0].description.starts_with("You"));
    }

    #[test]
    fn test_employer_reads_personalized_third_person() {
        let catalog = ProfileCatalog::embedded().unwrap();
        let view = build_profile_view(
            &facilitator(),
            &catalog,
            &ctx(ViewerRole::Employer, Some("Priya Singh"), SubjectGender::She),
        );
        assert!(view.blurb.starts_with("Priya brings patience"), "{}", view.blurb);
        assert!(view.blurb.contains("Her calm facilitation makes her"));
        assert_eq!(
            view.key_strengths[0].description,
            "She helps groups reach decisions together."
        );
    }

    #[test]
    fn test_admin_reads_unpersonalized_employer_voice() {
        let catalog = ProfileCatalog::embedded().unwrap();
        let view = build_profile_view(
            &facilitator(),
            &catalog,
            &ctx(ViewerRole::Admin, Some("Priya Singh"), SubjectGender::She),
        );
        assert!(view.blurb.starts_with("They bring"));
    }

    #[test]
    fn test_neutral_employer_view_matches_admin() {
        let catalog = ProfileCatalog::embedded().unwrap();
        let employer = build_profile_view(
            &facilitator(),
            &catalog,
            &ctx(ViewerRole::Employer, Some("Sam Doe"), SubjectGender::They),
        );
        let admin = build_profile_view(
            &facilitator(),
            &catalog,
            &ctx(ViewerRole::Admin, None, SubjectGender::They),
        );
        assert_eq!(employer, admin);
    }

    #[test]
    fn test_dynamic_strengths_and_raw_score_included() {
        let catalog = ProfileCatalog::embedded().unwrap();
        let score = DiscScore::new(80.0, 10.0, 5.0, 5.0);
        let view = build_profile_view(&score, &catalog, &PronounContext::default());
        assert_eq!(view.dynamic_strengths, generate_strengths(&score));
        assert_eq!(view.disc, score);
    }

    #[test]
    fn test_missing_blurb_falls_back_to_brief_summary() {
        let json = serde_json::json!([{
            "label": "default",
            "content": {
                "emoji": "🧭",
                "briefSummary": "Adapts to the team.",
                "communicationStyle": { "kind": "plain", "text": "Direct." },
                "decisionMakingStyle": { "kind": "plain", "text": "Balanced." },
                "careerMotivators": ["Growth"],
                "workStyleStrengths": ["Focus"],
                "idealWorkEnvironment": { "kind": "plain", "text": "Any." },
                "compatibleRoleTypes": { "kind": "names", "names": ["Generalist"] },
                "jobSeekerKeyStrengths": [{ "title": "Focus", "description": "You focus." }],
                "employerKeyStrengths": [{ "title": "Focus", "description": "They focus." }]
            }
        }]);
        let catalog = ProfileCatalog::from_json(&json.to_string()).unwrap();
        let view = build_profile_view(
            &DiscScore::default(),
            &catalog,
            &ctx(ViewerRole::Employer, Some("Marcus"), SubjectGender::He),
        );
        assert_eq!(view.blurb, "Adapts to the team.");
        assert_eq!(view.key_strengths[0].description, "He focuses.");
    }

    #[test]
    fn test_pronoun_context_deserializes_from_camel_case() {
        let ctx: PronounContext = serde_json::from_str(
            r#"{ "viewerRole": "job_seeker", "subjectName": "Priya", "subjectGender": "she" }"#,
        )
        .unwrap();
        assert_eq!(ctx.viewer_role, ViewerRole::JobSeeker);
        assert_eq!(ctx.subject_gender, SubjectGender::She);

        let empty: PronounContext = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PronounContext::default());
    }
}
