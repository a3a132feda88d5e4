//! End-to-end derivations through the public library API.

use matchwell::assessment::questionnaire::{QuestionBank, QuestionnaireForm};
use matchwell::assessment::scoring::{assess, Answer, Polarity};
use matchwell::profile::catalog::ProfileCatalog;
use matchwell::profile::classifier::{classify, PersonalityType};
use matchwell::profile::disc::DiscScore;
use matchwell::profile::personalizer::{personalize, SubjectGender};
use matchwell::profile::strengths::generate_strengths;
use matchwell::profile::view::{build_profile_view, PronounContext, ViewerRole};

#[test]
fn test_green_yellow_blend_reaches_full_bundle() {
    let catalog = ProfileCatalog::embedded().unwrap();
    let score = DiscScore::new(18.0, 25.0, 52.0, 5.0);

    let label = classify(&score);
    assert_eq!(label, PersonalityType::CollaborativeFacilitator);

    let content = catalog.lookup_type(label);
    assert!(catalog.contains(label.label()));
    assert_ne!(content, catalog.default_content());
    assert!(content.is_complete());
    let blurb = content.behavioral_blurb.as_ref().unwrap();
    assert!(!blurb.job_seeker.is_empty());
    assert!(!blurb.employer.is_empty());
}

#[test]
fn test_pure_red_label_and_independent_strengths() {
    let score = DiscScore::new(80.0, 10.0, 5.0, 5.0);
    assert_eq!(classify(&score), PersonalityType::ResultsDynamo);

    let titles: Vec<_> = generate_strengths(&score)
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Results-Driven Leader", "Change Agent", "Goal-Oriented Achiever"]
    );
}

#[test]
fn test_unknown_label_gets_default_bundle() {
    let catalog = ProfileCatalog::embedded().unwrap();
    let content = catalog.lookup("Definitely Not A Type");
    assert_eq!(content, catalog.default_content());
    assert!(content.is_complete());
}

#[test]
fn test_personalizer_example() {
    assert_eq!(
        personalize(
            "They bring a strategic mindset. Their approach helps teams.",
            "Priya Singh",
            Some("she/her"),
        ),
        "Priya brings a strategic mindset. Her approach helps teams."
    );
}

#[test]
fn test_questionnaire_to_employer_view() {
    let bank = QuestionBank::embedded().unwrap();
    let catalog = ProfileCatalog::embedded().unwrap();

    // "Most like me" = the green choice everywhere, "least" = the red one
    let answers: Vec<Answer> = bank
        .questions(QuestionnaireForm::Short)
        .flat_map(|q| {
            [
                Answer {
                    question_id: q.id.clone(),
                    choice: "c".to_string(),
                    polarity: Polarity::Most,
                },
                Answer {
                    question_id: q.id.clone(),
                    choice: "a".to_string(),
                    polarity: Polarity::Least,
                },
            ]
        })
        .collect();

    let result = assess(&bank, QuestionnaireForm::Short, &answers);
    assert_eq!(result.valid, 30);
    assert_eq!(result.diagnostics.validity, 100.0);

    let view = build_profile_view(
        &result.disc,
        &catalog,
        &PronounContext {
            viewer_role: ViewerRole::Employer,
            subject_name: Some("Marcus Lee".to_string()),
            subject_gender: SubjectGender::He,
        },
    );
    assert_eq!(view.personality_type, classify(&result.disc).label());
    assert_eq!(view.disc, result.disc);
    assert!(!view.blurb.contains("They "), "{}", view.blurb);
}
