use super::super::domain::{ApplicantProfile, ResolvedAnswers};
use super::super::questionnaire::{QuestionRole, Questionnaire};
use super::super::signals::{
    declared_years, is_substantive, keyword_hit, numeric_years, tri_state, TriState,
};
use super::config::EvaluationConfig;
use super::policy::{Disqualifier, Highlight};

/// Certification answers that mean "nothing to report" even when they contain a keyword.
const EMPTY_CERTIFICATION_ANSWERS: [&str; 3] = ["no", "none", "n/a"];

/// Typed evidence gathered once per application before any rule runs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScreeningSignals<'a> {
    pub work_authorization: TriState,
    pub criminal_history: TriState,
    pub drug_screen: TriState,
    pub drivers_license: TriState,
    pub declared_years: f64,
    pub reported_years: u32,
    pub reported_experience: TriState,
    pub title_keyword: Option<&'a str>,
    pub company_keyword: Option<&'a str>,
    pub certification_keyword: Option<&'a str>,
    pub substantive_description: bool,
}

pub(crate) fn collect_signals<'a>(
    profile: &ApplicantProfile,
    answers: &ResolvedAnswers,
    questionnaire: &Questionnaire,
    config: &'a EvaluationConfig,
) -> ScreeningSignals<'a> {
    let answer = |role: QuestionRole| {
        questionnaire
            .question(role)
            .and_then(|question| answers.text(question))
    };

    let experience = answer(QuestionRole::ExperienceYears);
    let certifications = answer(QuestionRole::Certifications);

    let certification_keyword = match certifications {
        Some(text)
            if tri_state(Some(text)) != TriState::No
                && !EMPTY_CERTIFICATION_ANSWERS
                    .iter()
                    .any(|empty| text.trim().eq_ignore_ascii_case(empty)) =>
        {
            keyword_hit(Some(text), &config.certification_keywords)
        }
        _ => None,
    };

    ScreeningSignals {
        work_authorization: tri_state(profile.work_authorization.as_deref()),
        criminal_history: tri_state(answer(QuestionRole::CriminalHistory)),
        drug_screen: tri_state(answer(QuestionRole::DrugScreen)),
        drivers_license: tri_state(answer(QuestionRole::DriversLicense)),
        declared_years: declared_years(profile.years_of_experience.as_deref()),
        reported_years: numeric_years(experience),
        reported_experience: tri_state(experience),
        title_keyword: keyword_hit(profile.recent_title.as_deref(), &config.background_keywords),
        company_keyword: keyword_hit(
            profile.recent_employer.as_deref(),
            &config.background_keywords,
        ),
        certification_keyword,
        substantive_description: is_substantive(
            answer(QuestionRole::RoleDescription),
            config.min_description_chars,
        ),
    }
}

pub(crate) type DisqualifyingRule = fn(&ScreeningSignals<'_>) -> Option<Disqualifier>;
pub(crate) type HighlightRule = fn(&ScreeningSignals<'_>) -> Option<Highlight>;

/// Disqualifying checks in reporting order. Every rule runs; none short-circuits.
pub(crate) const DISQUALIFYING_RULES: [DisqualifyingRule; 6] = [
    work_authorization_denied,
    criminal_history_disclosed,
    drug_screen_refused,
    drivers_license_missing,
    experience_missing,
    background_missing,
];

/// Positive-evidence checks in reporting order.
pub(crate) const HIGHLIGHT_RULES: [HighlightRule; 6] = [
    declared_experience,
    reported_experience,
    relevant_title,
    relevant_employer,
    certification_held,
    description_provided,
];

fn work_authorization_denied(signals: &ScreeningSignals<'_>) -> Option<Disqualifier> {
    (signals.work_authorization == TriState::No).then_some(Disqualifier::NoWorkAuthorization)
}

fn criminal_history_disclosed(signals: &ScreeningSignals<'_>) -> Option<Disqualifier> {
    (signals.criminal_history == TriState::Yes).then_some(Disqualifier::CriminalHistory)
}

fn drug_screen_refused(signals: &ScreeningSignals<'_>) -> Option<Disqualifier> {
    (signals.drug_screen == TriState::No).then_some(Disqualifier::FailsDrugScreen)
}

fn drivers_license_missing(signals: &ScreeningSignals<'_>) -> Option<Disqualifier> {
    (signals.drivers_license == TriState::No).then_some(Disqualifier::NoDriversLicense)
}

fn experience_missing(signals: &ScreeningSignals<'_>) -> Option<Disqualifier> {
    let declared_none = signals.declared_years <= 0.0;
    let reported_none =
        signals.reported_years == 0 || signals.reported_experience == TriState::No;

    (declared_none && reported_none).then_some(Disqualifier::NoExperience)
}

fn background_missing(signals: &ScreeningSignals<'_>) -> Option<Disqualifier> {
    let any_background = signals.title_keyword.is_some()
        || signals.company_keyword.is_some()
        || signals.certification_keyword.is_some()
        || signals.substantive_description;

    (!any_background).then_some(Disqualifier::NoRelevantBackground)
}

fn declared_experience(signals: &ScreeningSignals<'_>) -> Option<Highlight> {
    (signals.declared_years > 0.0).then(|| Highlight::DeclaredExperience {
        years: signals.declared_years,
    })
}

fn reported_experience(signals: &ScreeningSignals<'_>) -> Option<Highlight> {
    (signals.reported_years > 0).then(|| Highlight::ReportedExperience {
        years: signals.reported_years,
    })
}

fn relevant_title(signals: &ScreeningSignals<'_>) -> Option<Highlight> {
    signals.title_keyword.map(|keyword| Highlight::RelevantTitle {
        keyword: keyword.to_string(),
    })
}

fn relevant_employer(signals: &ScreeningSignals<'_>) -> Option<Highlight> {
    signals.company_keyword.map(|keyword| Highlight::RelevantEmployer {
        keyword: keyword.to_string(),
    })
}

fn certification_held(signals: &ScreeningSignals<'_>) -> Option<Highlight> {
    signals
        .certification_keyword
        .map(|keyword| Highlight::Certification {
            keyword: keyword.to_string(),
        })
}

fn description_provided(signals: &ScreeningSignals<'_>) -> Option<Highlight> {
    signals
        .substantive_description
        .then_some(Highlight::SubstantiveDescription)
}
