use crate::models::localized::LocalizedTextMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected risk weight (negative or not a finite number)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("risk weight must be a finite, non-negative number, got {0}")]
pub struct InvalidRiskWeight(pub f64);

/// One entry of the symptom catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symptom {
    title: LocalizedTextMap,
    description: LocalizedTextMap,
    #[serde(rename = "riskWeight")]
    risk_weight: f64,
}

impl Symptom {
    pub fn new(
        title: LocalizedTextMap,
        description: LocalizedTextMap,
        risk_weight: f64,
    ) -> Result<Self, InvalidRiskWeight> {
        if !risk_weight.is_finite() || risk_weight < 0.0 {
            return Err(InvalidRiskWeight(risk_weight));
        }

        Ok(Self {
            title,
            description,
            risk_weight,
        })
    }

    pub fn title(&self) -> &LocalizedTextMap {
        &self.title
    }

    pub fn description(&self) -> &LocalizedTextMap {
        &self.description
    }

    pub fn risk_weight(&self) -> f64 {
        self.risk_weight
    }
}

/// Decoded symptom catalog
///
/// Equality is structural, symptom order included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomsQuestionnaire {
    symptoms: Vec<Symptom>,
    #[serde(rename = "riskThreshold")]
    risk_threshold: f64,
    #[serde(rename = "symptomsOnsetWindowDays")]
    date_selection_window: i64,
}

impl SymptomsQuestionnaire {
    pub fn new(symptoms: Vec<Symptom>, risk_threshold: f64, date_selection_window: i64) -> Self {
        Self {
            symptoms,
            risk_threshold,
            date_selection_window,
        }
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Symptom at a catalog position
    pub fn symptom(&self, index: usize) -> Option<&Symptom> {
        self.symptoms.get(index)
    }

    pub fn risk_threshold(&self) -> f64 {
        self.risk_threshold
    }

    /// Length in days of the window used to compute the isolation end date
    pub fn date_selection_window(&self) -> i64 {
        self.date_selection_window
    }
}

/// Outcome of scoring a symptom selection against a questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEvaluation {
    #[serde(rename = "isAtRisk")]
    pub is_at_risk: bool,
    #[serde(rename = "aggregateScore")]
    pub aggregate_score: f64,
    #[serde(rename = "isolationEndDate")]
    pub isolation_end_date: chrono::NaiveDate,
}

/// Where an isolation end date sits relative to the current date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolationStatus {
    Passed,
    Upcoming,
}
