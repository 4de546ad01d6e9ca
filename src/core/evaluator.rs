use crate::models::{RiskEvaluation, Symptom, SymptomsQuestionnaire};
use crate::core::isolation::isolation_end_date;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur while evaluating a symptom selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("date selection window must be positive, got {0} days")]
    InvalidWindow(i64),

    #[error("isolation end date is out of range: {reference_date} + {window} days")]
    DateOutOfRange {
        reference_date: NaiveDate,
        window: i64,
    },
}

/// Scores a symptom selection against a questionnaire
///
/// # Decision
/// 1. Aggregate score: sum of `riskWeight` over catalog symptoms present in
///    the selection, each counted once
/// 2. At risk when the score reaches the threshold (`score >= threshold`)
/// 3. Isolation ends `dateSelectionWindow` days after the reference date
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEvaluator;

impl RiskEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a selection of symptoms
    ///
    /// Symptoms are identified by their place in the catalog, so `selected`
    /// must borrow from `questionnaire`. Anything else contributes nothing,
    /// even an equal copy. Pure: the same inputs always give the same result.
    pub fn evaluate<'a, I>(
        &self,
        questionnaire: &SymptomsQuestionnaire,
        selected: I,
        reference_date: NaiveDate,
    ) -> Result<RiskEvaluation, EvaluationError>
    where
        I: IntoIterator<Item = &'a Symptom>,
    {
        let positions: BTreeSet<usize> = selected
            .into_iter()
            .filter_map(|symptom| position_of(questionnaire, symptom))
            .collect();

        self.evaluate_positions(questionnaire, &positions, reference_date)
    }

    /// Evaluate a selection given as catalog positions
    ///
    /// Returns `None` from the outer option when an index is out of range.
    pub fn evaluate_indices(
        &self,
        questionnaire: &SymptomsQuestionnaire,
        indices: &[usize],
        reference_date: NaiveDate,
    ) -> Option<Result<RiskEvaluation, EvaluationError>> {
        if indices.iter().any(|&i| i >= questionnaire.symptoms().len()) {
            return None;
        }

        let positions: BTreeSet<usize> = indices.iter().copied().collect();
        Some(self.evaluate_positions(questionnaire, &positions, reference_date))
    }

    fn evaluate_positions(
        &self,
        questionnaire: &SymptomsQuestionnaire,
        positions: &BTreeSet<usize>,
        reference_date: NaiveDate,
    ) -> Result<RiskEvaluation, EvaluationError> {
        let isolation_end_date =
            isolation_end_date(reference_date, questionnaire.date_selection_window())?;

        let aggregate_score = aggregate_score(questionnaire, positions);

        Ok(RiskEvaluation {
            is_at_risk: aggregate_score >= questionnaire.risk_threshold(),
            aggregate_score,
            isolation_end_date,
        })
    }
}

/// Catalog position of a symptom borrowed from `questionnaire`
fn position_of(questionnaire: &SymptomsQuestionnaire, symptom: &Symptom) -> Option<usize> {
    questionnaire
        .symptoms()
        .iter()
        .position(|candidate| std::ptr::eq(candidate, symptom))
}

/// Sum of weights at the selected catalog positions
///
/// A set of positions counts each symptom once and sums in catalog order.
fn aggregate_score(questionnaire: &SymptomsQuestionnaire, positions: &BTreeSet<usize>) -> f64 {
    positions
        .iter()
        .filter_map(|&i| questionnaire.symptom(i))
        .map(Symptom::risk_weight)
        .fold(0.0, |total, weight| total + weight)
}
