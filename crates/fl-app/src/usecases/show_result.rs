//! Use case for showing the latest analysis result
//! 展示最近一次分析结果的用例

use tracing::{debug, info_span, Instrument};

use fl_core::{AnalysisResult, ContentLocator};

use crate::store::AnalysisStore;

/// One labelled value, already formatted with its unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

impl ResultRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Read-only projection of an [`AnalysisResult`] for the result view.
///
/// ## Sections / 分区
/// - Portion information: portion and serving size in grams
/// - Nutrition facts: calories without unit, sodium and cholesterol in mg,
///   everything else in grams
/// - Additional notes, in service order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResultView {
    pub title: String,
    pub image: Option<ContentLocator>,
    pub portion: Vec<ResultRow>,
    pub nutrition: Vec<ResultRow>,
    pub notes: Vec<String>,
}

impl From<&AnalysisResult> for AnalysisResultView {
    fn from(result: &AnalysisResult) -> Self {
        let facts = &result.nutrition_facts_per_portion;
        Self {
            title: result.identified_food.clone(),
            image: result.image.clone(),
            portion: vec![
                ResultRow::new("Portion Size", grams(result.portion_size)),
                ResultRow::new("Serving Size", grams(result.recognized_serving_size)),
            ],
            nutrition: vec![
                ResultRow::new("Calories", facts.calories.to_string()),
                ResultRow::new("Protein", grams(facts.protein)),
                ResultRow::new("Carbs", grams(facts.carbs)),
                ResultRow::new("Fat", grams(facts.fat)),
                ResultRow::new("Fiber", grams(facts.fiber)),
                ResultRow::new("Sugar", grams(facts.sugar)),
                ResultRow::new("Sodium", milligrams(facts.sodium)),
                ResultRow::new("Cholesterol", milligrams(facts.cholesterol)),
            ],
            notes: result.additional_notes.clone(),
        }
    }
}

fn grams(value: f64) -> String {
    format!("{value}g")
}

fn milligrams(value: f64) -> String {
    format!("{value}mg")
}

/// Use case for reading the analysis slot.
///
/// ## Behavior / 行为
/// - Empty store: returns `None`, the view renders nothing
/// - Otherwise projects the stored result; the store is not modified
pub struct ShowAnalysisResult {
    store: AnalysisStore,
}

impl ShowAnalysisResult {
    pub fn new(store: AnalysisStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Option<AnalysisResultView> {
        let span = info_span!("usecase.show_analysis_result.execute");

        async {
            let Some(result) = self.store.get().await else {
                debug!("no analysis result to show");
                return None;
            };
            debug!(food = %result.identified_food, "projecting analysis result");
            Some(AnalysisResultView::from(&result))
        }
        .instrument(span)
        .await
    }
}
