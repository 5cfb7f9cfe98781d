//! Analysis result domain model.
//!
//! Field names follow the analysis service payload (camelCase on the wire).

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::image::ContentLocator;

/// `null` decodes to the type's default instead of failing the whole payload.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accepts numbers, numeric strings and `null`; anything else reads as zero.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Number(n)) => n,
        Some(LooseNumber::Text(text)) => text.trim().parse().unwrap_or_default(),
        Some(LooseNumber::Other(_)) | None => 0.0,
    })
}

/// Nutrition facts for the analysed portion.
///
/// Units are implied by the field: `calories` in kcal, `sodium` and
/// `cholesterol` in milligrams, everything else in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fiber: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sugar: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sodium: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cholesterol: f64,
}

/// Structured outcome of a food analysis.
///
/// 食物分析结果。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub identified_food: String,

    /// Grams.
    #[serde(default, deserialize_with = "lenient_number")]
    pub portion_size: f64,

    /// Grams.
    #[serde(default, deserialize_with = "lenient_number")]
    pub recognized_serving_size: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrition_facts_per_portion: NutritionFacts,

    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_notes: Vec<String>,

    /// Locator of the originating image. Attached by the capture flow, never
    /// read from the service response.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub image: Option<ContentLocator>,
}

impl AnalysisResult {
    /// Whether the payload names an actual food item.
    pub fn is_recognizable(&self) -> bool {
        !self.identified_food.trim().is_empty()
    }

    /// Returns the result with the originating image locator attached.
    pub fn with_image(mut self, locator: ContentLocator) -> Self {
        self.image = Some(locator);
        self
    }
}
