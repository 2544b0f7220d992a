use crate::error::ClassifyError;
use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One (label, confidence) pair from the classification service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

impl Prediction {
    pub fn percentage(&self) -> f32 {
        self.score * 100.0
    }
}

/// Predictions in the order the service ranked them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionResult(Vec<Prediction>);

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Vec<Prediction>,
}

impl PredictionResult {
    /// Decodes a `{"predictions": [{"label", "score"}, ...]}` body.
    ///
    /// Scores must be finite and within `[0, 1]`; anything else is treated as
    /// a malformed response rather than trusted.
    pub fn from_json(body: &str) -> Result<Self, ClassifyError> {
        let response: PredictResponse =
            serde_json::from_str(body).map_err(|e| ClassifyError::Parse(e.to_string()))?;

        if let Some(bad) = response
            .predictions
            .iter()
            .find(|p| !p.score.is_finite() || !(0.0..=1.0).contains(&p.score))
        {
            return Err(ClassifyError::Parse(format!(
                "score {} for \"{}\" is outside [0, 1]",
                bad.score, bad.label
            )));
        }

        Ok(Self(response.predictions))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prediction> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Prediction] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PredictionResult {
    type Item = &'a Prediction;
    type IntoIter = std::slice::Iter<'a, Prediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The seven measurements the recommendation form collects.
///
/// The string form matches the `name` attribute of the form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum FieldName {
    #[strum(serialize = "N")]
    N,
    #[strum(serialize = "P")]
    P,
    #[strum(serialize = "K")]
    K,
    #[strum(serialize = "temperature")]
    Temperature,
    #[strum(serialize = "humidity")]
    Humidity,
    #[strum(serialize = "ph")]
    Ph,
    #[strum(serialize = "rainfall")]
    Rainfall,
}

impl FieldName {
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldName::N => "Nitrogen (N)",
            FieldName::P => "Phosphorus (P)",
            FieldName::K => "Potassium (K)",
            FieldName::Temperature => "Temperature",
            FieldName::Humidity => "Humidity",
            FieldName::Ph => "pH",
            FieldName::Rainfall => "Rainfall",
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            FieldName::N | FieldName::P | FieldName::K => Some("ppm"),
            FieldName::Temperature => Some("°C"),
            FieldName::Humidity => Some("%"),
            FieldName::Ph => None,
            FieldName::Rainfall => Some("mm"),
        }
    }

    pub fn form_label(&self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({})", self.display_name(), unit),
            None => self.display_name().to_string(),
        }
    }

    /// Renders `value` with its unit the way the prompt expects it
    /// (`90 ppm`, `20.5°C`, `80%`).
    pub fn with_unit(&self, value: &str) -> String {
        match self.unit() {
            Some(unit @ ("°C" | "%")) => format!("{value}{unit}"),
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::N => "e.g., 90",
            FieldName::P => "e.g., 42",
            FieldName::K => "e.g., 43",
            FieldName::Temperature => "e.g., 20.88",
            FieldName::Humidity => "e.g., 82.00",
            FieldName::Ph => "e.g., 6.50",
            FieldName::Rainfall => "e.g., 202.94",
        }
    }

    /// Numeric input step; nutrient readings are whole numbers.
    pub fn step(&self) -> Option<&'static str> {
        match self {
            FieldName::N | FieldName::P | FieldName::K => None,
            _ => Some("0.01"),
        }
    }
}

/// Raw form text for each measurement. Values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputParameters {
    pub n: String,
    pub p: String,
    pub k: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
}

impl InputParameters {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::N => &self.n,
            FieldName::P => &self.p,
            FieldName::K => &self.k,
            FieldName::Temperature => &self.temperature,
            FieldName::Humidity => &self.humidity,
            FieldName::Ph => &self.ph,
            FieldName::Rainfall => &self.rainfall,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::N => &mut self.n,
            FieldName::P => &mut self.p,
            FieldName::K => &mut self.k,
            FieldName::Temperature => &mut self.temperature,
            FieldName::Humidity => &mut self.humidity,
            FieldName::Ph => &mut self.ph,
            FieldName::Rainfall => &mut self.rainfall,
        };
        *slot = value;
    }

    /// First field (in form order) that is still blank.
    pub fn first_missing(&self) -> Option<FieldName> {
        use strum::IntoEnumIterator;
        FieldName::iter().find(|field| self.get(*field).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_predictions_in_received_order() {
        let body = r#"{"predictions":[{"label":"Leaf Blight","score":0.87},{"label":"Healthy","score":0.13}]}"#;
        let result = PredictionResult::from_json(body).unwrap();

        let labels: Vec<&str> = result.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Leaf Blight", "Healthy"]);
        assert_eq!(result.as_slice()[0].score, 0.87);
        assert_eq!(result.as_slice()[1].score, 0.13);
    }

    #[test]
    fn rejects_body_without_predictions() {
        let err = PredictionResult::from_json(r#"{"detail":"oops"}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse response:"));
    }

    #[test]
    fn rejects_scores_outside_unit_interval() {
        let body = r#"{"predictions":[{"label":"Rust","score":1.5}]}"#;
        let err = PredictionResult::from_json(body).unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(PredictionResult::from_json("<html>502</html>").is_err());
    }

    #[test]
    fn empty_prediction_list_is_accepted() {
        let result = PredictionResult::from_json(r#"{"predictions":[]}"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn field_names_round_trip_through_form_names() {
        let names: Vec<String> = FieldName::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            vec!["N", "P", "K", "temperature", "humidity", "ph", "rainfall"]
        );
        for field in FieldName::iter() {
            assert_eq!(FieldName::from_str(field.as_ref()).unwrap(), field);
        }
        assert!(FieldName::from_str("moisture").is_err());
    }

    #[test]
    fn units_render_like_the_form() {
        assert_eq!(FieldName::N.form_label(), "Nitrogen (N) (ppm)");
        assert_eq!(FieldName::Temperature.with_unit("20.5"), "20.5°C");
        assert_eq!(FieldName::Humidity.with_unit("80"), "80%");
        assert_eq!(FieldName::Rainfall.with_unit("202.94"), "202.94 mm");
        assert_eq!(FieldName::Ph.with_unit("6.5"), "6.5");
    }

    #[test]
    fn first_missing_follows_form_order() {
        let mut inputs = InputParameters::default();
        assert_eq!(inputs.first_missing(), Some(FieldName::N));
        for field in FieldName::iter() {
            inputs.set(field, "1".into());
        }
        inputs.set(FieldName::Humidity, "  ".into());
        assert_eq!(inputs.first_missing(), Some(FieldName::Humidity));
    }
}
