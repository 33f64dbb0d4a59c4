//! HTTP client for the optimization backend.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::{OptimizationResult, ResultBatch};
use crate::request::SensorReading;

#[derive(Debug, Clone)]
pub struct EvaluationClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl EvaluationClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /evaluate` for one hand-entered sensor. The single result is wrapped
    /// in a one-element batch.
    pub async fn evaluate_single(&self, reading: &SensorReading) -> Result<ResultBatch, FetchError> {
        let url = self.config.endpoint("evaluate");
        info!(%url, vpm = reading.vpm, spd = reading.spd, den = reading.den, "requesting single-sensor optimization");
        let body = self.post(&url, Some(std::slice::from_ref(reading))).await?;
        single_from_value(body)
    }

    /// `POST /evaluate/{sensors}` for a randomly generated set of sensors.
    pub async fn evaluate_batch(&self, sensors: u32) -> Result<ResultBatch, FetchError> {
        let url = self.config.endpoint(&format!("evaluate/{sensors}"));
        info!(%url, sensors, "requesting batch optimization");
        let body = self.post(&url, None).await?;
        batch_from_value(body)
    }

    async fn post(&self, url: &str, payload: Option<&[SensorReading]>) -> Result<Value, FetchError> {
        let mut request = self.http.post(url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|err| {
            warn!(%url, %err, "optimization request failed");
            FetchError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "optimization request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.json::<Value>().await?;
        debug!(%url, "optimization response received");
        Ok(body)
    }
}

/// Decode a single-result response into a one-element batch.
pub fn single_from_value(body: Value) -> Result<ResultBatch, FetchError> {
    let item: OptimizationResult = serde_json::from_value(body)?;
    Ok(vec![item])
}

/// Decode a batch response. A bare array wins; otherwise the `optimizations`
/// field is read; anything else is an empty batch.
pub fn batch_from_value(body: Value) -> Result<ResultBatch, FetchError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("optimizations") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(FetchError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_and_wrapped_object_decode_identically() {
        let items = json!([
            { "traffic_light_id": "A", "impact": { "original_congestion": 10, "optimized_congestion": 2 } },
            { "traffic_light_id": "B", "impact": null }
        ]);
        let bare = batch_from_value(items.clone()).unwrap();
        let wrapped = batch_from_value(json!({ "optimizations": items, "version": "1.2" })).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 2);
    }

    #[test]
    fn unknown_shapes_decode_to_empty_batch() {
        assert!(batch_from_value(json!({ "status": "ok" })).unwrap().is_empty());
        assert!(batch_from_value(json!({ "optimizations": null })).unwrap().is_empty());
        assert!(batch_from_value(json!("nope")).unwrap().is_empty());
    }

    #[test]
    fn malformed_items_are_decode_errors() {
        let err = batch_from_value(json!([{ "impact": "high" }])).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn single_response_becomes_one_element_batch() {
        let batch = single_from_value(json!({ "traffic_light_id": "solo" })).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].traffic_light_id, "solo");
    }
}
