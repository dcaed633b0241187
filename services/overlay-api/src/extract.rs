//! Sample extraction from row-oriented query results.
//!
//! The dashboard host sends query results in row-oriented form: field
//! descriptors split into dimensions and measures, plus rows keyed by field
//! name where each cell wraps its value. The first two dimensions are the
//! x/y coordinates and the first measure is the intensity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use overlay_common::{OverlayError, OverlayResult, Sample};

/// Row-oriented query result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPayload {
    pub fields: QueryFields,
    #[serde(default)]
    pub rows: Vec<QueryRow>,
}

/// Field descriptors for the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryFields {
    #[serde(default)]
    pub dimensions: Vec<Field>,
    #[serde(default)]
    pub measures: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
}

/// One result row: field name to cell.
pub type QueryRow = HashMap<String, Cell>;

/// A single cell; `value` may be null for missing data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl Cell {
    fn as_f64(&self) -> Option<f64> {
        self.value.as_ref().and_then(|v| v.as_f64())
    }
}

/// Extract heat samples from a query payload.
///
/// Requires at least two dimensions (x, y) and one measure (intensity).
/// Rows with a null or non-numeric x or y are dropped; a missing intensity
/// counts as 0 so the row still participates in the batch.
pub fn extract_samples(payload: &QueryPayload) -> OverlayResult<Vec<Sample>> {
    let dimensions = &payload.fields.dimensions;
    let measures = &payload.fields.measures;

    if dimensions.len() < 2 {
        return Err(OverlayError::InsufficientFields(
            "two dimensions (x, y) are required".to_string(),
        ));
    }
    if measures.is_empty() {
        return Err(OverlayError::InsufficientFields(
            "one measure (intensity) is required".to_string(),
        ));
    }

    let x_key = &dimensions[0].name;
    let y_key = &dimensions[1].name;
    let heat_key = &measures[0].name;

    let samples = payload
        .rows
        .iter()
        .filter_map(|row| {
            let x = row.get(x_key).and_then(Cell::as_f64)?;
            let y = row.get(y_key).and_then(Cell::as_f64)?;
            let value = row.get(heat_key).and_then(Cell::as_f64).unwrap_or(0.0);
            Some(Sample::new(x, y, value))
        })
        .collect();

    Ok(samples)
}
