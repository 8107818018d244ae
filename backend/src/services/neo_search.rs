//! Catalog search: row decoding, hazard filtering and truncation.

use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, CatalogResult, CatalogSource, QUERY_FIELDS};
use crate::models::{NeoRecord, NeoSearchQuery};

/// Query the catalog and shape the rows into records.
///
/// The upstream is asked for `query.limit` rows; when `query.pha` is set the
/// non-hazardous ones are dropped afterwards, so fewer than `limit` records
/// may come back.
pub async fn search_neos(
    catalog: &dyn CatalogSource,
    query: NeoSearchQuery,
) -> CatalogResult<Vec<NeoRecord>> {
    let table = catalog.query(query.limit).await?;
    debug!(rows = table.data.len(), pha = query.pha, "Catalog query returned");

    let mut out = Vec::with_capacity(query.limit.min(table.data.len()));
    for row in &table.data {
        let record = record_from_row(row)?;
        if query.pha && !record.is_pha() {
            continue;
        }
        out.push(record);
        if out.len() >= query.limit {
            break;
        }
    }
    Ok(out)
}

/// Decode one query row in `QUERY_FIELDS` order.
pub fn record_from_row(row: &[Value]) -> CatalogResult<NeoRecord> {
    let [des, shortname, spkid, diameter, albedo, pha] = row else {
        return Err(CatalogError::malformed(
            "query",
            format!("expected {} columns, got {}", QUERY_FIELDS.len(), row.len()),
        ));
    };

    let des = text_cell(des)
        .ok_or_else(|| CatalogError::malformed("query", "row without designation"))?;

    Ok(NeoRecord {
        name: text_cell(shortname),
        spkid: text_cell(spkid),
        diameter: number_cell(&des, "diameter", diameter),
        albedo: number_cell(&des, "albedo", albedo),
        pha: text_cell(pha),
        des,
    })
}

fn text_cell(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_cell(des: &str, column: &str, value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Null => return None,
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Some(v),
        _ => {
            warn!(des, column, value = %value, "Unparsable numeric catalog cell, reporting as unknown");
            None
        }
    }
}
