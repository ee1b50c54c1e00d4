//! JSON rendering of generated populations.

use carrier_intel_analytics::summarize;
use carrier_intel_carrier_models::CarrierRecord;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::{GenerateError, generate_seeded};

/// What to print for a generated population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Dataset {
    /// Every carrier record.
    Carriers,
    /// One summary per region.
    Summary,
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, GenerateError> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Renders `records` as the requested [`Dataset`].
///
/// # Errors
///
/// Returns [`GenerateError::Json`] if serialization fails.
pub fn render(
    records: &[CarrierRecord],
    dataset: Dataset,
    pretty: bool,
) -> Result<String, GenerateError> {
    match dataset {
        Dataset::Carriers => to_json(records, pretty),
        Dataset::Summary => to_json(&summarize(records), pretty),
    }
}

/// Generates a population and renders it.
///
/// # Errors
///
/// Returns any [`GenerateError`] from generation or serialization.
pub fn generate_json(
    count: usize,
    seed: u64,
    dataset: Dataset,
    pretty: bool,
) -> Result<String, GenerateError> {
    let records = generate_seeded(count, seed)?;
    log::info!("Generated {} carriers (seed {seed})", records.len());
    render(&records, dataset, pretty)
}
