use super::model::{FieldValue, Record, WineDataset};

// ---------------------------------------------------------------------------
// Gamma derivation: (Ash * Hue) / Magnesium, attached per record
// ---------------------------------------------------------------------------

/// Name of the derived column added by [`with_gamma`].
pub const GAMMA_FIELD: &str = "Gamma";

/// Return a copy of the dataset with a `Gamma = (Ash * Hue) / Magnesium`
/// field attached to every record that carries the three source fields.
///
/// The input dataset is untouched. Records missing (or with non-numeric)
/// `Ash`, `Hue` or `Magnesium` are passed through without a `Gamma` field and
/// therefore contribute no value to the Gamma metric.
///
/// `Magnesium = 0` is deliberately not guarded: IEEE-754 division yields
/// inf / NaN, which flows into the downstream statistics unchanged.
pub fn with_gamma(dataset: &WineDataset) -> WineDataset {
    let mut skipped = 0usize;

    let records = dataset
        .records
        .iter()
        .map(|rec| {
            let mut fields = rec.fields.clone();
            match (
                rec.get_f64("Ash"),
                rec.get_f64("Hue"),
                rec.get_f64("Magnesium"),
            ) {
                (Some(ash), Some(hue), Some(magnesium)) => {
                    let gamma = (ash * hue) / magnesium;
                    fields.insert(GAMMA_FIELD.to_string(), FieldValue::Float(gamma));
                }
                _ => skipped += 1,
            }
            Record { fields }
        })
        .collect();

    if skipped > 0 {
        log::warn!("{skipped} records lack Ash/Hue/Magnesium; no Gamma attached");
    }

    WineDataset::from_records(records)
}
