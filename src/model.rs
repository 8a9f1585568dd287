use std::collections::HashSet;

use serde_json::{Map, Value};

/// One skip-hire offering as shown on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub id: String,
    pub name: String,
    pub size: String,
    pub price: u32,
    pub hire_period: u32,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl Skip {
    fn fallback(id: &str, yards: u32, price: u32, hire_period: u32) -> Self {
        Self {
            id: id.into(),
            name: format!("{yards} Yard Skip"),
            size: format!("{yards} Yards"),
            price,
            hire_period,
            image_url: None,
            description: None,
        }
    }
}

// ---------- wizard steps ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub number: u8,
    pub name: &'static str,
    pub status: StepStatus,
}

pub const PROGRESS_STEPS: [ProgressStep; 6] = [
    ProgressStep { number: 1, name: "Postcode", status: StepStatus::Completed },
    ProgressStep { number: 2, name: "Waste Type", status: StepStatus::Completed },
    ProgressStep { number: 3, name: "Select Skip", status: StepStatus::Active },
    ProgressStep { number: 4, name: "Permit Check", status: StepStatus::Pending },
    ProgressStep { number: 5, name: "Choose Date", status: StepStatus::Pending },
    ProgressStep { number: 6, name: "Payment", status: StepStatus::Pending },
];

// ---------- mapping raw API records ----------

const BASE_PRICE: u32 = 200;
const PRICE_STEP: u32 = 50;

/// Text for a loosely typed field. Strings and numbers are kept as written;
/// missing, null, empty or any other shape means "use the default".
fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Whole number for a loosely typed field. Fractions are rounded and numeric
/// strings are accepted; negatives and anything else fall back to the default.
fn number_field(record: &Map<String, Value>, key: &str) -> Option<u32> {
    match record.get(key)? {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).ok(),
            None => n.as_f64().and_then(whole),
        },
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole),
        _ => None,
    }
}

fn whole(f: f64) -> Option<u32> {
    (f.is_finite() && f >= 0.0 && f <= u32::MAX as f64).then(|| f.round() as u32)
}

/// Turns one record of the skips response into a [`Skip`], filling every
/// missing field from its position in the list.
pub fn raw_record_to_offering(record: &Value, index: usize) -> Skip {
    let empty = Map::new();
    let record = record.as_object().unwrap_or(&empty);

    let position = index as u32;
    let default_yards = (position + 1) * 2;
    let raw_size = text_field(record, "size");

    Skip {
        id: text_field(record, "id").unwrap_or_else(|| format!("skip-{index}")),
        name: format!(
            "{} Yard Skip",
            raw_size.clone().unwrap_or_else(|| default_yards.to_string())
        ),
        size: raw_size.unwrap_or_else(|| format!("{default_yards} Yards")),
        price: number_field(record, "price")
            .unwrap_or_else(|| BASE_PRICE.saturating_add(position.saturating_mul(PRICE_STEP))),
        hire_period: number_field(record, "hire_period")
            .unwrap_or(if index % 2 == 0 { 7 } else { 14 }),
        image_url: text_field(record, "image_url"),
        description: text_field(record, "description"),
    }
}

/// Maps a whole response. A repeated id is replaced by the positional one,
/// suffixed until it is free, so selection by id stays unambiguous.
pub fn offerings_from_records(records: &[Value]) -> Vec<Skip> {
    let mut seen = HashSet::new();
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut skip = raw_record_to_offering(record, i);
            if !seen.insert(skip.id.clone()) {
                let mut candidate = format!("skip-{i}");
                let mut n = 0;
                while !seen.insert(candidate.clone()) {
                    n += 1;
                    candidate = format!("skip-{i}-{n}");
                }
                skip.id = candidate;
            }
            skip
        })
        .collect()
}

/// Shown when the live list can't be loaded.
pub fn fallback_skips() -> Vec<Skip> {
    vec![
        Skip::fallback("1", 4, 227, 7),
        Skip::fallback("2", 6, 300, 14),
        Skip::fallback("3", 8, 325, 7),
        Skip::fallback("4", 10, 350, 7),
        Skip::fallback("5", 12, 375, 14),
        Skip::fallback("6", 14, 400, 7),
    ]
}

pub fn format_price(price: u32) -> String {
    format!("£{price}")
}
