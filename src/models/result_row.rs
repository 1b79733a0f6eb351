use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// One accepted place, flattened.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ResultRow {
    pub name: Option<String>,
    pub address: Option<String>,
    pub vicinity: Option<String>,
    pub rating: f64,
    pub user_ratings_total: Option<i64>,
    pub price_level: i64,
    pub business_status: Option<String>,
    pub open_now: Option<bool>,
    pub opening_hours_weekly: String,
    pub types: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo_reference: Option<String>,
    pub place_id: Option<String>,
    pub icon: Option<String>,
    pub plus_code: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub emails: Option<String>,
}

/// Final table of a run. Serializes as an array of records.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultTable {
    Rows(Vec<ResultRow>),
    Message(String),
    Error(String),
}

impl ResultTable {
    /// Number of records written out. Never zero: an empty run is a
    /// `Message` table.
    pub fn record_count(&self) -> usize {
        match self {
            ResultTable::Rows(rows) => rows.len(),
            ResultTable::Message(_) | ResultTable::Error(_) => 1,
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        match self {
            ResultTable::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResultTable::Rows(rows) => rows.serialize(serializer),
            ResultTable::Message(text) => single_cell(serializer, "message", text),
            ResultTable::Error(text) => single_cell(serializer, "error", text),
        }
    }
}

struct Cell<'a> {
    column: &'static str,
    value: &'a str,
}

impl Serialize for Cell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.column, self.value)?;
        map.end()
    }
}

fn single_cell<S: Serializer>(serializer: S, column: &'static str, value: &str) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(1))?;
    seq.serialize_element(&Cell { column, value })?;
    seq.end()
}

/// What a run hands back to the caller: the table plus a status line.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub table: ResultTable,
    pub status: Option<String>,
}

impl SearchOutcome {
    pub fn rows(rows: Vec<ResultRow>) -> Self {
        if rows.is_empty() {
            return Self::no_results();
        }
        Self {
            table: ResultTable::Rows(rows),
            status: None,
        }
    }

    pub fn no_results() -> Self {
        Self {
            table: ResultTable::Message(NO_RESULTS_MESSAGE.to_string()),
            status: Some(NO_RESULTS_MESSAGE.to_string()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: Some(format!("Error: {}", message)),
            table: ResultTable::Error(message),
        }
    }
}
