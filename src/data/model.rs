use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// FieldValue – a single cell of the listings table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the loose typing of the source
/// CSV: numbers where a cell parses as one, text otherwise, `Null` for empty.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => write!(f, "<null>"),
        }
    }
}

impl FieldValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Listing – one row of the table
// ---------------------------------------------------------------------------

/// A single listing (one row of the source table).
#[derive(Debug, Clone)]
pub struct Listing {
    /// Dynamic columns: column_name → value.
    pub fields: BTreeMap<String, FieldValue>,
}

impl Listing {
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }
}

// ---------------------------------------------------------------------------
// ListingTable – the complete loaded dataset
// ---------------------------------------------------------------------------

static NULL_VALUE: FieldValue = FieldValue::Null;

/// The full parsed dataset. Column order is preserved from the header row;
/// rows are never mutated after loading, only read and filtered.
#[derive(Debug, Clone)]
pub struct ListingTable {
    /// Column names in header order.
    pub columns: Vec<String>,
    /// All listings (rows).
    pub listings: Vec<Listing>,
}

impl ListingTable {
    pub fn new(columns: Vec<String>, listings: Vec<Listing>) -> Self {
        ListingTable { columns, listings }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// (rows, columns), pandas-shape style.
    pub fn shape(&self) -> (usize, usize) {
        (self.listings.len(), self.columns.len())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Iterate one column top to bottom, yielding `Null` for rows where the
    /// cell is absent (short CSV records).
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldValue> + 'a {
        self.listings
            .iter()
            .map(move |listing| listing.get(name).unwrap_or(&NULL_VALUE))
    }
}
