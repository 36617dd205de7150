//! Building blocks for filtered sales queries.
//!
//! The repository layer assembles its WHERE clauses from the pieces defined
//! here. Column names only ever come from [`SaleColumn::key`], never from
//! client input, so a dynamic filter cannot inject SQL.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// LIKE helpers
// ---------------------------------------------------------------------------

/// Escape the LIKE wildcards (`%`, `_`) and the escape character itself so
/// the input matches literally.
///
/// ```
/// use nativequery_core::sales_filter::escape_like;
/// assert_eq!(escape_like("50%_off"), "50\\%\\_off");
/// ```
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Pattern for a "contains" match: `%<escaped input>%`.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}

// ---------------------------------------------------------------------------
// Dynamic filter columns
// ---------------------------------------------------------------------------

/// Columns a dynamic equality filter may constrain.
///
/// Keys are qualified with the table aliases used by the sales join:
/// `s` (sales), `c` (customers), `si` (sale_items), `p` (products) and
/// `sp` (sale_payments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SaleColumn {
    SaleId,
    SaleStatus,
    CustomerId,
    CustomerEmail,
    CustomerActive,
    SaleItemId,
    ProductId,
    ProductActive,
    SalePaymentId,
    SalePaymentType,
}

/// The value type a [`SaleColumn`] compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Boolean,
}

impl SaleColumn {
    pub const ALL: &'static [SaleColumn] = &[
        SaleColumn::SaleId,
        SaleColumn::SaleStatus,
        SaleColumn::CustomerId,
        SaleColumn::CustomerEmail,
        SaleColumn::CustomerActive,
        SaleColumn::SaleItemId,
        SaleColumn::ProductId,
        SaleColumn::ProductActive,
        SaleColumn::SalePaymentId,
        SaleColumn::SalePaymentType,
    ];

    /// The alias-qualified SQL column this variant stands for.
    pub fn key(self) -> &'static str {
        match self {
            SaleColumn::SaleId => "s.id",
            SaleColumn::SaleStatus => "s.status",
            SaleColumn::CustomerId => "c.id",
            SaleColumn::CustomerEmail => "c.email",
            SaleColumn::CustomerActive => "c.active",
            SaleColumn::SaleItemId => "si.id",
            SaleColumn::ProductId => "p.id",
            SaleColumn::ProductActive => "p.active",
            SaleColumn::SalePaymentId => "sp.id",
            SaleColumn::SalePaymentType => "sp.payment_type",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            SaleColumn::SaleId
            | SaleColumn::CustomerId
            | SaleColumn::SaleItemId
            | SaleColumn::ProductId
            | SaleColumn::SalePaymentId => ColumnKind::Integer,
            SaleColumn::SaleStatus | SaleColumn::CustomerEmail | SaleColumn::SalePaymentType => {
                ColumnKind::Text
            }
            SaleColumn::CustomerActive | SaleColumn::ProductActive => ColumnKind::Boolean,
        }
    }
}

impl FromStr for SaleColumn {
    type Err = CoreError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let key = key.trim();
        SaleColumn::ALL
            .iter()
            .copied()
            .find(|column| column.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnsupportedFilterKey(key.to_string()))
    }
}

impl fmt::Display for SaleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Dynamic filter values
// ---------------------------------------------------------------------------

/// A literal compared for equality against a [`SaleColumn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Int(DbId),
    Text(String),
    Bool(bool),
}

impl FilterValue {
    pub fn kind(&self) -> ColumnKind {
        match self {
            FilterValue::Int(_) => ColumnKind::Integer,
            FilterValue::Text(_) => ColumnKind::Text,
            FilterValue::Bool(_) => ColumnKind::Boolean,
        }
    }
}

impl From<DbId> for FilterValue {
    fn from(v: DbId) -> Self {
        FilterValue::Int(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(DbId::from(v))
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

/// Conjunctive column-equality filter keyed by qualified column name.
///
/// Entries are kept sorted by column so the generated SQL and its bind
/// order are deterministic. Inserting the same column twice keeps the last
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicFilter {
    entries: BTreeMap<SaleColumn, FilterValue>,
}

impl DynamicFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry by its qualified key (e.g. `"p.id"`).
    ///
    /// Fails for keys outside [`SaleColumn::ALL`] and for values whose type
    /// does not match the column.
    pub fn insert(&mut self, key: &str, value: impl Into<FilterValue>) -> Result<(), CoreError> {
        let column: SaleColumn = key.parse()?;
        self.insert_column(column, value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: &str, value: impl Into<FilterValue>) -> Result<Self, CoreError> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn insert_column(&mut self, column: SaleColumn, value: FilterValue) -> Result<(), CoreError> {
        if column.kind() != value.kind() {
            return Err(CoreError::Validation(format!(
                "filter value for '{column}' must be {:?}, got {:?}",
                column.kind(),
                value.kind()
            )));
        }
        self.entries.insert(column, value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (SaleColumn, &FilterValue)> {
        self.entries.iter().map(|(column, value)| (*column, value))
    }
}
