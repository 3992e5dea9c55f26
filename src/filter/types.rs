use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A single WHERE predicate. Columns are trusted identifiers from an entity
/// description; values are always bound as parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Eq(&'static str, Value),
    /// Substring match; the needle is escaped before it is wrapped in `%`.
    Contains(&'static str, String),
    Gte(&'static str, Value),
    Lte(&'static str, Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderInfo {
    pub column: &'static str,
    pub sort: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u64,
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}
