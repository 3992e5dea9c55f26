//! List filtering for the table endpoints.
//!
//! Query strings are parsed against the filters an entity declares: exact
//! matches, substring matches, and `offset`/`limit` paging. Anything else is
//! rejected so a typo never silently returns the whole table.

pub mod error;
pub mod types;

use serde_json::Value;
use std::collections::HashMap;

pub use error::FilterError;
pub use types::{Condition, OrderInfo, Page, SortDirection, SqlResult};

use crate::database::query_builder::quote_identifier;

/// Query-string keys that control paging rather than filtering.
const PAGING_KEYS: &[&str] = &["offset", "skip", "limit"];

/// Filters an endpoint accepts on its list route.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub exact: &'static [&'static str],
    pub contains: &'static [&'static str],
}

pub struct Filter {
    table_name: &'static str,
    conditions: Vec<Condition>,
    order: Option<OrderInfo>,
    page: Option<Page>,
}

impl Filter {
    pub fn new(table_name: &'static str) -> Self {
        Self {
            table_name,
            conditions: Vec::new(),
            order: None,
            page: None,
        }
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn eq(self, column: &'static str, value: impl Into<Value>) -> Self {
        self.condition(Condition::Eq(column, value.into()))
    }

    pub fn order(mut self, column: &'static str, sort: SortDirection) -> Self {
        self.order = Some(OrderInfo { column, sort });
        self
    }

    pub fn order_info(mut self, order: Option<OrderInfo>) -> Self {
        self.order = order;
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn table_name(&self) -> &'static str {
        self.table_name
    }

    pub fn to_sql(&self) -> SqlResult {
        let (where_clause, params) = self.build_where_clause();
        let mut query = format!("SELECT * FROM {}{}", quote_identifier(self.table_name), where_clause);

        if let Some(order) = &self.order {
            query.push_str(&format!(
                " ORDER BY {} {}",
                quote_identifier(order.column),
                order.sort.to_sql()
            ));
        }
        if let Some(page) = &self.page {
            query.push_str(&format!(" LIMIT {} OFFSET {}", page.limit, page.offset));
        }

        SqlResult { query, params }
    }

    pub fn to_count_sql(&self) -> SqlResult {
        let (where_clause, params) = self.build_where_clause();
        SqlResult {
            query: format!(
                "SELECT COUNT(*) AS count FROM {}{}",
                quote_identifier(self.table_name),
                where_clause
            ),
            params,
        }
    }

    pub fn to_distinct_sql(&self, column: &'static str) -> SqlResult {
        let (where_clause, params) = self.build_where_clause();
        let column = quote_identifier(column);
        SqlResult {
            query: format!(
                "SELECT DISTINCT {} AS value FROM {}{} ORDER BY {}",
                column,
                quote_identifier(self.table_name),
                where_clause,
                column
            ),
            params,
        }
    }

    fn build_where_clause(&self) -> (String, Vec<Value>) {
        if self.conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut params = Vec::with_capacity(self.conditions.len());
        let clauses: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| match condition {
                Condition::Eq(column, value) => {
                    params.push(value.clone());
                    format!("{} = ?", quote_identifier(column))
                }
                Condition::Contains(column, needle) => {
                    params.push(Value::String(format!("%{}%", escape_like(needle))));
                    format!("{} LIKE ?", quote_identifier(column))
                }
                Condition::Gte(column, value) => {
                    params.push(value.clone());
                    format!("{} >= ?", quote_identifier(column))
                }
                Condition::Lte(column, value) => {
                    params.push(value.clone());
                    format!("{} <= ?", quote_identifier(column))
                }
            })
            .collect();

        (format!(" WHERE {}", clauses.join(" AND ")), params)
    }
}

/// Parse `offset` (alias `skip`) and `limit`. The limit defaults to, and may
/// not exceed, `max_limit`.
pub fn parse_page(params: &HashMap<String, String>, max_limit: u32) -> Result<Page, FilterError> {
    let offset_raw = params.get("offset").or_else(|| params.get("skip"));
    let offset = match offset_raw.map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| FilterError::InvalidOffset("Offset must be a non-negative integer".to_string()))?,
        None => 0,
    };

    let limit = match params.get("limit").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(raw) => {
            let limit = raw
                .parse::<u32>()
                .map_err(|_| FilterError::InvalidLimit(format!("Limit must be between 1 and {}", max_limit)))?;
            if limit == 0 || limit > max_limit {
                return Err(FilterError::InvalidLimit(format!(
                    "Limit must be between 1 and {}",
                    max_limit
                )));
            }
            limit
        }
        None => max_limit,
    };

    Ok(Page { limit, offset })
}

/// Turn the non-paging query parameters into conditions. Empty values are
/// ignored; names outside `filters` are an error.
pub fn parse_conditions(
    params: &HashMap<String, String>,
    filters: &FilterSpec,
) -> Result<Vec<Condition>, FilterError> {
    let mut names: Vec<&String> = params
        .keys()
        .filter(|k| !PAGING_KEYS.contains(&k.as_str()))
        .collect();
    // Deterministic SQL regardless of hash order
    names.sort();

    let mut conditions = Vec::new();
    for name in names {
        let value = params[name].trim();
        if let Some(column) = filters.exact.iter().find(|c| **c == name.as_str()) {
            if !value.is_empty() {
                conditions.push(Condition::Eq(*column, Value::String(value.to_string())));
            }
        } else if let Some(column) = filters.contains.iter().find(|c| **c == name.as_str()) {
            if !value.is_empty() {
                conditions.push(Condition::Contains(*column, value.to_string()));
            }
        } else {
            return Err(FilterError::UnknownFilter(name.clone()));
        }
    }
    Ok(conditions)
}

/// Escape LIKE metacharacters so user input only ever matches literally.
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FILTERS: FilterSpec = FilterSpec {
        exact: &["documento", "convocatoria"],
        contains: &["beneficiario"],
    };

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn select_with_conditions_order_and_page() {
        let sql = Filter::new("reintegros")
            .eq("documento", "1001")
            .condition(Condition::Contains("beneficiario", "ana".into()))
            .order("fecha_reporte", SortDirection::Desc)
            .page(Page { limit: 10, offset: 20 })
            .to_sql();

        assert_eq!(
            sql.query,
            "SELECT * FROM `reintegros` WHERE `documento` = ? AND `beneficiario` LIKE ? \
             ORDER BY `fecha_reporte` DESC LIMIT 10 OFFSET 20"
        );
        assert_eq!(sql.params, vec![json!("1001"), json!("%ana%")]);
    }

    #[test]
    fn plain_select_has_no_where() {
        let sql = Filter::new("ies_preg_posg").to_sql();
        assert_eq!(sql.query, "SELECT * FROM `ies_preg_posg`");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn range_conditions() {
        let sql = Filter::new("reintegros")
            .condition(Condition::Gte("fecha_reporte", json!("2024-01-01")))
            .condition(Condition::Lte("fecha_reporte", json!("2024-12-31")))
            .to_count_sql();
        assert_eq!(
            sql.query,
            "SELECT COUNT(*) AS count FROM `reintegros` WHERE `fecha_reporte` >= ? AND `fecha_reporte` <= ?"
        );
        assert_eq!(sql.params.len(), 2);
    }

    #[test]
    fn distinct_sql() {
        let sql = Filter::new("vw_giros_general_historico_ies").to_distinct_sql("estado");
        assert_eq!(
            sql.query,
            "SELECT DISTINCT `estado` AS value FROM `vw_giros_general_historico_ies` ORDER BY `estado`"
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
        let sql = Filter::new("t")
            .condition(Condition::Contains("beneficiario", "10%".into()))
            .to_sql();
        assert_eq!(sql.params, vec![json!("%10\\%%")]);
    }

    #[test]
    fn page_defaults_to_max_limit() {
        let page = parse_page(&params(&[]), 100).unwrap();
        assert_eq!(page, Page { limit: 100, offset: 0 });

        let page = parse_page(&params(&[("skip", "5"), ("limit", "7")]), 100).unwrap();
        assert_eq!(page, Page { limit: 7, offset: 5 });
    }

    #[test]
    fn page_bounds_are_enforced() {
        assert!(matches!(parse_page(&params(&[("limit", "0")]), 100), Err(FilterError::InvalidLimit(_))));
        assert!(matches!(parse_page(&params(&[("limit", "101")]), 100), Err(FilterError::InvalidLimit(_))));
        assert!(matches!(parse_page(&params(&[("offset", "-1")]), 100), Err(FilterError::InvalidOffset(_))));
        assert!(matches!(parse_page(&params(&[("limit", "ten")]), 100), Err(FilterError::InvalidLimit(_))));
    }

    #[test]
    fn conditions_follow_the_filter_names() {
        let conditions = parse_conditions(
            &params(&[("documento", "1001"), ("beneficiario", "ana"), ("convocatoria", ""), ("limit", "5")]),
            &FILTERS,
        )
        .unwrap();
        assert_eq!(
            conditions,
            vec![
                Condition::Contains("beneficiario", "ana".into()),
                Condition::Eq("documento", json!("1001")),
            ]
        );
    }

    #[test]
    fn unknown_filters_are_rejected() {
        let err = parse_conditions(&params(&[("nombre", "x")]), &FILTERS).unwrap_err();
        assert_eq!(err, FilterError::UnknownFilter("nombre".into()));
    }
}
