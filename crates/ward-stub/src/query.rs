//! The subset of PostgREST's query grammar the ward uses.
//!
//! - `select=*` or `select=col,col`, optionally with one embedded
//!   relation: `select=*,doctors(ad_soyad)`
//! - horizontal filters: `col=eq.value`
//! - `order=col.asc` / `order=col.desc`
//!
//! Anything else is rejected with `PGRST100` rather than ignored.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::error::StubError;
use crate::store::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub relation: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub all: bool,
    pub columns: Vec<String>,
    pub embed: Option<Embed>,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            all: true,
            columns: Vec::new(),
            embed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

/// A parsed request query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    pub select: Select,
    pub filters: Vec<(String, String)>,
    pub order: Option<OrderBy>,
}

impl RowQuery {
    pub fn parse(table: Table, params: &[(String, String)]) -> Result<Self, StubError> {
        let mut query = RowQuery::default();
        for (key, value) in params {
            match key.as_str() {
                "select" => query.select = parse_select(table, value)?,
                "order" => query.order = Some(parse_order(table, value)?),
                column => {
                    check_column(table, column)?;
                    let operand = value.strip_prefix("eq.").ok_or_else(|| {
                        StubError::UnsupportedQuery {
                            key: key.clone(),
                            value: value.clone(),
                        }
                    })?;
                    query.filters.push((column.to_string(), operand.to_string()));
                }
            }
        }
        Ok(query)
    }

    /// Whether `row` passes every filter.
    pub fn matches(&self, row: &Value) -> bool {
        self.filters
            .iter()
            .all(|(column, operand)| match row.get(column) {
                Some(Value::String(s)) => s == operand,
                Some(Value::Null) | None => operand == "null",
                Some(other) => other.to_string() == *operand,
            })
    }

    /// Compare two rows by the `order` column. Nulls sort last ascending
    /// and first descending, as in Postgres.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let Some(order) = &self.order else {
            return Ordering::Equal;
        };
        let ordering = compare_values(a.get(&order.column), b.get(&order.column));
        if order.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

fn check_column(table: Table, column: &str) -> Result<(), StubError> {
    if table.columns().contains(&column) {
        Ok(())
    } else {
        Err(StubError::UnknownColumn {
            table: table.as_str().to_string(),
            column: column.to_string(),
        })
    }
}

/// Split on commas that are not inside parentheses.
fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(raw[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(raw[start..].trim());
    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

fn parse_select(table: Table, raw: &str) -> Result<Select, StubError> {
    let mut select = Select {
        all: false,
        columns: Vec::new(),
        embed: None,
    };
    for item in split_top_level(raw) {
        if item == "*" {
            select.all = true;
        } else if let Some((relation, rest)) = item.split_once('(') {
            let inner = rest.strip_suffix(')').ok_or_else(|| StubError::UnsupportedQuery {
                key: "select".into(),
                value: raw.to_string(),
            })?;
            // Only the doctor relation exists, reachable from patients and orders.
            if relation != "doctors" || table == Table::Doctors {
                return Err(StubError::UnknownRelation {
                    table: table.as_str().to_string(),
                    relation: relation.to_string(),
                });
            }
            let mut columns = Vec::new();
            for column in split_top_level(inner) {
                if column != "*" {
                    check_column(Table::Doctors, column)?;
                }
                columns.push(column.to_string());
            }
            select.embed = Some(Embed {
                relation: relation.to_string(),
                columns,
            });
        } else {
            check_column(table, item)?;
            select.columns.push(item.to_string());
        }
    }
    if !select.all && select.columns.is_empty() && select.embed.is_none() {
        select.all = true;
    }
    Ok(select)
}

fn parse_order(table: Table, raw: &str) -> Result<OrderBy, StubError> {
    let mut parts = raw.split('.');
    let column = parts.next().unwrap_or_default();
    check_column(table, column)?;
    let ascending = match parts.next() {
        None | Some("asc") => true,
        Some("desc") => false,
        Some(_) => {
            return Err(StubError::UnsupportedQuery {
                key: "order".into(),
                value: raw.to_string(),
            })
        }
    };
    Ok(OrderBy {
        column: column.to_string(),
        ascending,
    })
}

/// Keep only the selected columns of `row`.
pub fn project(select: &Select, row: &Value) -> Map<String, Value> {
    let Some(object) = row.as_object() else {
        return Map::new();
    };
    if select.all {
        return object.clone();
    }
    select
        .columns
        .iter()
        .filter_map(|c| object.get(c).map(|v| (c.clone(), v.clone())))
        .collect()
}
