//! Route definitions for the ward development backend.
//!
//! Serves `/rest/v1/{table}` for `doctors`, `patients` and `orders` with
//! enough of PostgREST's behaviour that `ward-client` cannot tell the
//! difference: embedded doctor names, ordering, `eq` filters,
//! `Prefer: return=representation`, and Postgres constraint errors.

use std::cmp::Ordering;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::error::StubError;
use crate::query::{project, RowQuery, Select};
use crate::store::{now, AppState, Row, Table};

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/rest/v1/:table",
            get(select_rows).post(insert_rows).patch(update_rows),
        )
        .fallback(not_implemented)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_implemented() -> impl IntoResponse {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "error": "endpoint not implemented by ward-stub" })),
    )
}

fn resolve_table(name: &str) -> Result<Table, StubError> {
    Table::from_name(name).ok_or_else(|| StubError::UnknownTable(name.to_string()))
}

fn wants_representation(headers: &HeaderMap) -> bool {
    headers
        .get_all("prefer")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.split(',').any(|p| p.trim() == "return=representation"))
}

// -- Reads ------------------------------------------------------------------

async fn select_rows(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, StubError> {
    let table = resolve_table(&table)?;
    let query = RowQuery::parse(table, &params)?;

    let mut rows: Vec<Row> = state
        .rows(table)
        .into_iter()
        .filter(|row| query.matches(&row.value))
        .collect();
    let descending = query.order.as_ref().is_some_and(|o| !o.ascending);
    rows.sort_by(|a, b| match query.compare(&a.value, &b.value) {
        Ordering::Equal if descending => b.seq.cmp(&a.seq),
        Ordering::Equal => a.seq.cmp(&b.seq),
        other => other,
    });

    let body = rows
        .iter()
        .map(|row| render(&state, &query.select, &row.value))
        .collect();
    Ok(Json(Value::Array(body)))
}

/// Project a row and attach the embedded doctor, if one was requested.
fn render(state: &AppState, select: &Select, row: &Value) -> Value {
    let mut object = project(select, row);
    if let Some(embed) = &select.embed {
        let doctor = row
            .get("doktor_id")
            .and_then(Value::as_str)
            .and_then(|id| id.parse::<Uuid>().ok())
            .and_then(|id| state.table(Table::Doctors).get(&id).map(|r| r.value.clone()));
        let embedded = match doctor {
            Some(doctor) => {
                let inner = Select {
                    all: embed.columns.iter().any(|c| c == "*"),
                    columns: embed.columns.clone(),
                    embed: None,
                };
                Value::Object(project(&inner, &doctor))
            }
            None => Value::Null,
        };
        object.insert(embed.relation.clone(), embedded);
    }
    Value::Object(object)
}

// -- Writes -----------------------------------------------------------------

async fn insert_rows(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, StubError> {
    let table = resolve_table(&table)?;
    let query = RowQuery::parse(table, &params)?;
    let inputs = match body {
        Value::Object(object) => vec![object],
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(object) => Ok(object),
                _ => Err(StubError::InvalidBody),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(StubError::InvalidBody),
    };

    // Validate every row before storing any, so a batch is all-or-nothing.
    let rows = inputs
        .iter()
        .map(|input| build_row(&state, table, input))
        .collect::<Result<Vec<_>, _>>()?;

    let mut created = Vec::with_capacity(rows.len());
    for (id, value) in rows {
        state.insert(table, id, value.clone());
        created.push(render(&state, &query.select, &value));
    }
    tracing::info!(table = table.as_str(), count = created.len(), "rows inserted");

    if wants_representation(&headers) {
        Ok((StatusCode::CREATED, Json(Value::Array(created))).into_response())
    } else {
        Ok(StatusCode::CREATED.into_response())
    }
}

async fn update_rows(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, StubError> {
    let table = resolve_table(&table)?;
    let query = RowQuery::parse(table, &params)?;
    let Value::Object(patch) = body else {
        return Err(StubError::InvalidBody);
    };
    check_columns(table, &patch)?;
    check_references(&state, table, &patch)?;
    if let Some(tasks) = patch.get("tamamlanan_gorevler") {
        check_text_array(tasks)?;
    }

    let mut updated = Vec::new();
    for mut entry in state.table(table).iter_mut() {
        if !query.matches(&entry.value) {
            continue;
        }
        if let Value::Object(object) = &mut entry.value {
            for (column, value) in &patch {
                if column != "id" && column != "created_at" {
                    object.insert(column.clone(), value.clone());
                }
            }
        }
        updated.push((entry.seq, entry.value.clone()));
    }
    updated.sort_by_key(|(seq, _)| *seq);
    tracing::info!(table = table.as_str(), count = updated.len(), "rows updated");

    if wants_representation(&headers) {
        let body = updated
            .iter()
            .map(|(_, value)| render(&state, &query.select, value))
            .collect();
        Ok((StatusCode::OK, Json(Value::Array(body))).into_response())
    } else {
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

fn build_row(
    state: &AppState,
    table: Table,
    input: &Map<String, Value>,
) -> Result<(Uuid, Value), StubError> {
    check_columns(table, input)?;
    check_references(state, table, input)?;

    let id = match input.get("id") {
        Some(Value::String(raw)) => parse_uuid(raw)?,
        _ => Uuid::new_v4(),
    };
    let mut row = Map::new();
    row.insert("id".into(), json!(id.to_string()));
    for column in table.columns() {
        if matches!(*column, "id" | "created_at") {
            continue;
        }
        let value = input.get(*column).cloned().unwrap_or(Value::Null);
        row.insert((*column).to_string(), value);
    }
    row.insert("created_at".into(), json!(now()));

    let required: &[&str] = match table {
        Table::Doctors | Table::Patients => &["ad_soyad"],
        Table::Orders => &["hasta_id", "doktor_id"],
    };
    for column in required {
        if row.get(*column).map_or(true, Value::is_null) {
            return Err(StubError::NotNull {
                table: table.as_str().to_string(),
                column: (*column).to_string(),
            });
        }
    }

    if table == Table::Orders {
        match row.get("tamamlanan_gorevler") {
            Some(Value::Null) | None => {
                row.insert("tamamlanan_gorevler".into(), json!([]));
            }
            Some(tasks) => check_text_array(tasks)?,
        }
    }
    Ok((id, Value::Object(row)))
}

fn check_columns(table: Table, input: &Map<String, Value>) -> Result<(), StubError> {
    match input.keys().find(|k| !table.columns().contains(&k.as_str())) {
        Some(column) => Err(StubError::UnknownColumn {
            table: table.as_str().to_string(),
            column: column.clone(),
        }),
        None => Ok(()),
    }
}

/// Enforce `patients.doktor_id`, `orders.hasta_id` and `orders.doktor_id`.
fn check_references(
    state: &AppState,
    table: Table,
    input: &Map<String, Value>,
) -> Result<(), StubError> {
    let references: &[(&str, Table)] = match table {
        Table::Doctors => &[],
        Table::Patients => &[("doktor_id", Table::Doctors)],
        Table::Orders => &[("hasta_id", Table::Patients), ("doktor_id", Table::Doctors)],
    };
    for (column, target) in references {
        let raw = match input.get(*column) {
            None | Some(Value::Null) => continue,
            Some(Value::String(raw)) => raw,
            Some(other) => {
                return Err(StubError::InvalidInput {
                    kind: "uuid",
                    value: other.to_string(),
                })
            }
        };
        let id = parse_uuid(raw)?;
        if !state.contains(*target, &id) {
            return Err(StubError::ForeignKey {
                table: table.as_str().to_string(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

fn check_text_array(value: &Value) -> Result<(), StubError> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
        other => Err(StubError::InvalidInput {
            kind: "text[]",
            value: other.to_string(),
        }),
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, StubError> {
    raw.parse().map_err(|_| StubError::InvalidInput {
        kind: "uuid",
        value: raw.to_string(),
    })
}
