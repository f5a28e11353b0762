//! Typed client for the `orders` collection.
//!
//! | Method | Query | Operation |
//! |--------|-------|-----------|
//! | GET    | `select=*,doctors(ad_soyad)&hasta_id=eq.{id}&order=created_at.desc` | Orders for one patient |
//! | POST   | `select=*` | Issue an order |
//! | PATCH  | `select=*&id=eq.{id}` | Replace the completed-task set |
//!
//! The completed-task set is the only column ever written after insert,
//! and it is always written whole.

use serde::Serialize;
use ward_core::{CompletedTasks, NewOrder, Order, OrderId, PatientId};

use crate::error::WardApiError;
use crate::query::{Direction, TableQuery};
use crate::rest::Rest;

const TABLE: &str = "orders";

/// Select list that embeds the issuing doctor's name.
pub const ORDER_SELECT: &str = "*,doctors(ad_soyad)";

#[derive(Debug, Serialize)]
struct CompletedTasksPatch<'a> {
    tamamlanan_gorevler: &'a CompletedTasks,
}

/// Client for the `orders` collection.
#[derive(Debug, Clone)]
pub struct OrderClient {
    rest: Rest,
}

impl OrderClient {
    pub(crate) fn new(rest: Rest) -> Self {
        Self { rest }
    }

    /// List the orders of one patient with the issuing doctor joined in,
    /// newest first.
    pub async fn list_for_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Vec<Order>, WardApiError> {
        let query = TableQuery::on(TABLE)
            .select(ORDER_SELECT)
            .eq("hasta_id", patient_id)
            .order("created_at", Direction::Descending);
        self.rest.select(&query).await
    }

    /// Issue an order and return the stored row.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, WardApiError> {
        self.rest.insert(&TableQuery::on(TABLE), order).await
    }

    /// Overwrite the completed-task set of one order.
    ///
    /// Returns [`WardApiError::NotFound`] when no order has `order_id`.
    pub async fn set_completed(
        &self,
        order_id: OrderId,
        completed: &CompletedTasks,
    ) -> Result<Order, WardApiError> {
        let query = TableQuery::on(TABLE).eq("id", order_id);
        let patch = CompletedTasksPatch {
            tamamlanan_gorevler: completed,
        };
        self.rest.update(&query, &patch).await
    }
}
