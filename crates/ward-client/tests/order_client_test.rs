//! Contract tests for OrderClient against the PostgREST `orders` table.
//!
//! | Method | Query | Test |
//! |--------|-------|------|
//! | GET    | `select=*,doctors(ad_soyad)&hasta_id=eq.{id}&order=created_at.desc` | `list_orders_*` |
//! | POST   | `select=*` | `create_order_*` |
//! | PATCH  | `select=*&id=eq.{id}` | `set_completed_*` |

use serde_json::json;
use ward_client::{WardApiConfig, WardApiError, WardClient};
use ward_core::{CompletedTasks, DoctorId, NewOrder, OrderId, PatientId, TaskCategory};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PATIENT: &str = "7d0b7f4e-6a61-4a39-9b58-0f0a1f7c2d11";
const DOCTOR: &str = "2b3c0a5e-1f0e-4b5e-8f37-2a4b6c8d0e12";
const ORDER: &str = "0e1f2a3b-4c5d-4e6f-8a9b-0c1d2e3f4a5b";

fn test_client(mock_server: &MockServer) -> WardClient {
    let config = WardApiConfig::new(&mock_server.uri(), "test-anon-key").unwrap();
    WardClient::new(config).unwrap()
}

fn order_row(completed: serde_json::Value) -> serde_json::Value {
    json!({
        "id": ORDER,
        "hasta_id": PATIENT,
        "doktor_id": DOCTOR,
        "ilaclar": "Parol 500mg, 08:00 ve 20:00",
        "serum": "100ml İzosel, 4 saatte",
        "kontroller": "4 saatte bir TA, ateş, nabız",
        "notlar": "Düşme riski",
        "tamamlanan_gorevler": completed,
        "created_at": "2026-03-01T09:00:00+00:00",
        "doctors": { "ad_soyad": "Mehmet Kaya" }
    })
}

// ── GET /rest/v1/orders ──────────────────────────────────────────────

#[tokio::test]
async fn list_orders_filters_by_patient_and_orders_newest_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .and(query_param("select", "*,doctors(ad_soyad)"))
        .and(query_param("hasta_id", format!("eq.{PATIENT}")))
        .and(query_param("order", "created_at.desc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([order_row(json!(["serum"]))])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let orders = client
        .orders()
        .list_for_patient(PATIENT.parse().unwrap())
        .await
        .unwrap();

    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.patient_id, PATIENT.parse::<PatientId>().unwrap());
    assert!(order.is_completed(TaskCategory::IvFluids));
    assert_eq!(
        order.doctor.as_ref().map(|d| d.full_name.as_str()),
        Some("Mehmet Kaya")
    );
}

#[tokio::test]
async fn list_orders_drops_non_completable_labels() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([order_row(json!(["notlar", "kontroller", "kontroller"]))])),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let orders = client
        .orders()
        .list_for_patient(PATIENT.parse().unwrap())
        .await
        .unwrap();
    assert_eq!(orders[0].completed.keys(), vec!["kontroller"]);
}

// ── POST /rest/v1/orders ─────────────────────────────────────────────

#[tokio::test]
async fn create_order_posts_all_sections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/orders"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!([{
            "hasta_id": PATIENT,
            "doktor_id": DOCTOR,
            "ilaclar": "Parol 500mg, 08:00 ve 20:00",
            "serum": "100ml İzosel, 4 saatte",
            "kontroller": "4 saatte bir TA, ateş, nabız",
            "notlar": "Düşme riski"
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([order_row(json!([]))])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let order = client
        .orders()
        .create(&NewOrder {
            patient_id: PATIENT.parse().unwrap(),
            doctor_id: DOCTOR.parse::<DoctorId>().unwrap(),
            medications: "Parol 500mg, 08:00 ve 20:00".into(),
            iv_fluids: "100ml İzosel, 4 saatte".into(),
            checks: "4 saatte bir TA, ateş, nabız".into(),
            notes: "Düşme riski".into(),
        })
        .await
        .unwrap();

    assert_eq!(order.id, ORDER.parse::<OrderId>().unwrap());
    assert!(order.completed.is_empty());
}

// ── PATCH /rest/v1/orders ────────────────────────────────────────────

#[tokio::test]
async fn set_completed_patches_whole_set_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/orders"))
        .and(query_param("id", format!("eq.{ORDER}")))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({ "tamamlanan_gorevler": ["kontroller", "ilaclar"] })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([order_row(json!(["kontroller", "ilaclar"]))])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let set: CompletedTasks = [TaskCategory::Checks, TaskCategory::Medications]
        .into_iter()
        .collect();
    let updated = client
        .orders()
        .set_completed(ORDER.parse().unwrap(), &set)
        .await
        .unwrap();
    assert_eq!(updated.completed, set);
}

#[tokio::test]
async fn set_completed_on_missing_order_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .orders()
        .set_completed(OrderId::new(), &CompletedTasks::new())
        .await;
    assert!(matches!(result, Err(WardApiError::NotFound { .. })));
}
