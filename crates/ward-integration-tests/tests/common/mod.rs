//! Shared harness: an in-process `ward-stub` on a random port.

#![allow(dead_code)]

use ward_client::{WardApiConfig, WardClient};
use ward_core::{DoctorId, PatientId, Role};
use ward_state::WardController;
use ward_stub::AppState;

pub const ANON_KEY: &str = "test-anon-key";

/// Start a ward-stub server over `state` on a random available port.
/// Returns (port, shutdown_signal_sender).
pub async fn start_stub_server(state: AppState) -> (u16, tokio::sync::oneshot::Sender<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let app = ward_stub::router(state);

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async {
                rx.await.ok();
            })
            .await
            .ok();
    });

    // Wait for the server to be ready.
    let client = reqwest::Client::new();
    for _ in 0..50 {
        if client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    (port, tx)
}

pub fn client(port: u16) -> WardClient {
    WardClient::new(WardApiConfig::local(port, ANON_KEY).unwrap()).unwrap()
}

/// A controller against the stub with patients and doctors loaded.
pub async fn controller(port: u16, role: Role) -> WardController<WardClient> {
    let mut controller = WardController::new(client(port));
    controller.set_role(role);
    controller.init().await.unwrap();
    controller
}

/// Register a patient through the controller's form, as a doctor would.
pub async fn register_patient(
    controller: &mut WardController<WardClient>,
    name: &str,
    room: &str,
    doctor: Option<DoctorId>,
) -> PatientId {
    controller.open_new_patient_form();
    let form = controller.new_patient_form_mut();
    form.full_name = name.to_string();
    form.room = room.to_string();
    form.doctor_id = doctor;
    controller.submit_new_patient().await.unwrap().id
}

/// Issue an order with only the medications section filled, for the
/// currently selected patient.
pub async fn issue_order(
    controller: &mut WardController<WardClient>,
    medications: &str,
) -> ward_core::Order {
    controller.open_new_order_form();
    controller.new_order_form_mut().medications = medications.to_string();
    controller.new_order_form_mut().checks = "Tansiyon 4 saatte bir".to_string();
    controller.submit_new_order().await.unwrap()
}
