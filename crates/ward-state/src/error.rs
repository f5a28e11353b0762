//! Controller error types.

use thiserror::Error;
use ward_client::WardApiError;
use ward_core::{OrderId, PatientId};

/// Why a controller action did nothing.
///
/// Whatever the variant, the cached state is unchanged by the failed step.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// The backend call failed.
    #[error("backend call failed: {0}")]
    Backend(#[from] WardApiError),

    /// An order was submitted with no patient open.
    #[error("no patient is selected")]
    NoPatientSelected,

    /// The patient has no attending doctor and the doctor list is empty,
    /// so the order has nobody to be issued by.
    #[error("no doctor available to issue the order")]
    NoDoctorAvailable,

    /// The patient is not in the cached roster.
    #[error("patient {0} is not in the roster")]
    UnknownPatient(PatientId),

    /// The order is not in the cached order list.
    #[error("order {0} is not in the current order list")]
    UnknownOrder(OrderId),
}
