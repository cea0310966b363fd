pub mod use_appointments;
pub mod use_auth;

pub use use_appointments::{use_appointments, UseAppointmentsHandle};
pub use use_auth::{use_auth, RegisterState, UseAuthHandle};
