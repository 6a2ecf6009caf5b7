//! Quiz handlers.

mod request_consultation;

pub use request_consultation::{ConsultationContact, ConsultationError, RequestConsultationHandler};
