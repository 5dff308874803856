pub mod booking;
pub mod form;

pub use booking::{service_options, BookingRequest, Service, ServiceOption, CUSTOM_REQUEST};
pub use form::{BookingForm, Field, FieldId};
