use crate::models::booking::is_custom_label;
use crate::models::BookingForm;

/// Applies a service selection and keeps the custom description field in
/// step with it. Leaving the custom sentinel wipes whatever was typed there.
pub fn select_service(form: &mut BookingForm, value: &str) {
    form.service.value = value.to_string();

    let custom = is_custom_label(value);
    let field = &mut form.custom_service;
    field.hidden = !custom;
    field.required = custom;
    if !custom {
        field.value.clear();
        field.error = None;
    }
}
