use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::models::booking::is_custom_label;
use crate::models::{BookingForm, FieldId};
use crate::services::phone;
use crate::services::selector;

/// Input handlers for the booking form. Each method reacts to one kind of
/// browser event and rewrites the affected fields in place.
#[derive(Debug, Clone)]
pub struct InputController {
    slots: Vec<String>,
}

impl InputController {
    pub fn new(slots: Vec<String>) -> Self {
        Self { slots }
    }

    pub fn time_options(&self) -> &[String] {
        &self.slots
    }

    pub fn new_form(&self, today: NaiveDate) -> BookingForm {
        let mut form = BookingForm::default();
        self.apply_min_date(&mut form, today);
        form
    }

    pub fn apply_min_date(&self, form: &mut BookingForm, today: NaiveDate) {
        form.set_min_date(today);
    }

    /// Returns where the caret should sit after re-masking.
    pub fn on_phone_input(&self, form: &mut BookingForm, raw: &str, cursor: usize) -> usize {
        let (value, cursor) = phone::reformat_with_cursor(raw, cursor);
        form.phone.value = value;
        form.phone.error = None;
        cursor
    }

    pub fn on_service_change(&self, form: &mut BookingForm, value: &str) {
        selector::select_service(form, value);
        form.service.error = None;
    }

    /// Plain text inputs. Phone and service have their own handlers. Custom
    /// text is only accepted while the selected service is the custom one.
    pub fn on_field_input(
        &self,
        form: &mut BookingForm,
        id: FieldId,
        value: &str,
    ) -> Result<(), ValidationError> {
        match id {
            FieldId::Phone => {
                let cursor = value.chars().count();
                self.on_phone_input(form, value, cursor);
            }
            FieldId::Service => self.on_service_change(form, value),
            FieldId::CustomService if !is_custom_label(&form.service.value) => {
                return Err(ValidationError::new(
                    FieldId::CustomService,
                    "Select Custom Request first",
                ));
            }
            _ => {
                let field = form.field_mut(id);
                field.value = value.to_string();
                field.error = None;
            }
        }
        Ok(())
    }

    pub fn reset(&self, form: &mut BookingForm, today: NaiveDate) {
        *form = self.new_form(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn controller() -> InputController {
        InputController::new(vec!["10:00 AM".to_string(), "10:30 AM".to_string()])
    }

    #[test]
    fn test_new_form_has_min_date() {
        let form = controller().new_form(today());
        assert_eq!(form.date.min.as_deref(), Some("2025-06-16"));
    }

    #[test]
    fn test_phone_input_masks_in_place() {
        let c = controller();
        let mut form = c.new_form(today());
        form.phone.error = Some("Enter a valid 10-digit phone".to_string());

        let cursor = c.on_phone_input(&mut form, "4138854", 7);
        assert_eq!(form.phone.value, "(413) 885-4");
        assert_eq!(cursor, 11);
        assert!(form.phone.error.is_none());
    }

    #[test]
    fn test_service_change_toggles_custom() {
        let c = controller();
        let mut form = c.new_form(today());
        c.on_service_change(&mut form, "Custom Request");
        c.on_field_input(&mut form, FieldId::CustomService, "Half shaved")
            .unwrap();
        assert_eq!(form.custom_service.value, "Half shaved");

        c.on_service_change(&mut form, "Classic Cut ($30)");
        assert!(form.custom_service.value.is_empty());
        assert!(!form.custom_service.required);
    }

    #[test]
    fn test_hidden_custom_field_rejects_input() {
        let c = controller();
        let mut form = c.new_form(today());
        let err = c
            .on_field_input(&mut form, FieldId::CustomService, "sneaky")
            .unwrap_err();
        assert_eq!(err.field, FieldId::CustomService);
        assert!(form.custom_service.value.is_empty());
    }

    #[test]
    fn test_custom_text_follows_service_not_hidden_flag() {
        let c = controller();
        let mut form = c.new_form(today());
        form.service.value = "Classic Cut ($30)".to_string();
        form.custom_service.hidden = false;
        form.custom_service.required = true;

        let err = c
            .on_field_input(&mut form, FieldId::CustomService, "stale text")
            .unwrap_err();
        assert_eq!(err.field, FieldId::CustomService);
        assert!(form.custom_service.value.is_empty());
    }

    #[test]
    fn test_field_input_routes_phone() {
        let c = controller();
        let mut form = c.new_form(today());
        c.on_field_input(&mut form, FieldId::Phone, "4138854440").unwrap();
        assert_eq!(form.phone.value, "(413) 885-4440");
        c.on_field_input(&mut form, FieldId::Notes, "no clippers").unwrap();
        assert_eq!(form.notes.value, "no clippers");
    }

    #[test]
    fn test_reset() {
        let c = controller();
        let mut form = c.new_form(today());
        form.name.value = "Sam".to_string();
        let tomorrow = today().succ_opt().unwrap();
        c.reset(&mut form, tomorrow);
        assert!(form.name.value.is_empty());
        assert_eq!(form.date.min.as_deref(), Some("2025-06-17"));
    }

    #[test]
    fn test_time_options() {
        assert_eq!(controller().time_options().len(), 2);
    }
}
