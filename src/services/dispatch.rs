use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::booking::is_custom_label;
use crate::models::{BookingForm, BookingRequest, FieldId, Service};
use crate::services::composer::BookingMessageComposer;
use crate::services::deeplink::{self, Navigation, Target};
use crate::services::phone;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Sms,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "whatsapp",
            Channel::Sms => "sms",
        }
    }
}

/// Validates a submitted form and turns it into a deep link.
///
/// Nothing is built and nothing navigates unless every check passes. Only
/// the first failing field is flagged on the form.
#[derive(Debug, Clone)]
pub struct SubmitDispatcher {
    composer: BookingMessageComposer,
    whatsapp_number: String,
    sms_number: String,
    slots: Vec<String>,
}

impl SubmitDispatcher {
    pub fn new(
        composer: BookingMessageComposer,
        whatsapp_number: impl Into<String>,
        sms_number: impl Into<String>,
        slots: Vec<String>,
    ) -> Self {
        Self {
            composer,
            whatsapp_number: whatsapp_number.into(),
            sms_number: sms_number.into(),
            slots,
        }
    }

    pub fn composer(&self) -> &BookingMessageComposer {
        &self.composer
    }

    pub fn validate(
        &self,
        form: &mut BookingForm,
        today: NaiveDate,
    ) -> Result<BookingRequest, ValidationError> {
        form.clear_errors();
        self.check(form, today).inspect_err(|e| {
            form.set_error(e.field, &e.message);
        })
    }

    /// Validates, builds the message for `channel` and resets the form.
    pub fn dispatch(
        &self,
        form: &mut BookingForm,
        channel: Channel,
        today: NaiveDate,
    ) -> Result<Navigation, ValidationError> {
        let booking = self.validate(form, today)?;

        let navigation = match channel {
            Channel::WhatsApp => Navigation {
                url: deeplink::whatsapp_url(&self.whatsapp_number, &self.composer.compose(&booking)),
                target: Target::NewTab,
            },
            Channel::Sms => Navigation {
                url: deeplink::sms_url(&self.sms_number, &self.composer.compose_plain(&booking)),
                target: Target::CurrentTab,
            },
        };

        tracing::info!(
            channel = channel.as_str(),
            service = booking.service.label(),
            date = %booking.date,
            time = %booking.time,
            "booking dispatched"
        );

        *form = BookingForm::new(today);
        Ok(navigation)
    }

    fn check(&self, form: &BookingForm, today: NaiveDate) -> Result<BookingRequest, ValidationError> {
        let name = form.name.value.trim();
        if name.is_empty() {
            return Err(ValidationError::new(FieldId::Name, "Please enter your name"));
        }

        let phone_raw = form.phone.value.trim();
        let phone = if phone_raw.is_empty() {
            None
        } else {
            if phone::digits(phone_raw).len() != 10 {
                return Err(ValidationError::new(
                    FieldId::Phone,
                    "Enter a valid 10-digit phone",
                ));
            }
            Some(phone::format_phone(phone_raw))
        };

        let service_value = form.service.value.as_str();
        let service = if is_custom_label(service_value) {
            let text = form.custom_service.value.trim();
            if text.is_empty() {
                return Err(ValidationError::new(
                    FieldId::CustomService,
                    "Describe your custom service",
                ));
            }
            Service::Custom(text.to_string())
        } else {
            Service::from_label(service_value)
                .ok_or_else(|| ValidationError::new(FieldId::Service, "Select a service"))?
        };

        let date = NaiveDate::parse_from_str(form.date.value.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::new(FieldId::Date, "Choose a date"))?;
        if date < today {
            return Err(ValidationError::new(
                FieldId::Date,
                "Choose a date from today onward",
            ));
        }

        let time = form.time.value.trim();
        if !self.slots.iter().any(|s| s == time) {
            return Err(ValidationError::new(FieldId::Time, "Choose a time"));
        }

        let notes = form.notes.value.trim();

        Ok(BookingRequest {
            name: name.to_string(),
            phone,
            service,
            date,
            time: time.to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
