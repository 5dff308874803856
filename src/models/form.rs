use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Phone,
    Service,
    CustomService,
    Date,
    Time,
    Notes,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Service,
        FieldId::CustomService,
        FieldId::Date,
        FieldId::Time,
        FieldId::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Phone => "phone",
            FieldId::Service => "service",
            FieldId::CustomService => "custom_service",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Notes => "notes",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to one form input: its current value plus the attributes the
/// handlers toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Field {
    pub value: String,
    pub required: bool,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Field {
    fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookingForm {
    pub name: Field,
    pub phone: Field,
    pub service: Field,
    pub custom_service: Field,
    pub date: Field,
    pub time: Field,
    pub notes: Field,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: Field::required(),
            phone: Field::default(),
            service: Field::required(),
            custom_service: Field {
                hidden: true,
                ..Field::default()
            },
            date: Field::required(),
            time: Field::required(),
            notes: Field::default(),
        }
    }
}

impl BookingForm {
    /// A blank form whose date picker starts at `today`.
    pub fn new(today: NaiveDate) -> Self {
        let mut form = Self::default();
        form.set_min_date(today);
        form
    }

    pub fn set_min_date(&mut self, today: NaiveDate) {
        self.date.min = Some(today.format("%Y-%m-%d").to_string());
    }

    pub fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Service => &self.service,
            FieldId::CustomService => &self.custom_service,
            FieldId::Date => &self.date,
            FieldId::Time => &self.time,
            FieldId::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::Service => &mut self.service,
            FieldId::CustomService => &mut self.custom_service,
            FieldId::Date => &mut self.date,
            FieldId::Time => &mut self.time,
            FieldId::Notes => &mut self.notes,
        }
    }

    pub fn set_error(&mut self, id: FieldId, message: &str) {
        self.field_mut(id).error = Some(message.to_string());
    }

    pub fn clear_errors(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).error = None;
        }
    }

    /// Fields currently carrying an inline error.
    pub fn flagged(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|id| self.field(*id).error.is_some())
            .collect()
    }
}
