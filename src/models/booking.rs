use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const CUSTOM_REQUEST: &str = "Custom Request";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Service {
    ClassicCut,
    FadeLineup,
    BeardTrim,
    HotTowelShave,
    KidsCut,
    DesignPatterns,
    Custom(String),
}

impl Service {
    /// Every fixed service, in the order the form lists them.
    pub const CATALOGUE: [Service; 6] = [
        Service::ClassicCut,
        Service::FadeLineup,
        Service::BeardTrim,
        Service::HotTowelShave,
        Service::KidsCut,
        Service::DesignPatterns,
    ];

    pub fn label(&self) -> &str {
        match self {
            Service::ClassicCut => "Classic Cut ($30)",
            Service::FadeLineup => "Fade & Lineup ($35)",
            Service::BeardTrim => "Beard Trim ($20)",
            Service::HotTowelShave => "Hot Towel Shave ($40)",
            Service::KidsCut => "Kids Cut ($25)",
            Service::DesignPatterns => "Design & Patterns ($45+)",
            Service::Custom(_) => CUSTOM_REQUEST,
        }
    }

    /// Looks up a fixed service by its select value. The custom sentinel is
    /// not matched here since it needs its description.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::CATALOGUE.into_iter().find(|svc| svc.label() == s)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Service::Custom(_))
    }

    /// Text shown on the service line of a booking message.
    pub fn display_text(&self) -> String {
        match self {
            Service::Custom(text) => format!("{CUSTOM_REQUEST}: {text}"),
            other => other.label().to_string(),
        }
    }
}

pub fn is_custom_label(s: &str) -> bool {
    s == CUSTOM_REQUEST
}

/// One entry of the service select box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceOption {
    pub value: String,
    pub label: String,
}

pub fn service_options() -> Vec<ServiceOption> {
    let mut options: Vec<ServiceOption> = Service::CATALOGUE
        .iter()
        .map(|s| ServiceOption {
            value: s.label().to_string(),
            label: s.label().to_string(),
        })
        .collect();
    options.push(ServiceOption {
        value: CUSTOM_REQUEST.to_string(),
        label: format!("{CUSTOM_REQUEST} (Describe Below)"),
    });
    options
}

/// A validated booking, ready to be turned into a message.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: Option<String>,
    pub service: Service,
    pub date: NaiveDate,
    pub time: String,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_round_trips_catalogue() {
        for svc in Service::CATALOGUE {
            assert_eq!(Service::from_label(svc.label()), Some(svc));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown_and_sentinel() {
        assert_eq!(Service::from_label("Mullet ($99)"), None);
        assert_eq!(Service::from_label(CUSTOM_REQUEST), None);
        assert_eq!(Service::from_label(""), None);
    }

    #[test]
    fn test_display_text_custom() {
        let svc = Service::Custom("Skin fade with star".to_string());
        assert_eq!(svc.display_text(), "Custom Request: Skin fade with star");
        assert!(svc.is_custom());
        assert_eq!(Service::BeardTrim.display_text(), "Beard Trim ($20)");
    }

    #[test]
    fn test_service_options_end_with_custom() {
        let options = service_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, "Classic Cut ($30)");
        assert_eq!(options[6].value, "Custom Request");
        assert_eq!(options[6].label, "Custom Request (Describe Below)");
    }
}
