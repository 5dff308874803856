use chrono::NaiveDate;

use crate::models::BookingRequest;

/// Renders a booking request as the pre-filled chat message.
///
/// The layout is fixed: emoji and bold labels are part of the contract with
/// the shop, which reads these messages on WhatsApp. Phone and notes lines
/// appear only when the customer gave them.
#[derive(Debug, Clone)]
pub struct BookingMessageComposer {
    business_name: String,
    site_tag: String,
}

impl BookingMessageComposer {
    pub fn new(business_name: impl Into<String>, site_tag: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            site_tag: site_tag.into(),
        }
    }

    pub fn compose(&self, booking: &BookingRequest) -> String {
        let mut lines = vec![
            format!("🔥 *{} BOOKING REQUEST* 🔥", self.business_name.to_uppercase()),
            String::new(),
            format!("👤 *Name:* {}", booking.name),
        ];
        if let Some(phone) = booking.phone.as_deref().filter(|p| !p.is_empty()) {
            lines.push(format!("📱 *Phone:* {phone}"));
        }
        lines.push(format!("✂️ *Service:* {}", booking.service.display_text()));
        lines.push(format!("📅 *Date:* {}", long_date(booking.date)));
        lines.push(format!("⏰ *Time:* {}", booking.time));
        if let Some(notes) = booking.notes.as_deref().filter(|n| !n.is_empty()) {
            lines.push(format!("📝 *Notes:* {notes}"));
        }
        lines.push(String::new());
        lines.push(format!("_{}_", self.site_tag));
        lines.join("\n")
    }

    /// The same message for SMS clients, which show markdown markers raw.
    pub fn compose_plain(&self, booking: &BookingRequest) -> String {
        plain_text(&self.compose(booking))
    }
}

pub fn plain_text(message: &str) -> String {
    message.chars().filter(|c| *c != '*' && *c != '_').collect()
}

/// `2025-03-10` becomes `Monday, March 10`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn composer() -> BookingMessageComposer {
        BookingMessageComposer::new("Fade Empire", "Sent from FadeEmpire.com")
    }

    fn alex() -> BookingRequest {
        BookingRequest {
            name: "Alex".to_string(),
            phone: None,
            service: Service::BeardTrim,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: "2:00 PM".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_minimal_message_exact() {
        let message = composer().compose(&alex());
        assert_eq!(
            message,
            "🔥 *FADE EMPIRE BOOKING REQUEST* 🔥\n\
             \n\
             👤 *Name:* Alex\n\
             ✂️ *Service:* Beard Trim ($20)\n\
             📅 *Date:* Monday, March 10\n\
             ⏰ *Time:* 2:00 PM\n\
             \n\
             _Sent from FadeEmpire.com_"
        );
        assert!(!message.contains("Phone"));
        assert!(!message.contains("Notes"));
        assert!(message
            .lines()
            .any(|l| l == "✂️ *Service:* Beard Trim ($20)"));
    }

    #[test]
    fn test_full_message_exact() {
        let booking = BookingRequest {
            phone: Some("(413) 885-4440".to_string()),
            service: Service::Custom("Star design on the side".to_string()),
            notes: Some("First visit".to_string()),
            ..alex()
        };
        assert_eq!(
            composer().compose(&booking),
            "🔥 *FADE EMPIRE BOOKING REQUEST* 🔥\n\
             \n\
             👤 *Name:* Alex\n\
             📱 *Phone:* (413) 885-4440\n\
             ✂️ *Service:* Custom Request: Star design on the side\n\
             📅 *Date:* Monday, March 10\n\
             ⏰ *Time:* 2:00 PM\n\
             📝 *Notes:* First visit\n\
             \n\
             _Sent from FadeEmpire.com_"
        );
    }

    #[test]
    fn test_empty_optional_strings_are_skipped() {
        let booking = BookingRequest {
            phone: Some(String::new()),
            notes: Some(String::new()),
            ..alex()
        };
        assert_eq!(composer().compose(&booking), composer().compose(&alex()));
    }

    #[test]
    fn test_plain_strips_markers() {
        let booking = BookingRequest {
            notes: Some("use the_side door *please*".to_string()),
            ..alex()
        };
        let rich = composer().compose(&booking);
        let plain = composer().compose_plain(&booking);
        assert_eq!(plain, rich.replace(['*', '_'], ""));
        assert!(plain.starts_with("🔥 FADE EMPIRE BOOKING REQUEST 🔥\n"));
        assert!(plain.ends_with("\nSent from FadeEmpire.com"));
        assert!(plain.contains("📝 Notes: use theside door please"));
    }

    #[test]
    fn test_long_date() {
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            "Thursday, January 1"
        );
    }
}
