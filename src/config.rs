use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub business_name: String,
    pub site_tag: String,
    pub whatsapp_number: String,
    pub sms_number: String,
    pub display_phone: String,
    pub open_hour: u32,
    pub close_hour: u32,
    pub trim_last_slot: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            business_name: env::var("BUSINESS_NAME").unwrap_or_else(|_| "Fade Empire".to_string()),
            site_tag: env::var("SITE_TAG")
                .unwrap_or_else(|_| "Sent from FadeEmpire.com".to_string()),
            whatsapp_number: digits_only(
                &env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| "14138854440".to_string()),
            ),
            sms_number: digits_only(
                &env::var("SMS_NUMBER").unwrap_or_else(|_| "4138854440".to_string()),
            ),
            display_phone: env::var("DISPLAY_PHONE")
                .unwrap_or_else(|_| "(413) 885-4440".to_string()),
            open_hour: env::var("OPEN_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            close_hour: env::var("CLOSE_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(17),
            trim_last_slot: env::var("TRIM_LAST_SLOT")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

/// Merchant numbers go into deep links as bare digits.
fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
