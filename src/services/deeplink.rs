use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left alone by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MOBILE_AGENTS: [&str; 8] = [
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "Mobile",
    "BlackBerry",
    "IEMobile",
    "Silk",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    NewTab,
    CurrentTab,
}

/// Where the browser should go after a successful submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub target: Target,
}

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", encode_component(message))
}

/// `?&body=` is understood by both Android and iOS messaging apps.
pub fn sms_url(number: &str, message: &str) -> String {
    format!("sms:{number}?&body={}", encode_component(message))
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_AGENTS.iter().any(|m| user_agent.contains(m))
}
