pub mod composer;
pub mod controller;
pub mod deeplink;
pub mod dispatch;
pub mod phone;
pub mod selector;
pub mod slots;
