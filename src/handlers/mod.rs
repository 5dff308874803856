pub mod booking;
pub mod health;
pub mod text;
