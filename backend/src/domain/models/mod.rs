pub mod payment;
pub mod property;
pub mod settings;
