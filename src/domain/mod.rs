pub mod entities;
pub mod error;
pub mod localizer;
pub mod ports;
pub mod values;
