pub mod depletion;
pub mod display;
pub mod dto;
pub mod error;
pub mod services;
pub mod units;
pub mod variance;
