//! Core library for the `weather` card client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The provider boundary that turns WeatherAPI.com JSON into a [`WeatherRecord`]
//! - The query controller and its request status machine
//! - Derived display data (UV category, advice, card projection) and the header clock
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod advice;
pub mod card;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;

pub use card::WeatherCard;
pub use config::{Config, ProviderConfig};
pub use controller::{Completion, QueryController, Submission, Ticket};
pub use error::FetchError;
pub use model::{Query, RequestStatus, WeatherRecord};
pub use provider::{WeatherProvider, provider_from_config};
