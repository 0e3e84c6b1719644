//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current weather API
//! (<https://openweathermap.org/current>). One request per call, no retries;
//! every failure is classified into a [`WeatherError`].

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ApiResponse, ConditionBlock, MainBlock, WindBlock};
