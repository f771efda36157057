// Personalized fitness plan engine: computes a 7-day training schedule and
// a matching nutrition regimen from a user profile.

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
