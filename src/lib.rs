//! PawHaven - record-management backend for a pet-adoption platform.
//!
//! Stores users, pets, adoption requests, care events, feedback, and
//! donations behind a generic record-store port, and runs the
//! three-state adoption workflow that keeps request outcomes
//! consistent with pet availability.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
