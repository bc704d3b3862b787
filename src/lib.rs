//! BaZi ("Eight Characters") calculation engine.
//!
//! This crate converts a Gregorian birth date and clock time into the four
//! pillars (year, month, day, hour) of the traditional Chinese sexagenary
//! stem-branch calendar. Month and year boundaries follow fixed calendar-day
//! approximations of the principal solar terms, not astronomical timestamps.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
