//! Shift Payroll Engine
//!
//! This crate resolves which pay periods of each workplace are paid out in a
//! displayed calendar month, and accrues the wages of the shifts in those
//! periods minute by minute, applying holiday and late-night allowances.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
