//! Attendance Time-Accounting Engine
//!
//! This crate derives daily attendance figures for an employee from a
//! check-in and check-out time: working hours, overtime, extra overtime,
//! a rounded check-out, punctuality, and the snacks and night bill
//! allowances for workers. It also builds filtered daily roster reports and
//! serves everything over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
