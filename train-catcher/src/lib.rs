//! Train catcher.
//!
//! Answers: "given the time and day, which train is worth going for?"
//! Weekly timetables are read from text files, every departure is
//! classified by how urgently the rider must leave to catch it, and the
//! best options are reported.

pub mod catcher;
pub mod config;
pub mod domain;
pub mod schedule;
