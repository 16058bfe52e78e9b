//! Resume Manager - domain core for a personal resume management application
//!
//! This crate models a resume and its sections (careers, projects,
//! certifications, portfolios, profile links, self-promotions) and enforces
//! every rule that must hold before a resume is saved, exported, or restored.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
