//! Core domain types for Vitrine.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod content;
pub mod ui;

pub use content::{
    ContactMessage, EmptyFieldError, PortfolioContent, Project, ProjectStatus, SocialLink,
    Technology,
};
