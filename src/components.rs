//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across page types
//! (article, index). Components handle specific UI elements with consistent
//! styling and behavior, eliminating duplication across page generators.

pub mod footer;
pub mod layout;
pub mod nav;
