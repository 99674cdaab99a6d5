//! Lumen Navigation
//!
//! Address bar input handling:
//! - [`normalize`] turns whatever the user typed into a URL with an explicit
//!   scheme.
//! - [`NavigationController`] forwards normalized URLs to the bound page
//!   surface, or drops them while no surface is bound.

mod controller;
mod normalize;

pub use controller::{Binding, NavigationController, PageSurface};
pub use normalize::normalize;
