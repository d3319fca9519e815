//! Portfolio domain types and pure logic.
//!
//! This crate holds everything that does not touch the network:
//!
//! - [`profile`] — the immutable portfolio data record served by the API.
//! - [`contact`] — contact-form submission types and validation.

pub mod contact;
pub mod profile;

pub use contact::{validate, Contact, RawContact, ValidationErrors};
pub use profile::{PortfolioProfile, Project, Skill};
