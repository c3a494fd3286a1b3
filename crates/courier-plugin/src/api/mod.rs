//! Plugin-facing API: context, collaborator contracts, typed payloads.

pub mod context;
pub mod requests;
pub mod services;
