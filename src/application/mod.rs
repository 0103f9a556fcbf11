//! Application layer: the operations a host application calls.
//!
//! Each service owns boxed ports (gateway SDK, order-id sealer, catalog) and
//! takes the [`crate::domain::config::SiteConfig`] as an explicit argument, so a
//! single instance can be shared across request handlers.

pub mod callback_verifier;
pub mod payment_builder;
pub mod payment_methods;
