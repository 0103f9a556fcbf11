//! Paysera (WebToPay) payment redirects and callback verification.
//!
//! Build a signed redirect with
//! [`application::payment_builder::PaymentRequestBuilder`], authenticate the
//! gateway's callback with [`application::callback_verifier::CallbackVerifier`],
//! and list a site's payment methods with
//! [`application::payment_methods::PaymentMethodsService`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
