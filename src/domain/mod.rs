//! Domain types and the ports through which the gateway is reached.

pub mod amount;
pub mod callback;
pub mod catalog;
pub mod config;
pub mod payment;
pub mod ports;
