//! Adapters implementing the domain ports.

pub mod hmac_sealer;
pub mod in_memory;
pub mod webtopay;
