//! Ferrous rDNS Infrastructure Layer
pub mod dns;
pub mod export;
pub mod system;
