//! Adapters Layer - implementations of domain interfaces that need no OS

pub mod gateways;
