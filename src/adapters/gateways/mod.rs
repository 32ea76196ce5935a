//! Gateways - in-memory implementations of domain repositories

pub mod memory_registration_gateway;

pub use memory_registration_gateway::MemoryRegistrationGateway;
