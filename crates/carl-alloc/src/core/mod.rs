pub mod allocation_policies;
pub mod allocation_policy;
pub mod application;
pub mod assignment;
pub mod capacity_table;
pub mod config;
pub mod engine;
pub mod user;
