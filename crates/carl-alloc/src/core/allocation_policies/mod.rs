pub mod drain_preinstalled;
pub mod reuse_first;
