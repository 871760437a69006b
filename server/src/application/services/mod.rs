pub mod agents;
pub mod maintenance_mode;
