// Infrastructure module - Background session services
pub mod heartbeat;
pub mod task_manager;

pub use heartbeat::{start_heartbeat, HeartbeatManager};
pub use task_manager::TaskManager;
