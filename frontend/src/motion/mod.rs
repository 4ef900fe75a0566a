pub mod easing;
pub mod hooks;
pub mod progress;
pub mod scheduler;
pub mod snapper;
pub mod viewport;
