pub mod bootstrap;
pub mod scoring;
pub mod session;
pub mod session_events;

// Re-export main components
pub use bootstrap::*;
pub use scoring::*;
pub use session::*;
pub use session_events::*;
