mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use progress::SessionProgress;
pub use service::ReviewSession;
pub use view::{CardView, SessionView};
