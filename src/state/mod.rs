// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod session_state;
pub mod mount;
pub mod app_state;

pub use session_state::*;
pub use mount::*;
pub use app_state::*;
