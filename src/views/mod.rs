pub mod app;
pub mod login;
pub mod layout;
pub mod dashboard;
pub mod section;

pub use app::render_app;
pub use login::render_login;
pub use layout::render_layout;
pub use dashboard::render_dashboard;
pub use section::render_section;
