// ============================================================================
// KECHEI STORE SYSTEM - Inventory front-end (Rust + MVVM, no UI framework)
// ============================================================================
// - Views: functions that build DOM (wasm only)
// - ViewModels: UI state + logic (login flow, session guard, dashboard)
// - Services: HTTP only
// - State: Rc<RefCell> cells + change subscribers
// - Models: wire types shared with the backend
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use wasm_entry::*;

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 Kechei Store System (API: {})", CONFIG.api_base_url);

        let mut app = App::new()?;
        app.render()?;

        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(app);
        });

        Ok(())
    }

    /// Full re-render of the current route
    pub fn rerender_app() {
        APP.with(|app_cell| {
            // try_borrow_mut: a render already in progress will pick up the change
            match app_cell.try_borrow_mut() {
                Ok(mut guard) => {
                    if let Some(app) = guard.as_mut() {
                        if let Err(e) = app.render() {
                            log::error!("❌ [RERENDER] Error re-rendering: {}", e);
                        }
                    } else {
                        log::warn!("⚠️ [RERENDER] App not initialised");
                    }
                }
                Err(_) => log::debug!("[RERENDER] Render in progress, skipping"),
            }
        });
    }

    /// Callable from JavaScript
    #[wasm_bindgen]
    pub fn rerender_app_wasm() {
        rerender_app();
    }
}
