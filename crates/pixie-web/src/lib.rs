pub mod runner;

pub use runner::GameRunner;

#[doc(hidden)]
pub use {console_error_panic_hook, console_log, js_sys, log, pixie_engine};

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports for init, the per-frame tick, every input source,
///   manifest loading and the draw buffer accessors
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use pixie_web::GameRunner;
///
/// mod game;
/// use game::MyGame;
///
/// pixie_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `pixie_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::pixie_engine::{Buttons, InputEvent};

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $game_name);
        }

        /// One frame. Call once per display refresh.
        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_buttons_down(mask: u32) {
            with_runner(|r| r.push_input(InputEvent::ButtonsDown { buttons: Buttons(mask) }));
        }

        #[wasm_bindgen]
        pub fn game_buttons_up(mask: u32) {
            with_runner(|r| r.push_input(InputEvent::ButtonsUp { buttons: Buttons(mask) }));
        }

        #[wasm_bindgen]
        pub fn game_touch_start(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchStart { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_touch_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_touch_end() {
            with_runner(|r| r.push_input(InputEvent::TouchEnd));
        }

        #[wasm_bindgen]
        pub fn game_circle_pad(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::CirclePad { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_c_stick(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::CStick { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_accelerometer(x: f32, y: f32, z: f32) {
            with_runner(|r| r.push_input(InputEvent::Accelerometer { x, y, z }));
        }

        #[wasm_bindgen]
        pub fn game_gyroscope(roll: f32, pitch: f32, yaw: f32) {
            with_runner(|r| r.push_input(InputEvent::Gyroscope { roll, pitch, yaw }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) -> bool {
            with_runner(|r| r.load_manifest(json))
        }

        // ---- Draw buffer accessors ----

        #[wasm_bindgen]
        pub fn get_draws_ptr() -> *const f32 {
            with_runner(|r| r.draws_ptr())
        }

        #[wasm_bindgen]
        pub fn get_draw_count() -> u32 {
            with_runner(|r| r.draw_count())
        }

        /// Copy of this frame's draws, `get_draw_stride()` floats each.
        #[wasm_bindgen]
        pub fn get_draw_floats() -> $crate::js_sys::Float32Array {
            with_runner(|r| $crate::js_sys::Float32Array::from(r.draw_floats()))
        }

        #[wasm_bindgen]
        pub fn get_draw_stride() -> u32 {
            with_runner(|r| r.draw_stride())
        }

        #[wasm_bindgen]
        pub fn get_max_draws() -> u32 {
            with_runner(|r| r.max_draws())
        }

        #[wasm_bindgen]
        pub fn get_screen_width() -> u32 {
            with_runner(|r| r.screen_width())
        }

        #[wasm_bindgen]
        pub fn get_screen_height() -> u32 {
            with_runner(|r| r.screen_height())
        }
    };
}
