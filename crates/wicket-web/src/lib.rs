pub mod loader;
pub mod runner;
pub mod surface;

pub use runner::CaptchaRunner;
pub use surface::CanvasSurface;

/// Generate all `#[wasm_bindgen]` exports for a captcha embedding.
///
/// This macro eliminates the per-page boilerplate by generating:
/// - `thread_local!` storage for the CaptchaRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (captcha_init, input handlers, verification,
///   state accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use wicket_engine::*;
///
/// wicket_web::export_captcha!("my-page");
/// ```
///
/// # Arguments
///
/// - `$embed_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_captcha {
    ($embed_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::CaptchaRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::CaptchaRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Captcha not initialized. Call captcha_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn captcha_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let seed = (js_sys::Date::now() as u64) ^ js_sys::Math::random().to_bits();
            let runner = $crate::CaptchaRunner::new(CaptchaConfig::default(), seed)?;

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized", $embed_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn captcha_configure(json: &str) -> Result<(), JsValue> {
            let config =
                CaptchaConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
            with_runner(|r| r.configure(config));
            Ok(())
        }

        // ---- Canvas binding ----

        #[wasm_bindgen]
        pub fn captcha_bind_slide(
            full_id: &str,
            hole_id: &str,
            piece_id: &str,
        ) -> Result<(), JsValue> {
            with_runner(|r| r.bind_slide(full_id, hole_id, piece_id))
        }

        #[wasm_bindgen]
        pub fn captcha_bind_point(canvas_id: &str) -> Result<(), JsValue> {
            with_runner(|r| r.bind_point(canvas_id))
        }

        #[wasm_bindgen]
        pub fn captcha_bind_rotate(canvas_id: &str) -> Result<(), JsValue> {
            with_runner(|r| r.bind_rotate(canvas_id))
        }

        #[wasm_bindgen]
        pub fn captcha_detach() {
            with_runner(|r| r.detach());
        }

        // ---- Challenge lifecycle ----

        #[wasm_bindgen]
        pub fn captcha_reset_slide() -> Result<(), JsValue> {
            let (image, epoch) = with_runner(|r| r.reset_slide())?;
            wasm_bindgen_futures::spawn_local(async move {
                match $crate::loader::load_image(&image).await {
                    Ok(img) => with_runner(|r| r.finish_slide_load(epoch, &img)),
                    Err(message) => with_runner(|r| r.abandon_slide_load(epoch, message)),
                }
            });
            Ok(())
        }

        #[wasm_bindgen]
        pub fn captcha_reset_point() -> Result<(), JsValue> {
            let (image, epoch) = with_runner(|r| r.reset_point())?;
            wasm_bindgen_futures::spawn_local(async move {
                match $crate::loader::load_image(&image).await {
                    Ok(img) => with_runner(|r| r.finish_point_load(epoch, &img)),
                    Err(message) => with_runner(|r| r.abandon_point_load(epoch, message)),
                }
            });
            Ok(())
        }

        #[wasm_bindgen]
        pub fn captcha_reset_rotate() -> Result<(), JsValue> {
            let (image, epoch) = with_runner(|r| r.reset_rotate())?;
            wasm_bindgen_futures::spawn_local(async move {
                match $crate::loader::load_image(&image).await {
                    Ok(img) => with_runner(|r| r.finish_rotate_load(epoch, &img)),
                    Err(message) => with_runner(|r| r.abandon_rotate_load(epoch, message)),
                }
            });
            Ok(())
        }

        // ---- Input handlers ----

        #[wasm_bindgen]
        pub fn captcha_slide_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.slide_event(InteractionEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_slide_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.slide_event(InteractionEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_slide_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.slide_event(InteractionEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_point_click(x: f32, y: f32) {
            with_runner(|r| r.point_event(InteractionEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_point_clear() {
            with_runner(|r| r.clear_point_clicks());
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.rotate_event(InteractionEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.rotate_event(InteractionEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.rotate_event(InteractionEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_set_angle(degrees: f32) {
            with_runner(|r| r.rotate_event(InteractionEvent::AngleInput { degrees }));
        }

        // ---- Verification ----

        #[wasm_bindgen]
        pub fn captcha_verify_slide(tolerance: f32) -> bool {
            with_runner(|r| r.verify_slide(tolerance))
        }

        #[wasm_bindgen]
        pub fn captcha_verify_point() -> bool {
            with_runner(|r| r.verify_point())
        }

        #[wasm_bindgen]
        pub fn captcha_verify_rotate(tolerance: f32) -> bool {
            with_runner(|r| r.verify_rotate(tolerance))
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn captcha_slide_offset() -> f32 {
            with_runner(|r| r.slide_offset())
        }

        #[wasm_bindgen]
        pub fn captcha_slide_max_offset() -> f32 {
            with_runner(|r| r.slide_max_offset())
        }

        #[wasm_bindgen]
        pub fn captcha_slide_strip_width() -> f32 {
            with_runner(|r| r.slide_strip_width())
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_angle() -> f32 {
            with_runner(|r| r.rotate_angle())
        }

        #[wasm_bindgen]
        pub fn captcha_point_click_count() -> u32 {
            with_runner(|r| r.point_click_count())
        }

        #[wasm_bindgen]
        pub fn captcha_point_complete() -> bool {
            with_runner(|r| r.point_complete())
        }

        #[wasm_bindgen]
        pub fn captcha_slide_state() -> String {
            with_runner(|r| r.slide_state().to_string())
        }

        #[wasm_bindgen]
        pub fn captcha_point_state() -> String {
            with_runner(|r| r.point_state().to_string())
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_state() -> String {
            with_runner(|r| r.rotate_state().to_string())
        }

        #[wasm_bindgen]
        pub fn captcha_slide_loading() -> bool {
            with_runner(|r| r.slide_loading())
        }

        #[wasm_bindgen]
        pub fn captcha_point_loading() -> bool {
            with_runner(|r| r.point_loading())
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_loading() -> bool {
            with_runner(|r| r.rotate_loading())
        }

        #[wasm_bindgen]
        pub fn captcha_slide_load_error() -> Option<String> {
            with_runner(|r| r.slide_load_error())
        }

        #[wasm_bindgen]
        pub fn captcha_point_load_error() -> Option<String> {
            with_runner(|r| r.point_load_error())
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_load_error() -> Option<String> {
            with_runner(|r| r.rotate_load_error())
        }

        #[wasm_bindgen]
        pub fn captcha_slide_descriptor() -> Option<String> {
            with_runner(|r| r.slide_descriptor())
        }

        #[wasm_bindgen]
        pub fn captcha_point_descriptor() -> Option<String> {
            with_runner(|r| r.point_descriptor())
        }

        #[wasm_bindgen]
        pub fn captcha_rotate_descriptor() -> Option<String> {
            with_runner(|r| r.rotate_descriptor())
        }
    };
}
