use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Run `task` once after `delay_ms`, fire and forget.
///
/// There is no cancellation: a task scheduled twice runs twice.
pub fn run_after(delay_ms: u32, task: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        task();
    });
}
