// Render service around requestAnimationFrame. The source page's loop
// rescheduled itself forever with no way to stop it; here the pending
// frame id is owned by an explicit handle, so start/stop/dispose are
// observable and the loop can be torn down in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

struct LoopState {
    frame_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

pub struct RenderLoop {
    state: Rc<LoopState>,
}

impl RenderLoop {
    // Starts invoking `tick` once per display-refresh interval. The
    // browser suspends the callback while the tab is hidden and resumes
    // it on visibility, so no throttling of our own is needed.
    pub fn start<F>(mut tick: F) -> Result<RenderLoop, JsValue>
    where
        F: FnMut() + 'static,
    {
        let state = Rc::new(LoopState {
            frame_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let inner = Rc::clone(&state);
        let callback = Closure::wrap(Box::new(move || {
            // A stop() between frames clears the id; don't re-arm.
            if inner.frame_id.get().is_none() {
                return;
            }
            tick();
            if inner.frame_id.get().is_some() {
                inner.frame_id.set(schedule(&inner).ok());
            }
        }) as Box<dyn FnMut()>);

        *state.callback.borrow_mut() = Some(callback);
        state.frame_id.set(Some(schedule(&state)?));

        Ok(RenderLoop { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.frame_id.get().is_some()
    }

    // Cancels the pending frame and releases the callback.
    pub fn stop(&self) {
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.state.callback.borrow_mut().take();
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &LoopState) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let callback = state.callback.borrow();
    let callback = callback
        .as_ref()
        .ok_or_else(|| JsValue::from_str("render loop already stopped"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
