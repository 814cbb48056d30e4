mod backdrop;
mod color;
mod events;
mod field;
mod page;
mod particle;
mod render_loop;
mod renderer;
mod utils;

pub use backdrop::ParticleBackdrop;
pub use field::{Field, LINK_BASE_ALPHA, LINK_DISTANCE, PARTICLE_COUNT};
pub use page::PageController;
pub use particle::Particle;
pub use render_loop::RenderLoop;

use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Page-lifetime handle owned by the host page. Construction wires every
// behavior; letting the handle go (or calling shutdown) stops the render
// loop and detaches all listeners, so tests can mount and unmount
// repeatedly.
#[wasm_bindgen]
pub struct Site {
    backdrop: Option<ParticleBackdrop>,
    _page: PageController,
}

#[wasm_bindgen]
impl Site {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Site, JsValue> {
        utils::set_panic_hook();
        let page = PageController::mount()?;
        let backdrop = ParticleBackdrop::mount("particle-canvas")?;
        Ok(Site {
            backdrop,
            _page: page,
        })
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.backdrop
            .as_ref()
            .map_or(false, ParticleBackdrop::is_running)
    }

    pub fn shutdown(self) {
        if let Some(backdrop) = &self.backdrop {
            backdrop.stop();
        }
    }
}
