// Mounts the particle field onto the page: sizes the canvas to the
// viewport, drives the render loop, and regenerates the field when the
// viewport is resized. The backdrop is decorative, so a missing canvas
// is tolerated silently rather than reported.

use crate::events::ListenerHandle;
use crate::field::{Field, PARTICLE_COUNT};
use crate::render_loop::RenderLoop;
use crate::renderer::CanvasRenderer;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

pub struct ParticleBackdrop {
    field: Rc<RefCell<Field>>,
    render_loop: RenderLoop,
    _resize: ListenerHandle,
}

impl ParticleBackdrop {
    // Looks the canvas up by id and starts the animation. Absent canvas
    // means an inert backdrop: Ok(None), no particles, no scheduled
    // frames, and nothing else on the page is affected.
    pub fn mount(canvas_id: &str) -> Result<Option<ParticleBackdrop>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas = match document.get_element_by_id(canvas_id) {
            Some(element) => element.dyn_into::<HtmlCanvasElement>()?,
            None => return Ok(None),
        };

        let (width, height) = viewport_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let mut field = Field::new(width, height);
        {
            let _timer = Timer::new("Field::populate");
            field.populate(PARTICLE_COUNT);
        }
        let field = Rc::new(RefCell::new(field));

        let renderer = CanvasRenderer::new(&canvas)?;
        let tick_field = Rc::clone(&field);
        let render_loop = RenderLoop::start(move || {
            let mut field = tick_field.borrow_mut();
            field.step();
            let _ = renderer.draw(&field);
        })?;

        let resize_field = Rc::clone(&field);
        let resize_window = window.clone();
        let resize = ListenerHandle::attach(window.as_ref(), "resize", move |_| {
            if let Ok((width, height)) = viewport_size(&resize_window) {
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                resize_field.borrow_mut().resize(width, height);
            }
        })?;

        Ok(Some(ParticleBackdrop {
            field,
            render_loop,
            _resize: resize,
        }))
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles.len()
    }

    pub fn stop(&self) {
        self.render_loop.stop();
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("viewport width is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("viewport height is not a number"))?;
    Ok((width, height))
}
