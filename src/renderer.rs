// Renderer struct that handles the canvas 2d calls. The field only ever
// needs four operations: clear the surface, fill a circle, and stroke a
// line, with rgba styles built from the fixed accent hue.

use crate::color::Color;
use crate::field::Field;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LINK_LINE_WIDTH: f64 = 0.5;

pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    hue: Color,
}

impl CanvasRenderer {
    // On creation grabs a reference to the 2d context from the canvas on
    // the DOM.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<CanvasRenderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasRenderer {
            context,
            hue: Color::from_u32(0x6366f1),
        })
    }

    pub fn clear(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    pub fn fill_circle(&self, pos: [f64; 2], radius: f64, alpha: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(pos[0], pos[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context
            .set_fill_style(&JsValue::from_str(&self.hue.css(alpha)));
        self.context.fill();
        Ok(())
    }

    pub fn stroke_line(&self, from: [f64; 2], to: [f64; 2], alpha: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&self.hue.css(alpha)));
        self.context.set_line_width(LINK_LINE_WIDTH);
        self.context.stroke();
    }

    // Draws one frame: every particle as a translucent dot, then every
    // close pair as a fading line.
    pub fn draw(&self, field: &Field) -> Result<(), JsValue> {
        self.clear(field.width, field.height);
        for particle in &field.particles {
            self.fill_circle(particle.pos, particle.radius, particle.alpha)?;
        }
        field.for_each_link(|a, b, alpha| {
            self.stroke_line(a.pos, b.pos, alpha);
        });
        Ok(())
    }
}
