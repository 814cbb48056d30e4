// Browser-side tests for mounting behavior: the pure simulation is
// covered by the unit tests in src/, so these only exercise the pieces
// that need a real DOM.

#![cfg(target_arch = "wasm32")]

use landing_fx::{Field, ParticleBackdrop, PARTICLE_COUNT};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_canvas_mounts_nothing() {
    let backdrop = ParticleBackdrop::mount("no-such-canvas").unwrap();
    assert!(backdrop.is_none());
}

#[wasm_bindgen_test]
fn mounted_backdrop_populates_and_animates() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id("test-backdrop-canvas");
    document.body().unwrap().append_child(&canvas).unwrap();

    let backdrop = ParticleBackdrop::mount("test-backdrop-canvas")
        .unwrap()
        .expect("canvas exists, backdrop should mount");
    assert_eq!(backdrop.particle_count(), PARTICLE_COUNT);
    assert!(backdrop.is_running());

    backdrop.stop();
    assert!(!backdrop.is_running());

    canvas.remove();
}

#[wasm_bindgen_test]
fn field_regenerates_on_resize() {
    let mut field = Field::new(320.0, 240.0);
    field.populate(PARTICLE_COUNT);
    field.resize(640.0, 480.0);
    assert_eq!(field.particles.len(), PARTICLE_COUNT);
    for p in &field.particles {
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 640.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 480.0);
    }
}
