//! Confetti Canvas Component
//!
//! Full-page overlay that plays a confetti burst on every celebration.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::confetti::Burst;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

const PARTICLE_COUNT: usize = 160;
const FRAME_MS: u32 = 16;
const FRAME_SECS: f64 = FRAME_MS as f64 / 1000.0;

#[component]
pub fn ConfettiCanvas() -> impl IntoView {
    let store = use_app_store();
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |prev: Option<u32>| {
        let generation = store.celebrations().get();
        if is_new_celebration(prev, generation) {
            match canvas_ref.get_untracked() {
                Some(canvas) => launch(store, generation, canvas),
                None => log::warn!("[CONFETTI] canvas not mounted"),
            }
        }
        generation
    });

    view! { <canvas class="confetti-canvas" node_ref=canvas_ref /> }
}

/// Launch only when the counter moved past the value seen on the last run
fn is_new_celebration(prev: Option<u32>, generation: u32) -> bool {
    generation != 0 && prev != Some(generation)
}

/// Animate one burst until it finishes or a newer celebration takes over
fn launch(store: AppStore, generation: u32, canvas: HtmlCanvasElement) {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let Some(ctx) = context_2d(&canvas) else {
        log::warn!("[CONFETTI] 2d context unavailable, skipping");
        return;
    };

    let mut burst = Burst::new(width.into(), height.into(), PARTICLE_COUNT, js_sys::Math::random);
    log::debug!("[CONFETTI] burst #{} on {}x{}", generation, width, height);

    spawn_local(async move {
        while !burst.is_finished() {
            if store.celebrations().get_untracked() != generation {
                return;
            }
            burst.step(FRAME_SECS);
            draw(&ctx, &burst);
            TimeoutFuture::new(FRAME_MS).await;
        }
        ctx.clear_rect(0.0, 0.0, burst.width(), burst.height());
    });
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw(ctx: &CanvasRenderingContext2d, burst: &Burst) {
    ctx.clear_rect(0.0, 0.0, burst.width(), burst.height());
    for p in burst.particles() {
        ctx.save();
        ctx.set_global_alpha(p.alpha());
        ctx.set_fill_style_str(p.color);
        if ctx.translate(p.x, p.y).is_ok() && ctx.rotate(p.rotation).is_ok() {
            ctx.fill_rect(-p.size / 2.0, -p.size / 4.0, p.size, p.size / 2.0);
        }
        ctx.restore();
    }
}
