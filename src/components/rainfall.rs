//! Decorative digit-rain canvas animation for the auth pages.
//!
//! Purely cosmetic: sparse columns of binary digits drifting down a
//! canvas. Runs as a local async task ticking ~30fps and stops once the
//! canvas leaves the document. Requires a browser environment; SSR
//! renders an empty canvas.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const FONT_SIZE: f64 = 10.0;
#[cfg(feature = "hydrate")]
const COLUMN_WIDTH: f64 = 14.0;
#[cfg(feature = "hydrate")]
const CANVAS_WIDTH: f64 = 480.0;
#[cfg(feature = "hydrate")]
const CANVAS_HEIGHT: f64 = 720.0;

#[cfg(feature = "hydrate")]
struct Drop {
    x: f64,
    y: f64,
    speed: f64,
    chars: Vec<char>,
}

#[cfg(feature = "hydrate")]
fn random_drop(column: usize, start_y: f64) -> Drop {
    let length = 2 + (js_sys::Math::random() * 4.0) as usize;
    Drop {
        x: column as f64 * COLUMN_WIDTH,
        y: start_y,
        speed: 4.0 + js_sys::Math::random() * 8.0,
        chars: (0..length)
            .map(|_| if js_sys::Math::random() < 0.5 { '0' } else { '1' })
            .collect(),
    }
}

/// Animated rainfall backdrop.
#[component]
pub fn Rainfall() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(canvas) = canvas_ref.get() {
                leptos::task::spawn_local(animate(canvas));
            }
        });
    }

    view! {
        <canvas
            node_ref=canvas_ref
            class="rainfall"
            width="480"
            height="720"
        ></canvas>
    }
}

#[cfg(feature = "hydrate")]
async fn animate(canvas: web_sys::HtmlCanvasElement) {
    use wasm_bindgen::JsCast;

    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let columns = (CANVAS_WIDTH / COLUMN_WIDTH) as usize;
    let mut drops: Vec<Drop> = Vec::new();

    loop {
        if !canvas.is_connected() {
            return;
        }

        // Occasionally seed a new drop in a random column.
        if js_sys::Math::random() < 0.2 {
            let column = (js_sys::Math::random() * columns as f64) as usize;
            drops.push(random_drop(column, -60.0));
        }

        ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
        ctx.set_font(&format!("{FONT_SIZE}px monospace"));
        ctx.set_fill_style_str("rgba(59, 130, 246, 0.55)");

        for drop in &mut drops {
            for (i, ch) in drop.chars.iter().enumerate() {
                let y = drop.y - i as f64 * FONT_SIZE;
                let _ = ctx.fill_text(&ch.to_string(), drop.x, y);
            }
            drop.y += drop.speed;
        }

        let tail = FONT_SIZE * 5.0;
        drops.retain(|d| d.y < CANVAS_HEIGHT + tail);

        gloo_timers::future::sleep(std::time::Duration::from_millis(33)).await;
    }
}
