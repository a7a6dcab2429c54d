//! Standalone demo: five color sliders recoloring a toolbar.
//!
//! Run with `RUST_LOG=floem_color_slider=trace` to see selection changes.

use floem::prelude::*;
use floem::reactive::{SignalGet, SignalUpdate};
use floem::text::FONT_SYSTEM;
use floem::window::WindowConfig;
use floem_color_slider::{color_slider, Argb, SliderCommand, SliderConfig, SliderHandle};
use tracing_subscriber::EnvFilter;

fn caption(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.font_size(11.0)
            .color(Color::rgb8(90, 90, 90))
            .margin_top(8.0)
    })
}

/// Copies the toolbar color as hex.
fn copy_button(color: RwSignal<Argb>) -> impl IntoView {
    label(|| lucide_icons::Icon::Copy.unicode().to_string())
        .style(|s| {
            s.font_size(14.0)
                .font_family("lucide".to_string())
                .color(Color::WHITE)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            if let Ok(mut clipboard) = arboard::Clipboard::new() {
                let _ = clipboard.set_text(color.get_untracked().to_hex());
            }
        })
}

fn lock_toggle(handles: Vec<SliderHandle>) -> impl IntoView {
    let locked = RwSignal::new(false);
    label(move || {
        if locked.get() {
            "Lock mode: on".to_string()
        } else {
            "Lock mode: off".to_string()
        }
    })
    .style(|s| {
        s.padding(4.0)
            .margin_top(12.0)
            .border(1.0)
            .border_radius(3.0)
            .border_color(Color::rgb8(180, 180, 180))
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        let lock = !locked.get_untracked();
        locked.set(lock);
        for handle in &handles {
            handle.send(SliderCommand::SetLockMode(lock));
        }
    })
}

fn app_view() -> impl IntoView {
    let palette = color_slider(SliderConfig::default().selector_color(Argb::BLUE));
    let toolbar = RwSignal::new(palette.selected_color());
    let on_change = move |_: usize, color: Argb| toolbar.set(color);

    let palette = palette.on_color_changed(on_change);
    let two_tone = color_slider(SliderConfig::with_gradient(
        Argb(0xFFFF_5722),
        Argb(0xFF3F_51B5),
        21,
    ))
    .on_color_changed(on_change);
    let array = color_slider(SliderConfig::with_colors([
        Argb::RED,
        Argb::YELLOW,
        Argb::GREEN,
        Argb::CYAN,
        Argb::BLUE,
        Argb::MAGENTA,
    ]))
    .on_color_changed(on_change);
    let hex = color_slider(SliderConfig::with_hex_colors([
        "#263238", "#37474F", "#455A64", "#546E7A", "#607D8B", "#78909C", "#90A4AE",
    ]))
    .on_color_changed(on_change);
    let rainbow = color_slider(SliderConfig::default()).on_color_changed(on_change);
    rainbow.handle().send(SliderCommand::SetGradientAnchors {
        anchors: vec![Argb::BLUE, Argb::CYAN, Argb::GREEN, Argb::MAGENTA, Argb::RED],
        steps: 200,
    });

    let handles = vec![
        palette.handle(),
        two_tone.handle(),
        array.handle(),
        hex.handle(),
        rainbow.handle(),
    ];

    v_stack((
        h_stack((
            label(move || toolbar.get().to_hex()).style(|s| {
                s.font_size(16.0)
                    .font_family("monospace".to_string())
                    .color(Color::WHITE)
            }),
            empty().style(|s| s.flex_grow(1.0)),
            copy_button(toolbar),
        ))
        .style(move |s| {
            s.width_full()
                .height(56.0)
                .padding_horiz(16.0)
                .items_center()
                .background(Color::from(toolbar.get()))
        }),
        v_stack((
            caption("Default palette"),
            palette,
            caption("Gradient"),
            two_tone,
            caption("Color array"),
            array,
            caption("Hex colors"),
            hex,
            caption("Multi-anchor gradient"),
            rainbow,
            lock_toggle(handles),
        ))
        .style(|s| s.width_full().padding(16.0).gap(4.0)),
    ))
    .style(|s| s.size_full().background(Color::rgb8(242, 242, 242)))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    FONT_SYSTEM
        .lock()
        .db_mut()
        .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());

    floem::Application::new()
        .window(
            move |_| {
                app_view().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 480.0))
                    .title("floem-color-slider"),
            ),
        )
        .run();
}
