//! Floem view hosting a [`ColorSlider`].
//!
//! The view forwards its laid-out size, pointer events and paint pass to the
//! slider. Reactive code configures it by sending [`SliderCommand`]s through
//! a [`SliderHandle`]; commands that fail are logged since there is no
//! caller to return the error to.

use floem::kurbo::{Rect, Stroke};
use floem::peniko::Color;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Argb;
use crate::config::SliderConfig;
use crate::constants;
use crate::slider::{ColorSlider, SelectorStyle, SliderCanvas, SliderEvent};

/// Imperative configuration delivered to a mounted slider view.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderCommand {
    SetColors(Vec<Argb>),
    SetHexColors(Vec<String>),
    SetGradient { from: Argb, to: Argb, steps: usize },
    SetGradientAnchors { anchors: Vec<Argb>, steps: usize },
    SelectColor(Argb),
    SetSelection(usize),
    SetLockMode(bool),
    SetSelectorColor(Argb),
    SetSelectorStyle(SelectorStyle),
}

/// Copyable sender for [`SliderCommand`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderHandle(ViewId);

impl SliderHandle {
    pub fn send(self, command: SliderCommand) {
        self.0.update_state(command);
    }
}

pub struct ColorSliderView {
    id: ViewId,
    held: bool,
    slider: ColorSlider,
    selection: Option<RwSignal<usize>>,
}

/// Creates a color slider view from declarative options.
pub fn color_slider(config: SliderConfig) -> ColorSliderView {
    ColorSliderView {
        id: ViewId::new(),
        held: false,
        slider: ColorSlider::new(&config),
        selection: None,
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .width_full()
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorSliderView {
    /// Call `f` with `(index, color)` whenever the user picks a new cell.
    pub fn on_color_changed(mut self, f: impl FnMut(usize, Argb) + 'static) -> Self {
        self.slider.set_listener(f);
        self
    }

    /// Keep `selection` in sync with the selected index.
    ///
    /// User picks write the signal. Writes from elsewhere select silently,
    /// without firing [`Self::on_color_changed`].
    pub fn bind_selection(mut self, selection: RwSignal<usize>) -> Self {
        let id = self.id;
        self.slider.set_selection(selection.get_untracked());
        create_effect(move |_| {
            let index = selection.get();
            id.update_state(SliderCommand::SetSelection(index));
        });
        self.selection = Some(selection);
        self
    }

    pub fn handle(&self) -> SliderHandle {
        SliderHandle(self.id)
    }

    /// The selected color at construction time.
    pub fn selected_color(&self) -> Argb {
        self.slider.selected_color()
    }

    fn apply(&mut self, command: SliderCommand) {
        match command {
            SliderCommand::SetColors(colors) => self.slider.set_colors(&colors),
            SliderCommand::SetHexColors(hex) => {
                if let Err(err) = self.slider.set_hex_colors(&hex) {
                    tracing::warn!(%err, "color slider ignored hex colors");
                }
            }
            SliderCommand::SetGradient { from, to, steps } => {
                self.slider.set_gradient(from, to, steps);
            }
            SliderCommand::SetGradientAnchors { anchors, steps } => {
                if let Err(err) = self.slider.set_gradient_anchors(&anchors, steps) {
                    tracing::warn!(%err, "color slider ignored gradient");
                }
            }
            SliderCommand::SelectColor(color) => self.slider.select_color(color),
            SliderCommand::SetSelection(index) => self.slider.set_selection(index),
            SliderCommand::SetLockMode(lock) => self.slider.set_lock_mode(lock),
            SliderCommand::SetSelectorColor(color) => self.slider.set_selector_color(color),
            SliderCommand::SetSelectorStyle(style) => self.slider.set_selector_style(style),
        }
    }

    /// Track the held press and forward pointer input. Moves and releases
    /// without a press are hover and are ignored.
    fn pointer(&mut self, event: SliderEvent) -> EventPropagation {
        match event {
            SliderEvent::Press(_) => {
                self.held = true;
                self.dispatch(event)
            }
            SliderEvent::Move(_) if self.held => self.dispatch(event),
            SliderEvent::Release(_) if self.held => {
                self.held = false;
                self.dispatch(event)
            }
            SliderEvent::Cancel => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn dispatch(&mut self, event: SliderEvent) -> EventPropagation {
        let before = self.slider.selected_item();
        let handled = self.slider.on_pointer(event);
        let after = self.slider.selected_item();
        if after != before {
            if let Some(selection) = self.selection {
                selection.set(after);
            }
        }
        if self.slider.take_repaint() {
            self.id.request_paint();
        }
        if handled {
            EventPropagation::Stop
        } else {
            EventPropagation::Continue
        }
    }
}

impl SliderCanvas for PaintCx<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill(&rect, color, 0.0);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.stroke(&rect, color, &Stroke::new(width));
    }
}

impl View for ColorSliderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> std::borrow::Cow<'static, str> {
        "Color Slider".into()
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(command) = state.downcast::<SliderCommand>() {
            self.apply(*command);
            if self.slider.take_repaint() {
                self.id.request_paint();
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                // Keep receiving moves after the pointer leaves the row.
                cx.update_active(self.id());
                self.pointer(SliderEvent::Press(e.pos))
            }
            Event::PointerMove(e) => self.pointer(SliderEvent::Move(e.pos)),
            Event::PointerUp(e) => self.pointer(SliderEvent::Release(e.pos)),
            Event::FocusLost => self.pointer(SliderEvent::Cancel),
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.slider
            .set_size(layout.size.width as f64, layout.size.height as f64);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        self.slider.take_repaint();
        self.slider.paint(cx);
    }
}
