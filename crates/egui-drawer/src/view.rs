use crate::controller::DrawerController;
use crate::gesture::{GestureEvent, PanPhase, RecognizerKind};
use crate::pane::SharedPane;
use egui::{Context, CursorIcon, Id, Rect, Response, Sense, Ui, UiBuilder, Vec2, Widget};
use std::hash::Hash;

#[derive(Clone, Default)]
pub struct DrawerViewState {
    /// Recognizer tracking the pointer, if a pan is in progress.
    pub active: Option<RecognizerKind>,
    pub translation: f32,
}

impl DrawerViewState {
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id).unwrap_or_default())
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }
}

/// Draws a [`DrawerController`] into the available space and feeds pointer
/// input back into it.
pub struct DrawerView<'a> {
    widget_id: Id,
    size: Vec2,
    drawer: &'a mut DrawerController,
}

impl Widget for DrawerView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let widget_id = self.widget_id;
        let drawer = self.drawer;
        let mut state = DrawerViewState::load(ui.ctx(), widget_id);

        drawer.apply_commands();

        let (container, response) = ui.allocate_exact_size(self.size, Sense::hover());
        drawer.set_container(container);

        let now = ui.input(|i| i.time);
        if drawer.tick(now) {
            ui.ctx().request_repaint();
        }

        let menu = drawer.menu_surface();
        show_pane(ui, drawer.menu(), menu.frame, container, widget_id.with("menu"));

        let content = drawer.content_surface();
        let painter = ui.painter_at(container);
        let shadow = drawer.options().shadow;
        if shadow.is_visible() {
            painter.add(shadow.to_shadow().as_shape(content.frame, 0.0));
        }
        painter.rect_filled(content.frame, 0.0, ui.visuals().panel_fill);
        show_pane(ui, drawer.content(), content.frame, container, widget_id.with("content"));

        // a programmatic show/hide can disarm the recognizer mid pan
        if state
            .active
            .is_some_and(|kind| !drawer.recognizer(kind).enabled)
        {
            state.active = None;
        }

        if drawer.recognizer(RecognizerKind::EdgePan).enabled {
            let edge_width = drawer.options().edge_width.min(container.width());
            let strip = Rect::from_min_max(
                egui::pos2(container.max.x - edge_width, container.min.y),
                container.max,
            );
            track_edge_pan(ui, drawer, &mut state, strip);
            if state.active == Some(RecognizerKind::EdgePan) {
                ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
            }
        } else if drawer.is_tap_catcher_installed() {
            // registered after the content pane so it wins hit testing
            let catcher_rect = content.frame.intersect(container);
            let catcher = ui.interact(
                catcher_rect,
                widget_id.with("tap_catcher"),
                Sense::click_and_drag(),
            );
            if catcher.clicked() {
                drawer.handle_gesture(GestureEvent::OutsideTap);
            }
            track_pan(ui, drawer, &mut state, &catcher, RecognizerKind::Pan);
        }

        if drawer.is_animating() || state.active.is_some() {
            ui.ctx().request_repaint();
        }
        state.store(ui.ctx(), widget_id);
        response
    }
}

impl<'a> DrawerView<'a> {
    pub fn new(ui: &mut Ui, drawer: &'a mut DrawerController) -> Self {
        Self {
            widget_id: ui.make_persistent_id("egui_drawer"),
            size: ui.available_size(),
            drawer,
        }
    }

    /// Needed when more than one drawer lives in the same `Ui`.
    #[inline]
    pub fn id_salt(mut self, ui: &Ui, salt: impl Hash) -> Self {
        self.widget_id = ui.make_persistent_id(salt);
        self
    }

    #[inline]
    pub fn set_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}

fn show_pane(ui: &mut Ui, pane: &SharedPane, frame: Rect, container: Rect, id: Id) {
    let mut child = ui.new_child(
        UiBuilder::new()
            .id_salt(id)
            .max_rect(frame)
            .layout(*ui.layout()),
    );
    child.set_clip_rect(frame.intersect(container));
    pane.borrow_mut().ui(&mut child);
}

/// The edge strip is watched through raw pointer state rather than a widget,
/// so taps on content widgets under the strip still reach them. A pan is
/// claimed only once the pointer is decidedly dragging from a press inside
/// the strip.
fn track_edge_pan(
    ui: &Ui,
    drawer: &mut DrawerController,
    state: &mut DrawerViewState,
    strip: Rect,
) {
    let kind = RecognizerKind::EdgePan;
    let (from_strip, dragging, down, released) = ui.input(|i| {
        (
            i.pointer.press_origin().is_some_and(|origin| strip.contains(origin)),
            i.pointer.is_decidedly_dragging(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
        )
    });

    let phase = if state.active != Some(kind) {
        if !(from_strip && dragging && down) {
            return;
        }
        state.active = Some(kind);
        PanPhase::Began
    } else if released {
        PanPhase::Ended
    } else if down {
        PanPhase::Changed
    } else {
        PanPhase::Cancelled
    };
    send_pan(ui, drawer, state, kind, phase);
}

fn track_pan(
    ui: &Ui,
    drawer: &mut DrawerController,
    state: &mut DrawerViewState,
    response: &Response,
    kind: RecognizerKind,
) {
    let phase = if response.drag_started() {
        state.active = Some(kind);
        PanPhase::Began
    } else if response.dragged() && state.active == Some(kind) {
        PanPhase::Changed
    } else if response.drag_stopped() && state.active == Some(kind) {
        PanPhase::Ended
    } else if state.active == Some(kind) {
        PanPhase::Cancelled
    } else {
        return;
    };
    send_pan(ui, drawer, state, kind, phase);
}

fn send_pan(
    ui: &Ui,
    drawer: &mut DrawerController,
    state: &mut DrawerViewState,
    kind: RecognizerKind,
    phase: PanPhase,
) {
    let translation = ui
        .input(|i| match (i.pointer.press_origin(), i.pointer.latest_pos()) {
            (Some(origin), Some(pos)) => Some(pos.x - origin.x),
            _ => None,
        })
        .unwrap_or(state.translation);
    state.translation = translation;

    if matches!(phase, PanPhase::Ended | PanPhase::Cancelled) {
        state.active = None;
    }

    let event = match kind {
        RecognizerKind::EdgePan => GestureEvent::EdgePan { phase, translation },
        RecognizerKind::Pan => GestureEvent::Pan { phase, translation },
    };
    drawer.handle_gesture(event);
}
