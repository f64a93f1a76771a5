use crate::animation::OffsetAnimation;
use crate::errors::DrawerError;
use crate::gesture::{
    closing_offset, completes, opening_offset, DrawerState, GestureEvent, PanPhase, Recognizer,
    RecognizerKind,
};
use crate::handle::{DrawerCommand, DrawerHandle};
use crate::layout::{content_frame, menu_frame, Surface};
use crate::options::{
    normalize_duration, normalize_edge_width, DrawerOptions, Easing, ShadowStyle,
};
use crate::pane::{PaneRole, SharedPane};
use egui::Rect;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use tracing::{debug, trace};

pub struct DrawerBuilder {
    content: Option<SharedPane>,
    menu: Option<SharedPane>,
    options: DrawerOptions,
    commands: Receiver<DrawerCommand>,
    handle: DrawerHandle,
}

impl Default for DrawerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerBuilder {
    pub fn new() -> Self {
        let (sender, commands) = mpsc::channel();
        let handle = DrawerHandle::new(sender, Arc::new(AtomicBool::new(false)));
        Self {
            content: None,
            menu: None,
            options: DrawerOptions::default(),
            commands,
            handle,
        }
    }

    /// Handle to the drawer this builder will produce, so panes can take it
    /// as a constructor argument before the drawer exists.
    pub fn handle(&self) -> DrawerHandle {
        self.handle.clone()
    }

    #[inline]
    pub fn content(mut self, pane: SharedPane) -> Self {
        self.content = Some(pane);
        self
    }

    #[inline]
    pub fn menu(mut self, pane: SharedPane) -> Self {
        self.menu = Some(pane);
        self
    }

    #[inline]
    pub fn options(mut self, options: DrawerOptions) -> Self {
        self.options = options;
        self
    }

    /// Fails when either pane is missing or the menu width is unusable.
    pub fn build(self) -> Result<DrawerController, DrawerError> {
        let content = self.content.ok_or(DrawerError::MissingPane(PaneRole::Content))?;
        let menu = self.menu.ok_or(DrawerError::MissingPane(PaneRole::Menu))?;
        validate_menu_width(self.options.menu_width)?;

        Ok(DrawerController::assemble(
            content,
            menu,
            self.options,
            self.commands,
            self.handle,
        ))
    }
}

/// Side menu container: a content surface that slides left to uncover a
/// fixed-width menu surface anchored to the right edge.
pub struct DrawerController {
    content: SharedPane,
    menu: SharedPane,
    container: Rect,
    options: DrawerOptions,
    state: DrawerState,
    offset: f32,
    animation: Option<OffsetAnimation>,
    edge_pan: Recognizer,
    pan: Recognizer,
    tap_catcher: bool,
    is_open: Arc<AtomicBool>,
    commands: Receiver<DrawerCommand>,
    handle: DrawerHandle,
}

impl DrawerController {
    pub fn new(content: SharedPane, menu: SharedPane) -> Self {
        let (sender, commands) = mpsc::channel();
        let handle = DrawerHandle::new(sender, Arc::new(AtomicBool::new(false)));
        Self::assemble(content, menu, DrawerOptions::default(), commands, handle)
    }

    fn assemble(
        content: SharedPane,
        menu: SharedPane,
        options: DrawerOptions,
        commands: Receiver<DrawerCommand>,
        handle: DrawerHandle,
    ) -> Self {
        let is_open = handle.state();
        let mut drawer = Self {
            content,
            menu,
            container: Rect::ZERO,
            options: options.normalized(),
            state: DrawerState::Closed,
            offset: 0.0,
            animation: None,
            edge_pan: Recognizer::new(RecognizerKind::EdgePan),
            pan: Recognizer::new(RecognizerKind::Pan),
            tap_catcher: false,
            is_open,
            commands,
            handle,
        };
        drawer.hide(false);
        drawer
    }

    pub fn builder() -> DrawerBuilder {
        DrawerBuilder::new()
    }

    pub fn handle(&self) -> DrawerHandle {
        self.handle.clone()
    }

    pub fn content(&self) -> &SharedPane {
        &self.content
    }

    pub fn menu(&self) -> &SharedPane {
        &self.menu
    }

    pub fn content_surface(&self) -> Surface {
        Surface {
            frame: content_frame(self.container, self.offset),
        }
    }

    pub fn menu_surface(&self) -> Surface {
        Surface {
            frame: menu_frame(self.container, self.options.menu_width),
        }
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Logical open state. Changes as soon as a transition is decided, ahead
    /// of the slide animation.
    pub fn is_open(&self) -> bool {
        matches!(self.state, DrawerState::Open | DrawerState::DraggingToClose)
    }

    /// Horizontal offset of the content surface, in `[-menu_width, 0]`.
    pub fn content_offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn recognizer(&self, kind: RecognizerKind) -> Recognizer {
        match kind {
            RecognizerKind::EdgePan => self.edge_pan,
            RecognizerKind::Pan => self.pan,
        }
    }

    pub fn is_tap_catcher_installed(&self) -> bool {
        self.tap_catcher
    }

    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    pub fn menu_width(&self) -> f32 {
        self.options.menu_width
    }

    pub fn show(&mut self, animated: bool) {
        self.settle(true, animated);
    }

    pub fn hide(&mut self, animated: bool) {
        self.settle(false, animated);
    }

    pub fn toggle(&mut self, animated: bool) {
        self.settle(!self.is_open(), animated);
    }

    /// Apply commands queued through [`DrawerHandle`]s.
    pub fn apply_commands(&mut self) {
        loop {
            match self.commands.try_recv() {
                Ok(DrawerCommand::Show { animated }) => self.show(animated),
                Ok(DrawerCommand::Hide { animated }) => self.hide(animated),
                Ok(DrawerCommand::Toggle { animated }) => self.toggle(animated),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) {
        if self.options.ignore_gestures {
            return;
        }
        match event {
            GestureEvent::EdgePan { phase, translation } if self.edge_pan.enabled => {
                self.opening_pan(phase, translation)
            }
            GestureEvent::Pan { phase, translation } if self.pan.enabled => {
                self.closing_pan(phase, translation)
            }
            GestureEvent::OutsideTap if self.tap_catcher => self.hide(true),
            _ => trace!("drawer ignored {event:?} in {:?}", self.state),
        }
    }

    /// Advance the slide animation. Returns true while it is still running.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        self.offset = animation.sample(now);
        if animation.is_finished(now) {
            self.offset = animation.target();
            self.animation = None;
            return false;
        }
        true
    }

    /// Lay the surfaces out inside `container`. Panes are notified only when
    /// their surface changes size.
    pub fn set_container(&mut self, container: Rect) {
        if self.container == container {
            return;
        }
        let old_content = self.content_surface().frame.size();
        let old_menu = self.menu_surface().frame.size();
        self.container = container;
        debug!("drawer container resized to {:?}", container.size());

        let content = self.content_surface();
        if content.frame.size() != old_content {
            self.content.borrow_mut().layout(content.bounds());
        }
        let menu = self.menu_surface();
        if menu.frame.size() != old_menu {
            self.menu.borrow_mut().layout(menu.bounds());
        }
    }

    pub fn set_menu_width(&mut self, menu_width: f32) -> Result<(), DrawerError> {
        validate_menu_width(menu_width)?;
        if self.options.menu_width == menu_width {
            return Ok(());
        }
        self.options.menu_width = menu_width;
        let menu = self.menu_surface();
        self.menu.borrow_mut().layout(menu.bounds());

        match self.state {
            DrawerState::Open => match self.animation.take() {
                Some(_) => self.animate_to(-menu_width),
                None => self.offset = -menu_width,
            },
            DrawerState::DraggingToOpen | DrawerState::DraggingToClose => {
                self.offset = self.offset.clamp(-menu_width, 0.0);
            }
            DrawerState::Closed => {}
        }
        Ok(())
    }

    pub fn set_animation_duration(&mut self, seconds: f32) {
        self.options.animation_duration = normalize_duration(seconds);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.options.easing = easing;
    }

    pub fn set_shadow(&mut self, shadow: ShadowStyle) {
        self.options.shadow = shadow;
    }

    pub fn set_edge_width(&mut self, edge_width: f32) {
        self.options.edge_width = normalize_edge_width(edge_width);
    }

    /// Stop reacting to pans and taps. A pan in progress snaps back to where it
    /// started.
    pub fn set_ignore_gestures(&mut self, ignore: bool) {
        self.options.ignore_gestures = ignore;
        if ignore {
            match self.state {
                DrawerState::DraggingToOpen => self.hide(true),
                DrawerState::DraggingToClose => self.show(true),
                DrawerState::Open | DrawerState::Closed => {}
            }
        }
    }

    /// Replace every setting at once.
    pub fn set_options(&mut self, options: DrawerOptions) -> Result<(), DrawerError> {
        self.set_menu_width(options.menu_width)?;
        self.set_animation_duration(options.animation_duration);
        self.set_easing(options.easing);
        self.set_shadow(options.shadow);
        self.set_edge_width(options.edge_width);
        self.set_ignore_gestures(options.ignore_gestures);
        Ok(())
    }

    fn opening_pan(&mut self, phase: PanPhase, translation: f32) {
        match phase {
            PanPhase::Began | PanPhase::Changed => {
                self.state = DrawerState::DraggingToOpen;
                self.animation = None;
                self.offset = opening_offset(translation, self.options.menu_width);
            }
            PanPhase::Ended => {
                let open = completes(translation, self.options.menu_width);
                self.settle(open, true);
            }
            PanPhase::Cancelled => self.hide(true),
        }
    }

    fn closing_pan(&mut self, phase: PanPhase, translation: f32) {
        match phase {
            PanPhase::Began | PanPhase::Changed => {
                self.state = DrawerState::DraggingToClose;
                self.animation = None;
                self.offset = closing_offset(translation, self.options.menu_width);
            }
            PanPhase::Ended => {
                let close = completes(translation, self.options.menu_width);
                self.settle(!close, true);
            }
            PanPhase::Cancelled => self.show(true),
        }
    }

    fn settle(&mut self, open: bool, animated: bool) {
        self.state = if open {
            DrawerState::Open
        } else {
            DrawerState::Closed
        };
        self.is_open.store(open, Ordering::Relaxed);

        self.tap_catcher = open;
        self.pan.enabled = open;
        self.edge_pan.enabled = !open;

        let target = if open {
            -self.options.menu_width
        } else {
            0.0
        };
        if animated && self.options.animation_duration > 0.0 {
            self.animate_to(target);
        } else {
            self.animation = None;
            self.offset = target;
        }
        debug!(open, animated, "drawer settled");
    }

    fn animate_to(&mut self, target: f32) {
        self.animation = Some(OffsetAnimation::new(
            self.offset,
            target,
            self.options.animation_duration,
            self.options.easing,
        ));
    }
}

fn validate_menu_width(menu_width: f32) -> Result<(), DrawerError> {
    if menu_width.is_finite() && menu_width > 0.0 {
        Ok(())
    } else {
        Err(DrawerError::InvalidMenuWidth(menu_width))
    }
}
