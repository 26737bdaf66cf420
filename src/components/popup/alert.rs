//! Alert dialog - a message with a confirm button and an optional cancel button
//!
//! The alert is one-shot: activating either button runs the matching
//! callback with the owner's state and tears the alert down for good.
//! Configuration goes through setters or [`AlertOptions`]; every change is
//! followed by a single [`Alert::refresh`] pass that pushes the alert's
//! properties into its child components.

use super::{Popup, PopupResult};
use crate::alert::AlertOptions;
use crate::component::Component;
use crate::components::{Button, Text};
use crate::context::RenderContext;
use crate::error::AlertError;
use crate::event::{Event, EventHandler, Key};
use crate::host::SlotId;
use crate::layout::{FlexLayout, Rect, Size};
use crate::render::Renderer;
use crate::theme::ButtonVariant;
use anyhow::Result;
use log::{debug, trace, warn};

pub const DEFAULT_CONFIRM_TEXT: &str = "CONTINUE";
pub const DEFAULT_CANCEL_TEXT: &str = "CANCEL";

/// Frame size of an alert that was not configured through options
pub const STATIC_FRAME_SIZE: (u16, u16) = (44, 12);

/// Gap between the cancel and confirm buttons
const BUTTON_GAP: u16 = 2;

/// Callback run with the owner's state when a button is activated
pub type Callback<S> = Box<dyn FnMut(&mut S)>;

/// The two things a user can do with an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Confirm,
    Cancel,
}

/// Alert lifecycle. There is no way back from `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Created,
    Visible,
    Destroyed,
}

/// Message area over a row of buttons
pub(crate) struct AlertBody {
    message: Text,
    cancel: Button,
    confirm: Button,
    focus: AlertAction,
}

impl AlertBody {
    fn new() -> Self {
        let mut body = AlertBody {
            message: Text::new(""),
            cancel: Button::new(DEFAULT_CANCEL_TEXT).with_variant(ButtonVariant::Negative),
            confirm: Button::new(DEFAULT_CONFIRM_TEXT).with_variant(ButtonVariant::Affirmative),
            focus: AlertAction::Confirm,
        };
        body.confirm.on_focus();
        body
    }

    fn button_mut(&mut self, action: AlertAction) -> &mut Button {
        match action {
            AlertAction::Confirm => &mut self.confirm,
            AlertAction::Cancel => &mut self.cancel,
        }
    }

    fn set_focus(&mut self, action: AlertAction) {
        if action == AlertAction::Cancel && !self.cancel.is_showing() {
            return;
        }
        let previous = self.focus;
        self.button_mut(previous).on_blur();
        self.button_mut(action).on_focus();
        self.focus = action;
    }

    fn cycle_focus(&mut self) {
        match self.focus {
            AlertAction::Confirm => self.set_focus(AlertAction::Cancel),
            AlertAction::Cancel => self.set_focus(AlertAction::Confirm),
        }
    }

    fn take_pressed(&mut self) -> Option<AlertAction> {
        // Drain both flags so a stale press never leaks into the next event
        let cancel = self.cancel.take_pressed();
        let confirm = self.confirm.take_pressed();
        if cancel {
            Some(AlertAction::Cancel)
        } else if confirm {
            Some(AlertAction::Confirm)
        } else {
            None
        }
    }

    fn button_row_width(&self) -> u16 {
        let confirm = self.confirm.min_size().0;
        if self.cancel.is_showing() {
            // Both halves get the same width
            confirm.max(self.cancel.min_size().0) * 2 + BUTTON_GAP
        } else {
            confirm
        }
    }
}

impl EventHandler for AlertBody {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(Key::Tab | Key::BackTab | Key::Left | Key::Right) => {
                self.cycle_focus();
                true
            }
            _ => self.cancel.handle_event(event) || self.confirm.handle_event(event),
        }
    }
}

impl Component for AlertBody {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        let rows = FlexLayout::column()
            .padding(1)
            .gap(1)
            .layout(bounds, &[Size::Flex(1), Size::Fixed(1)]);
        self.message.render(renderer, rows[0], ctx)?;

        if self.cancel.is_showing() {
            let buttons = FlexLayout::row()
                .gap(BUTTON_GAP)
                .layout(rows[1], &[Size::Flex(1), Size::Flex(1)]);
            self.cancel.render(renderer, buttons[0], ctx)?;
            self.confirm.render(renderer, buttons[1], ctx)?;
        } else {
            self.cancel.render(renderer, Rect::new(0, 0, 0, 0), ctx)?;
            self.confirm.render(renderer, rows[1], ctx)?;
        }

        Ok(())
    }

    fn min_size(&self) -> (u16, u16) {
        let (message_w, message_h) = self.message.min_size();
        let width = message_w.max(self.button_row_width()).saturating_add(2);
        // padding + message + gap + buttons + padding
        (width, message_h.saturating_add(4))
    }

    fn mark_dirty(&mut self) {
        self.message.mark_dirty();
        self.cancel.mark_dirty();
        self.confirm.mark_dirty();
    }

    fn is_dirty(&self) -> bool {
        self.message.is_dirty() || self.cancel.is_dirty() || self.confirm.is_dirty()
    }

    fn name(&self) -> &str {
        "AlertBody"
    }
}

/// Modal alert dialog
///
/// `S` is the owner's state, lent to the callbacks when a button fires.
pub struct Alert<S> {
    popup: Popup<AlertBody>,
    message: String,
    title: Option<String>,
    confirm_text: String,
    cancel_text: String,
    do_cancel: bool,
    dynamic: bool,
    on_confirm: Option<Callback<S>>,
    on_cancel: Option<Callback<S>>,
    state: AlertState,
    slot: Option<SlotId>,
    pending: Option<AlertAction>,
}

impl<S> std::fmt::Debug for Alert<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("do_cancel", &self.do_cancel)
            .field("dynamic", &self.dynamic)
            .field("state", &self.state)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl<S> Default for Alert<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Alert<S> {
    pub fn new() -> Self {
        let mut alert = Alert {
            popup: Popup::new(AlertBody::new()).with_close_on_escape(false),
            message: String::new(),
            title: None,
            confirm_text: DEFAULT_CONFIRM_TEXT.to_string(),
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            do_cancel: false,
            dynamic: false,
            on_confirm: None,
            on_cancel: None,
            state: AlertState::Created,
            slot: None,
            pending: None,
        };
        alert.refresh();
        alert
    }

    /// Push every property into the child components
    pub fn refresh(&mut self) {
        let size = if self.dynamic {
            None
        } else {
            Some(STATIC_FRAME_SIZE)
        };
        self.popup.set_size(size);
        self.popup.set_title(self.title.clone());
        self.popup.set_close_on_escape(self.do_cancel);

        let body = self.popup.content_mut();
        body.message.set_text(self.message.as_str());
        body.cancel.set_label(self.cancel_text.as_str());
        body.confirm.set_label(self.confirm_text.as_str());
        body.cancel.set_showing(self.do_cancel);
        if !self.do_cancel && body.focus == AlertAction::Cancel {
            body.set_focus(AlertAction::Confirm);
        }
    }

    /// Apply an options bag: every supplied field wins, the alert becomes dynamic
    ///
    /// Supplying a cancel callback or cancel label always enables the
    /// cancel button, even alongside an explicit `do_cancel(false)`.
    pub fn apply_options(&mut self, options: AlertOptions<S>) {
        let AlertOptions {
            message,
            title,
            confirm_text,
            cancel_text,
            do_cancel,
            on_confirm,
            on_cancel,
        } = options;

        self.do_cancel =
            on_cancel.is_some() || cancel_text.is_some() || do_cancel.unwrap_or(false);

        if let Some(message) = message {
            self.message = message;
        }
        if title.is_some() {
            self.title = title;
        }
        if let Some(text) = confirm_text {
            self.confirm_text = text;
        }
        if let Some(text) = cancel_text {
            self.cancel_text = text;
        }
        if on_confirm.is_some() {
            self.on_confirm = on_confirm;
        }
        if on_cancel.is_some() {
            self.on_cancel = on_cancel;
        }

        self.dynamic = true;
        debug!(
            "alert options applied (do_cancel: {}, confirm: {:?}, cancel: {:?})",
            self.do_cancel, self.confirm_text, self.cancel_text
        );
        self.refresh();
    }

    pub fn show(&mut self) {
        if self.state == AlertState::Destroyed {
            warn!("ignoring show() on a dismissed alert");
            return;
        }
        self.state = AlertState::Visible;
        self.popup.show();
    }

    /// Run the confirm callback with the owner, then tear down
    pub fn confirm(&mut self, owner: &mut S) -> Result<(), AlertError> {
        self.ensure_alive()?;
        debug!("alert confirmed: {:?}", self.message);
        if let Some(callback) = self.on_confirm.as_mut() {
            callback(owner);
        }
        self.destroy();
        Ok(())
    }

    /// Run the cancel callback with the owner, then tear down
    pub fn cancel(&mut self, owner: &mut S) -> Result<(), AlertError> {
        self.ensure_alive()?;
        debug!("alert cancelled: {:?}", self.message);
        if let Some(callback) = self.on_cancel.as_mut() {
            callback(owner);
        }
        self.destroy();
        Ok(())
    }

    pub fn trigger(&mut self, action: AlertAction, owner: &mut S) -> Result<(), AlertError> {
        match action {
            AlertAction::Confirm => self.confirm(owner),
            AlertAction::Cancel => self.cancel(owner),
        }
    }

    /// Translate input into the action it activates, if any
    ///
    /// Tab and the horizontal arrows move focus between the buttons, Enter
    /// and Space activate the focused one, a left click activates the
    /// button under it, and Esc cancels while the cancel button is shown.
    pub fn route_event(&mut self, event: &Event) -> Option<AlertAction> {
        if self.state != AlertState::Visible {
            return None;
        }
        trace!("alert routing {:?}", event);

        let body = self.popup.content_mut();
        if body.handle_event(event) {
            match body.take_pressed() {
                Some(AlertAction::Confirm) => self.popup.confirm(),
                Some(AlertAction::Cancel) => self.popup.cancel(),
                None => {}
            }
        } else if !matches!(event, Event::Key(Key::Enter)) {
            self.popup.handle_event(event);
        }

        match self.popup.take_result() {
            PopupResult::Confirmed => Some(AlertAction::Confirm),
            PopupResult::Cancelled => Some(AlertAction::Cancel),
            PopupResult::Open => None,
        }
    }

    /// Action picked up by `handle_event`, waiting to be triggered
    pub fn take_pending_action(&mut self) -> Option<AlertAction> {
        self.pending.take()
    }

    fn ensure_alive(&self) -> Result<(), AlertError> {
        if self.state == AlertState::Destroyed {
            warn!("interaction with a dismissed alert");
            return Err(AlertError::Destroyed);
        }
        Ok(())
    }

    fn destroy(&mut self) {
        self.state = AlertState::Destroyed;
        self.popup.close();
        self.on_confirm = None;
        self.on_cancel = None;
        self.pending = None;
    }

    pub(crate) fn set_slot(&mut self, slot: SlotId) {
        self.slot = Some(slot);
    }

    /// Slot of the host this alert was mounted into
    pub fn slot_id(&self) -> Option<SlotId> {
        self.slot
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == AlertState::Visible
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == AlertState::Destroyed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.refresh();
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
        self.refresh();
    }

    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    pub fn set_confirm_text(&mut self, text: impl Into<String>) {
        self.confirm_text = text.into();
        self.refresh();
    }

    pub fn cancel_text(&self) -> &str {
        &self.cancel_text
    }

    pub fn set_cancel_text(&mut self, text: impl Into<String>) {
        self.cancel_text = text.into();
        self.refresh();
    }

    pub fn do_cancel(&self) -> bool {
        self.do_cancel
    }

    pub fn set_do_cancel(&mut self, do_cancel: bool) {
        self.do_cancel = do_cancel;
        self.refresh();
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
        self.refresh();
    }

    pub fn set_on_confirm(&mut self, callback: impl FnMut(&mut S) + 'static) {
        self.on_confirm = Some(Box::new(callback));
    }

    pub fn set_on_cancel(&mut self, callback: impl FnMut(&mut S) + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    /// What the message area currently shows
    pub fn displayed_message(&self) -> &str {
        self.popup.content().message.text()
    }

    pub fn confirm_button(&self) -> &Button {
        &self.popup.content().confirm
    }

    pub fn cancel_button(&self) -> &Button {
        &self.popup.content().cancel
    }

    /// Button that Enter would activate
    pub fn focused(&self) -> AlertAction {
        self.popup.content().focus
    }
}

impl<S> EventHandler for Alert<S> {
    /// Swallows every event while visible; an activated button is parked
    /// until `take_pending_action`
    fn handle_event(&mut self, event: &Event) -> bool {
        if let Some(action) = self.route_event(event) {
            self.pending = Some(action);
        }
        self.state == AlertState::Visible || self.pending.is_some()
    }
}

impl<S> Component for Alert<S> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if self.state != AlertState::Visible {
            return Ok(());
        }
        self.popup.render(renderer, bounds, ctx)
    }

    fn min_size(&self) -> (u16, u16) {
        self.popup.min_size()
    }

    fn on_unmount(&mut self) {
        if self.state != AlertState::Destroyed {
            debug!("alert unmounted before being answered");
            self.destroy();
        }
    }

    fn mark_dirty(&mut self) {
        self.popup.mark_dirty();
    }

    fn is_dirty(&self) -> bool {
        self.popup.is_dirty()
    }

    fn name(&self) -> &str {
        "Alert"
    }
}
