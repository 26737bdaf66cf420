//! Host - the owning context that alerts are created in
//!
//! A host owns the application state handed to alert callbacks, the
//! regular content drawn underneath, and one slot per alert it was asked
//! to show. The topmost live alert is modal: it receives every event until
//! it is answered, after which its slot is dropped.

use crate::component::Component;
use crate::components::popup::alert::{Alert, AlertAction};
use crate::context::RenderContext;
use crate::error::AlertError;
use crate::event::{Event, EventHandler};
use crate::layout::Rect;
use crate::render::Renderer;
use anyhow::Result;
use log::{debug, warn};

/// Identifies a slot within its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

/// Placeholder container for one alert
pub struct Slot<S> {
    id: SlotId,
    alert: Option<Alert<S>>,
}

impl<S> Slot<S> {
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Mount `alert` into this slot, unmounting whatever was there
    pub fn mount(&mut self, mut alert: Alert<S>) -> &mut Alert<S> {
        if let Some(mut previous) = self.alert.take() {
            previous.on_unmount();
        }
        alert.set_slot(self.id);
        alert.on_mount();
        self.alert.insert(alert)
    }

    pub fn alert(&self) -> Option<&Alert<S>> {
        self.alert.as_ref()
    }

    pub fn alert_mut(&mut self) -> Option<&mut Alert<S>> {
        self.alert.as_mut()
    }

    /// Shown and not yet answered
    fn is_live(&self) -> bool {
        self.alert.as_ref().is_some_and(Alert::is_visible)
    }

    /// Empty, or its alert has been answered
    fn is_spent(&self) -> bool {
        self.alert.as_ref().map_or(true, Alert::is_destroyed)
    }
}

/// Owning context for alerts
pub struct Host<S> {
    state: S,
    content: Option<Box<dyn Component>>,
    slots: Vec<Slot<S>>,
    next_slot: u64,
    dirty: bool,
}

impl<S> Host<S> {
    pub fn new(state: S) -> Self {
        Host {
            state,
            content: None,
            slots: Vec::new(),
            next_slot: 0,
            dirty: true,
        }
    }

    /// Content drawn underneath any alerts
    pub fn with_content(mut self, content: impl Component + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Append an empty slot; it is drawn above every existing one
    ///
    /// Slots left empty are dropped the next time the host prunes.
    pub fn create_slot(&mut self) -> &mut Slot<S> {
        self.prune();
        let id = SlotId(self.next_slot);
        self.next_slot += 1;
        self.dirty = true;
        debug!("created {:?}", id);

        self.slots.push(Slot { id, alert: None });
        let last = self.slots.len() - 1;
        &mut self.slots[last]
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot<S>> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    pub fn alert_mut(&mut self, id: SlotId) -> Option<&mut Alert<S>> {
        self.slot_mut(id).and_then(Slot::alert_mut)
    }

    /// Number of alerts still waiting for an answer
    pub fn live_alerts(&self) -> usize {
        self.slots.iter().filter(|s| s.is_live()).count()
    }

    /// The alert currently receiving input
    pub fn top_alert_mut(&mut self) -> Option<&mut Alert<S>> {
        self.slots
            .iter_mut()
            .rev()
            .find(|s| s.is_live())
            .and_then(Slot::alert_mut)
    }

    /// Activate a button of the alert in `id` programmatically
    pub fn trigger(&mut self, id: SlotId, action: AlertAction) -> Result<()> {
        let alert = self
            .slots
            .iter_mut()
            .find(|s| s.id == id)
            .and_then(Slot::alert_mut)
            .ok_or(AlertError::Destroyed)?;

        let result = alert.trigger(action, &mut self.state);
        self.prune();
        Ok(result?)
    }

    /// Drop empty slots and slots whose alert has been answered
    fn prune(&mut self) {
        let before = self.slots.len();
        self.slots.retain_mut(|slot| {
            if slot.is_spent() {
                if let Some(alert) = slot.alert.as_mut() {
                    alert.on_unmount();
                }
                false
            } else {
                true
            }
        });

        let removed = before - self.slots.len();
        if removed > 0 {
            debug!("removed {} spent alert slot(s)", removed);
            // Whatever the dialog covered has to be drawn again
            self.dirty = true;
            if let Some(content) = self.content.as_mut() {
                content.mark_dirty();
            }
        }
    }
}

impl<S> EventHandler for Host<S> {
    /// The topmost live alert gets the event and, if a button fired, runs
    /// its callback with the host's state. Without alerts the content gets it.
    fn handle_event(&mut self, event: &Event) -> bool {
        let top = self
            .slots
            .iter_mut()
            .rev()
            .find(|s| s.is_live())
            .and_then(Slot::alert_mut);

        let Some(alert) = top else {
            return self
                .content
                .as_mut()
                .is_some_and(|content| content.handle_event(event));
        };

        let consumed = alert.handle_event(event);
        if let Some(action) = alert.take_pending_action() {
            if let Err(err) = alert.trigger(action, &mut self.state) {
                warn!("alert action {:?} failed: {}", action, err);
            }
            self.prune();
        }
        consumed
    }
}

impl<S> Component for Host<S> {
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()> {
        if let Some(content) = self.content.as_mut() {
            content.render(renderer, bounds, ctx)?;
        }

        for slot in self.slots.iter_mut() {
            if let Some(alert) = slot.alert.as_mut() {
                alert.render(renderer, bounds, ctx)?;
            }
        }

        self.dirty = false;
        Ok(())
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        if let Some(content) = self.content.as_mut() {
            content.mark_dirty();
        }
        for slot in self.slots.iter_mut() {
            if let Some(alert) = slot.alert.as_mut() {
                alert.mark_dirty();
            }
        }
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.content.as_ref().is_some_and(|c| c.is_dirty())
            || self
                .slots
                .iter()
                .filter_map(Slot::alert)
                .any(|alert| alert.is_dirty())
    }

    fn name(&self) -> &str {
        "Host"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{alert, AlertOptions};
    use crate::components::Text;
    use crate::event::Key;
    use crate::terminal::TerminalCapabilities;
    use crate::theme::Theme;

    #[test]
    fn test_slots_get_unique_ids() {
        let mut host = Host::new(());
        let first = host.create_slot().id();
        let second = host.create_slot().id();
        assert_ne!(first, second);
        assert!(first < second);
        // Empty slots hold no alert
        assert_eq!(host.live_alerts(), 0);
    }

    #[test]
    fn test_empty_slots_are_dropped() {
        let mut host = Host::new(());
        let empty = host.create_slot().id();
        let id = alert("Kept", &mut host, None).unwrap().slot_id().unwrap();

        assert!(host.slot_mut(empty).is_none());
        assert!(host.slot_mut(id).is_some());
        assert_eq!(host.live_alerts(), 1);
    }

    #[test]
    fn test_unshown_alert_does_not_take_events() {
        let mut host = Host::new(0u32).with_content(Text::new("background"));
        let slot = host.create_slot();
        let id = slot.id();
        slot.mount(Alert::new())
            .set_on_confirm(|n: &mut u32| *n += 1);
        assert_eq!(host.live_alerts(), 0);

        // Falls through to the content, which ignores it
        assert!(!host.handle_event(&Event::Key(Key::Enter)));
        assert_eq!(*host.state(), 0);

        let pending = host.alert_mut(id).unwrap();
        pending.show();
        assert_eq!(host.live_alerts(), 1);
        assert!(host.handle_event(&Event::Key(Key::Enter)));
        assert_eq!(*host.state(), 1);
        assert_eq!(host.live_alerts(), 0);
    }

    #[test]
    fn test_events_go_to_topmost_alert() {
        let mut host = Host::new(Vec::new());
        alert(
            "first",
            &mut host,
            Some(AlertOptions::new().on_confirm(|log: &mut Vec<&'static str>| log.push("first"))),
        )
        .unwrap();
        alert(
            "second",
            &mut host,
            Some(AlertOptions::new().on_confirm(|log: &mut Vec<&'static str>| log.push("second"))),
        )
        .unwrap();
        assert_eq!(host.live_alerts(), 2);

        assert!(host.handle_event(&Event::Key(Key::Enter)));
        assert_eq!(host.state(), &vec!["second"]);
        assert_eq!(host.live_alerts(), 1);

        assert!(host.handle_event(&Event::Key(Key::Enter)));
        assert_eq!(host.state(), &vec!["second", "first"]);
        assert_eq!(host.live_alerts(), 0);
    }

    #[test]
    fn test_events_reach_content_without_alerts() {
        let mut host = Host::new(()).with_content(Text::new("background"));
        // Text does not consume anything
        assert!(!host.handle_event(&Event::Key(Key::Enter)));
    }

    #[test]
    fn test_trigger_by_slot() {
        let mut host = Host::new(0u32);
        let id = alert(
            "Count?",
            &mut host,
            Some(AlertOptions::new().on_cancel(|n: &mut u32| *n += 10)),
        )
        .unwrap()
        .slot_id()
        .unwrap();

        host.trigger(id, AlertAction::Cancel).unwrap();
        assert_eq!(*host.state(), 10);
        assert!(host.alert_mut(id).is_none());

        // The slot is gone, so is the alert
        let err = host.trigger(id, AlertAction::Cancel).unwrap_err();
        assert_eq!(err.downcast_ref::<AlertError>(), Some(&AlertError::Destroyed));
    }

    #[test]
    fn test_render_draws_alert_over_content() {
        let theme = Theme::new(TerminalCapabilities::basic());
        let ctx = RenderContext::new(&theme);
        let mut renderer = Renderer::headless();

        let mut host = Host::new(()).with_content(Text::new("background"));
        alert("Proceed?", &mut host, None).unwrap();
        host.render(&mut renderer, Rect::new(0, 0, 80, 24), &ctx)
            .unwrap();

        let out = renderer.output().unwrap();
        let background = out.find("background").unwrap();
        let dialog = out.find("Proceed?").unwrap();
        assert!(background < dialog);
        assert!(!host.is_dirty());
    }

    #[test]
    fn test_answered_alert_marks_host_dirty() {
        let theme = Theme::new(TerminalCapabilities::basic());
        let ctx = RenderContext::new(&theme);
        let mut renderer = Renderer::headless();

        let mut host = Host::new(());
        alert("Done", &mut host, None).unwrap();
        host.render(&mut renderer, Rect::new(0, 0, 80, 24), &ctx)
            .unwrap();
        assert!(!host.is_dirty());

        host.handle_event(&Event::Key(Key::Enter));
        assert!(host.is_dirty());
        assert_eq!(host.live_alerts(), 0);
    }
}
