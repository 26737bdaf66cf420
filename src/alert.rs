//! `alert()` - create, configure and show an [`Alert`] in one call

use crate::components::popup::alert::{Alert, Callback};
use crate::error::AlertError;
use crate::host::Host;
use anyhow::Result;

/// Options applied to an alert at creation time
///
/// Every field is optional; only the ones that are set override the
/// alert's current values. Supplying a cancel callback or a cancel label
/// turns the cancel button on.
pub struct AlertOptions<S> {
    pub(crate) message: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) confirm_text: Option<String>,
    pub(crate) cancel_text: Option<String>,
    pub(crate) do_cancel: Option<bool>,
    pub(crate) on_confirm: Option<Callback<S>>,
    pub(crate) on_cancel: Option<Callback<S>>,
}

impl<S> Default for AlertOptions<S> {
    fn default() -> Self {
        AlertOptions {
            message: None,
            title: None,
            confirm_text: None,
            cancel_text: None,
            do_cancel: None,
            on_confirm: None,
            on_cancel: None,
        }
    }
}

impl<S> std::fmt::Debug for AlertOptions<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertOptions")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("do_cancel", &self.do_cancel)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

impl<S> AlertOptions<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message passed to `alert()`
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn do_cancel(mut self, do_cancel: bool) -> Self {
        self.do_cancel = Some(do_cancel);
        self
    }

    pub fn on_confirm(mut self, callback: impl FnMut(&mut S) + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnMut(&mut S) + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    /// Cancel button state these options produce: forced on by a cancel
    /// callback or label, otherwise the explicit flag
    pub fn effective_do_cancel(&self) -> bool {
        self.on_cancel.is_some() || self.cancel_text.is_some() || self.do_cancel.unwrap_or(false)
    }

    /// Reject labels that would render as empty buttons
    pub fn validate(&self) -> Result<(), AlertError> {
        let labels = [
            ("confirm_text", &self.confirm_text),
            ("cancel_text", &self.cancel_text),
        ];
        for (field, label) in labels {
            if label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                return Err(AlertError::BlankLabel { field });
            }
        }
        Ok(())
    }
}

/// Show an alert on behalf of `host`
///
/// Creates a slot in the host, mounts a fresh [`Alert`] into it, sets the
/// message, applies `options` (which also makes the alert size itself to
/// its content) and shows it. The returned alert can still be modified;
/// its callbacks receive the host's state.
///
/// ```
/// use mkui_alert::{alert, AlertOptions, Host};
///
/// let mut host = Host::new(vec![1, 2, 3]);
/// let dialog = alert(
///     "Delete?",
///     &mut host,
///     Some(
///         AlertOptions::new()
///             .cancel_text("No")
///             .confirm_text("Yes")
///             .on_confirm(|items: &mut Vec<i32>| {
///                 items.pop();
///             }),
///     ),
/// )
/// .unwrap();
///
/// assert!(dialog.do_cancel());
/// assert_eq!(dialog.confirm_button().label(), "Yes");
/// ```
pub fn alert<'h, S>(
    message: impl Into<String>,
    host: &'h mut Host<S>,
    options: Option<AlertOptions<S>>,
) -> Result<&'h mut Alert<S>> {
    if let Some(options) = &options {
        options.validate()?;
    }

    let message = message.into();
    let slot = host.create_slot();
    let slot_id = slot.id();
    let alert = slot.mount(Alert::new());
    alert.set_message(message);

    if let Some(options) = options {
        alert.apply_options(options);
    }

    alert.show();
    log::debug!(
        "alert shown in {:?}: {:?} (dynamic: {})",
        slot_id,
        alert.message(),
        alert.is_dynamic()
    );
    Ok(alert)
}
