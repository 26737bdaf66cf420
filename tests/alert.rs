use mkui_alert::{
    alert, AlertAction, AlertError, AlertOptions, AlertState, Component, Event, EventHandler,
    Host, Key, Rect, RenderContext, Renderer, TerminalCapabilities, Text, Theme,
};

/// Owner state the callbacks record into
#[derive(Debug, Default)]
struct Inbox {
    items: Vec<String>,
    calls: Vec<&'static str>,
}

fn render(host: &mut Host<Inbox>) -> String {
    let theme = Theme::new(TerminalCapabilities::basic());
    let ctx = RenderContext::new(&theme);
    let mut renderer = Renderer::headless();
    host.render(&mut renderer, Rect::new(0, 0, 80, 24), &ctx)
        .unwrap();
    renderer.output().unwrap()
}

fn inbox() -> Host<Inbox> {
    Host::new(Inbox {
        items: vec!["a".into(), "b".into(), "c".into()],
        calls: Vec::new(),
    })
    .with_content(Text::new("inbox"))
}

#[test]
fn message_is_displayed_verbatim() {
    let mut host = inbox();
    for message in ["", "Delete?", "multi\nline", "ünïcødé ✓", "  padded  "] {
        let dialog = alert(message, &mut host, None).unwrap();
        assert_eq!(dialog.message(), message);
        assert_eq!(dialog.displayed_message(), message);
    }
}

#[test]
fn rendered_output_contains_message() {
    let mut host = inbox();
    alert("Really delete the inbox?", &mut host, None).unwrap();
    let out = render(&mut host);
    assert!(out.contains("Really delete the inbox?"));
    assert!(out.contains("CONTINUE"));
    assert!(!out.contains("CANCEL"));
}

#[test]
fn default_labels() {
    let mut host = inbox();
    let dialog = alert("Hi", &mut host, Some(AlertOptions::new())).unwrap();
    assert_eq!(dialog.confirm_text(), "CONTINUE");
    assert_eq!(dialog.cancel_text(), "CANCEL");
    assert!(!dialog.do_cancel());
    assert!(dialog.is_dynamic());
}

#[test]
fn cancel_options_force_do_cancel() {
    let mut host = inbox();

    let dialog = alert(
        "x",
        &mut host,
        Some(AlertOptions::new().do_cancel(false).cancel_text("Nope")),
    )
    .unwrap();
    assert!(dialog.do_cancel());
    assert!(dialog.cancel_button().is_showing());

    let dialog = alert(
        "x",
        &mut host,
        Some(
            AlertOptions::new()
                .do_cancel(false)
                .on_cancel(|inbox: &mut Inbox| inbox.calls.push("cancel")),
        ),
    )
    .unwrap();
    assert!(dialog.do_cancel());

    let dialog = alert("x", &mut host, Some(AlertOptions::new().do_cancel(true))).unwrap();
    assert!(dialog.do_cancel());
    assert_eq!(dialog.cancel_button().label(), "CANCEL");
}

#[test]
fn delete_example_cancel_path() {
    let mut host = inbox();
    let index = 1;

    let dialog = alert(
        "Delete?",
        &mut host,
        Some(
            AlertOptions::new()
                .cancel_text("No")
                .confirm_text("Yes")
                .on_cancel(|inbox: &mut Inbox| inbox.calls.push("cancel"))
                .on_confirm(move |inbox: &mut Inbox| {
                    inbox.items.remove(index);
                }),
        ),
    )
    .unwrap();

    assert!(dialog.do_cancel());
    assert!(dialog.cancel_button().is_showing());
    assert_eq!(dialog.cancel_button().label(), "No");
    assert_eq!(dialog.confirm_button().label(), "Yes");

    // Tap the rendered cancel button
    let out = render(&mut host);
    assert!(out.contains("No"));
    let cancel = host
        .top_alert_mut()
        .unwrap()
        .cancel_button()
        .bounds()
        .unwrap();
    assert!(host.handle_event(&Event::tap(cancel.x, cancel.y)));

    assert_eq!(host.state().calls, vec!["cancel"]);
    assert_eq!(host.state().items.len(), 3);
    assert_eq!(host.live_alerts(), 0);
    assert!(!render(&mut host).contains("Delete?"));
}

#[test]
fn delete_example_confirm_path() {
    let mut host = inbox();

    alert(
        "Delete?",
        &mut host,
        Some(
            AlertOptions::new()
                .cancel_text("No")
                .confirm_text("Yes")
                .on_confirm(|inbox: &mut Inbox| {
                    inbox.items.remove(1);
                }),
        ),
    )
    .unwrap();

    render(&mut host);
    let confirm = host
        .top_alert_mut()
        .unwrap()
        .confirm_button()
        .bounds()
        .unwrap();
    host.handle_event(&Event::tap(confirm.x + confirm.width - 1, confirm.y));

    assert_eq!(host.state().items, vec!["a".to_string(), "c".to_string()]);
    assert_eq!(host.live_alerts(), 0);
}

#[test]
fn confirm_fires_exactly_once() {
    let mut host = inbox();
    let id = alert(
        "Go?",
        &mut host,
        Some(AlertOptions::new().on_confirm(|inbox: &mut Inbox| inbox.calls.push("confirm"))),
    )
    .unwrap()
    .slot_id()
    .unwrap();

    assert!(host.handle_event(&Event::Key(Key::Enter)));
    // The dialog is gone: the next Enter goes to the content underneath
    assert!(!host.handle_event(&Event::Key(Key::Enter)));
    assert_eq!(host.state().calls, vec!["confirm"]);

    let err = host.trigger(id, AlertAction::Confirm).unwrap_err();
    assert_eq!(err.downcast_ref::<AlertError>(), Some(&AlertError::Destroyed));
    assert_eq!(host.state().calls, vec!["confirm"]);
}

#[test]
fn escape_cancels_only_with_cancel_button() {
    let mut host = inbox();
    alert(
        "Stay?",
        &mut host,
        Some(AlertOptions::new().on_confirm(|inbox: &mut Inbox| inbox.calls.push("confirm"))),
    )
    .unwrap();

    assert!(host.handle_event(&Event::Key(Key::Esc)));
    assert_eq!(host.live_alerts(), 1);

    let dialog = host.top_alert_mut().unwrap();
    dialog.set_do_cancel(true);
    dialog.set_on_cancel(|inbox: &mut Inbox| inbox.calls.push("cancel"));

    assert!(host.handle_event(&Event::Key(Key::Esc)));
    assert_eq!(host.state().calls, vec!["cancel"]);
    assert_eq!(host.live_alerts(), 0);
}

#[test]
fn returned_alert_can_be_modified() {
    let mut host = inbox();
    let dialog = alert("Are you sure?", &mut host, Some(AlertOptions::new().do_cancel(true)))
        .unwrap();
    dialog.set_cancel_text("No");
    dialog.set_title("Careful");
    assert_eq!(dialog.state(), AlertState::Visible);

    let out = render(&mut host);
    assert!(out.contains(" Careful "));
    assert!(out.contains("No"));
}

#[test]
fn keyboard_focus_selects_cancel() {
    let mut host = inbox();
    alert(
        "Switch?",
        &mut host,
        Some(AlertOptions::new().on_cancel(|inbox: &mut Inbox| inbox.calls.push("cancel"))),
    )
    .unwrap();

    host.handle_event(&Event::Key(Key::Left));
    host.handle_event(&Event::Key(Key::Enter));
    assert_eq!(host.state().calls, vec!["cancel"]);
}

#[test]
fn wide_titles_render_inside_the_frame() {
    let mut host = inbox();
    alert("Delete?", &mut host, None)
        .unwrap()
        .set_title("警告".repeat(15));
    assert!(render(&mut host).contains("Delete?"));

    let mut host = inbox();
    alert(
        "Delete?",
        &mut host,
        Some(AlertOptions::new().title("警告".repeat(30))),
    )
    .unwrap();
    let out = render(&mut host);
    assert!(out.contains("Delete?"));
    // Clamped to the 80 columns of the screen
    assert!(!out.contains(&"警告".repeat(20)));
}
