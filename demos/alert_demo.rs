//! Alert demo - press 'd' to ask before deleting, 'q' to quit
//!
//! Run with `RUST_LOG=debug` to see the alert lifecycle on stderr.

use anyhow::Result;
use mkui_alert::{
    alert, AlertOptions, Component, Event, EventHandler, EventPoller, Host, Key, Rect,
    RenderContext, Renderer, Text, Theme,
};
use std::time::Duration;

struct Notes {
    items: Vec<String>,
    quit: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut renderer = Renderer::new()?;
    let theme = Theme::new(renderer.capabilities());
    renderer.enter_alt_screen()?;
    renderer.clear()?;

    let events = EventPoller::new()?;
    let mut host = Host::new(Notes {
        items: (1..=5).map(|i| format!("note {}", i)).collect(),
        quit: false,
    })
    .with_content(Text::new("[d] delete last note   [q] quit"));

    while !host.state().quit {
        if host.is_dirty() {
            let geometry = renderer.geometry();
            let ctx = RenderContext::new(&theme);
            renderer.begin_frame()?;
            renderer.clear()?;
            host.render(&mut renderer, Rect::fullscreen(geometry.cols, geometry.rows), &ctx)?;
            renderer.end_frame()?;
        }

        let Some(event) = events.poll(Duration::from_millis(250))? else {
            continue;
        };

        if host.handle_event(&event) {
            continue;
        }

        match event {
            Event::Key(Key::Char('q')) | Event::Key(Key::Ctrl('c')) => {
                host.state_mut().quit = true;
            }
            Event::Key(Key::Char('d')) => {
                let remaining = host.state().items.len();
                alert(
                    format!("Delete the last of {} notes?", remaining),
                    &mut host,
                    Some(
                        AlertOptions::new()
                            .title("Delete")
                            .confirm_text("Yes")
                            .cancel_text("No")
                            .on_confirm(|notes: &mut Notes| {
                                notes.items.pop();
                            }),
                    ),
                )?;
            }
            Event::Resize(_, _) => {
                renderer.refresh_geometry()?;
                host.mark_dirty();
            }
            _ => {}
        }
    }

    renderer.exit_alt_screen()?;
    println!("{} notes left", host.into_state().items.len());
    Ok(())
}
