//! Example: on/off/once across a node, a node list and the window
//!
//! Run with `RUST_LOG=evshim=debug,evshim_dom=trace` to watch registration
//! and dispatch.

use evshim::{Event, EventShim, Handler, Host, Listen, Window};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = Host::new();
    let menu = host.create_element("ul");
    host.append_child(host.document(), menu)?;
    for _ in 0..3 {
        let item = host.create_element("li");
        host.append_child(menu, item)?;
    }

    let log = Handler::new(|e: &Event| {
        println!("{} on {} ({:?})", e.name(), e.target(), e.phase());
    });

    // Single node
    let sub = menu.on(&host, "click", &log, false)?;

    // Collection: registered on every <li>
    let items = EventShim::new(&host, host.elements_by_tag("li"));
    items.once("click", &log, false)?;

    if let Some(second) = items.target().get(1) {
        host.dispatch(second, "click")?;
        host.dispatch(second, "click")?;
    }

    sub.unsubscribe()?;
    sub.unsubscribe()?;

    // Global scope
    Window.once(&host, "load", &log, false)?;
    host.dispatch(Window, "load")?;
    host.dispatch(Window, "load")?;

    println!("evshim v{} done", evshim::VERSION);
    Ok(())
}
