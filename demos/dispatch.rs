//! Two controllers publishing to one dispatcher; a listener applies the
//! result to a shared tooltip, and a forwarding sink collects the events.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use flyout::{
    Context, Controller, Corners, Dispatcher, FloatingElement, ParentRect, PlacementMode,
    PlacementRequest, Viewport, apply,
};
use glam::Vec2;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let viewport = Viewport::new(1280.0, 720.0);
    let dispatcher = Rc::new(Dispatcher::new());
    let tooltip = Rc::new(RefCell::new(FloatingElement::default()));
    let canvas = Rc::new(RefCell::new(ParentRect::new(
        Corners::from_min_max(Vec2::ZERO, viewport.size()),
        viewport.size(),
    )));

    {
        let tooltip = Rc::clone(&tooltip);
        let canvas = Rc::clone(&canvas);
        dispatcher.subscribe(move |event| {
            let label = match event.result.context().downcast_ref::<&'static str>() {
                Ok(label) => *label,
                Err(err) => {
                    tracing::warn!(%err, "ignoring event");
                    return;
                }
            };
            let mut tooltip = tooltip.borrow_mut();
            match apply(&event.result, &mut tooltip, &mut canvas.borrow_mut(), None, viewport) {
                Ok(()) => println!(
                    "{} -> '{label}' tooltip at {:?}, pivot {:?}",
                    event.source, tooltip.anchored_position, tooltip.pivot
                ),
                Err(err) => tracing::warn!(%err, "tooltip not moved"),
            }
        });
    }

    let (tx, rx) = mpsc::channel();
    dispatcher.forward_to(tx);

    let toolbar = Controller::named("Toolbar").with_dispatcher(Rc::clone(&dispatcher));
    let sidebar = Controller::named("Sidebar").with_dispatcher(Rc::clone(&dispatcher));

    let save = Corners::from_center_size(Vec2::new(60.0, 690.0), Vec2::new(100.0, 30.0));
    toolbar.request(
        &PlacementRequest::new(save, viewport)
            .with_mode(PlacementMode::OutsideVertical)
            .with_context(Context::new("Save")),
    );

    let layers = Corners::from_center_size(Vec2::new(1220.0, 360.0), Vec2::new(100.0, 30.0));
    sidebar.request(
        &PlacementRequest::new(layers, viewport)
            .with_mode(PlacementMode::OutsideHorizontal)
            .with_context(Context::new("Layers")),
    );

    // a missing target is logged and never reaches listeners
    sidebar.request(&PlacementRequest::new(None, viewport));

    // placing directly onto another element still publishes to the listeners
    let mut badge = FloatingElement::default();
    let mut status_bar = ParentRect::new(
        Corners::from_min_max(Vec2::ZERO, Vec2::new(1280.0, 60.0)),
        Vec2::new(1280.0, 60.0),
    );
    let status = Corners::from_center_size(Vec2::new(640.0, 30.0), Vec2::new(200.0, 24.0));
    toolbar.request_and_apply(
        &PlacementRequest::new(status, viewport)
            .with_mode(PlacementMode::OutsideVertical)
            .with_context(Context::new("Status")),
        &mut badge,
        &mut status_bar,
        None,
    )?;
    println!("status badge at {:?}, pivot {:?}", badge.anchored_position, badge.pivot);

    let forwarded: Vec<_> = rx.try_iter().map(|event| event.source.to_string()).collect();
    println!("forwarded: {forwarded:?}");
    Ok(())
}
