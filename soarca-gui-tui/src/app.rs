//! Main loop
//!
//! Every tick (about 100 ms, sooner on input):
//!
//! ```text
//!     loop {
//!         terminal.draw(|f| view::render(&app, f))     draw the Model
//!         if app.should_quit { break }
//!         while let Some(e) = backend.try_recv() {     finished background work
//!             update(&mut app, AppMessage::Backend(e))
//!         }
//!         if let Some(event) = poll_event(100ms) {     keyboard, mouse, resize
//!             update(&mut app, handle_event(event, &app))
//!         }
//!     }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK: Duration = Duration::from_millis(100);

/// Run the main loop until the user quits
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    // Pick the initial viewport from the real terminal size
    let size = terminal.size()?;
    update::update(app, AppMessage::Resize(size.width, size.height));

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        while let Some(backend_event) = app.backend.try_recv() {
            update::update(app, AppMessage::Backend(backend_event));
        }

        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
