use crate::{demo::DemoState, gui};

/// One frame of the windowed host: control panel first, so its changes apply this frame.
pub fn update(state: &mut DemoState, ui: &imgui::Ui) -> anyhow::Result<()> {
    gui::draw_contents_panel(ui, state);
    step(state);

    Ok(())
}

pub fn step(state: &mut DemoState) {
    state.update();
    state.scene.late_update();
}

/// Runs a fixed number of frames without a window.
pub fn run_headless(state: &mut DemoState, frames: u32) {
    for _ in 0..frames {
        step(state);
        log::trace!("Frame {}: {}", state.frame, state.scene.stats());
    }

    log::info!(
        "Headless run finished after {} frame(s) in {:?}: {}",
        state.frame,
        state.start_time.elapsed(),
        state.scene.stats()
    );
}
