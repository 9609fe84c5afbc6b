//! Terminal restoration on panic

/// Chain a panic hook that leaves raw mode and the alternate screen before
/// the default report is printed, so the message is readable.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        tracing::error!("scrivi panicked: {}", info);
        previous(info);
    }));
}
