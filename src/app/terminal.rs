use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Enter raw mode and the alternate screen with mouse capture.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(())
}

/// Undo [`setup_terminal`]; both steps are attempted even if the first fails.
pub fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    raw?;
    Ok(())
}
