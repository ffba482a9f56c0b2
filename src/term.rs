use std::io::stdout;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use ratatui::{Terminal, backend::CrosstermBackend};

pub fn set_terminal() -> std::io::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

pub fn reset_terminal(writer: &mut impl std::io::Write) {
    execute!(writer, LeaveAlternateScreen, Show).unwrap_or_else(|e| {
        error!("tried to execute(...) but couldn't :( {e}");
    });

    disable_raw_mode().unwrap_or_else(|e| {
        error!("tried to disable_raw_mode but couldn't :( {e}");
    });
}
