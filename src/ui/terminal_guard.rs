use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode plus alternate screen, undone on drop and on panic
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    pub fn new(mouse: bool) -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        if mouse {
            io::stdout().execute(EnableMouseCapture)?;
        }

        set_panic_hook(mouse);

        Ok(TerminalGuard { mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.mouse);
    }
}

fn restore(mouse: bool) {
    if mouse {
        let _ = io::stdout().execute(DisableMouseCapture);
    }
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook(mouse: bool) {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(move |panic_info| {
            restore(mouse);
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
