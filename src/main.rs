use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use indoc::indoc;

use term_winman::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_winman::drivers::{InputDriver, OutputDriver};
use term_winman::event_loop::{ControlFlow, EventLoop};
use term_winman::{ButtonSide, Rect, TextPanel, Window, WindowButton, WindowManager, shared, tracing_sub};

const WELCOME: &str = indoc! {"
    Drag the top border to move this window.
    Drag the sides or bottom to resize it.

    [x] closes, [^] maximizes or restores.
    Scroll with the wheel or arrow keys.

    Ctrl+N opens another window.
    Ctrl+Q quits.
"};

const DIALOG: &str = indoc! {"
    This window is modal.
    Nothing else takes the pointer
    until it is closed with [x].
"};

#[derive(Parser, Debug)]
#[command(name = "term-winman-demo", version, about = "Floating windows in the terminal")]
struct Args {
    /// Number of windows to open on start.
    #[arg(long, default_value_t = 3)]
    windows: usize,

    /// Open a modal dialog on top of the other windows.
    #[arg(long)]
    modal: bool,

    /// Append diagnostics to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_sub::init(args.log_file.as_deref(), args.verbose)?;

    let manager = WindowManager::new();
    manager.set_full_screen(true);
    let (columns, rows) = crossterm::terminal::size()?;
    manager.set_rect(Rect::new(0, 0, i32::from(columns), i32::from(rows)));
    for index in 0..args.windows {
        open_text_window(&manager, index);
    }
    if args.modal {
        open_dialog(&manager);
    }

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;

    let mut opened = args.windows;
    let mut event_loop = EventLoop::new(input, Duration::from_millis(16));
    let result = event_loop.run(|_, event| {
        match event {
            None => output.draw(|canvas| manager.draw(canvas))?,
            Some(Event::Key(key)) if is_ctrl(&key, 'q') => return Ok(ControlFlow::Quit),
            Some(Event::Key(key)) if is_ctrl(&key, 'n') => {
                open_text_window(&manager, opened);
                opened += 1;
            }
            Some(event) => {
                manager.handle_event(&event);
            }
        }
        Ok(ControlFlow::Continue)
    });

    output.exit()?;
    result
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.kind == KeyEventKind::Press
        && key.code == KeyCode::Char(ch)
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn add_standard_buttons(window: &Window) {
    let handle = window.downgrade();
    window.add_button(WindowButton::new('x', ButtonSide::Right).with_on_click(move || {
        if let Some(window) = handle.upgrade() {
            window.close();
        }
    }));
    let handle = window.downgrade();
    window.add_button(WindowButton::new('^', ButtonSide::Right).with_on_click(move || {
        if let Some(window) = handle.upgrade() {
            if window.is_maximized() {
                window.restore();
            } else {
                window.maximize();
            }
        }
    }));
}

fn open_text_window(manager: &WindowManager, index: usize) {
    let offset = (index % 8) as i32;
    let window = manager.new_window();
    window
        .set_title(format!(" Window {} ", index + 1))
        .set_rect(Rect::new(2 + offset * 6, 1 + offset * 2, 46, 12))
        .set_draggable(true)
        .set_resizable(true)
        .set_content(Some(shared(TextPanel::new(WELCOME))));
    add_standard_buttons(&window);
    window.open();
    manager.set_focus(&window);
}

fn open_dialog(manager: &WindowManager) {
    let dialog = manager.new_window();
    dialog
        .set_title(" Modal ")
        .set_rect(Rect::new(0, 0, 36, 7))
        .set_draggable(true)
        .set_content(Some(shared(TextPanel::new(DIALOG))));
    let handle = dialog.downgrade();
    dialog.add_button(WindowButton::new('x', ButtonSide::Right).with_on_click(move || {
        if let Some(window) = handle.upgrade() {
            window.close();
        }
    }));
    dialog.open_modal();
    dialog.center();
    manager.set_focus(&dialog);
}
