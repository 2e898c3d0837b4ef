//! 终端初始化和清理

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端：raw 模式 + 备用屏幕
///
/// 同时安装 panic hook，panic 时先还原终端再打印信息，否则 panic 信息会被备用屏幕吞掉。
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    leave_screen()?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = leave_screen() {
            eprintln!("failed to restore terminal: {e}");
        }
        log::error!("panic: {info}");
        previous(info);
    }));
}
