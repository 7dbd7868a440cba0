mod config;
mod models;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::load_config;
use crate::ui::{App, render};

/// 获取配置目录路径 (~/.config/quetelet/)
fn get_config_dir() -> io::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("quetelet");

    Ok(config_dir)
}

fn main() -> io::Result<()> {
    // 配置文件路径 (~/.config/quetelet/config.toml)，不存在时使用默认配置
    let config_path = get_config_dir()?.join("config.toml");
    let config = load_config(&config_path)?;

    // 创建应用状态
    let mut app = App::new(config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    // 以固定节拍轮询按键，节拍同时驱动延迟提交和动画
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if crossterm::event::poll(timeout)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == crossterm::event::KeyEventKind::Press
                    && ui::handle_key_event(app, key.code, Instant::now())?
                {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
    Ok(())
}
