//! 视图层模块
//!
//! 包含主渲染入口和各个屏幕区块

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::state::{App, InputField, Phase};
use crate::models::{BMI_CATEGORIES, BmiResult, display_fraction};
use components::{category_color, render_category_badge, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    // 整体呈现为居中卡片
    let card = centered_rect(64, 92, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // 标题
            Constraint::Length(3),  // 体重输入
            Constraint::Length(3),  // 身高输入
            Constraint::Min(9),     // 结果
            Constraint::Length(3),  // 帮助
            Constraint::Length(1),  // 脚注
        ])
        .split(card);

    render_title(frame, chunks[0]);
    render_form(frame, app, chunks[1], chunks[2]);
    render_result(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);
    render_footnote(frame, chunks[5]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("⚖️ BMI 计算器")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, weight_area: Rect, height_area: Rect) {
    let rejected = app.flash_ticks > 0;

    render_input_widget(
        frame,
        weight_area,
        "体重 (kg)",
        &app.weight_input,
        app.focus == InputField::Weight,
        rejected,
    );
    render_input_widget(
        frame,
        height_area,
        "身高 (cm)",
        &app.height_input,
        app.focus == InputField::Height,
        rejected,
    );
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("结果").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.phase {
        Phase::Idle => {
            let hint = Paragraph::new("输入体重和身高，按 [Enter] 计算")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(hint, inner);
        }
        Phase::Computing(_) => {
            let dots = ".".repeat(((app.tick_count / 4) % 4) as usize);
            let pending = Paragraph::new(format!("计算中{}", dots))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Cyan));
            frame.render_widget(pending, inner);
        }
        Phase::Ready(result) => render_ready(frame, app, inner, result),
    }
}

fn render_ready(frame: &mut Frame, app: &App, area: Rect, result: &BmiResult) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 提示行
            Constraint::Length(1), // 数值
            Constraint::Length(1), // 分类徽章
            Constraint::Length(1), // 空行
            Constraint::Length(1), // 刻度条
            Constraint::Length(1), // 刻度图例
            Constraint::Min(0),
        ])
        .split(area);

    let caption = Paragraph::new("你的 BMI")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(caption, chunks[0]);

    let value = Paragraph::new(format!("{:.2}", app.shown_value))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(value, chunks[1]);

    render_category_badge(frame, chunks[2], result.category);

    // 0-40 刻度条，随数值渐进填充，超过 40 封顶
    let gauge_color = result.category.map(category_color).unwrap_or(Color::Gray);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
        .ratio(display_fraction(app.shown_value))
        .label(Span::raw(""));
    frame.render_widget(gauge, chunks[4]);

    render_scale_legend(frame, chunks[5]);
}

/// 刻度条下方的四段分类图例
fn render_scale_legend(frame: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let alignments = [
        Alignment::Left,
        Alignment::Center,
        Alignment::Center,
        Alignment::Right,
    ];

    for (i, band) in BMI_CATEGORIES.iter().enumerate() {
        let label = Paragraph::new(band.label)
            .alignment(alignments[i])
            .style(Style::default().fg(category_color(band)));
        frame.render_widget(label, cells[i]);
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_computing() {
        "计算中，请稍候..."
    } else {
        "[Tab/↑↓] 切换输入  [Enter] 计算  [Esc] 退出"
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_footnote(frame: &mut Frame, area: Rect) {
    let note = Paragraph::new("注：BMI 只是体重筛查指标，不能作为体脂或健康状况的诊断依据")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(note, area);
}
