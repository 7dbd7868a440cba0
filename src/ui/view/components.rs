//! 通用 UI 组件
//!
//! 输入框、分类徽章等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::CategoryBand;

/// [组件] 带标题的单行输入框
///
/// 聚焦时高亮并附加伪光标，拒绝闪烁期间整体变红。
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    is_rejected: bool,
) {
    let style = if is_rejected {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let shown = if is_focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(shown)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 分类徽章，无分类时显示占位文本
pub fn render_category_badge(frame: &mut Frame, area: Rect, band: Option<&'static CategoryBand>) {
    let badge = match band {
        Some(band) => Paragraph::new(format!(" {} ", band.label))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(category_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
        None => Paragraph::new("(无分类)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
    };
    frame.render_widget(badge, area);
}

/// 分类对应的显示颜色
pub fn category_color(band: &CategoryBand) -> Color {
    match band.label {
        "Underweight" => Color::Blue,
        "Normal" => Color::Green,
        "Overweight" => Color::Yellow,
        _ => Color::Red,
    }
}
