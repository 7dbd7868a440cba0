//! App 状态定义 (Model)
//!
//! 包含应用状态结构体、输入焦点和结果生命周期状态机

use std::time::Instant;

use crate::config::UiConfig;
use crate::models::BmiResult;

/// 应用状态
pub struct App {
    pub config: UiConfig,
    pub weight_input: String,
    pub height_input: String,
    pub focus: InputField,
    pub phase: Phase,
    pub submission_seq: u64,
    pub shown_value: f64, // 结果数值的渐进显示值
    pub flash_ticks: u8,  // 拒绝提示的剩余闪烁节拍
    pub tick_count: u64,
    pub message: Option<String>,
}

/// 结果生命周期状态机
///
/// Idle -> Computing -> Ready，每次提交重新进入循环；
/// 校验失败回到 Idle 并清除旧结果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Computing(Pending),
    Ready(BmiResult),
}

/// 挂起的提交：结果已算出，到期后才允许提交显示
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    pub seq: u64,
    pub result: BmiResult,
    pub due: Instant,
}

/// 输入字段
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputField {
    Weight,
    Height,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: UiConfig) -> Self {
        Self {
            config,
            weight_input: String::new(),
            height_input: String::new(),
            focus: InputField::Weight,
            phase: Phase::Idle,
            submission_seq: 0,
            shown_value: 0.0,
            flash_ticks: 0,
            tick_count: 0,
            message: None,
        }
    }

    /// 是否有计算正在挂起
    pub fn is_computing(&self) -> bool {
        matches!(self.phase, Phase::Computing(_))
    }

    /// 当前聚焦的输入缓冲
    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Weight => &mut self.weight_input,
            InputField::Height => &mut self.height_input,
        }
    }
}
