//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含 dispatch 分发、提交流程和节拍推进

use std::time::{Duration, Instant};

use super::actions::Action;
use super::state::{App, InputField, Pending, Phase};
use crate::models::{BmiResult, parse_measurement};

/// 拒绝提示的闪烁节拍数（50ms 节拍下约 300ms）
const REJECT_FLASH_TICKS: u8 = 6;

/// 渐进显示的每节拍收敛系数
const EASE_FACTOR: f64 = 0.2;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::SwitchFocus => self.switch_focus(),

            Action::Submit => {
                // 计算挂起期间提交键不可用
                if !self.is_computing() {
                    self.submit(now);
                }
            }

            Action::Input(c) => self.focused_input_mut().push(c),

            Action::DeleteChar => {
                self.focused_input_mut().pop();
            }
        }
        false
    }

    /// 在两个输入框之间切换焦点
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Weight => InputField::Height,
            InputField::Height => InputField::Weight,
        };
    }

    /// 提交当前输入
    ///
    /// 校验通过则把结果挂起到延迟到期；任一字段无效则拒绝整次提交，
    /// 清除旧结果并给出瞬时提示。后发的提交总是覆盖先发的挂起结果。
    pub fn submit(&mut self, now: Instant) {
        self.submission_seq += 1;

        match parse_measurement(&self.weight_input, &self.height_input) {
            Ok(m) => {
                let result = BmiResult::from_measurement(&m);
                let due = now + Duration::from_millis(self.config.compute_delay_ms);
                self.phase = Phase::Computing(Pending {
                    seq: self.submission_seq,
                    result,
                    due,
                });
                self.message = None;
                self.flash_ticks = 0;
            }
            Err(_) => {
                self.phase = Phase::Idle;
                self.shown_value = 0.0;
                self.flash_ticks = REJECT_FLASH_TICKS;
                self.message = Some("输入无效：体重和身高必须是数字".to_string());
            }
        }
    }

    /// 推进一个节拍
    ///
    /// 到期的挂起结果只有在序号仍是最新时才允许提交显示，
    /// 过期序号的挂起结果直接丢弃。
    pub fn on_tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.flash_ticks > 0 {
            self.flash_ticks -= 1;
        }

        if let Phase::Computing(pending) = self.phase {
            if now >= pending.due {
                if pending.seq == self.submission_seq {
                    self.phase = Phase::Ready(pending.result);
                } else {
                    self.phase = Phase::Idle;
                }
            }
        }

        // 结果数值渐进逼近，足够接近时直接落定
        if let Phase::Ready(result) = self.phase {
            let target = result.value;
            if !target.is_finite() || (target - self.shown_value).abs() < 0.005 {
                self.shown_value = target;
            } else {
                self.shown_value += (target - self.shown_value) * EASE_FACTOR;
            }
        }
    }
}
