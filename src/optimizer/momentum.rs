/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 动量（Momentum）优化器实现
 */

use log::trace;

use super::base::{check_params_and_grads, grad_of, prepare_state, state_of};
use super::{GradientSet, Optimizer, OptimizerConfig, ParameterSet, StateMap};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

pub const DEFAULT_MOMENTUM_LR: f64 = 0.01;
pub const DEFAULT_MOMENTUM: f64 = 0.9;

/// Momentum 优化器
///
/// - v = μ * v - α * ∇θ
/// - θ = θ + v
#[derive(Debug, Clone)]
pub struct Momentum {
    /// 学习率
    lr: f64,
    /// 动量系数 μ
    momentum: f64,
    /// 速度（按参数名索引），首次`update`前为`None`
    velocity: Option<StateMap>,
}

impl Momentum {
    /// 创建新的 Momentum 优化器（动量系数取默认值）
    pub const fn new(lr: f64) -> Self {
        Self::new_with_config(lr, DEFAULT_MOMENTUM)
    }

    /// 创建带完整配置的 Momentum 优化器
    pub const fn new_with_config(lr: f64, momentum: f64) -> Self {
        Self {
            lr,
            momentum,
            velocity: None,
        }
    }

    pub const fn momentum(&self) -> f64 {
        self.momentum
    }

    /// 获取指定参数的速度状态，用于调试和可视化优化过程
    pub fn velocity(&self, key: &str) -> Option<&Tensor> {
        self.velocity.as_ref()?.get(key)
    }
}

impl Default for Momentum {
    fn default() -> Self {
        Self::new(DEFAULT_MOMENTUM_LR)
    }
}

impl Optimizer for Momentum {
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError> {
        check_params_and_grads(params, grads)?;
        let velocity = prepare_state(&mut self.velocity, params, "Momentum")?;
        trace!("Momentum：更新{}个参数", params.len());

        for (key, param) in params.iter_mut() {
            let grad = grad_of(grads, key)?;
            let v = state_of(velocity, key)?;
            *v = self.momentum * &*v - self.lr * grad;
            *param += &*v;
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn is_initialized(&self) -> bool {
        self.velocity.is_some()
    }

    fn name(&self) -> &'static str {
        "Momentum"
    }

    fn config(&self) -> OptimizerConfig {
        OptimizerConfig::Momentum {
            lr: self.lr,
            momentum: self.momentum,
        }
    }
}
