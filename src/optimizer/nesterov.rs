/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : Nesterov 加速动量优化器实现
 */

use log::trace;

use super::base::{check_params_and_grads, grad_of, prepare_state, state_of};
use super::{GradientSet, Optimizer, OptimizerConfig, ParameterSet, StateMap};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

pub const DEFAULT_NESTEROV_LR: f64 = 0.01;
pub const DEFAULT_NESTEROV_MOMENTUM: f64 = 0.9;

/// Nesterov 优化器
///
/// - v = μ * v - α * ∇θ
/// - θ = θ + μ² * v - (1 + μ) * α * ∇θ
///
/// 注意：第二步用的是已含本步梯度的新`v`，与教科书中以旧`v`展开的写法并不等价，
/// 这里保持该写法不变。
#[derive(Debug, Clone)]
pub struct Nesterov {
    /// 学习率
    lr: f64,
    /// 动量系数 μ
    momentum: f64,
    /// 速度（按参数名索引），首次`update`前为`None`
    velocity: Option<StateMap>,
}

impl Nesterov {
    /// 创建新的 Nesterov 优化器（动量系数取默认值）
    pub const fn new(lr: f64) -> Self {
        Self::new_with_config(lr, DEFAULT_NESTEROV_MOMENTUM)
    }

    /// 创建带完整配置的 Nesterov 优化器
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

    /// 获取指定参数的速度状态
    pub fn velocity(&self, key: &str) -> Option<&Tensor> {
        self.velocity.as_ref()?.get(key)
    }
}

impl Default for Nesterov {
    fn default() -> Self {
        Self::new(DEFAULT_NESTEROV_LR)
    }
}

impl Optimizer for Nesterov {
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError> {
        check_params_and_grads(params, grads)?;
        let velocity = prepare_state(&mut self.velocity, params, "Nesterov")?;
        trace!("Nesterov：更新{}个参数", params.len());

        let mu = self.momentum;
        for (key, param) in params.iter_mut() {
            let grad = grad_of(grads, key)?;
            let v = state_of(velocity, key)?;
            *v *= mu;
            *v -= self.lr * grad;
            *param += mu * mu * &*v;
            *param -= (1.0 + mu) * self.lr * grad;
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
        "Nesterov"
    }

    fn config(&self) -> OptimizerConfig {
        OptimizerConfig::Nesterov {
            lr: self.lr,
            momentum: self.momentum,
        }
    }
}
