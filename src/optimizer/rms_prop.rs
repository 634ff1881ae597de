/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : RMSprop 优化器实现
 */

use log::trace;

use super::base::{check_epsilon, check_params_and_grads, grad_of, prepare_state, state_of};
use super::{DEFAULT_EPSILON, GradientSet, Optimizer, OptimizerConfig, ParameterSet, StateMap};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

pub const DEFAULT_RMS_PROP_LR: f64 = 0.01;
pub const DEFAULT_DECAY_RATE: f64 = 0.99;

/// RMSprop 优化器
///
/// - h = ρ * h + (1 - ρ) * ∇θ²
/// - θ = θ - α * ∇θ / (√h + ε)
#[derive(Debug, Clone)]
pub struct RMSprop {
    /// 学习率
    lr: f64,
    /// 衰减率 ρ
    decay_rate: f64,
    /// 数值稳定项，须大于0
    epsilon: f64,
    /// 梯度平方的滑动平均（按参数名索引），首次`update`前为`None`
    h: Option<StateMap>,
}

impl RMSprop {
    /// 创建新的 RMSprop 优化器（衰减率取默认值）
    pub const fn new(lr: f64) -> Self {
        Self::new_with_config(lr, DEFAULT_DECAY_RATE, DEFAULT_EPSILON)
    }

    /// 创建带完整配置的 RMSprop 优化器；`epsilon`不合法时由`update`返回错误
    pub const fn new_with_config(lr: f64, decay_rate: f64, epsilon: f64) -> Self {
        Self {
            lr,
            decay_rate,
            epsilon,
            h: None,
        }
    }

    pub const fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// 获取指定参数的梯度平方滑动平均
    pub fn accumulator(&self, key: &str) -> Option<&Tensor> {
        self.h.as_ref()?.get(key)
    }
}

impl Default for RMSprop {
    fn default() -> Self {
        Self::new(DEFAULT_RMS_PROP_LR)
    }
}

impl Optimizer for RMSprop {
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError> {
        check_epsilon(self.epsilon)?;
        check_params_and_grads(params, grads)?;
        let accumulators = prepare_state(&mut self.h, params, "RMSprop")?;
        trace!("RMSprop：更新{}个参数", params.len());

        let rho = self.decay_rate;
        for (key, param) in params.iter_mut() {
            let grad = grad_of(grads, key)?;
            let h = state_of(accumulators, key)?;
            *h *= rho;
            *h += (1.0 - rho) * grad * grad;
            *param -= self.lr * grad / (h.sqrt() + self.epsilon);
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn is_initialized(&self) -> bool {
        self.h.is_some()
    }

    fn name(&self) -> &'static str {
        "RMSprop"
    }

    fn config(&self) -> OptimizerConfig {
        OptimizerConfig::RmsProp {
            lr: self.lr,
            decay_rate: self.decay_rate,
            epsilon: self.epsilon,
        }
    }
}
