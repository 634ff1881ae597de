/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 梯度下降优化器实现
 */

use log::trace;

use super::base::{check_params_and_grads, grad_of};
use super::{GradientSet, Optimizer, OptimizerConfig, ParameterSet};
use crate::errors::OptimizerError;

/// SGD 默认学习率
pub const DEFAULT_SGD_LR: f64 = 0.01;

/// SGD 优化器
///
/// 随机梯度下降：θ = θ - α * ∇θ
///
/// 无任何内部状态。
#[derive(Debug, Clone)]
pub struct SGD {
    /// 学习率
    lr: f64,
}

impl SGD {
    /// 创建新的 SGD 优化器
    pub const fn new(lr: f64) -> Self {
        Self { lr }
    }
}

impl Default for SGD {
    fn default() -> Self {
        Self::new(DEFAULT_SGD_LR)
    }
}

impl Optimizer for SGD {
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError> {
        check_params_and_grads(params, grads)?;
        trace!("SGD：更新{}个参数", params.len());

        for (key, param) in params.iter_mut() {
            let grad = grad_of(grads, key)?;
            *param -= self.lr * grad;
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn is_initialized(&self) -> bool {
        // SGD 无状态
        true
    }

    fn name(&self) -> &'static str {
        "SGD"
    }

    fn config(&self) -> OptimizerConfig {
        OptimizerConfig::Sgd { lr: self.lr }
    }
}
