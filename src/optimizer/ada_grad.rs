/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : AdaGrad 优化器实现
 */

use log::trace;

use super::base::{check_epsilon, check_params_and_grads, grad_of, prepare_state, state_of};
use super::{DEFAULT_EPSILON, GradientSet, Optimizer, OptimizerConfig, ParameterSet, StateMap};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

pub const DEFAULT_ADA_GRAD_LR: f64 = 0.01;

/// AdaGrad 优化器
///
/// - h = h + ∇θ²
/// - θ = θ - α * ∇θ / (√h + ε)
///
/// `h`逐元素单调不减，因此各元素的有效学习率只降不升。
#[derive(Debug, Clone)]
pub struct AdaGrad {
    /// 学习率
    lr: f64,
    /// 数值稳定项，须大于0
    epsilon: f64,
    /// 梯度平方累加量（按参数名索引），首次`update`前为`None`
    h: Option<StateMap>,
}

impl AdaGrad {
    /// 创建新的 AdaGrad 优化器
    pub const fn new(lr: f64) -> Self {
        Self::new_with_config(lr, DEFAULT_EPSILON)
    }

    /// 创建带完整配置的 AdaGrad 优化器；`epsilon`不合法时由`update`返回错误
    pub const fn new_with_config(lr: f64, epsilon: f64) -> Self {
        Self {
            lr,
            epsilon,
            h: None,
        }
    }

    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// 获取指定参数的梯度平方累加量
    pub fn accumulator(&self, key: &str) -> Option<&Tensor> {
        self.h.as_ref()?.get(key)
    }
}

impl Default for AdaGrad {
    fn default() -> Self {
        Self::new(DEFAULT_ADA_GRAD_LR)
    }
}

impl Optimizer for AdaGrad {
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError> {
        check_epsilon(self.epsilon)?;
        check_params_and_grads(params, grads)?;
        let accumulators = prepare_state(&mut self.h, params, "AdaGrad")?;
        trace!("AdaGrad：更新{}个参数", params.len());

        for (key, param) in params.iter_mut() {
            let grad = grad_of(grads, key)?;
            let h = state_of(accumulators, key)?;
            *h += grad.square();
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
        "AdaGrad"
    }

    fn config(&self) -> OptimizerConfig {
        OptimizerConfig::AdaGrad {
            lr: self.lr,
            epsilon: self.epsilon,
        }
    }
}
