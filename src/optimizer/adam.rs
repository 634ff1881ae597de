/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Adam优化器实现
 */

use log::{debug, trace};

use super::base::{
    check_epsilon, check_params_and_grads, check_state, grad_of, state_of, zeros_like_params,
};
use super::{DEFAULT_EPSILON, GradientSet, Optimizer, OptimizerConfig, ParameterSet, StateMap};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

pub const DEFAULT_ADAM_LR: f64 = 0.001;
pub const DEFAULT_BETA1: f64 = 0.9;
pub const DEFAULT_BETA2: f64 = 0.999;

/// 一阶、二阶矩估计，两者总是同时分配
#[derive(Debug, Clone)]
struct Moments {
    m: StateMap,
    s: StateMap,
}

/// Adam 优化器
///
/// Adam: Adaptive Moment Estimation，偏差修正并入有效学习率：
/// - t = t + 1（每次`update`只加一次，与参数个数无关）
/// - `α_t` = α * √(1 - β2^t) / (1 - β1^t)（每次`update`只算一次，所有参数共用）
/// - m = m + (1 - β1) * (∇θ - m)
/// - s = s + (1 - β2) * (∇θ² - s)
/// - θ = θ - `α_t` * m / (√s + ε)
#[derive(Debug, Clone)]
pub struct Adam {
    /// 学习率
    lr: f64,
    /// β1 (一阶矩衰减)
    beta1: f64,
    /// β2 (二阶矩衰减)
    beta2: f64,
    /// 数值稳定项，须大于0
    epsilon: f64,
    /// 矩估计（按参数名索引），首次`update`前为`None`
    moments: Option<Moments>,
    /// 时间步
    t: usize,
    /// 最近一次`update`所用的有效学习率
    lr_t: Option<f64>,
}

impl Adam {
    /// 创建新的 Adam 优化器（β1、β2、ε取默认值）
    pub const fn new(lr: f64) -> Self {
        Self::new_with_config(lr, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPSILON)
    }

    /// 创建带完整配置的 Adam 优化器；`epsilon`不合法时由`update`返回错误
    pub const fn new_with_config(lr: f64, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        Self {
            lr,
            beta1,
            beta2,
            epsilon,
            moments: None,
            t: 0,
            lr_t: None,
        }
    }

    pub const fn beta1(&self) -> f64 {
        self.beta1
    }

    pub const fn beta2(&self) -> f64 {
        self.beta2
    }

    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// 获取指定参数的一阶矩 m
    ///
    /// 用于调试和可视化优化过程
    pub fn first_moment(&self, key: &str) -> Option<&Tensor> {
        self.moments.as_ref()?.m.get(key)
    }

    /// 获取指定参数的二阶矩 s
    ///
    /// 用于调试和可视化优化过程
    pub fn second_moment(&self, key: &str) -> Option<&Tensor> {
        self.moments.as_ref()?.s.get(key)
    }

    /// 获取当前时间步（即已成功执行的`update`次数）
    pub const fn timestep(&self) -> usize {
        self.t
    }

    /// 最近一次`update`所用的偏差修正后学习率；尚未`update`过则为`None`
    pub const fn effective_learning_rate(&self) -> Option<f64> {
        self.lr_t
    }

    /// 第`t`步的偏差修正后学习率：α * √(1 - β2^t) / (1 - β1^t)
    pub fn bias_corrected_lr(&self, t: usize) -> f64 {
        // β^t 在 t 远小于 i32::MAX 时已下溢为 0，饱和不改变结果
        let t = i32::try_from(t).unwrap_or(i32::MAX);
        self.lr * (1.0 - self.beta2.powi(t)).sqrt() / (1.0 - self.beta1.powi(t))
    }
}

impl Default for Adam {
    fn default() -> Self {
        Self::new(DEFAULT_ADAM_LR)
    }
}

impl Optimizer for Adam {
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError> {
        check_epsilon(self.epsilon)?;
        check_params_and_grads(params, grads)?;
        match self.moments.as_ref() {
            Some(moments) => {
                check_state(&moments.m, params)?;
                check_state(&moments.s, params)?;
            }
            None => debug!("Adam：首次update，为{}个参数惰性初始化矩估计", params.len()),
        }
        self.t += 1;
        let lr_t = self.bias_corrected_lr(self.t);
        self.lr_t = Some(lr_t);
        let moments = self.moments.get_or_insert_with(|| Moments {
            m: zeros_like_params(params),
            s: zeros_like_params(params),
        });
        trace!("Adam：第{}步，有效学习率为{lr_t}", self.t);

        let (b1, b2, eps) = (self.beta1, self.beta2, self.epsilon);
        for (key, param) in params.iter_mut() {
            let grad = grad_of(grads, key)?;
            let m = state_of(&mut moments.m, key)?;
            let delta_m = (1.0 - b1) * (grad - &*m);
            *m += delta_m;
            let s = state_of(&mut moments.s, key)?;
            let delta_s = (1.0 - b2) * (grad.square() - &*s);
            *s += delta_s;
            *param -= lr_t * &*m / (s.sqrt() + eps);
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn is_initialized(&self) -> bool {
        self.moments.is_some()
    }

    fn name(&self) -> &'static str {
        "Adam"
    }

    fn config(&self) -> OptimizerConfig {
        OptimizerConfig::Adam {
            lr: self.lr,
            beta1: self.beta1,
            beta2: self.beta2,
            epsilon: self.epsilon,
        }
    }
}
