/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器模块，实现 PyTorch 风格的一阶梯度优化算法：
 *                 SGD、Momentum、Nesterov、AdaGrad、RMSprop、Adam
 */

mod ada_grad;
mod adam;
mod base;
mod config;
mod momentum;
mod nesterov;
mod rms_prop;
mod sgd;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;

use crate::errors::OptimizerError;
use crate::tensor::Tensor;

pub use ada_grad::AdaGrad;
pub use adam::Adam;
pub use config::OptimizerConfig;
pub use momentum::Momentum;
pub use nesterov::Nesterov;
pub use rms_prop::RMSprop;
pub use sgd::SGD;

/// 参数集：参数名（如`"W1"`、`"b2"`）到参数张量的映射，由调用方持有
pub type ParameterSet = HashMap<String, Tensor>;
/// 梯度集：与[`ParameterSet`]键集合、逐键形状均一致
pub type GradientSet = HashMap<String, Tensor>;
/// 优化器内部状态（速度、累加量、矩估计等）：与[`ParameterSet`]键集合、逐键形状均一致
pub type StateMap = HashMap<String, Tensor>;

/// 自适应类优化器分母中的数值稳定项默认值
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Optimizer trait
///
/// # 设计要点
/// - 构造时不需要也不检查参数形状，内部状态在首次`update`时才按参数集惰性分配（全零）
/// - 状态一经初始化，其键集合与逐键形状在优化器生命周期内不再改变
/// - `update`先整体校验参数集与梯度集（及已初始化的状态），全部通过后才修改参数，
///   因此返回`Err`时不会有任何参数被修改
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = OptimizerEnum::from(Adam::default());
///
/// // 训练循环
/// for _ in 0..epochs {
///     let grads = model.gradients(&params, &batch);
///     optimizer.update(&mut params, &grads)?;
/// }
/// ```
#[enum_dispatch]
pub trait Optimizer {
    /// 用当前梯度与优化器状态原地更新`params`
    fn update(
        &mut self,
        params: &mut ParameterSet,
        grads: &GradientSet,
    ) -> Result<(), OptimizerError>;

    /// 获取学习率
    fn learning_rate(&self) -> f64;

    /// 内部状态是否已（在首次`update`时）初始化
    fn is_initialized(&self) -> bool;

    /// 优化器名称
    fn name(&self) -> &'static str;

    /// 导出构造本优化器所用的超参数配置
    fn config(&self) -> OptimizerConfig;
}

/// 六种优化器的和类型，调用方可据配置互换优化器而无需按类型分支
#[enum_dispatch(Optimizer)]
#[derive(Debug, Clone)]
pub enum OptimizerEnum {
    SGD,
    Momentum,
    Nesterov,
    AdaGrad,
    RMSprop,
    Adam,
}
