/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 各优化器共用的输入校验与惰性状态管理
 */

use log::debug;

use super::{GradientSet, ParameterSet, StateMap};
use crate::errors::OptimizerError;
use crate::tensor::Tensor;

/// 校验参数集与梯度集：键集合须完全一致，且逐键形状严格一致
pub(crate) fn check_params_and_grads(
    params: &ParameterSet,
    grads: &GradientSet,
) -> Result<(), OptimizerError> {
    for (key, param) in params {
        let grad = grad_of(grads, key)?;
        if !param.is_same_shape(grad) {
            return Err(OptimizerError::ShapeMismatch {
                key: key.clone(),
                param_shape: param.shape().to_vec(),
                grad_shape: grad.shape().to_vec(),
            });
        }
    }
    if let Some(key) = grads.keys().find(|key| !params.contains_key(*key)) {
        return Err(OptimizerError::UnexpectedGradient { key: key.clone() });
    }
    Ok(())
}

/// 校验已初始化的状态与本次参数集的键集合、逐键形状是否仍一致
pub(crate) fn check_state(state: &StateMap, params: &ParameterSet) -> Result<(), OptimizerError> {
    let extra_key = params
        .keys()
        .find(|key| !state.contains_key(*key))
        .or_else(|| state.keys().find(|key| !params.contains_key(*key)));
    if let Some(key) = extra_key {
        return Err(OptimizerError::StateKeyMismatch { key: key.clone() });
    }
    for (key, param) in params {
        let state_tensor = &state[key];
        if !state_tensor.is_same_shape(param) {
            return Err(OptimizerError::StateShapeMismatch {
                key: key.clone(),
                state_shape: state_tensor.shape().to_vec(),
                param_shape: param.shape().to_vec(),
            });
        }
    }
    Ok(())
}

/// 按参数集的键与形状分配全零状态
pub(crate) fn zeros_like_params(params: &ParameterSet) -> StateMap {
    params
        .iter()
        .map(|(key, param)| (key.clone(), Tensor::zeros_like(param)))
        .collect()
}

/// 单状态优化器（Momentum、Nesterov、AdaGrad、RMSprop）的状态准备：
/// 未初始化则按参数集惰性分配全零状态，已初始化则校验其与参数集是否仍一致
pub(crate) fn prepare_state<'a>(
    state: &'a mut Option<StateMap>,
    params: &ParameterSet,
    owner: &str,
) -> Result<&'a mut StateMap, OptimizerError> {
    match state.as_ref() {
        Some(existing) => check_state(existing, params)?,
        None => debug!("{owner}：首次update，为{}个参数惰性初始化状态", params.len()),
    }
    Ok(state.get_or_insert_with(|| zeros_like_params(params)))
}

pub(crate) fn grad_of<'a>(grads: &'a GradientSet, key: &str) -> Result<&'a Tensor, OptimizerError> {
    grads.get(key).ok_or_else(|| OptimizerError::MissingGradient {
        key: key.to_string(),
    })
}

pub(crate) fn state_of<'a>(
    state: &'a mut StateMap,
    key: &str,
) -> Result<&'a mut Tensor, OptimizerError> {
    state
        .get_mut(key)
        .ok_or_else(|| OptimizerError::StateKeyMismatch {
            key: key.to_string(),
        })
}

/// ε 须为大于0的有限数，否则自适应方法的分母可能为零
pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), OptimizerError> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperparameter {
            name: "epsilon",
            value: epsilon,
            reason: "须为大于0的有限数",
        })
    }
}
