/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 错误类型：张量运算错误（`TensorError`）与优化器错误（`OptimizerError`）
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("张量数据长度{data_len}与形状{shape:?}不匹配")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
    #[error("除数为零")]
    DivByZero,
    #[error("作为除数的张量中存在为零元素")]
    DivByZeroElement,
}

/// 优化器`update`及配置相关的错误
///
/// 除`InvalidHyperparameter`与`InvalidConfig`外，其余均是调用方违反了
/// “参数集与梯度集键、形状须一致”这一约定，调用方修正输入后重新调用即可。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    #[error("参数`{key}`没有对应的梯度")]
    MissingGradient { key: String },
    #[error("梯度`{key}`没有对应的参数")]
    UnexpectedGradient { key: String },
    #[error("参数`{key}`的形状为{param_shape:?}，但其梯度的形状为{grad_shape:?}")]
    ShapeMismatch {
        key: String,
        param_shape: Vec<usize>,
        grad_shape: Vec<usize>,
    },
    #[error("参数`{key}`与优化器状态的键集合不一致（状态初始化后参数的键不可增删）")]
    StateKeyMismatch { key: String },
    #[error("参数`{key}`的形状已从{state_shape:?}变为{param_shape:?}（状态初始化后形状不可变）")]
    StateShapeMismatch {
        key: String,
        state_shape: Vec<usize>,
        param_shape: Vec<usize>,
    },
    #[error("超参数`{name}`的值{value}无效：{reason}")]
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("优化器配置无效：{0}")]
    InvalidConfig(String),
}
