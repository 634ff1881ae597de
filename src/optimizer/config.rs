/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 优化器配置：按`type`选择优化器种类，缺省的超参数取各优化器的默认值
 */

use serde::{Deserialize, Serialize};

use super::ada_grad::DEFAULT_ADA_GRAD_LR;
use super::base::check_epsilon;
use super::adam::{DEFAULT_ADAM_LR, DEFAULT_BETA1, DEFAULT_BETA2};
use super::momentum::{DEFAULT_MOMENTUM, DEFAULT_MOMENTUM_LR};
use super::nesterov::{DEFAULT_NESTEROV_LR, DEFAULT_NESTEROV_MOMENTUM};
use super::rms_prop::{DEFAULT_DECAY_RATE, DEFAULT_RMS_PROP_LR};
use super::sgd::DEFAULT_SGD_LR;
use super::{AdaGrad, Adam, DEFAULT_EPSILON, Momentum, Nesterov, OptimizerEnum, RMSprop, SGD};
use crate::errors::OptimizerError;

/// 优化器配置
///
/// 可识别的选项：`lr`、`momentum`、`decay_rate`（别名`decay`）、`beta1`、`beta2`、`epsilon`。
/// 不属于所选类型的选项视为配置错误，不会被静默丢弃。
///
/// # 使用示例
/// ```ignore
/// let config = OptimizerConfig::from_json(r#"{"type": "rmsprop", "lr": 0.001, "decay": 0.9}"#)?;
/// let mut optimizer = config.build()?;
/// optimizer.update(&mut params, &grads)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum OptimizerConfig {
    Sgd {
        #[serde(default = "default_sgd_lr")]
        lr: f64,
    },
    Momentum {
        #[serde(default = "default_momentum_lr")]
        lr: f64,
        #[serde(default = "default_momentum")]
        momentum: f64,
    },
    Nesterov {
        #[serde(default = "default_nesterov_lr")]
        lr: f64,
        #[serde(default = "default_nesterov_momentum")]
        momentum: f64,
    },
    #[serde(alias = "adagrad")]
    AdaGrad {
        #[serde(default = "default_ada_grad_lr")]
        lr: f64,
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    #[serde(alias = "rmsprop")]
    RmsProp {
        #[serde(default = "default_rms_prop_lr")]
        lr: f64,
        #[serde(default = "default_decay_rate", alias = "decay")]
        decay_rate: f64,
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    Adam {
        #[serde(default = "default_adam_lr")]
        lr: f64,
        #[serde(default = "default_beta1")]
        beta1: f64,
        #[serde(default = "default_beta2")]
        beta2: f64,
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
}

// serde 的 default 属性只接受函数路径
const fn default_sgd_lr() -> f64 {
    DEFAULT_SGD_LR
}
const fn default_momentum_lr() -> f64 {
    DEFAULT_MOMENTUM_LR
}
const fn default_momentum() -> f64 {
    DEFAULT_MOMENTUM
}
const fn default_nesterov_lr() -> f64 {
    DEFAULT_NESTEROV_LR
}
const fn default_nesterov_momentum() -> f64 {
    DEFAULT_NESTEROV_MOMENTUM
}
const fn default_ada_grad_lr() -> f64 {
    DEFAULT_ADA_GRAD_LR
}
const fn default_rms_prop_lr() -> f64 {
    DEFAULT_RMS_PROP_LR
}
const fn default_decay_rate() -> f64 {
    DEFAULT_DECAY_RATE
}
const fn default_adam_lr() -> f64 {
    DEFAULT_ADAM_LR
}
const fn default_beta1() -> f64 {
    DEFAULT_BETA1
}
const fn default_beta2() -> f64 {
    DEFAULT_BETA2
}
const fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::Sgd { lr: DEFAULT_SGD_LR }
    }
}

impl OptimizerConfig {
    /// 从 JSON 文本解析配置
    pub fn from_json(text: &str) -> Result<Self, OptimizerError> {
        serde_json::from_str(text).map_err(|e| OptimizerError::InvalidConfig(e.to_string()))
    }

    /// 序列化为 JSON 文本（缺省项也会被显式写出）
    pub fn to_json(&self) -> Result<String, OptimizerError> {
        serde_json::to_string(self).map_err(|e| OptimizerError::InvalidConfig(e.to_string()))
    }

    /// 校验超参数
    pub fn validate(&self) -> Result<(), OptimizerError> {
        match *self {
            Self::Sgd { lr } => check_lr(lr),
            Self::Momentum { lr, momentum } | Self::Nesterov { lr, momentum } => {
                check_lr(lr)?;
                check_coefficient("momentum", momentum)
            }
            Self::AdaGrad { lr, epsilon } => {
                check_lr(lr)?;
                check_epsilon(epsilon)
            }
            Self::RmsProp {
                lr,
                decay_rate,
                epsilon,
            } => {
                check_lr(lr)?;
                check_coefficient("decay_rate", decay_rate)?;
                check_epsilon(epsilon)
            }
            Self::Adam {
                lr,
                beta1,
                beta2,
                epsilon,
            } => {
                check_lr(lr)?;
                check_coefficient("beta1", beta1)?;
                check_coefficient("beta2", beta2)?;
                check_epsilon(epsilon)
            }
        }
    }

    /// 校验超参数后构造对应的优化器（状态未初始化）
    pub fn build(&self) -> Result<OptimizerEnum, OptimizerError> {
        self.validate()?;
        let optimizer: OptimizerEnum = match *self {
            Self::Sgd { lr } => SGD::new(lr).into(),
            Self::Momentum { lr, momentum } => Momentum::new_with_config(lr, momentum).into(),
            Self::Nesterov { lr, momentum } => Nesterov::new_with_config(lr, momentum).into(),
            Self::AdaGrad { lr, epsilon } => AdaGrad::new_with_config(lr, epsilon).into(),
            Self::RmsProp {
                lr,
                decay_rate,
                epsilon,
            } => RMSprop::new_with_config(lr, decay_rate, epsilon).into(),
            Self::Adam {
                lr,
                beta1,
                beta2,
                epsilon,
            } => Adam::new_with_config(lr, beta1, beta2, epsilon).into(),
        };
        Ok(optimizer)
    }
}

fn check_lr(lr: f64) -> Result<(), OptimizerError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperparameter {
            name: "lr",
            value: lr,
            reason: "须为大于0的有限数",
        })
    }
}

/// 动量、衰减率、β1、β2 均须位于 [0, 1)
fn check_coefficient(name: &'static str, value: f64) -> Result<(), OptimizerError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperparameter {
            name,
            value,
            reason: "须位于[0, 1)区间",
        })
    }
}
