//! # Only Optim
//!
//! `only_optim`用纯rust实现了一族可互换的一阶梯度优化器（SGD、Momentum、Nesterov、
//! AdaGrad、RMSprop、Adam）：给定以名称索引的参数张量与其梯度，原地更新参数。
//! 参数与梯度如何产生、训练循环如何组织均不在本库范围内。
//!

pub mod errors;
pub mod optimizer;
pub mod tensor;
pub mod utils;
