/*
 * @Author       : 老董
 * @Date         : 2025-12-20
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - sgd/momentum/nesterov/ada_grad/rms_prop/adam: 各优化器的手算数值测试
 * - trait_tests: Optimizer trait 通用行为测试（零梯度、状态形状、输入校验）
 * - config: OptimizerConfig 解析与校验测试
 */

mod ada_grad;

use approx::assert_abs_diff_eq;

use crate::optimizer::{GradientSet, ParameterSet};
use crate::tensor::Tensor;

/// 由(名称, 张量)列表构造参数集/梯度集
fn tensor_map(entries: &[(&str, Tensor)]) -> ParameterSet {
    entries
        .iter()
        .map(|(key, tensor)| (key.to_string(), tensor.clone()))
        .collect()
}

/// 单键、一维的参数集/梯度集
fn single(key: &str, data: &[f64]) -> GradientSet {
    tensor_map(&[(key, Tensor::new(data, &[data.len()]))])
}

/// 逐元素比较张量与期望值
fn assert_tensor_near(actual: &Tensor, expected: &[f64], epsilon: f64) {
    let actual = actual.data_as_vec();
    assert_eq!(actual.len(), expected.len(), "元素个数不一致");
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}
