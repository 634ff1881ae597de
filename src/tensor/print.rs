use crate::tensor::Tensor;
use std::fmt;

/// 扁平输出：`形状: [2, 3] 数据: [..]`，元素按行优先顺序排列
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "形状: {:?} 数据: {:?}", self.shape(), self.data_as_vec())
    }
}
