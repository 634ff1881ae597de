use crate::tensor::Tensor;
use std::cmp::PartialEq;

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 逐元素开平方，返回一个新的张量
    pub fn sqrt(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f64::sqrt),
        }
    }

    /// 逐元素求平方，返回一个新的张量
    pub fn square(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(|x| x * x),
        }
    }

    /// 判断张量的所有元素是否均满足`predicate`
    pub fn all(&self, predicate: impl Fn(f64) -> bool) -> bool {
        self.data.iter().all(|&x| predicate(x))
    }
}
