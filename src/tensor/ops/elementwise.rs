/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 张量的四则运算（+ - * /）及其复合赋值形式，统一由宏生成。
 *                 两个操作数均为张量时形状必须严格一致，否则panic（不做广播）；
 *                 张量与纯数运算时，纯数作用于每个元素。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

fn any_tensor(_: &Tensor) {}
fn any_number(_: f64) {}

fn nonzero_tensor(divisor: &Tensor) {
    assert!(!divisor.has_zero_value(), "{}", TensorError::DivByZeroElement);
}

fn nonzero_number(divisor: f64) {
    assert!(divisor != 0., "{}", TensorError::DivByZero);
}

/// 生成`张量 op 张量`（含引用的四种组合）、`张量 op f64`、`f64 op 张量`的实现。
/// `$rhs_tensor`/`$rhs_number`校验右操作数，只有除法需要。
macro_rules! elementwise_op {
    ($trait:ident, $method:ident, $op:tt, $operator:expr, $rhs_tensor:ident, $rhs_number:ident) => {
        impl<'a, 'b> $trait<&'b Tensor> for &'a Tensor {
            type Output = Tensor;

            fn $method(self, rhs: &'b Tensor) -> Tensor {
                self.assert_same_shape(rhs, $operator);
                $rhs_tensor(rhs);
                Tensor {
                    data: &self.data $op &rhs.data,
                }
            }
        }

        impl<'a> $trait<Tensor> for &'a Tensor {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                self $op &rhs
            }
        }

        impl<'b> $trait<&'b Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: &'b Tensor) -> Tensor {
                &self $op rhs
            }
        }

        impl $trait for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                &self $op &rhs
            }
        }

        impl<'a> $trait<f64> for &'a Tensor {
            type Output = Tensor;

            fn $method(self, rhs: f64) -> Tensor {
                $rhs_number(rhs);
                Tensor {
                    data: &self.data $op rhs,
                }
            }
        }

        impl $trait<f64> for Tensor {
            type Output = Tensor;

            fn $method(self, rhs: f64) -> Tensor {
                &self $op rhs
            }
        }

        impl<'b> $trait<&'b Tensor> for f64 {
            type Output = Tensor;

            fn $method(self, rhs: &'b Tensor) -> Tensor {
                $rhs_tensor(rhs);
                Tensor {
                    data: self $op &rhs.data,
                }
            }
        }

        impl $trait<Tensor> for f64 {
            type Output = Tensor;

            fn $method(self, rhs: Tensor) -> Tensor {
                self $op &rhs
            }
        }
    };
}

/// 生成`张量 op= 张量`（含引用）与`张量 op= f64`的实现，原地修改左操作数
macro_rules! elementwise_assign_op {
    ($trait:ident, $method:ident, $op:tt, $operator:expr, $rhs_tensor:ident, $rhs_number:ident) => {
        impl<'b> $trait<&'b Tensor> for Tensor {
            fn $method(&mut self, rhs: &'b Tensor) {
                self.assert_same_shape(rhs, $operator);
                $rhs_tensor(rhs);
                self.data $op &rhs.data;
            }
        }

        impl $trait for Tensor {
            fn $method(&mut self, rhs: Tensor) {
                *self $op &rhs;
            }
        }

        impl $trait<f64> for Tensor {
            fn $method(&mut self, rhs: f64) {
                $rhs_number(rhs);
                self.data $op rhs;
            }
        }
    };
}

elementwise_op!(Add, add, +, Operator::Add, any_tensor, any_number);
elementwise_op!(Sub, sub, -, Operator::Sub, any_tensor, any_number);
elementwise_op!(Mul, mul, *, Operator::Mul, any_tensor, any_number);
elementwise_op!(Div, div, /, Operator::Div, nonzero_tensor, nonzero_number);

elementwise_assign_op!(AddAssign, add_assign, +=, Operator::AddAssign, any_tensor, any_number);
elementwise_assign_op!(SubAssign, sub_assign, -=, Operator::SubAssign, any_tensor, any_number);
elementwise_assign_op!(MulAssign, mul_assign, *=, Operator::MulAssign, any_tensor, any_number);
elementwise_assign_op!(DivAssign, div_assign, /=, Operator::DivAssign, nonzero_tensor, nonzero_number);
