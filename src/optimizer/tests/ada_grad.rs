use super::{assert_tensor_near, single};
use crate::optimizer::{AdaGrad, Optimizer};
use crate::tensor::Tensor;

#[test]
fn test_ada_grad_creation() {
    let ada_grad = AdaGrad::default();
    assert_eq!(ada_grad.learning_rate(), 0.01);
    assert_eq!(ada_grad.epsilon(), 1e-7);
    assert!(ada_grad.accumulator("W").is_none());
}

#[test]
fn test_ada_grad_two_steps() {
    // 第1步：h = 0.25, θ = 1 - 0.1*0.5/(0.5 + 1e-7)
    // 第2步：h = 0.5,  θ -= 0.1*0.5/(√0.5 + 1e-7)
    let mut ada_grad = AdaGrad::new(0.1);
    let mut params = single("W", &[1.0]);
    let grads = single("W", &[0.5]);

    ada_grad.update(&mut params, &grads).unwrap();
    assert_tensor_near(ada_grad.accumulator("W").unwrap(), &[0.25], 1e-12);
    let expected_1 = 1.0 - 0.1 * 0.5 / (0.5 + 1e-7);
    assert_tensor_near(&params["W"], &[expected_1], 1e-12);

    ada_grad.update(&mut params, &grads).unwrap();
    assert_tensor_near(ada_grad.accumulator("W").unwrap(), &[0.5], 1e-12);
    let expected_2 = expected_1 - 0.1 * 0.5 / (0.5f64.sqrt() + 1e-7);
    assert_tensor_near(&params["W"], &[expected_2], 1e-12);
    assert_tensor_near(&params["W"], &[0.8292893518813398], 1e-9);
}

#[test]
fn test_ada_grad_accumulator_is_non_decreasing() {
    let mut ada_grad = AdaGrad::new(0.05);
    let mut params = super::tensor_map(&[("W", Tensor::zeros(&[3, 4]))]);
    let mut previous = Tensor::zeros(&[3, 4]);

    for _ in 0..20 {
        let grads = super::tensor_map(&[("W", Tensor::new_random(-2.0, 2.0, &[3, 4]))]);
        ada_grad.update(&mut params, &grads).unwrap();

        let current = ada_grad.accumulator("W").unwrap().clone();
        let delta = &current - &previous;
        assert!(delta.all(|x| x >= 0.0), "累加量出现了下降：{delta}");
        previous = current;
    }
}

#[test]
fn test_ada_grad_epsilon_guards_zero_accumulator() {
    // h 为0时分母为ε，零梯度不会触发除零
    let mut ada_grad = AdaGrad::new(0.1);
    let mut params = single("W", &[3.0, -3.0]);

    ada_grad.update(&mut params, &single("W", &[0.0, 0.0])).unwrap();

    assert_tensor_near(&params["W"], &[3.0, -3.0], 0.0);
}
