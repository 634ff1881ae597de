use crate::tensor::Tensor;
use ndarray::Array;
use ndarray::IxDyn;

#[test]
fn test_new_scalar() {
    let tensor = Tensor::new(&[1.], &[]);
    assert_eq!(tensor.shape(), &[] as &[usize]);
    assert_eq!(
        tensor.data,
        Array::from_shape_vec(IxDyn(&[]), vec![1.]).unwrap()
    );

    let tensor = Tensor::new(&[1.], &[1, 1, 1]);
    assert_eq!(tensor.shape(), &[1, 1, 1]);
    assert_eq!(
        tensor.data,
        Array::from_shape_vec(IxDyn(&[1, 1, 1]), vec![1.]).unwrap()
    );
}

#[test]
fn test_new_matrix() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.get(&[1, 0]), 4.);
    assert_eq!(tensor.data_as_vec(), vec![1., 2., 3., 4., 5., 6.]);
}

#[test]
#[should_panic(expected = "张量数据长度2与形状[1, 1, 1]不匹配")]
fn test_new_invalid_scalar() {
    let _ = Tensor::new(&[1., 2.], &[1, 1, 1]);
}

#[test]
fn test_zeros_and_zeros_like() {
    let zeros = Tensor::zeros(&[2, 3, 4]);
    assert_eq!(zeros.shape(), &[2, 3, 4]);
    assert!(zeros.all(|x| x == 0.));

    let other = Tensor::new(&[1., 2., 3.], &[3, 1]);
    let zeros = Tensor::zeros_like(&other);
    assert_eq!(zeros.shape(), other.shape());
    assert_eq!(zeros, Tensor::new(&[0., 0., 0.], &[3, 1]));
}

#[test]
fn test_new_random() {
    let tensor = Tensor::new_random(-1.0, 1.0, &[4, 5]);
    assert_eq!(tensor.shape(), &[4, 5]);
    assert!(tensor.all(|x| (-1.0..=1.0).contains(&x)));
}
