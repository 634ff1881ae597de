use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_scalar_ops() {
    let tensor = Tensor::new(&[1., 2., 4.], &[3]);
    assert_eq!(&tensor + 1., Tensor::new(&[2., 3., 5.], &[3]));
    assert_eq!(1. - &tensor, Tensor::new(&[0., -1., -3.], &[3]));
    assert_eq!(0.5 * &tensor, Tensor::new(&[0.5, 1., 2.], &[3]));
    assert_eq!(&tensor / 2., Tensor::new(&[0.5, 1., 2.], &[3]));
    assert_eq!(4. / &tensor, Tensor::new(&[4., 2., 1.], &[3]));
}

#[test]
fn test_elementwise_ops() {
    let a = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let b = Tensor::new(&[2., 2., 2., 8.], &[2, 2]);
    assert_eq!(&a + &b, Tensor::new(&[3., 4., 5., 12.], &[2, 2]));
    assert_eq!(&a - &b, Tensor::new(&[-1., 0., 1., -4.], &[2, 2]));
    assert_eq!(&a * &b, Tensor::new(&[2., 4., 6., 32.], &[2, 2]));
    assert_eq!(a.clone() / b, Tensor::new(&[0.5, 1., 1.5, 0.5], &[2, 2]));
}

#[test]
fn test_assign_ops() {
    let mut a = Tensor::new(&[1., 2.], &[2]);
    a += &Tensor::new(&[1., 1.], &[2]);
    assert_eq!(a, Tensor::new(&[2., 3.], &[2]));
    a -= Tensor::new(&[0.5, 0.5], &[2]);
    assert_eq!(a, Tensor::new(&[1.5, 2.5], &[2]));
    a *= 2.;
    assert_eq!(a, Tensor::new(&[3., 5.], &[2]));
    a *= &Tensor::new(&[2., 0.], &[2]);
    assert_eq!(a, Tensor::new(&[6., 0.], &[2]));
    a -= 1.;
    a += 0.5;
    assert_eq!(a, Tensor::new(&[5.5, -0.5], &[2]));
}

#[test]
fn test_sqrt_and_square() {
    let a = Tensor::new(&[4., 9., 0.], &[3]);
    assert_eq!(a.sqrt(), Tensor::new(&[2., 3., 0.], &[3]));
    let b = Tensor::new(&[-2., 3.], &[2]);
    assert_eq!(b.square(), Tensor::new(&[4., 9.], &[2]));
}

#[test]
fn test_no_implicit_broadcast() {
    let a = Tensor::new(&[1., 2.], &[2]);
    let b = Tensor::new(&[1., 2.], &[1, 2]);
    assert_panic!(
        &a + &b,
        "形状不一致，故无法相加：第一个张量的形状为[2]，第二个张量的形状为[1, 2]"
    );
    let scalar_like = Tensor::new(&[1.], &[1]);
    let mut c = a.clone();
    assert_panic!(
        c -= &scalar_like,
        "形状不一致，故无法自相减：第一个张量的形状为[2]，第二个张量的形状为[1]"
    );
}

#[test]
fn test_div_by_zero() {
    let a = Tensor::new(&[1., 2.], &[2]);
    assert_panic!(&a / 0., "除数为零");
    assert_panic!(&a / &Tensor::new(&[1., 0.], &[2]), "作为除数的张量中存在为零元素");
}

#[test]
fn test_div_assign() {
    let mut a = Tensor::new(&[2., 9.], &[2]);
    a /= &Tensor::new(&[2., 3.], &[2]);
    assert_eq!(a, Tensor::new(&[1., 3.], &[2]));
    a /= 2.;
    assert_eq!(a, Tensor::new(&[0.5, 1.5], &[2]));
    assert_panic!(a /= 0., "除数为零");
    let mut b = Tensor::new(&[1., 2.], &[2]);
    assert_panic!(b /= Tensor::new(&[1.], &[1]), "形状不一致，故无法自相除：第一个张量的形状为[2]，第二个张量的形状为[1]");
}
