use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }
}

#[test]
fn test_is_finite_and_scale() {
    let mut x = [1.0, -4.0, 3.0];
    assert!(x.is_finite());
    x.scale(0.5);
    assert_eq!(x, [0.5, -2.0, 1.5]);
    x.set(f64::NAN);
    assert!(!x.is_finite());
}

#[test]
fn test_axpby_and_dot() {
    let mut y = [1.0, 2.0, 3.0];
    let x = [1.0, 1.0, 1.0];
    y.axpby(2.0, &x, -1.0);
    assert_eq!(y, [1.0, 0.0, -1.0]);
    assert_eq!(y.dot(&[3.0, 5.0, 1.0]), 2.0);
    assert_eq!(y.norm_inf_diff(&[1.0, 0.5, -1.0]), 0.5);
}
