/// A real-valued function of one real variable with a known derivative.
///
/// Solvers evaluate [`value`](Differentiable::value) and
/// [`derivative`](Differentiable::derivative) at the same point on every
/// iteration. Neither method is checked: if the derivative is not the true
/// derivative of the value, or either returns NaN, the solver simply
/// propagates whatever it is given.
pub trait Differentiable {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates the derivative of the function at `x`.
    fn derivative(&self, x: f64) -> f64;
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

/// Pairs a function closure with its derivative closure.
///
/// # Example
///
/// ```
/// use tangent_core::{Differentiable, WithDerivative};
///
/// let parabola = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
///
/// assert_eq!(parabola.value(3.0), 5.0);
/// assert_eq!(parabola.derivative(3.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable function from `f` and its derivative `df`.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}
