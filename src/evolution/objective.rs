use nalgebra::DVector;

/// A function to be minimized: lower values are better.
///
/// Any closure `Fn(&DVector<f64>) -> f64` is an objective.
///
/// ```rust
/// use cmaes_elementary::evolution::Objective;
/// use nalgebra::DVector;
///
/// let sphere = |x: &DVector<f64>| x.norm_squared();
/// assert_eq!(sphere.evaluate(&DVector::from_vec(vec![1.0, 2.0])), 5.0);
/// ```
pub trait Objective {
    fn evaluate(&self, candidate: &DVector<f64>) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&DVector<f64>) -> f64,
{
    fn evaluate(&self, candidate: &DVector<f64>) -> f64 {
        self(candidate)
    }
}
