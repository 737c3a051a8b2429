use std::ops::Mul;

use num_traits::AsPrimitive;

use crate::error::{FilterError, HistoryKind, Polynomial, Result};
use crate::history::History;
use crate::polynomial::multiply;
use crate::process::SampleFilter;
use crate::scalar::{Coefficient, Sample};

/// Digital filter described by a rational transfer function in z^-1
///
/// ```text
///         b0 + b1 z^-1 + b2 z^-2 + ...
/// H(z) = ------------------------------
///         a0 + a1 z^-1 + a2 z^-2 + ...
/// ```
///
/// which corresponds to the difference equation
/// `a0 y[k] + a1 y[k-1] + ... = b0 x[k] + b1 x[k-1] + ...`.
///
/// Coefficients are normalized at construction so that `a0 == 1`. The filter
/// keeps the last `len(b)` inputs and `len(a)` outputs for streaming
/// evaluation with [`Filter::filter`]; [`Filter::filter_sequence`] and
/// [`Filter::filter2`] evaluate whole signals without touching that state.
///
/// `D` is the sample type and `C` the coefficient type.
///
/// # Example
/// ```
/// use digital_filters::Filter;
///
/// // y[k] = 0.5 x[k] + 0.5 y[k-1]
/// let mut smoother = Filter::<f64, f64>::new(&[0.5], &[1.0, -0.5]).unwrap();
/// assert_eq!(smoother.filter(1.0), 0.5);
/// assert_eq!(smoother.filter(1.0), 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<D, C> {
    b: Vec<C>,
    a: Vec<C>,
    input: History<D>,
    output: History<D>,
}

impl<D: Sample<C>, C: Coefficient> Filter<D, C> {
    /// Create a filter from numerator and denominator coefficients
    ///
    /// # Arguments
    /// * `b` - Numerator, `b[i]` multiplies z^-i
    /// * `a` - Denominator, `a[i]` multiplies z^-i. `a[0]` must be non-zero;
    ///   it is divided through unconditionally.
    ///
    /// # Errors
    /// Returns `FilterError::EmptyCoefficients` if either sequence is empty
    pub fn new(b: &[C], a: &[C]) -> Result<Self> {
        if b.is_empty() {
            return Err(FilterError::EmptyCoefficients(Polynomial::Numerator));
        }
        if a.is_empty() {
            return Err(FilterError::EmptyCoefficients(Polynomial::Denominator));
        }
        Ok(Self::from_coefficients(b.to_vec(), a.to_vec()))
    }

    // Both vectors must be non-empty.
    fn from_coefficients(mut b: Vec<C>, mut a: Vec<C>) -> Self {
        let a0 = a[0];
        for bi in b.iter_mut() {
            *bi = *bi / a0;
        }
        for ai in a.iter_mut() {
            *ai = *ai / a0;
        }

        Self {
            input: History::new(b.len()),
            output: History::new(a.len()),
            b,
            a,
        }
    }

    /// Normalized numerator
    pub fn numerator(&self) -> &[C] {
        &self.b
    }

    /// Normalized denominator; its first element is one
    pub fn denominator(&self) -> &[C] {
        &self.a
    }

    /// Highest power of z^-1 in either polynomial
    pub fn order(&self) -> usize {
        self.b.len().max(self.a.len()) - 1
    }

    /// Stored input samples, newest first
    pub fn input_history(&self) -> Vec<D> {
        self.input.to_vec()
    }

    /// Stored output samples, newest first
    pub fn output_history(&self) -> Vec<D> {
        self.output.to_vec()
    }

    /// Set every past input to `value`, as if the input had always been constant
    pub fn init_input(&mut self, value: D) {
        self.input.fill(value);
    }

    /// Set the past inputs `x[k-1], x[k-2], ...` (newest first).
    ///
    /// # Errors
    /// Returns `FilterError::InitialConditionSizeMismatch` unless exactly
    /// `len(b) - 1` samples are given. Nothing is modified on error.
    pub fn init_input_samples(&mut self, past: &[D]) -> Result<()> {
        check_len(HistoryKind::Input, self.b.len() - 1, past.len())?;
        self.input.set_recent(past);
        Ok(())
    }

    /// Set every past output to `value`
    pub fn init_output(&mut self, value: D) {
        self.output.fill(value);
    }

    /// Set the past outputs `y[k-1], y[k-2], ...` (newest first).
    ///
    /// # Errors
    /// Returns `FilterError::InitialConditionSizeMismatch` unless exactly
    /// `len(a) - 1` samples are given. Nothing is modified on error.
    pub fn init_output_samples(&mut self, past: &[D]) -> Result<()> {
        check_len(HistoryKind::Output, self.a.len() - 1, past.len())?;
        self.output.set_recent(past);
        Ok(())
    }

    /// Zero both sample histories
    pub fn reset(&mut self) {
        self.input.fill(D::zero());
        self.output.fill(D::zero());
    }

    /// Filter the next input sample and advance the state by one step
    pub fn filter(&mut self, x: D) -> D {
        self.input.push(x);

        let mut y = x.scale(self.b[0]);
        self.output.push(y);

        for (&bi, &xi) in self.b[1..].iter().zip(self.input.iter().skip(1)) {
            y = y + xi.scale(bi);
        }
        for (&ai, &yi) in self.a[1..].iter().zip(self.output.iter().skip(1)) {
            y = y - yi.scale(ai);
        }

        self.output.set_newest(y);
        y
    }

    /// Filter a whole sequence from explicit initial conditions.
    ///
    /// The streaming state is left untouched, so this can be used for
    /// offline analysis at any time. With `x0`/`y0` equal to the streaming
    /// history, the result matches calling [`Filter::filter`] on each sample.
    ///
    /// # Arguments
    /// * `x0` - Past inputs `x[-1], x[-2], ...` (newest first), `len(b) - 1` samples
    /// * `y0` - Past outputs `y[-1], y[-2], ...` (newest first), `len(a) - 1` samples
    /// * `x` - Input signal in time order
    ///
    /// Both initial condition slices run backwards in time, `x0[i]` being
    /// `x[-1 - i]`. This is the reverse of a time-ascending layout; it is the
    /// order the streaming history reports, so the first `len(b) - 1`
    /// entries of [`Filter::input_history`] can be passed straight through.
    ///
    /// # Errors
    /// Returns `FilterError::InitialConditionSizeMismatch` if `x0` or `y0`
    /// has the wrong length
    pub fn filter_sequence(&self, x0: &[D], y0: &[D], x: &[D]) -> Result<Vec<D>> {
        check_len(HistoryKind::Input, self.b.len() - 1, x0.len())?;
        check_len(HistoryKind::Output, self.a.len() - 1, y0.len())?;
        Ok(self.filter_from(x0, y0, x))
    }

    // Caller guarantees the initial condition lengths.
    fn filter_from(&self, x0: &[D], y0: &[D], x: &[D]) -> Vec<D> {
        let mut y: Vec<D> = Vec::with_capacity(x.len());

        for (k, &xk) in x.iter().enumerate() {
            let mut yk = xk.scale(self.b[0]);
            for (i, &bi) in self.b.iter().enumerate().skip(1) {
                let past = if i <= k { x[k - i] } else { x0[i - k - 1] };
                yk = yk + past.scale(bi);
            }
            for (i, &ai) in self.a.iter().enumerate().skip(1) {
                let past = if i <= k { y[k - i] } else { y0[i - k - 1] };
                yk = yk - past.scale(ai);
            }
            y.push(yk);
        }

        y
    }

    // Initial conditions held at `value` on both sides.
    fn filter_held(&self, value: D, x: &[D]) -> Vec<D> {
        let x0 = vec![value; self.b.len() - 1];
        let y0 = vec![value; self.a.len() - 1];
        self.filter_from(&x0, &y0, x)
    }

    /// Forward-backward (zero-phase) filtering of a whole sequence.
    ///
    /// The signal is filtered once, reversed, filtered again and reversed
    /// back, cancelling the phase lag of a single causal pass. Each pass
    /// starts with both histories holding the first sample it sees, so some
    /// edge transient remains at both ends.
    pub fn filter2(&self, x: &[D]) -> Vec<D> {
        let Some(&first) = x.first() else {
            return Vec::new();
        };

        let mut forward = self.filter_held(first, x);
        forward.reverse();

        let mut backward = self.filter_held(forward[0], &forward);
        backward.reverse();
        backward
    }

    /// Cascade with `other`.
    ///
    /// The result's transfer function is the product of both, so filtering
    /// with it equals filtering with `self` then `other` (in either order).
    /// The new filter starts with zeroed histories.
    pub fn concat(&self, other: &Self) -> Self {
        let b = multiply(&self.b, &other.b);
        let a = multiply(&self.a, &other.a);
        log::debug!(
            "Concatenated filters: order {} x order {} -> order {}",
            self.order(),
            other.order(),
            b.len().max(a.len()) - 1
        );
        Self::from_coefficients(b, a)
    }

    /// Copy of this filter with coefficients and histories converted via `as`
    pub fn cast<D2, C2>(&self) -> Filter<D2, C2>
    where
        D: AsPrimitive<D2>,
        C: AsPrimitive<C2>,
        D2: Sample<C2> + 'static,
        C2: Coefficient + 'static,
    {
        Filter {
            b: self.b.iter().map(|c| c.as_()).collect(),
            a: self.a.iter().map(|c| c.as_()).collect(),
            input: self.input.map(|x| x.as_()),
            output: self.output.map(|y| y.as_()),
        }
    }
}

fn check_len(history: HistoryKind, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(FilterError::InitialConditionSizeMismatch {
            history,
            expected,
            actual,
        });
    }
    Ok(())
}

impl<D: Sample<C>, C: Coefficient> SampleFilter<D> for Filter<D, C> {
    fn process(&mut self, sample: D) -> D {
        self.filter(sample)
    }
}

impl<D: Sample<C>, C: Coefficient> Mul<&Filter<D, C>> for &Filter<D, C> {
    type Output = Filter<D, C>;

    fn mul(self, rhs: &Filter<D, C>) -> Filter<D, C> {
        self.concat(rhs)
    }
}

impl<D: Sample<C>, C: Coefficient> Mul for Filter<D, C> {
    type Output = Filter<D, C>;

    fn mul(self, rhs: Filter<D, C>) -> Filter<D, C> {
        self.concat(&rhs)
    }
}
