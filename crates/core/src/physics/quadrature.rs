//! Even-grid sampling and composite Simpson quadrature
//!
//! The Simpson rule handles an even number of samples (odd number of
//! intervals) by averaging the two ways of closing the grid with a single
//! trapezoid: once at the end, once at the start.

/// `n` evenly spaced samples over `[start, stop]`, both ends included
///
/// The last sample is pinned to `stop`. `n == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// Composite Simpson sum over `y[first..=last]`; `last - first` must be even
fn simpson_span(y: &[f64], first: usize, last: usize, dx: f64) -> f64 {
    let mut sum = 0.0;
    let mut i = first;
    while i + 2 <= last {
        sum += y[i] + 4.0 * y[i + 1] + y[i + 2];
        i += 2;
    }
    sum * dx / 3.0
}

#[inline]
fn trapezoid(a: f64, b: f64, dx: f64) -> f64 {
    0.5 * dx * (a + b)
}

/// Integrate samples `y` spaced `dx` apart with the composite Simpson rule
///
/// Fewer than two samples integrate to 0; two samples reduce to the
/// trapezoid rule.
pub fn simpson(y: &[f64], dx: f64) -> f64 {
    let n = y.len();
    if n < 2 {
        return 0.0;
    }

    if n % 2 == 1 {
        return simpson_span(y, 0, n - 1, dx);
    }

    // Simpson on the first n-1 points, trapezoid on the last interval
    let head = simpson_span(y, 0, n - 2, dx) + trapezoid(y[n - 2], y[n - 1], dx);
    // Trapezoid on the first interval, Simpson on the last n-1 points
    let tail = trapezoid(y[0], y[1], dx) + simpson_span(y, 1, n - 1, dx);

    (head + tail) / 2.0
}
