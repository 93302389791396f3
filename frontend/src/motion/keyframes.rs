use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("keyframe table is empty")]
    Empty,
    #[error("keyframe table has {inputs} inputs but {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("keyframe input {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("keyframe inputs must not decrease (index {index})")]
    Unordered { index: usize },
}

/// Values that can be blended between two breakpoints.
pub trait Lerp: Clone {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

/// A CSS percentage, relative to the element's own box when used in a
/// `translate()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl Lerp for Percent {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Percent(self.0.lerp(&other.0, t))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Piecewise-linear mapping from an input (usually scroll progress) to an
/// output value. Inputs outside the table clamp to the nearest endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
}

impl<T: Lerp> Keyframes<T> {
    pub fn new(inputs: Vec<f64>, outputs: Vec<T>) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.is_empty() {
            return Err(MotionError::Empty);
        }
        for (index, input) in inputs.iter().enumerate() {
            if !input.is_finite() {
                return Err(MotionError::NonFinite { index });
            }
            if index > 0 && *input < inputs[index - 1] {
                return Err(MotionError::Unordered { index });
            }
        }
        Ok(Self { inputs, outputs })
    }

    /// Two breakpoints. A reversed input range is stored swapped together
    /// with its outputs.
    pub fn linear(input: (f64, f64), output: (T, T)) -> Result<Self, MotionError> {
        let (from, to) = input;
        let (out_from, out_to) = output;
        if from <= to {
            Self::new(vec![from, to], vec![out_from, out_to])
        } else {
            Self::new(vec![to, from], vec![out_to, out_from])
        }
    }

    pub fn sample(&self, input: f64) -> T {
        let last = self.inputs.len() - 1;
        if !input.is_finite() || input <= self.inputs[0] {
            return self.outputs[0].clone();
        }
        if input >= self.inputs[last] {
            return self.outputs[last].clone();
        }

        // First breakpoint strictly above the input; always in 1..=last here.
        let upper = self.inputs.partition_point(|x| *x <= input);
        let lower = upper - 1;
        let t = (input - self.inputs[lower]) / (self.inputs[upper] - self.inputs[lower]);
        self.outputs[lower].lerp(&self.outputs[upper], t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scale_table_maps_endpoints_and_midpoint() {
        let scale = Keyframes::linear((0.0, 1.0), (0.5, 1.0)).unwrap();
        assert!(approx(scale.sample(0.0), 0.5));
        assert!(approx(scale.sample(1.0), 1.0));
        assert!(approx(scale.sample(0.5), 0.75));
    }

    #[test]
    fn clamps_outside_the_input_range() {
        let opacity = Keyframes::linear((0.0, 0.75), (1.0, 0.0)).unwrap();
        assert!(approx(opacity.sample(-0.3), 1.0));
        assert!(approx(opacity.sample(0.9), 0.0));
        assert!(approx(opacity.sample(f64::NAN), 1.0));
    }

    #[test]
    fn multi_segment_table_interpolates_within_each_segment() {
        let frames = Keyframes::new(vec![0.0, 0.5, 1.0], vec![0.0, 10.0, 0.0]).unwrap();
        assert!(approx(frames.sample(0.25), 5.0));
        assert!(approx(frames.sample(0.5), 10.0));
        assert!(approx(frames.sample(0.75), 5.0));
    }

    #[test]
    fn reversed_progress_gives_the_same_outputs() {
        let y = Keyframes::linear((0.0, 0.75), (Percent(0.0), Percent(7.5))).unwrap();
        let forward: Vec<Percent> = [0.1, 0.4, 0.7].iter().map(|p| y.sample(*p)).collect();
        let backward: Vec<Percent> = [0.7, 0.4, 0.1].iter().map(|p| y.sample(*p)).collect();
        assert_eq!(forward[0], backward[2]);
        assert_eq!(forward[2], backward[0]);
    }

    #[test]
    fn zero_width_segment_jumps_to_the_right_output() {
        let step = Keyframes::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        assert!(approx(step.sample(0.49), 0.0));
        assert!(approx(step.sample(0.5), 1.0));
    }

    #[test]
    fn percent_renders_as_css() {
        let x = Keyframes::linear((0.0, 1.0), (Percent(-35.0), Percent(0.0))).unwrap();
        assert_eq!(x.sample(0.0).to_string(), "-35%");
        assert_eq!(x.sample(1.0).to_string(), "0%");
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            Keyframes::new(vec![0.0, 1.0], vec![1.0]),
            Err(MotionError::LengthMismatch { inputs: 2, outputs: 1 })
        );
        assert_eq!(Keyframes::<f64>::new(vec![], vec![]), Err(MotionError::Empty));
        assert_eq!(
            Keyframes::new(vec![0.0, 1.0, 0.5], vec![0.0, 1.0, 2.0]),
            Err(MotionError::Unordered { index: 2 })
        );
        assert_eq!(
            Keyframes::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0]),
            Err(MotionError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn single_breakpoint_is_constant() {
        let frames = Keyframes::new(vec![0.3], vec![4.0]).unwrap();
        assert!(approx(frames.sample(0.0), 4.0));
        assert!(approx(frames.sample(1.0), 4.0));
    }

    #[test]
    fn linear_table_rejects_non_finite_breakpoints() {
        assert_eq!(
            Keyframes::linear((0.0, f64::INFINITY), (0.0, 1.0)),
            Err(MotionError::NonFinite { index: 1 })
        );
        let reversed = Keyframes::linear((1.0, 0.0), (0.0, 10.0)).unwrap();
        assert!(approx(reversed.sample(0.25), 7.5));
    }
}
