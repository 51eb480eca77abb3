//! The single seam every advisor and calculator implements.

/// A pure function from collected input to a presentable result.
///
/// Implementations must be deterministic and total: any input, including
/// an empty or partially filled one, produces an output.
pub trait Estimator {
    type Input;
    type Output;

    fn estimate(&self, input: &Self::Input) -> Self::Output;
}
