/// Validation failures reported back to the user instead of aborting a computation.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("at least {required} valid numeric values are required (got {actual})")]
    SampleTooSmall { required: usize, actual: usize },
    #[display("the sample is empty")]
    EmptySample,
    #[display("class width must be a finite number > 0 (got {width})")]
    InvalidClassWidth { width: f64 },
    #[display("class width {width} is too small to advance past {boundary}")]
    ClassWidthTooSmall { width: f64, boundary: f64 },
    #[display("class width {width} would produce more than {max} classes")]
    TooManyClasses { width: f64, max: usize },
}
