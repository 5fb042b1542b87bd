use crate::error::NhsNumberError;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

pub const VALIDATIONS: &str = "nhs_number.validations";
pub const VALID: &str = "nhs_number.valid";
pub const REJECTIONS: &str = "nhs_number.rejections";

const REASON: &str = "reason";

pub struct Metrics {
    pub validations: Counter,
    pub valid: Counter,
    labels: Labels,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            validations: counter!(VALIDATIONS, labels.clone()),
            valid: counter!(VALID, labels.clone()),
            labels: labels.clone(),
        }
    }

    pub fn record<T>(&self, result: &Result<T, NhsNumberError>) {
        self.validations.increment(1);
        match result {
            Ok(_) => self.valid.increment(1),
            Err(err) => counter!(
                REJECTIONS,
                self.labels.clone_with_labels(&[(REASON, err.reason())])
            )
            .increment(1),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&NO_LABEL)
    }
}
