use crate::nhs_number::NhsNumber;
use crate::observability::labels::Labels;
use crate::observability::metrics::Metrics;
use crate::secondary_validation::Validator;

/// Same verdict as [crate::is_valid_nhs_number], but every call is counted through the
/// `metrics` facade. Nothing is recorded until the host installs a recorder.
#[derive(Default)]
pub struct ObservedValidator {
    metrics: Metrics,
}

impl ObservedValidator {
    pub fn new(labels: &Labels) -> Self {
        Self {
            metrics: Metrics::new(labels),
        }
    }

    pub fn validate(&self, candidate: &str) -> bool {
        let result = NhsNumber::parse(candidate);
        self.metrics.record(&result);
        result.is_ok()
    }
}

impl Validator for ObservedValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        self.validate(regex_match)
    }
}
