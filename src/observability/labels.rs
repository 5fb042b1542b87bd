use metrics::{IntoLabels, Label, SharedString};

/// Key/value pairs attached to every counter an [crate::ObservedValidator] emits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        pairs: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(pairs.iter().map(Label::from).collect())
    }

    /// A copy of these labels followed by `extra`. Used to add the rejection `reason`.
    pub fn clone_with_labels(
        &self,
        extra: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        Labels(
            self.0
                .iter()
                .cloned()
                .chain(extra.iter().map(Label::from))
                .collect(),
        )
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
