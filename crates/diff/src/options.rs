/// Settings for a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Upper bound on fixed-point passes. `None` derives a bound from the
    /// input size that a converging comparison never reaches.
    pub max_passes: Option<usize>,

    /// Re-run anchor matching inside each pair of linked changed sections
    pub nested_matching: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            max_passes: None,
            nested_matching: true,
        }
    }
}

impl CompareOptions {
    /// Set an explicit pass cap
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Enable or disable matching inside changed sections
    pub fn nested_matching(mut self, nested_matching: bool) -> Self {
        self.nested_matching = nested_matching;
        self
    }

    /// The pass cap to use for inputs of the given sizes.
    ///
    /// Every pass that does not finish the comparison adds at least one
    /// link, so `min(left, right) + 2` passes always suffice.
    pub(crate) fn pass_limit(&self, left_lines: usize, right_lines: usize) -> usize {
        self.max_passes
            .unwrap_or_else(|| left_lines.min(right_lines) + 2)
            .max(1)
    }
}
