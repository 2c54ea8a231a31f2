//! Run summary types.

/// Summary of a completed migration run.
///
/// Only produced when every issue transferred; an aborted run yields an
/// error instead of a partial summary.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of open issues found in the source repository.
    pub issues_found: usize,

    /// Number of issues transferred to the destination.
    pub issues_transferred: usize,
}

impl RunSummary {
    /// Creates a summary for a run that found the given number of issues.
    #[must_use]
    pub fn new(issues_found: usize) -> Self {
        Self {
            issues_found,
            issues_transferred: 0,
        }
    }

    /// Records one successful transfer.
    pub fn record_transfer(&mut self) {
        self.issues_transferred += 1;
    }

    /// Returns true if every found issue was transferred.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues_transferred == self.issues_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_transfers() {
        let mut summary = RunSummary::new(2);
        assert!(!summary.is_complete());

        summary.record_transfer();
        summary.record_transfer();

        assert_eq!(summary.issues_transferred, 2);
        assert!(summary.is_complete());
    }

    #[test]
    fn empty_run_is_complete() {
        assert!(RunSummary::new(0).is_complete());
    }
}
