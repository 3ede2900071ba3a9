//! Backend commands queued from UI to backend worker.

use client_core::Submission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// One form submission, with its parameters already captured from the view.
    Submit(Submission),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Submit(submission) => submission.kind(),
        }
    }
}

impl From<Submission> for BackendCommand {
    fn from(value: Submission) -> Self {
        Self::Submit(value)
    }
}

#[cfg(test)]
mod tests {
    use client_core::ViewState;

    use super::*;

    #[test]
    fn command_names_follow_the_submitted_form() {
        let greet: BackendCommand = ViewState::greeting_submission("Ana").into();
        assert_eq!(greet.name(), "greeting");

        let mut view = ViewState::default();
        view.set_digital_world_id_input("3");
        view.set_amount_input("10");
        let purchase: BackendCommand = view.purchase_submission().into();
        assert_eq!(purchase.name(), "purchase");
        assert_eq!(
            purchase,
            BackendCommand::Submit(Submission::Purchase {
                digital_world_id: "3".into(),
                amount: "10".into(),
            })
        );
        assert_eq!(BackendCommand::from(view.claim_submission()).name(), "claim");
    }
}
