/// The four view fields. Starts empty on every launch and is never persisted.
///
/// The identifier and amount inputs are shared by the purchase and claim
/// forms: whichever form is submitted reads the current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    greeting: String,
    result: String,
    digital_world_id_input: String,
    amount_input: String,
}

/// Parameters captured from the view at the moment a form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Greeting {
        name: String,
    },
    Purchase {
        digital_world_id: String,
        amount: String,
    },
    Claim {
        digital_world_id: String,
    },
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Greeting { .. } => "greeting",
            Self::Purchase { .. } => "purchase",
            Self::Claim { .. } => "claim",
        }
    }
}

/// A single view-field write produced by a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    GreetingText(String),
    ResultText(String),
}

impl ViewState {
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn digital_world_id_input(&self) -> &str {
        &self.digital_world_id_input
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn set_digital_world_id_input(&mut self, value: impl Into<String>) {
        self.digital_world_id_input = value.into();
    }

    pub fn set_amount_input(&mut self, value: impl Into<String>) {
        self.amount_input = value.into();
    }

    /// Editable binding for a text field.
    pub fn digital_world_id_input_mut(&mut self) -> &mut String {
        &mut self.digital_world_id_input
    }

    pub fn amount_input_mut(&mut self) -> &mut String {
        &mut self.amount_input
    }

    pub fn greeting_submission(name: impl Into<String>) -> Submission {
        Submission::Greeting { name: name.into() }
    }

    pub fn purchase_submission(&self) -> Submission {
        Submission::Purchase {
            digital_world_id: self.digital_world_id_input.clone(),
            amount: self.amount_input.clone(),
        }
    }

    pub fn claim_submission(&self) -> Submission {
        Submission::Claim {
            digital_world_id: self.digital_world_id_input.clone(),
        }
    }

    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::GreetingText(text) => self.greeting = text,
            ViewUpdate::ResultText(text) => self.result = text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = ViewState::default();
        assert_eq!(state.greeting(), "");
        assert_eq!(state.result(), "");
        assert_eq!(state.digital_world_id_input(), "");
        assert_eq!(state.amount_input(), "");
    }

    #[test]
    fn inputs_are_independent() {
        let mut state = ViewState::default();
        state.set_amount_input("10");
        state.digital_world_id_input_mut().push('4');
        state.digital_world_id_input_mut().push('2');
        assert_eq!(state.digital_world_id_input(), "42");
        assert_eq!(state.amount_input(), "10");

        state.amount_input_mut().clear();
        assert_eq!(state.digital_world_id_input(), "42");
        assert_eq!(state.amount_input(), "");
    }

    #[test]
    fn both_forms_read_the_shared_identifier() {
        let mut state = ViewState::default();
        state.set_digital_world_id_input("7");
        state.set_amount_input("10");

        assert_eq!(
            state.purchase_submission(),
            Submission::Purchase {
                digital_world_id: "7".into(),
                amount: "10".into(),
            }
        );
        assert_eq!(
            state.claim_submission(),
            Submission::Claim {
                digital_world_id: "7".into(),
            }
        );
    }

    #[test]
    fn updates_touch_one_field_each() {
        let mut state = ViewState::default();
        state.set_digital_world_id_input("3");
        state.apply(ViewUpdate::GreetingText("Hello, Ana!".into()));
        state.apply(ViewUpdate::ResultText("first".into()));
        state.apply(ViewUpdate::ResultText("second".into()));

        assert_eq!(state.greeting(), "Hello, Ana!");
        assert_eq!(state.result(), "second");
        assert_eq!(state.digital_world_id_input(), "3");
    }
}
