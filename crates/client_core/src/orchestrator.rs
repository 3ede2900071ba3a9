use std::sync::Arc;

use shared::{
    domain::{Amount, DigitalWorldId},
    protocol::ReplyValue,
};

use crate::{ActorError, ActorHandle, SubmitError, Submission, ViewState, ViewUpdate};

const PURCHASE_SUCCESS: &str = "Compra realizada com sucesso";
const PURCHASE_FAILURE: &str = "Erro ao realizar compra";
const CLAIM_SUCCESS: &str = "Reivindicação de venda realizada";
const CLAIM_FAILURE: &str = "Erro ao reivindicar venda";

/// Turns submissions into remote calls and call outcomes into view updates.
///
/// Every submission is independent: no in-flight guard, no retry, no
/// timeout. Purchase and claim always yield a result-text update; only the
/// greeting path can fail, and that failure is handed back unrendered.
pub struct CallOrchestrator<A: ?Sized> {
    actor: Arc<A>,
}

impl<A: ?Sized> Clone for CallOrchestrator<A> {
    fn clone(&self) -> Self {
        Self {
            actor: Arc::clone(&self.actor),
        }
    }
}

impl<A: ActorHandle + ?Sized> CallOrchestrator<A> {
    pub fn new(actor: Arc<A>) -> Self {
        Self { actor }
    }

    pub async fn greet(&self, name: &str) -> Result<ViewUpdate, ActorError> {
        let greeting = self.actor.greet(name).await?;
        Ok(ViewUpdate::GreetingText(greeting))
    }

    pub async fn purchase(&self, digital_world_id: &str, amount: &str) -> ViewUpdate {
        let text = match self.try_purchase(digital_world_id, amount).await {
            Ok(value) => format!("{PURCHASE_SUCCESS}: {value}"),
            Err(err) => format!("{PURCHASE_FAILURE}: {err}"),
        };
        ViewUpdate::ResultText(text)
    }

    pub async fn claim(&self, digital_world_id: &str) -> ViewUpdate {
        let text = match self.try_claim(digital_world_id).await {
            Ok(value) => format!("{CLAIM_SUCCESS}: {value}"),
            Err(err) => format!("{CLAIM_FAILURE}: {err}"),
        };
        ViewUpdate::ResultText(text)
    }

    /// Runs one captured submission to completion.
    pub async fn run(&self, submission: Submission) -> Result<ViewUpdate, ActorError> {
        match submission {
            Submission::Greeting { name } => self.greet(&name).await,
            Submission::Purchase {
                digital_world_id,
                amount,
            } => Ok(self.purchase(&digital_world_id, &amount).await),
            Submission::Claim { digital_world_id } => Ok(self.claim(&digital_world_id).await),
        }
    }

    /// Greets `name` and stores the reply. On failure the greeting field is
    /// left as it was and the error is returned.
    pub async fn submit_greeting(
        &self,
        state: &mut ViewState,
        name: &str,
    ) -> Result<(), ActorError> {
        let update = self.greet(name).await?;
        state.apply(update);
        Ok(())
    }

    pub async fn submit_purchase(&self, state: &mut ViewState) {
        let update = self
            .purchase(state.digital_world_id_input(), state.amount_input())
            .await;
        state.apply(update);
    }

    pub async fn submit_claim(&self, state: &mut ViewState) {
        let update = self.claim(state.digital_world_id_input()).await;
        state.apply(update);
    }

    async fn try_purchase(
        &self,
        digital_world_id: &str,
        amount: &str,
    ) -> Result<ReplyValue, SubmitError> {
        let digital_world_id = DigitalWorldId::from_input(digital_world_id);
        let amount = Amount::parse(amount)?;
        Ok(self.actor.buy_item(digital_world_id, amount).await?)
    }

    async fn try_claim(&self, digital_world_id: &str) -> Result<ReplyValue, SubmitError> {
        let digital_world_id = DigitalWorldId::from_input(digital_world_id);
        Ok(self.actor.claim_sale(digital_world_id).await?)
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
