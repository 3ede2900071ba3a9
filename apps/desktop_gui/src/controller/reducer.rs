//! Applies backend events to the UI-owned state. Runs on the UI thread only.

use client_core::ViewState;

use crate::controller::events::UiEvent;

pub fn apply_ui_event(view: &mut ViewState, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::Info(message) => *status = message,
        UiEvent::Error(err) => {
            tracing::warn!(
                context = ?err.context(),
                category = ?err.category(),
                "{}",
                err.message()
            );
            *status = err.status_line();
        }
        UiEvent::ViewUpdated(update) => view.apply(update),
    }
}

#[cfg(test)]
mod tests {
    use client_core::ViewUpdate;

    use super::*;
    use crate::controller::events::{UiError, UiErrorContext};

    #[test]
    fn view_updates_write_view_fields_only() {
        let mut view = ViewState::default();
        let mut status = "Backend worker ready".to_string();

        apply_ui_event(
            &mut view,
            &mut status,
            UiEvent::ViewUpdated(ViewUpdate::ResultText(
                "Compra realizada com sucesso: true".into(),
            )),
        );

        assert_eq!(view.result(), "Compra realizada com sucesso: true");
        assert_eq!(status, "Backend worker ready");
    }

    #[test]
    fn errors_write_status_only() {
        let mut view = ViewState::default();
        view.set_digital_world_id_input("3");
        let mut status = String::new();

        apply_ui_event(
            &mut view,
            &mut status,
            UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "failed to build backend runtime: boom",
            )),
        );

        assert_eq!(status, "Backend worker problem: failed to build backend runtime: boom");
        assert_eq!(view.digital_world_id_input(), "3");
        assert_eq!(view.result(), "");
    }

    #[test]
    fn later_completion_overwrites_result() {
        let mut view = ViewState::default();
        let mut status = String::new();
        for text in ["Reivindicação de venda realizada: 200", "Erro ao realizar compra: x"] {
            apply_ui_event(
                &mut view,
                &mut status,
                UiEvent::ViewUpdated(ViewUpdate::ResultText(text.into())),
            );
        }
        assert_eq!(view.result(), "Erro ao realizar compra: x");
    }
}
