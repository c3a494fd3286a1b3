//! Black-box tests for the plugin app context: purpose gating, payload
//! shapes, prompt settlement, and surface stability.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use courier_core::AppResult;
use courier_plugin::testing::{RecordingModal, recording_services};
use courier_plugin::{
    AppApi, AppContext, ClipboardApi, ContextFactory, DialogRequest, HostMetadata,
    InvocationPurpose, ModalService, PromptOptions, PromptRequest, SaveDialogOptions,
};

fn factory() -> (ContextFactory, Arc<RecordingModal>) {
    let (services, modal, _clipboard) = recording_services();
    (
        ContextFactory::new(services, HostMetadata::new("2026.4.0", "linux")),
        modal,
    )
}

/// Polls until the modal has recorded `count` prompt requests.
async fn wait_for_prompts(modal: &RecordingModal, count: usize) -> Vec<PromptRequest> {
    for _ in 0..200 {
        let calls = modal.prompt_calls();
        if calls.len() >= count {
            return calls;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("modal never received {count} prompt request(s)");
}

#[tokio::test]
async fn alert_is_suppressed_when_not_sending() {
    let (factory, modal) = factory();
    let context = factory.build_default();

    let result = context.app.alert("Title", None).await.unwrap();

    assert_eq!(result, None);
    assert!(modal.alert_calls().is_empty());
}

#[tokio::test]
async fn alert_passes_payload_and_return_value_when_sending() {
    let (factory, modal) = factory();
    modal.set_alert_return(json!("dummy-return-value"));
    let context = factory.build(InvocationPurpose::Send);

    let first = context.app.alert("Title", None).await.unwrap();
    let second = context.app.alert("Title", Some("Message")).await.unwrap();

    assert_eq!(first, Some(json!("dummy-return-value")));
    assert_eq!(second, Some(json!("dummy-return-value")));

    let calls = modal.alert_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(serde_json::to_value(&calls[0]).unwrap(), json!({"title": "Title"}));
    assert_eq!(
        serde_json::to_value(&calls[1]).unwrap(),
        json!({"title": "Title", "message": "Message"})
    );
}

#[tokio::test]
async fn prompt_is_suppressed_when_not_sending() {
    let (factory, modal) = factory();
    let context = factory.build_default();

    let result = context
        .app
        .prompt("Title", PromptOptions::default())
        .await
        .unwrap();

    assert_eq!(result, None);
    assert!(modal.prompt_calls().is_empty());
}

#[tokio::test]
async fn prompt_dispatches_once_and_resolves_on_complete() {
    let (factory, modal) = factory();
    let app = factory.build(InvocationPurpose::Send).app;

    let pending = tokio::spawn(async move { app.prompt("Title", PromptOptions::default()).await });

    let calls = wait_for_prompts(&modal, 1).await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "Title");
    assert_eq!(calls[0].label, None);

    calls[0].responder.complete("x");
    let result: AppResult<Option<String>> = pending.await.unwrap();
    assert_eq!(result.unwrap(), Some("x".to_string()));
}

#[tokio::test]
async fn prompt_carries_label_from_options() {
    let (factory, modal) = factory();
    let app = factory.build(InvocationPurpose::Send).app;

    let pending =
        tokio::spawn(async move { app.prompt("Title", PromptOptions::with_label("Label")).await });

    let calls = wait_for_prompts(&modal, 1).await;
    assert_eq!(calls[0].title, "Title");
    assert_eq!(calls[0].label, Some("Label".to_string()));

    calls[0].responder.hide();
    assert_eq!(pending.await.unwrap().unwrap(), None);
}

#[tokio::test]
async fn prompt_settles_once_even_when_callbacks_race() {
    let (factory, modal) = factory();
    let app = factory.build(InvocationPurpose::Send).app;

    let pending = tokio::spawn(async move { app.prompt("Title", PromptOptions::default()).await });

    let calls = wait_for_prompts(&modal, 1).await;
    let responder = calls[0].responder.clone();

    // hide first wins; later complete must not change the outcome.
    responder.hide();
    responder.complete("late");
    responder.complete("even later");

    assert_eq!(pending.await.unwrap().unwrap(), None);
}

#[tokio::test]
async fn concurrent_prompts_settle_independently() {
    let (factory, modal) = factory();
    let app = factory.build(InvocationPurpose::Send).app;

    let first_app = app.clone();
    let first =
        tokio::spawn(async move { first_app.prompt("First", PromptOptions::default()).await });
    let second =
        tokio::spawn(async move { app.prompt("Second", PromptOptions::default()).await });

    let calls = wait_for_prompts(&modal, 2).await;
    for call in &calls {
        match call.title.as_str() {
            "First" => call.responder.complete("one"),
            "Second" => call.responder.hide(),
            other => panic!("unexpected prompt '{other}'"),
        }
    }

    assert_eq!(first.await.unwrap().unwrap(), Some("one".to_string()));
    assert_eq!(second.await.unwrap().unwrap(), None);
}

#[tokio::test]
async fn prompt_resolves_none_when_collaborator_drops_request() {
    /// Modal that discards prompt requests without ever answering.
    #[derive(Debug)]
    struct DroppingModal;

    #[async_trait::async_trait]
    impl ModalService for DroppingModal {
        async fn show_alert(
            &self,
            _payload: courier_plugin::AlertPayload,
        ) -> AppResult<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }

        async fn show_prompt(&self, request: PromptRequest) -> AppResult<()> {
            drop(request);
            Ok(())
        }

        async fn show_dialog(&self, _request: DialogRequest) -> AppResult<()> {
            Ok(())
        }

        async fn show_generic_modal_dialog(&self, _request: DialogRequest) -> AppResult<()> {
            Ok(())
        }

        async fn show_save_dialog(
            &self,
            _options: SaveDialogOptions,
        ) -> AppResult<Option<std::path::PathBuf>> {
            Ok(None)
        }
    }

    let (mut services, _modal, _clipboard) = recording_services();
    services.modal = Arc::new(DroppingModal);
    let factory = ContextFactory::new(services, HostMetadata::new("2026.4.0", "linux"));

    let result = factory
        .build(InvocationPurpose::Send)
        .app
        .prompt("Title", PromptOptions::default())
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn passthrough_surfaces_ignore_purpose() {
    let (factory, modal) = factory();

    for context in [factory.build_default(), factory.build(InvocationPurpose::Send)] {
        context
            .app
            .dialog(DialogRequest::new("Plain"))
            .await
            .unwrap();
        context
            .app
            .show_generic_modal_dialog(
                DialogRequest::new("Generic").with_options(json!({"wide": true})),
            )
            .await
            .unwrap();
        context
            .app
            .show_save_dialog(SaveDialogOptions::default())
            .await
            .unwrap();
    }

    assert_eq!(modal.dialog_calls().len(), 2);
    assert_eq!(modal.generic_dialog_calls().len(), 2);
    assert_eq!(modal.save_dialog_calls().len(), 2);
}

#[tokio::test]
async fn clipboard_round_trips_regardless_of_purpose() {
    let (services, _modal, clipboard) = recording_services();
    let factory = ContextFactory::new(services, HostMetadata::from_build());
    let context = factory.build_default();

    context.app.clipboard.write_text("copied").await.unwrap();
    assert_eq!(context.app.clipboard.read_text().await.unwrap(), "copied");
    assert_eq!(clipboard.contents(), "copied");

    context.app.clipboard.clear().await.unwrap();
    assert_eq!(context.app.clipboard.read_text().await.unwrap(), "");
}

#[tokio::test]
async fn get_path_resolves_plugin_data_locations() {
    let (factory, _modal) = factory();
    let context = factory.build_default();

    let path = context.app.get_path("data").await.unwrap();
    assert!(path.ends_with("test-plugin/data"));

    let err = context.app.get_path("nonsense").await.unwrap_err();
    assert!(err.is_kind(courier_core::error::ErrorKind::NotFound));
}

#[tokio::test]
async fn get_info_is_a_pure_read() {
    let (factory, modal) = factory();
    let context = factory.build_default();

    let info = context.app.get_info();
    assert_eq!(info.version, "2026.4.0");
    assert_eq!(info.platform, "linux");
    assert_eq!(modal.total_calls(), 0);
}

#[tokio::test]
async fn unknown_purpose_labels_never_render_ui() {
    let (factory, modal) = factory();
    let context = factory.build_for("definitely-not-send");

    context.app.alert("Title", None).await.unwrap();
    context
        .app
        .prompt("Title", PromptOptions::default())
        .await
        .unwrap();

    assert_eq!(modal.total_calls(), 0);
}

#[test]
fn surface_names_are_stable() {
    assert_eq!(AppContext::namespaces(), &["app", "__private"]);
    assert_eq!(AppApi::capabilities().len(), 8);
    assert_eq!(ClipboardApi::capabilities(), &["clear", "readText", "writeText"]);
}
