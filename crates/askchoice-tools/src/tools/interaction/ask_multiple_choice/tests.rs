//! Tests for the ask_multiple_choice tool

use std::sync::Arc;
use std::time::Duration;

use askchoice_core::choice::{ChoiceRequest, NO_SELECTION, SKIP_SENTINEL, SKIPPED_ACKNOWLEDGEMENT};
use askchoice_core::config::ChoiceSettings;
use askchoice_core::error::{AskError, AskResult};
use askchoice_core::input::{
    AutoResponse, ChoicePresenter, InputChannel, InputPresenter, InputResponse,
};
use askchoice_core::tools::{Tool, ToolCall, ToolError};
use async_trait::async_trait;
use mockall::mock;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use super::tool::{AskMultipleChoiceTool, TOOL_NAME};

mock! {
    Presenter {}

    #[async_trait]
    impl ChoicePresenter for Presenter {
        async fn present(&self, request: &ChoiceRequest) -> AskResult<String>;
    }
}

fn create_tool_call(id: &str, args: serde_json::Value) -> ToolCall {
    ToolCall::from_json(id, TOOL_NAME, args)
}

fn framework_args() -> serde_json::Value {
    json!({
        "title": "Project setup",
        "questions": [
            {
                "id": "framework",
                "prompt": "Which framework?",
                "options": [
                    {"id": "react", "label": "React"},
                    {"id": "vue", "label": "Vue.js"}
                ]
            },
            {
                "id": "tooling",
                "prompt": "Extra tooling?",
                "allow_multiple": "true",
                "options": [
                    {"id": "ts", "label": "TypeScript"},
                    {"id": "lint", "label": "ESLint"},
                    {"id": "fmt", "label": "Prettier"}
                ]
            }
        ]
    })
}

fn presenter_returning(payload: &'static str) -> Arc<dyn ChoicePresenter> {
    let mut presenter = MockPresenter::new();
    presenter
        .expect_present()
        .times(1)
        .returning(move |_| Ok(payload.to_string()));
    Arc::new(presenter)
}

#[tokio::test]
async fn test_framework_selection() {
    let tool = AskMultipleChoiceTool::new(presenter_returning(r#"{"framework": ["vue"]}"#));
    let call = create_tool_call("call-1", framework_args());

    let result = tool.execute(&call).await.unwrap();
    assert!(result.success);
    let output = result.output.unwrap();
    assert!(output.contains(
        "<answer><question_id>framework</question_id><selected_options>Vue.js</selected_options></answer>"
    ));
    assert!(output.contains(&format!(
        "<answer><question_id>tooling</question_id><selected_options>{}</selected_options></answer>",
        NO_SELECTION
    )));
    assert_eq!(result.metadata["answered"], 1);
    assert_eq!(result.metadata["total"], 2);
    assert_eq!(result.metadata["skipped"], false);
    assert!(!result.metadata.contains_key("diagnostic"));
}

#[tokio::test]
async fn test_multi_select_labels_are_joined() {
    let tool = AskMultipleChoiceTool::new(presenter_returning(
        r#"{"framework": "react", "tooling": ["fmt", "ts"]}"#,
    ));
    let result = tool
        .execute(&create_tool_call("call-2", framework_args()))
        .await
        .unwrap();
    let output = result.output.unwrap();
    assert!(output.contains("<selected_options>React</selected_options>"));
    assert!(output.contains("<selected_options>Prettier, TypeScript</selected_options>"));
    assert_eq!(result.metadata["answered"], 2);
}

#[tokio::test]
async fn test_presenter_sees_normalized_request() {
    let mut presenter = MockPresenter::new();
    presenter
        .expect_present()
        .withf(|request: &ChoiceRequest| {
            request.title.as_deref() == Some("Project setup")
                && request.questions.len() == 2
                && !request.questions[0].allow_multiple
                && request.questions[1].allow_multiple
        })
        .times(1)
        .returning(|_| Ok(SKIP_SENTINEL.to_string()));
    let tool = AskMultipleChoiceTool::new(Arc::new(presenter));

    let result = tool
        .execute(&create_tool_call("call-3", framework_args()))
        .await
        .unwrap();
    assert_eq!(result.output.as_deref(), Some(SKIPPED_ACKNOWLEDGEMENT));
    assert_eq!(result.metadata["skipped"], true);
    assert_eq!(result.metadata["answered"], 0);
}

#[tokio::test]
async fn test_tagged_parameters_match_json() {
    let tagged = "<question>\
        <id>framework</id><prompt>Which framework?</prompt>\
        <options>\
        <option><id>react</id><label>React</label></option>\
        <option><id>vue</id><label>Vue.js</label></option>\
        </options>\
        </question>";
    let tool = AskMultipleChoiceTool::new(presenter_returning(r#"{"framework": ["vue"]}"#));

    let from_tags = tool
        .build_request(&create_tool_call("t", json!({"question": tagged})))
        .unwrap();
    let from_json = tool
        .build_request(&create_tool_call(
            "j",
            json!({
                "question": {
                    "id": "framework",
                    "prompt": "Which framework?",
                    "options": {"option": [
                        {"id": "react", "label": "React"},
                        {"id": "vue", "label": "Vue.js"}
                    ]}
                }
            }),
        ))
        .unwrap();
    assert_eq!(from_tags, from_json);

    let result = tool
        .execute(&create_tool_call("t", json!({"question": tagged})))
        .await
        .unwrap();
    assert!(result.output.unwrap().contains("<selected_options>Vue.js</selected_options>"));
}

#[tokio::test]
async fn test_malformed_payload_reports_diagnostic() {
    let tool = AskMultipleChoiceTool::new(presenter_returning("definitely not json"));
    let result = tool
        .execute(&create_tool_call("call-4", framework_args()))
        .await
        .unwrap();

    assert!(result.success);
    let output = result.output.unwrap();
    assert_eq!(output.matches(NO_SELECTION).count(), 2);
    assert_eq!(result.metadata["answered"], 0);
    assert!(result.metadata.contains_key("diagnostic"));
}

#[tokio::test]
async fn test_structural_error_never_presents() {
    let mut presenter = MockPresenter::new();
    presenter.expect_present().times(0);
    let tool = AskMultipleChoiceTool::new(Arc::new(presenter));

    let call = create_tool_call(
        "call-5",
        json!({
            "questions": [{
                "id": "lonely",
                "prompt": "Only one option?",
                "options": [{"id": "a", "label": "A"}]
            }]
        }),
    );
    let err = tool.execute(&call).await.unwrap_err();
    match err {
        ToolError::InvalidArguments(message) => {
            assert!(message.contains("lonely"), "message: {}", message)
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = tool
        .execute(&create_tool_call("call-6", json!({"questions": []})))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

#[tokio::test]
async fn test_strict_mode_rejects_duplicate_ids() {
    let args = json!({
        "questions": [
            {"id": "q", "prompt": "One", "options": [{"id": "a", "label": "A"}, {"id": "b", "label": "B"}]},
            {"id": "q", "prompt": "Two", "options": [{"id": "a", "label": "A"}, {"id": "b", "label": "B"}]}
        ]
    });

    let permissive = AskMultipleChoiceTool::new(presenter_returning("{}"));
    assert!(permissive.execute(&create_tool_call("p", args.clone())).await.is_ok());

    let mut presenter = MockPresenter::new();
    presenter.expect_present().times(0);
    let strict = AskMultipleChoiceTool::new(Arc::new(presenter)).with_settings(&ChoiceSettings {
        enforce_unique_ids: true,
    });
    let err = strict
        .execute(&create_tool_call("s", args))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Duplicate question id"));
}

#[tokio::test]
async fn test_cancellation_while_waiting() {
    let (channel, _handle) = InputChannel::new(4);
    let token = CancellationToken::new();
    let tool = AskMultipleChoiceTool::new(Arc::new(InputPresenter::new(channel)))
        .with_cancellation_token(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });

    let err = tool
        .execute(&create_tool_call("call-7", framework_args()))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Cancelled));
    canceller.await.unwrap();
}

#[tokio::test]
async fn test_late_answer_to_cancelled_call_does_not_break_next_call() {
    let (channel, mut handle) = InputChannel::new(4);
    let presenter: Arc<dyn ChoicePresenter> = Arc::new(InputPresenter::new(channel));

    let ui = tokio::spawn(async move {
        let abandoned = handle.next_request().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle
            .respond(InputResponse::payload(abandoned.id, r#"{"framework":["react"]}"#))
            .await
            .unwrap();

        let next = handle.next_request().await.unwrap();
        handle
            .respond(InputResponse::payload(next.id, r#"{"framework":["vue"]}"#))
            .await
            .unwrap();
    });

    let token = CancellationToken::new();
    let first =
        AskMultipleChoiceTool::new(presenter.clone()).with_cancellation_token(token.clone());
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });
    let err = first
        .execute(&create_tool_call("first", framework_args()))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Cancelled));
    canceller.await.unwrap();

    tokio::time::sleep(Duration::from_millis(80)).await;
    let second = AskMultipleChoiceTool::new(presenter);
    let result = second
        .execute(&create_tool_call("second", framework_args()))
        .await
        .unwrap();
    let output = result.output.unwrap();
    assert!(output.contains("<selected_options>Vue.js</selected_options>"));
    assert!(!output.contains("React"));
    ui.await.unwrap();
}

#[tokio::test]
async fn test_presenter_timeout_is_a_timeout() {
    let (channel, _handle) = InputChannel::new(4);
    let presenter = InputPresenter::new(channel.with_timeout(Duration::from_millis(30)));
    let tool = AskMultipleChoiceTool::new(Arc::new(presenter));

    let err = tool
        .execute(&create_tool_call("slow", framework_args()))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Timeout));
}

#[tokio::test]
async fn test_presenter_errors() {
    let mut cancelled = MockPresenter::new();
    cancelled
        .expect_present()
        .returning(|_| Err(AskError::Cancelled));
    let tool = AskMultipleChoiceTool::new(Arc::new(cancelled));
    let err = tool
        .execute(&create_tool_call("c", framework_args()))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Cancelled));

    let mut broken = MockPresenter::new();
    broken
        .expect_present()
        .returning(|_| Err(AskError::channel("UI went away")));
    let tool = AskMultipleChoiceTool::new(Arc::new(broken));
    let err = tool
        .execute(&create_tool_call("b", framework_args()))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::ExecutionFailed(_)));
}

#[tokio::test]
async fn test_ui_round_trip_over_input_channel() {
    let (channel, mut handle) = InputChannel::new(4);
    let tool = AskMultipleChoiceTool::new(Arc::new(InputPresenter::new(channel)));

    let ui = tokio::spawn(async move {
        let request = handle.next_request().await.unwrap();
        assert_eq!(request.request.questions[0].id, "framework");
        handle
            .respond(InputResponse::payload(request.id, r#"{"tooling": ["lint"]}"#))
            .await
            .unwrap();
    });

    let result = tool
        .execute(&create_tool_call("call-8", framework_args()))
        .await
        .unwrap();
    assert!(result.output.unwrap().contains("<selected_options>ESLint</selected_options>"));
    ui.await.unwrap();
}

#[tokio::test]
async fn test_auto_first_option() {
    let presenter = InputPresenter::new(InputChannel::non_interactive(AutoResponse::FirstOption));
    let tool = AskMultipleChoiceTool::new(Arc::new(presenter));
    let result = tool
        .execute(&create_tool_call("call-9", framework_args()))
        .await
        .unwrap();
    let output = result.output.unwrap();
    assert!(output.contains("<selected_options>React</selected_options>"));
    assert!(output.contains("<selected_options>TypeScript</selected_options>"));
}

#[tokio::test]
async fn test_execute_with_timing_wraps_errors() {
    let tool = AskMultipleChoiceTool::new(presenter_returning("{}"));

    let missing = tool
        .execute_with_timing(&create_tool_call("m", json!({"title": "nothing"})))
        .await;
    assert!(!missing.success);
    assert!(missing.error.unwrap().contains("questions"));

    let ok = tool
        .execute_with_timing(&create_tool_call("ok", framework_args()))
        .await;
    assert!(ok.success);
    assert!(ok.execution_time_ms.is_some());
}

#[test]
fn test_schema_and_flags() {
    let tool = AskMultipleChoiceTool::new(Arc::new(MockPresenter::new()));
    let schema = tool.schema();
    assert_eq!(schema.name, TOOL_NAME);
    assert_eq!(schema.parameters["required"], json!(["questions"]));
    assert!(
        schema.parameters["properties"]["questions"]["items"]["properties"]
            .get("allow_multiple")
            .is_some()
    );
    assert!(tool.requires_user_interaction());
}
