// Unit Tests for API Records and Pagination Options
//
// UNIT UNDER TEST: models (chat, file, fine_tuning, list)
//
// BUSINESS RESPONSIBILITY:
//   - Decodes server payloads into typed records, tolerating fields the server omits
//   - Encodes requests without sending unset optional parameters
//   - Encodes pagination options into a query string, each field independently
//
// TEST COVERAGE:
//   - ListOptions encoding for every combination of fields
//   - Chat request serialization of explicit and unset parameters
//   - Chat, file and fine-tuning response decoding from representative payloads
//   - Identifier enums (models, roles, purposes, statuses) on the wire

use crate::models::list::encode_options;
use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatModel, ChatRole,
    DeleteFileResponse, File, FileList, FilePurpose, FileStatus, FineTuningEventsList,
    FineTuningJob, FineTuningJobStatus, FineTuningList, FineTuningRequest, FineTuningResponse,
    ListOptions, NEpochs,
};
use serde_json::json;

#[cfg(test)]
mod list_options_tests {
    use super::*;

    #[test]
    fn test_no_options_encode_to_empty_string() {
        // Arrange
        let options = ListOptions::new();

        // Act & Assert
        assert_eq!(options.encode(), "");
        assert_eq!(encode_options(None), "");
        assert_eq!(encode_options(Some(&options)), "");
    }

    #[test]
    fn test_after_alone() {
        // Arrange
        let options = ListOptions::new().after("x");

        // Act & Assert
        assert_eq!(options.encode(), "?after=x");
    }

    #[test]
    fn test_limit_alone_is_encoded() {
        // Test verifies limit does not depend on a cursor being present

        // Arrange
        let options = ListOptions::new().limit(5);

        // Act & Assert
        assert_eq!(options.encode(), "?limit=5");
    }

    #[test]
    fn test_both_fields_are_present() {
        // Arrange
        let options = ListOptions::new().after("ftjob-abc").limit(10);

        // Act
        let encoded = options.encode();

        // Assert
        assert_eq!(encoded, "?after=ftjob-abc&limit=10");
    }

    #[test]
    fn test_cursor_is_form_encoded() {
        // Arrange
        let options = ListOptions::new().after("a b&c");

        // Act & Assert
        assert_eq!(options.encode(), "?after=a+b%26c");
    }
}

#[cfg(test)]
mod chat_model_tests {
    use super::*;

    #[test]
    fn test_chat_request_omits_unset_parameters() {
        // Arrange
        let request = ChatCompletionRequest::new(ChatModel::Gpt4, vec![ChatMessage::user("Hi")]);

        // Act
        let value = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "Hi"}]
            })
        );
    }

    #[test]
    fn test_chat_request_sends_explicit_zero() {
        // Test verifies an explicit zero is distinguishable from an unset value

        // Arrange
        let request = ChatCompletionRequest::new(ChatModel::Gpt4, vec![ChatMessage::user("Hi")])
            .with_temperature(0.0)
            .with_max_tokens(64);

        // Act
        let value = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(value["temperature"], json!(0.0));
        assert_eq!(value["max_tokens"], json!(64));
        assert!(value.get("presence_penalty").is_none());
    }

    #[test]
    fn test_chat_response_decodes_sample_payload() {
        // Arrange
        let body = r#"{"id":"chatcmpl-abcd","choices":[{"index":0,"message":{"role":"assistant","content":"Sample response"},"finish_reason":"stop"}],"usage":{"prompt_tokens":19,"completion_tokens":47,"total_tokens":66}}"#;

        // Act
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();

        // Assert
        assert_eq!(response.id, "chatcmpl-abcd");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].index, 0);
        assert_eq!(response.choices[0].message.role, "assistant");
        assert_eq!(response.choices[0].message.content, "Sample response");
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.prompt_tokens, 19);
        assert_eq!(response.usage.completion_tokens, 47);
        assert_eq!(response.usage.total_tokens, 66);
        assert_eq!(response.first_content(), Some("Sample response"));
    }

    #[test]
    fn test_chat_response_accepts_created_at_alias() {
        // Arrange
        let body = json!({
            "id": "chatcmpl-abcd",
            "object": "chat.completion",
            "created_at": 1_700_000_000u64,
            "choices": []
        });

        // Act
        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        // Assert
        assert_eq!(response.created, 1_700_000_000);
        assert_eq!(response.object, "chat.completion");
        assert!(response.first_content().is_none());
    }

    #[test]
    fn test_model_and_role_names_round_trip_through_from_str() {
        for model in ChatModel::ALL {
            assert_eq!(model.as_str().parse::<ChatModel>(), Ok(model));
        }
        for role in [ChatRole::System, ChatRole::User, ChatRole::Assistant] {
            assert_eq!(role.as_str().parse::<ChatRole>(), Ok(role));
        }
        assert!("gpt-2".parse::<ChatModel>().is_err());
        assert!("tool".parse::<ChatRole>().is_err());
    }

    #[test]
    fn test_message_constructors_set_roles() {
        assert_eq!(ChatMessage::system("a").role, "system");
        assert_eq!(ChatMessage::user("b").role, "user");
        assert_eq!(ChatMessage::assistant("c").role, "assistant");
    }
}

#[cfg(test)]
mod file_model_tests {
    use super::*;

    fn sample_file() -> serde_json::Value {
        json!({
            "id": "file-abc123",
            "object": "file",
            "bytes": 120000,
            "created_at": 1677610602,
            "filename": "mydata.jsonl",
            "purpose": "fine-tune",
            "status": "processed",
            "status_details": null
        })
    }

    #[test]
    fn test_file_decodes() {
        // Act
        let file: File = serde_json::from_value(sample_file()).unwrap();

        // Assert
        assert_eq!(file.id, "file-abc123");
        assert_eq!(file.bytes, 120000);
        assert_eq!(file.purpose, FilePurpose::FineTune);
        assert_eq!(file.status, Some(FileStatus::Processed));
        assert!(file.status_details.is_none());
        assert_eq!(
            file.created_at_utc().map(|t| t.timestamp()),
            Some(1677610602)
        );
    }

    #[test]
    fn test_file_list_without_has_more() {
        // Test verifies the files listing decodes even though it omits has_more

        // Arrange
        let body = json!({ "object": "list", "data": [sample_file()] });

        // Act
        let list: FileList = serde_json::from_value(body).unwrap();

        // Assert
        assert_eq!(list.object, "list");
        assert_eq!(list.data.len(), 1);
        assert!(!list.has_more);
    }

    #[test]
    fn test_delete_file_response_decodes() {
        // Arrange
        let body = json!({ "id": "file-abc123", "object": "file", "deleted": true });

        // Act
        let deleted: DeleteFileResponse = serde_json::from_value(body).unwrap();

        // Assert
        assert!(deleted.deleted);
    }

    #[test]
    fn test_file_purpose_wire_names() {
        for (purpose, name) in [
            (FilePurpose::FineTune, "fine-tune"),
            (FilePurpose::FineTuneResults, "fine-tune-results"),
            (FilePurpose::Assistants, "assistants"),
            (FilePurpose::AssistantsOutput, "assistants_output"),
        ] {
            assert_eq!(purpose.as_str(), name);
            assert_eq!(serde_json::to_value(purpose).unwrap(), json!(name));
        }
    }

    #[test]
    fn test_file_list_keeps_files_with_unlisted_purpose() {
        // Test verifies one unfamiliar purpose does not lose the whole listing

        // Arrange
        let mut batch_file = sample_file();
        batch_file["id"] = json!("file-batch1");
        batch_file["purpose"] = json!("batch");
        batch_file["status"] = json!("archived");
        let body = json!({ "object": "list", "data": [sample_file(), batch_file] });

        // Act
        let list: FileList = serde_json::from_value(body).unwrap();

        // Assert
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].purpose, FilePurpose::FineTune);
        assert_eq!(list.data[1].purpose, FilePurpose::Other("batch".to_string()));
        assert_eq!(list.data[1].purpose.as_str(), "batch");
        assert_eq!(
            list.data[1].status,
            Some(FileStatus::Other("archived".to_string()))
        );
    }

    #[test]
    fn test_unlisted_purpose_is_sent_verbatim() {
        // Arrange
        let purpose = FilePurpose::from("user_data");

        // Act
        let value = serde_json::to_value(&purpose).unwrap();

        // Assert
        assert_eq!(purpose, FilePurpose::Other("user_data".to_string()));
        assert_eq!(value, json!("user_data"));
    }
}

#[cfg(test)]
mod fine_tuning_model_tests {
    use super::*;

    fn sample_job(status: &str) -> serde_json::Value {
        json!({
            "object": "fine_tuning.job",
            "id": "ftjob-abc123",
            "model": "gpt-3.5-turbo-0613",
            "created_at": 1692661014,
            "finished_at": 1692661190,
            "fine_tuned_model": "ft:gpt-3.5-turbo:my-org:custom_suffix:7q8mpxmy",
            "organization_id": "org-123",
            "result_files": ["file-abc123"],
            "status": status,
            "validation_file": null,
            "training_file": "file-abc123",
            "hyperparameters": { "n_epochs": 4 },
            "trained_tokens": 5768,
            "error": null
        })
    }

    #[test]
    fn test_job_decodes_every_status() {
        for (name, status) in [
            ("validating_files", FineTuningJobStatus::ValidatingFiles),
            ("queued", FineTuningJobStatus::Queued),
            ("running", FineTuningJobStatus::Running),
            ("succeeded", FineTuningJobStatus::Succeeded),
            ("failed", FineTuningJobStatus::Failed),
            ("cancelled", FineTuningJobStatus::Cancelled),
        ] {
            // Act
            let job: FineTuningJob = serde_json::from_value(sample_job(name)).unwrap();

            // Assert
            assert_eq!(job.status, status);
        }
    }

    #[test]
    fn test_job_fields_decode() {
        // Act
        let job: FineTuningJob = serde_json::from_value(sample_job("succeeded")).unwrap();

        // Assert
        assert_eq!(job.id, "ftjob-abc123");
        assert_eq!(job.trained_tokens, Some(5768));
        assert_eq!(
            job.hyperparameters.as_ref().and_then(|h| h.n_epochs.clone()),
            Some(NEpochs::Count(4))
        );
        assert!(job.error.is_none());
        assert!(job.validation_file.is_none());
        assert_eq!(job.result_files, vec!["file-abc123".to_string()]);
        assert!(job.finished_at_utc().is_some());
    }

    #[test]
    fn test_auto_epochs_decode() {
        // Arrange
        let mut body = sample_job("running");
        body["hyperparameters"] = json!({ "n_epochs": "auto" });

        // Act
        let job: FineTuningJob = serde_json::from_value(body).unwrap();

        // Assert
        assert_eq!(
            job.hyperparameters.and_then(|h| h.n_epochs),
            Some(NEpochs::Mode("auto".to_string()))
        );
    }

    #[test]
    fn test_job_with_unlisted_status_decodes() {
        // Act
        let job: FineTuningJob = serde_json::from_value(sample_job("pausing")).unwrap();

        // Assert
        assert_eq!(job.status, FineTuningJobStatus::Other("pausing".to_string()));
        assert_eq!(job.status.as_str(), "pausing");
        assert!(!job.status.is_terminal());
        assert_eq!(serde_json::to_value(&job.status).unwrap(), json!("pausing"));
    }

    #[test]
    fn test_failed_job_error_with_null_fields() {
        // Arrange
        let mut body = sample_job("failed");
        body["error"] = json!({ "code": null, "message": "bad", "param": null });

        // Act
        let job: FineTuningJob = serde_json::from_value(body).unwrap();

        // Assert
        let error = job.error.unwrap();
        assert!(error.code.is_none());
        assert_eq!(error.message.as_deref(), Some("bad"));
        assert!(error.param.is_none());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(FineTuningJobStatus::Succeeded.is_terminal());
        assert!(FineTuningJobStatus::Failed.is_terminal());
        assert!(FineTuningJobStatus::Cancelled.is_terminal());
        assert!(!FineTuningJobStatus::Queued.is_terminal());
        assert!(!FineTuningJobStatus::Running.is_terminal());
        assert!(!FineTuningJobStatus::ValidatingFiles.is_terminal());
    }

    #[test]
    fn test_request_omits_unset_fields() {
        // Arrange
        let request = FineTuningRequest::new(ChatModel::Gpt35Turbo, "file-abc123");

        // Act
        let value = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({ "model": "gpt-3.5-turbo", "training_file": "file-abc123" })
        );
    }

    #[test]
    fn test_request_with_options() {
        // Arrange
        let request = FineTuningRequest::new(ChatModel::Gpt35Turbo, "file-abc123")
            .with_n_epochs(3)
            .with_suffix("custom")
            .with_validation_file("file-def456");

        // Act
        let value = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(value["hyperparameters"], json!({ "n_epochs": 3 }));
        assert_eq!(value["suffix"], json!("custom"));
        assert_eq!(value["validation_file"], json!("file-def456"));
    }

    #[test]
    fn test_response_and_lists_decode() {
        // Arrange
        let response_body = json!({
            "object": "fine_tuning.job",
            "id": "ftjob-abc123",
            "model": "gpt-3.5-turbo-0613",
            "created_at": 1614807352,
            "fine_tuned_model": null,
            "organization_id": "org-123",
            "result_files": [],
            "status": "queued",
            "validation_file": null,
            "training_file": "file-abc123"
        });
        let jobs_body = json!({
            "object": "list",
            "data": [sample_job("running")],
            "has_more": true
        });
        let events_body = json!({
            "object": "list",
            "data": [{
                "object": "fine_tuning.job.event",
                "id": "ft-event-1",
                "created_at": 1692407401,
                "level": "info",
                "message": "Fine tuning job successfully completed",
                "data": null,
                "type": "message"
            }],
            "has_more": false
        });

        // Act
        let response: FineTuningResponse = serde_json::from_value(response_body).unwrap();
        let jobs: FineTuningList = serde_json::from_value(jobs_body).unwrap();
        let events: FineTuningEventsList = serde_json::from_value(events_body).unwrap();

        // Assert
        assert_eq!(response.status, FineTuningJobStatus::Queued);
        assert!(response.fine_tuned_model.is_none());
        assert!(jobs.has_more);
        assert_eq!(jobs.data[0].status, FineTuningJobStatus::Running);
        assert_eq!(events.data[0].event_type, "message");
        assert_eq!(events.data[0].level, "info");
        assert!(events.data[0].data.is_none());
    }
}
