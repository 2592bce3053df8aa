#[cfg(test)]
mod assessment_tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tokio::sync::Semaphore;

    use maternal_guide_data::ApiError;
    use maternal_guide_domain::testing::{full_prediction, prediction, MockPredictionApi};
    use maternal_guide_domain::AssessmentPhase;

    use super::super::{send, test_app};

    #[tokio::test]
    async fn test_initial_view_state() {
        let (app, _) = test_app(Arc::new(MockPredictionApi::new()));

        let (status, body) = send(&app, Method::GET, "/assessment", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "idle");
        assert_eq!(body["can_submit"], true);
        assert_eq!(body["can_send_alert"], false);
        assert_eq!(body["form"]["Protien_Uria"], "0");
        assert_eq!(body["connection"]["state"], "checking");
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn test_field_catalogue_in_form_order() {
        let (app, _) = test_app(Arc::new(MockPredictionApi::new()));

        let (status, body) = send(&app, Method::GET, "/assessment/fields", None).await;

        assert_eq!(status, StatusCode::OK);
        let fields = body.as_array().unwrap();
        assert_eq!(fields.len(), 18);
        assert_eq!(fields[0]["name"], "Age");
        assert_eq!(fields[17]["name"], "Protien_Uria");
        assert_eq!(fields[17]["flag"], true);
    }

    #[tokio::test]
    async fn test_form_update_accepts_strings_numbers_and_booleans() {
        let api = Arc::new(MockPredictionApi::new());
        let (app, _) = test_app(api.clone());

        let (status, body) = send(
            &app,
            Method::PUT,
            "/assessment/form",
            Some(json!({ "fields": { "Age": "28", "SystolicBP": 140, "hypertension": true } })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["form"]["Age"], "28");
        assert_eq!(body["form"]["SystolicBP"], "140");
        assert_eq!(body["form"]["hypertension"], "1");

        send(&app, Method::POST, "/assessment/submit", None).await;
        let request = &api.predict_requests()[0];
        assert_eq!(request.age, 28.0);
        assert_eq!(request.systolic_bp, 140.0);
        assert_eq!(request.hypertension, 1);
    }

    #[tokio::test]
    async fn test_form_update_rejects_unknown_field_without_applying() {
        let (app, orchestrator) = test_app(Arc::new(MockPredictionApi::new()));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/assessment/form",
            Some(json!({ "fields": { "Age": "30", "Weight": "60" } })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"]["Weight"], "Unknown assessment field: Weight");
        assert_eq!(
            orchestrator.snapshot().form.get(maternal_guide_domain::AssessmentField::Age),
            ""
        );
    }

    #[tokio::test]
    async fn test_form_update_rejects_boolean_for_numeric_field() {
        let (app, _) = test_app(Arc::new(MockPredictionApi::new()));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/assessment/form",
            Some(json!({ "fields": { "BMI": true } })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"]["BMI"], "Field BMI is not a yes/no flag");
    }

    #[tokio::test]
    async fn test_submit_returns_result() {
        let api = Arc::new(MockPredictionApi::new().with_prediction(full_prediction(
            "high risk",
            "positive",
            "82%",
            "Consult your doctor immediately.",
        )));
        let (app, _) = test_app(api.clone());

        let (status, body) = send(&app, Method::POST, "/assessment/submit", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["risk_level"], "high risk");
        assert_eq!(body["result"]["severity"], "danger");
        assert_eq!(body["result"]["disease_status"], "positive");
        assert_eq!(body["result"]["disease_probability"], "82%");
        assert_eq!(body["result"]["advice"], "Consult your doctor immediately.");
        assert_eq!(body["view"]["phase"], "resulted");
        assert_eq!(body["view"]["can_send_alert"], true);
        assert_eq!(
            body["view"]["notifications"][0]["message"],
            "Assessment completed successfully!"
        );
    }

    #[tokio::test]
    async fn test_submit_failure_is_bad_gateway() {
        let api = Arc::new(MockPredictionApi::new().with_prediction_failure(ApiError::Status {
            status: 500,
            body: "model not loaded".to_string(),
        }));
        let (app, orchestrator) = test_app(api);

        let (status, body) = send(&app, Method::POST, "/assessment/submit", None).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "upstream_error");
        assert_eq!(body["message"], "Failed to process assessment. Please try again.");
        assert_eq!(orchestrator.phase(), AssessmentPhase::Idle);

        let (_, view) = send(&app, Method::GET, "/assessment", None).await;
        assert!(view.get("result").is_none());
        assert_eq!(view["notifications"][0]["kind"], "error");
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_conflict() {
        let gate = Arc::new(Semaphore::new(0));
        let api = Arc::new(MockPredictionApi::new().with_predict_gate(gate.clone()));
        let (app, _) = test_app(api.clone());

        let first = tokio::spawn({
            let app = app.clone();
            async move { send(&app, Method::POST, "/assessment/submit", None).await }
        });
        while api.predict_call_count() == 0 {
            tokio::task::yield_now().await;
        }

        let (status, body) = send(&app, Method::POST, "/assessment/submit", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");

        gate.add_permits(1);
        let (status, _) = first.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(api.predict_call_count(), 1);
    }

    #[tokio::test]
    async fn test_alert_flow() {
        let api = Arc::new(MockPredictionApi::new().with_prediction(prediction("mid risk")));
        let (app, _) = test_app(api.clone());

        let (status, _) = send(&app, Method::POST, "/assessment/alert", None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        send(&app, Method::POST, "/assessment/submit", None).await;

        let (status, body) = send(&app, Method::POST, "/assessment/alert", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Please enter a WhatsApp number first!");
        assert_eq!(api.alert_call_count(), 0);

        let (_, view) = send(
            &app,
            Method::PUT,
            "/assessment/contact",
            Some(json!({ "contact": "+923001234567" })),
        )
        .await;
        assert_eq!(view["show_contact_instructions"], true);
        assert_eq!(view["contact_instructions"].as_array().unwrap().len(), 3);

        let (status, body) = send(&app, Method::POST, "/assessment/alert", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phone_number"], "+923001234567");
        assert_eq!(body["view"]["result"]["risk_level"], "mid risk");

        let requests = api.alert_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].risk_level, "mid risk");
        assert_eq!(requests[0].phone_number.as_deref(), Some("+923001234567"));
    }

    #[tokio::test]
    async fn test_alert_failure_keeps_result() {
        let api = Arc::new(
            MockPredictionApi::new()
                .with_prediction(prediction("high risk"))
                .with_alert_failure(ApiError::Transport("timeout".to_string())),
        );
        let (app, _) = test_app(api);
        send(&app, Method::POST, "/assessment/submit", None).await;
        send(
            &app,
            Method::PUT,
            "/assessment/contact",
            Some(json!({ "contact": "+15550100" })),
        )
        .await;

        let (status, body) = send(&app, Method::POST, "/assessment/alert", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "Failed to send alert. Please try again.");

        let (_, view) = send(&app, Method::GET, "/assessment", None).await;
        assert_eq!(view["phase"], "resulted");
        assert_eq!(view["result"]["risk_level"], "high risk");
    }

    #[tokio::test]
    async fn test_dismiss_notification() {
        let (app, _) = test_app(Arc::new(MockPredictionApi::new()));
        let (_, body) = send(&app, Method::POST, "/assessment/submit", None).await;
        let id = body["view"]["notifications"][0]["id"].as_str().unwrap().to_string();
        let uri = format!("/assessment/notifications/{}", id);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_leave_resets_session() {
        let (app, _) = test_app(Arc::new(MockPredictionApi::new()));
        send(
            &app,
            Method::PUT,
            "/assessment/form",
            Some(json!({ "fields": { "Age": "31" } })),
        )
        .await;
        send(&app, Method::POST, "/assessment/submit", None).await;

        let (status, view) = send(&app, Method::POST, "/assessment/leave", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["phase"], "idle");
        assert_eq!(view["form"]["Age"], "");
        assert!(view.get("result").is_none());
        assert_eq!(view["notifications"].as_array().unwrap().len(), 0);
    }
}
