//! End-to-end tests driving the facade: input events, submission over
//! HTTP, normalization, and the persisted history and settings.
//!
//! Each test wires an isolated TriageApp against a temp data directory
//! and either a wiremock server or the local classifier.

use std::sync::Arc;
use std::time::Duration;

use mailtriage::classify::{UNPRODUCTIVE_REPLY_EN, UNPRODUCTIVE_REPLY_PT};
use mailtriage::{
    ApiConfig, Category, InputMode, Language, LocalClassifier, ThemePreference, TriageApp,
    TriageError,
};
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_app(dir: &tempfile::TempDir, server: &MockServer) -> TriageApp {
    let config = ApiConfig::default().with_base_url(server.uri());
    TriageApp::new(dir.path(), config).unwrap()
}

fn local_app(dir: &tempfile::TempDir) -> TriageApp {
    TriageApp::with_classifier(dir.path(), Arc::new(LocalClassifier)).unwrap()
}

// ---- File submission over HTTP ----

#[tokio::test]
async fn pdf_submission_round_trips_through_the_service() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify-file"))
        .and(header("X-User-Lang", "en"))
        .and(header("Accept-Language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "category": "Produtivo",
            "confidence": 0.91,
            "suggested_reply": "Hello! We'll review the report and reply today.",
            "language": "en"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = http_app(&dir, &server);
    let snapshot = app
        .attach_file("report.pdf", vec![0x25, 0x50, 0x44, 0x46])
        .await
        .unwrap();
    assert_eq!(snapshot.mode, InputMode::File);

    let result = app.submit(Language::En).await.unwrap();
    assert_eq!(result.category, Category::Productive);
    assert_eq!(
        result.suggested_reply,
        "Hello! We'll review the report and reply today."
    );
    assert_eq!(result.confidence_percent(), "91.0%");
    assert_eq!(result.language, "en");

    // Multipart body carried the file and the language field.
    let requests = server.received_requests().await.expect("requests recorded");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"report.pdf\""));
    assert!(body.contains("name=\"language\""));

    // Recorded in history; input left intact.
    let entries = app.history().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, Category::Productive);
    assert_eq!(
        app.input_snapshot().await.file_name.as_deref(),
        Some("report.pdf")
    );
}

// ---- The Unproductive reply override ----

#[tokio::test]
async fn unproductive_service_reply_is_replaced_with_the_canned_template() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "category": "Improdutivo",
            "confidence": 0.97,
            "suggested_reply": "resposta do servidor que nunca aparece",
            "language": "pt"
        })))
        .mount(&server)
        .await;

    let app = http_app(&dir, &server);
    app.type_text("Feliz Natal a todos!").await;

    let result = app.submit(Language::Pt).await.unwrap();
    assert_eq!(result.category, Category::Unproductive);
    assert_eq!(result.suggested_reply, UNPRODUCTIVE_REPLY_PT);

    // English-resolved responses get the English template.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "category": "Improdutivo",
            "confidence": 0.9,
            "suggested_reply": "discarded",
            "language": "en-US"
        })))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let app = http_app(&dir, &server);
    app.type_text("Happy holidays!").await;
    let result = app.submit(Language::Auto).await.unwrap();
    assert_eq!(result.suggested_reply, UNPRODUCTIVE_REPLY_EN);
}

// ---- Local classifier path ----

#[tokio::test]
async fn local_classifier_flags_feliz_as_unproductive() {
    let dir = tempdir().unwrap();
    let app = local_app(&dir);
    app.type_text("Feliz aniversário!").await;

    let result = app.submit(Language::Pt).await.unwrap();
    assert_eq!(result.category, Category::Unproductive);
    assert_eq!(result.suggested_reply, UNPRODUCTIVE_REPLY_PT);
    assert_eq!(result.confidence_percent(), "82.0%");
    assert_eq!(result.meta.get("case_id").map(String::as_str), Some("1234-ABCD"));
}

// ---- Validation: no request leaves the client ----

#[tokio::test]
async fn blank_input_is_rejected_without_touching_the_network() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = http_app(&dir, &server);
    app.type_text("   \n  ").await;

    let err = app.submit(Language::Auto).await.unwrap_err();
    assert!(matches!(err, TriageError::Validation(_)));
    assert!(!app.is_busy());
    assert!(app.history().await.unwrap().is_empty());
}

// ---- Timeout ----

#[tokio::test]
async fn slow_service_fails_the_submission_and_records_nothing() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "category": "Produtivo",
                    "confidence": 0.9,
                    "suggested_reply": "tarde demais",
                    "language": "pt"
                }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(50));
    let app = TriageApp::new(dir.path(), config).unwrap();
    app.type_text("um email qualquer").await;

    let err = app.submit(Language::Pt).await.unwrap_err();
    match err {
        TriageError::Transport(message) => {
            assert!(message.contains("tempo limite"), "got: {message}")
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert!(!app.is_busy());
    assert!(app.history().await.unwrap().is_empty());

    // The input survives for a manual retry.
    assert_eq!(app.input_snapshot().await.text, "um email qualquer");
}

// ---- History tally and CSV export ----

#[tokio::test]
async fn tally_and_export_cover_todays_entries() {
    let dir = tempdir().unwrap();
    let app = local_app(&dir);

    app.type_text("Feliz aniversário!").await;
    app.submit(Language::Pt).await.unwrap();
    app.type_text("Preciso do relatório de ontem, podem enviar?").await;
    app.submit(Language::Pt).await.unwrap();

    let tally = app.today_tally().await.unwrap();
    assert_eq!(tally.productive, 1);
    assert_eq!(tally.unproductive, 1);

    let export = app.export_today_csv().await.unwrap();
    assert_eq!(
        export.contents,
        "Categoria,Quantidade\nProdutivo,1\nImprodutivo,1"
    );
    assert_eq!(export.file_name, format!("resumo_{}.csv", tally.date));
}

#[tokio::test]
async fn history_survives_an_app_restart() {
    let dir = tempdir().unwrap();

    {
        let app = local_app(&dir);
        app.type_text("Feliz 2027!").await;
        app.submit(Language::Pt).await.unwrap();
    }

    let app = local_app(&dir);
    let entries = app.history().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, Category::Unproductive);
}

// ---- Theme preference ----

#[tokio::test]
async fn theme_defaults_to_light_and_persists() {
    let dir = tempdir().unwrap();

    {
        let app = local_app(&dir);
        assert_eq!(app.theme(), ThemePreference::Light);
        app.set_theme(ThemePreference::Dark).unwrap();
    }

    let app = local_app(&dir);
    assert_eq!(app.theme(), ThemePreference::Dark);
}

// ---- Conflict flow through the facade ----

#[tokio::test]
async fn typing_over_an_attachment_requires_a_decision() {
    let dir = tempdir().unwrap();
    let app = local_app(&dir);

    app.attach_file("mail.txt", b"Feliz Natal!".to_vec())
        .await
        .unwrap();
    let snapshot = app.type_text("quero digitar outra coisa").await;
    assert_eq!(snapshot.mode, InputMode::Conflict);

    // Keeping the file: the submission still classifies the file text.
    app.keep_attachment().await;
    let result = app.submit(Language::Pt).await.unwrap();
    assert_eq!(result.category, Category::Unproductive);

    // Clearing the attachment and typing: the typed text wins.
    let snapshot = app.type_text("Preciso de suporte com o sistema").await;
    assert_eq!(snapshot.mode, InputMode::Conflict);
    app.confirm_replace_attachment().await;
    let result = app.submit(Language::Pt).await.unwrap();
    assert_eq!(result.category, Category::Productive);
}
