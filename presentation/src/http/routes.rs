//! Route handlers for the tutor API.
//!
//! The single tutor endpoint dispatches on the request's `action` tag.
//! Input errors answer 400 before any generation call; pipeline errors are
//! logged and answer 500 with a generic message (grammar excepted — its
//! fallback means it never fails). Internal error detail stays in the logs.

use super::AppState;
use super::dto::{ErrorBody, TutorRequest};
use super::session::RequestSession;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{Instrument, error, info_span, warn};
use tutor_domain::{Action, SkillLevel, correct_fillers};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn language_tutor(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<TutorRequest>,
) -> Response {
    // Session is acquired here and dropped when the request completes.
    let session = RequestSession::begin(&headers);
    let span = info_span!(
        "tutor_request",
        request_id = %session.request_id(),
        user = session.user().unwrap_or("-"),
        action = %request.action,
    );

    dispatch(&state, &request).instrument(span).await
}

async fn dispatch(state: &AppState, request: &TutorRequest) -> Response {
    let action = match request.action.parse::<Action>() {
        Ok(action) => action,
        Err(_) => {
            warn!("unknown action requested");
            return bad_request("Invalid action");
        }
    };

    match action {
        Action::Conversation => {
            let user_input = match require_user_input(request) {
                Ok(input) => input,
                Err(response) => return response,
            };
            // skillLevel is optional here; the prompt defaults to the
            // middle tier when the front end omits it.
            let level = match optional_level(request) {
                Ok(level) => level.unwrap_or(SkillLevel::Intermediate),
                Err(response) => return response,
            };

            match state.conversation.execute(level, user_input).await {
                Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
                Err(err) => {
                    error!(%err, "error generating AI response");
                    server_error("Failed to generate AI response")
                }
            }
        }

        Action::Vocabulary => {
            let level = match require_level(request) {
                Ok(level) => level,
                Err(response) => return response,
            };

            match state.vocabulary.execute(level, None).await {
                Ok(words) => (StatusCode::OK, Json(words)).into_response(),
                Err(err) => {
                    error!(%err, "error generating word exercises");
                    server_error("Failed to generate word exercises")
                }
            }
        }

        Action::Grammar => {
            let level = match require_level(request) {
                Ok(level) => level,
                Err(response) => return response,
            };

            // Infallible: the use case substitutes the fallback exercise.
            let exercise = state.grammar.execute(level).await;
            (StatusCode::OK, Json(exercise)).into_response()
        }

        Action::FillerWords => {
            let user_input = match require_user_input(request) {
                Ok(input) => input,
                Err(response) => return response,
            };

            let correction = correct_fillers(user_input);
            (StatusCode::OK, Json(correction)).into_response()
        }
    }
}

fn require_user_input(request: &TutorRequest) -> Result<&str, Response> {
    request
        .user_input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| bad_request("userInput is required for this action"))
}

fn require_level(request: &TutorRequest) -> Result<SkillLevel, Response> {
    match optional_level(request)? {
        Some(level) => Ok(level),
        None => Err(bad_request("skillLevel is required for this action")),
    }
}

fn optional_level(request: &TutorRequest) -> Result<Option<SkillLevel>, Response> {
    match request.skill_level.as_deref() {
        None => Ok(None),
        Some(raw) => raw
            .parse::<SkillLevel>()
            .map(Some)
            .map_err(|_| bad_request("Invalid skill level")),
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}

fn server_error(message: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::build_router;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::http::{Method, Request, header};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;
    use tutor_application::{
        ConverseUseCase, GenerationDefaults, GenerationError, GrammarUseCase, SamplingParams,
        TextGenerator, VocabularyUseCase,
    };

    /// Scripted generator that also counts how often it is called.
    struct FakeGenerator {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _params: SamplingParams,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(GenerationError::RequestFailed("scripted failure".into())),
            }
        }
    }

    fn state_with(generator: Arc<FakeGenerator>) -> Arc<AppState> {
        let defaults = GenerationDefaults::default();
        Arc::new(AppState {
            conversation: ConverseUseCase::new(generator.clone(), defaults),
            vocabulary: VocabularyUseCase::new(generator.clone(), defaults),
            grammar: GrammarUseCase::new(generator, defaults),
        })
    }

    async fn post(state: Arc<AppState>, body: Value) -> (StatusCode, Value) {
        let request: TutorRequest = serde_json::from_value(body).unwrap();
        let response = language_tutor(State(state), HeaderMap::new(), Json(request)).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_action_is_400_without_generation_call() {
        let generator = FakeGenerator::replying("unused");
        let (status, body) =
            post(state_with(generator.clone()), json!({"action": "translate"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid action");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_conversation_happy_path() {
        let generator = FakeGenerator::replying("Great sentence! One fix: say 'went'.");
        let (status, body) = post(
            state_with(generator),
            json!({"action": "conversation", "skillLevel": "Beginner", "userInput": "I goed home"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Great sentence! One fix: say 'went'.");
    }

    #[tokio::test]
    async fn test_conversation_empty_input_rejected_before_generation() {
        let generator = FakeGenerator::replying("unused");
        let (status, _) = post(
            state_with(generator.clone()),
            json!({"action": "conversation", "userInput": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_conversation_failure_is_500_with_generic_message() {
        let (status, body) = post(
            state_with(FakeGenerator::failing()),
            json!({"action": "conversation", "userInput": "hello"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate AI response");
    }

    #[tokio::test]
    async fn test_vocabulary_happy_path() {
        let generator = FakeGenerator::replying(
            r#"Sure: [{"word": "arduous", "definition": "hard", "exampleSentence": "An arduous hike."}]"#,
        );
        let (status, body) = post(
            state_with(generator),
            json!({"action": "vocabulary", "skillLevel": "Advanced"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["word"], "arduous");
        assert!(body[0].get("exampleSentence").is_some());
    }

    #[tokio::test]
    async fn test_vocabulary_missing_level_is_400() {
        let generator = FakeGenerator::replying("unused");
        let (status, _) = post(state_with(generator.clone()), json!({"action": "vocabulary"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_vocabulary_failure_is_500() {
        let (status, body) = post(
            state_with(FakeGenerator::failing()),
            json!({"action": "vocabulary", "skillLevel": "Beginner"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate word exercises");
    }

    #[tokio::test]
    async fn test_grammar_never_fails_even_with_broken_generator() {
        let (status, body) = post(
            state_with(FakeGenerator::failing()),
            json!({"action": "grammar", "skillLevel": "Beginner"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"], "Complete the sentence: I ___ a student.");
        assert_eq!(body["correctAnswer"], "am");
    }

    #[tokio::test]
    async fn test_invalid_skill_level_is_400() {
        let generator = FakeGenerator::replying("unused");
        let (status, body) = post(
            state_with(generator.clone()),
            json!({"action": "grammar", "skillLevel": "expert"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid skill level");
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_filler_words_happy_path() {
        let generator = FakeGenerator::replying("unused");
        let (status, body) = post(
            state_with(generator.clone()),
            json!({"action": "fillerWords", "userInput": "um I like uh going to the store"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fillerCount"], 3);
        assert_eq!(body["fillersUsed"], json!(["um", "like", "uh"]));
        assert_eq!(body["correctedText"], "I going to the store");
        // Pure and synchronous: no generation call happens.
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_filler_words_missing_input_is_400() {
        let (status, _) = post(
            state_with(FakeGenerator::replying("unused")),
            json!({"action": "fillerWords"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_on_tutor_endpoint_is_405_with_allow_header() {
        let router = build_router(state_with(FakeGenerator::replying("unused")));

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/language-tutor")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }

    #[tokio::test]
    async fn test_health_probe() {
        let router = build_router(state_with(FakeGenerator::replying("unused")));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
