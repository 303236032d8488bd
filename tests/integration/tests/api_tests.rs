//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

const API: &str = "/api/v1";

/// Register a fresh user and return its auth payload
async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server
        .post(&format!("{API}/auth/register"), &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a question as the given user and return it
async fn create_question(
    server: &TestServer,
    token: &str,
    request: &CreateQuestionRequest,
) -> QuestionResponse {
    let response = server
        .post_auth(&format!("{API}/questions"), token, request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Post an answer to a question and return it
async fn create_answer(server: &TestServer, token: &str, question_id: &str) -> AnswerResponse {
    let response = server
        .post_auth(
            &format!("{API}/questions/{question_id}/answers"),
            token,
            &CreateAnswerRequest::unique(),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post(&format!("{API}/auth/register"), &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.reputation, 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server
        .post(&format!("{API}/auth/register"), &request)
        .await
        .unwrap();

    // Duplicates are a 400 with a specific message, not a 409
    let response = server
        .post(&format!("{API}/auth/register"), &request)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.message, "Conflict: Email already registered");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .post(&format!("{API}/auth/register"), &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server
        .post(&format!("{API}/auth/login"), &login_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server
        .post(&format!("{API}/auth/login"), &login_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .post(
            &format!("{API}/auth/refresh"),
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get_auth(&format!("{API}/users/@me"), &auth.access_token)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.email, auth.user.email);
}

#[tokio::test]
async fn test_update_profile_bio() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .patch_auth(
            &format!("{API}/users/@me"),
            &auth.access_token,
            &serde_json::json!({ "bio": "Rust enthusiast" }),
        )
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.bio.as_deref(), Some("Rust enthusiast"));
}

#[tokio::test]
async fn test_get_public_profile_hides_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get(&format!("{API}/users/{}", auth.user.id))
        .await
        .unwrap();
    let body = response.text().await.unwrap();

    assert!(body.contains(&auth.user.username));
    assert!(!body.contains(&auth.user.email));
}

#[tokio::test]
async fn test_missing_auth_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get(&format!("{API}/users/@me")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Question Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_question() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let request = CreateQuestionRequest::unique();
    let question = create_question(&server, &auth.access_token, &request).await;

    assert_eq!(question.title, request.title);
    assert_eq!(question.views, 0);
    assert_eq!(question.score, 0);
    assert!(!question.closed);

    let response = server
        .get(&format!("{API}/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.id, question.id);
    assert!(detail.answers.is_empty());
}

#[tokio::test]
async fn test_question_validation_bounds() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    // Title below 10 characters
    let mut request = CreateQuestionRequest::unique();
    request.title = "Too short".to_string();
    let response = server
        .post_auth(&format!("{API}/questions"), &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    // Description below 20 characters
    let mut request = CreateQuestionRequest::unique();
    request.description = "Way too short".to_string();
    let response = server
        .post_auth(&format!("{API}/questions"), &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    // No tags
    let request = CreateQuestionRequest::with_tags(vec![]);
    let response = server
        .post_auth(&format!("{API}/questions"), &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    // Too many tags
    let request = CreateQuestionRequest::with_tags(vec!["a", "b", "c", "d", "e", "f"]);
    let response = server
        .post_auth(&format!("{API}/questions"), &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tags_are_normalized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let request = CreateQuestionRequest::with_tags(vec!["  Rust  ", "ASYNC"]);
    let question = create_question(&server, &auth.access_token, &request).await;

    assert_eq!(question.tags, vec!["rust", "async"]);
}

#[tokio::test]
async fn test_view_count_skips_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let reader = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let path = format!("{API}/questions/{}", question.id);

    // Author's own view does not count
    let response = server.get_auth(&path, &author.access_token).await.unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.views, 0);

    // Another user's view counts
    server.get_auth(&path, &reader.access_token).await.unwrap();

    let response = server.get_auth(&path, &author.access_token).await.unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.views, 1);
}

#[tokio::test]
async fn test_update_question_author_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let other = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let path = format!("{API}/questions/{}", question.id);
    let update = UpdateQuestionRequest {
        title: Some("An updated question title".to_string()),
        ..Default::default()
    };

    // Non-author gets 403
    let response = server
        .patch_auth(&path, &other.access_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Author succeeds
    let response = server
        .patch_auth(&path, &author.access_token, &update)
        .await
        .unwrap();
    let updated: QuestionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "An updated question title");
}

#[tokio::test]
async fn test_closed_question_rejects_answers() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;

    let response = server
        .patch_auth_empty(
            &format!("{API}/questions/{}/close", question.id),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/questions/{}/answers", question.id),
            &answerer.access_token,
            &CreateAnswerRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deleted_question_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let question =
        create_question(&server, &auth.access_token, &CreateQuestionRequest::unique()).await;
    let path = format!("{API}/questions/{}", question.id);

    let response = server.delete_auth(&path, &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_id_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("{API}/questions/not-a-snowflake"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_questions_by_tag() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let tag = format!("tagfilter{}", unique_suffix());
    let request = CreateQuestionRequest::with_tags(vec![&tag]);
    let question = create_question(&server, &auth.access_token, &request).await;

    create_question(&server, &auth.access_token, &CreateQuestionRequest::unique()).await;

    let response = server
        .get(&format!("{API}/questions?tags={tag}"))
        .await
        .unwrap();
    let listing: QuestionListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.pagination.total, 1);
    assert_eq!(listing.data[0].id, question.id);
}

#[tokio::test]
async fn test_list_questions_pagination_flags() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let tag = format!("pagetest{}", unique_suffix());
    for _ in 0..3 {
        let request = CreateQuestionRequest::with_tags(vec![&tag]);
        create_question(&server, &auth.access_token, &request).await;
    }

    let response = server
        .get(&format!("{API}/questions?tags={tag}&page=1&limit=2"))
        .await
        .unwrap();
    let listing: QuestionListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.data.len(), 2);
    assert_eq!(listing.pagination.pages, 2);
    assert!(listing.pagination.has_next);
    assert!(!listing.pagination.has_prev);

    let response = server
        .get(&format!("{API}/questions?tags={tag}&page=2&limit=2"))
        .await
        .unwrap();
    let listing: QuestionListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.data.len(), 1);
    assert!(!listing.pagination.has_next);
    assert!(listing.pagination.has_prev);

    // page=0 normalizes to the first page
    let response = server
        .get(&format!("{API}/questions?tags={tag}&page=0&limit=2"))
        .await
        .unwrap();
    let listing: QuestionListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.pagination.current, 1);
}

#[tokio::test]
async fn test_unknown_sort_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("{API}/questions?sort=hotness"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sort_by_votes_uses_raw_upvotes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;

    let tag = format!("sorttest{}", unique_suffix());

    // q_mixed collects more raw upvotes but a worse net score than q_clean
    let q_mixed = create_question(
        &server,
        &author.access_token,
        &CreateQuestionRequest::with_tags(vec![&tag]),
    )
    .await;
    let q_clean = create_question(
        &server,
        &author.access_token,
        &CreateQuestionRequest::with_tags(vec![&tag]),
    )
    .await;

    let voters = [
        register_user(&server).await,
        register_user(&server).await,
        register_user(&server).await,
    ];

    // q_mixed: 2 up, 2 down (net 0)
    for voter in &voters[..2] {
        server
            .post_auth(
                &format!("{API}/questions/{}/vote", q_mixed.id),
                &voter.access_token,
                &VoteRequest::up(),
            )
            .await
            .unwrap();
    }
    let extra = register_user(&server).await;
    for voter in [&voters[2], &extra] {
        server
            .post_auth(
                &format!("{API}/questions/{}/vote", q_mixed.id),
                &voter.access_token,
                &VoteRequest::down(),
            )
            .await
            .unwrap();
    }

    // q_clean: 1 up (net 1)
    server
        .post_auth(
            &format!("{API}/questions/{}/vote", q_clean.id),
            &voters[0].access_token,
            &VoteRequest::up(),
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("{API}/questions?tags={tag}&sort=votes"))
        .await
        .unwrap();
    let listing: QuestionListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.data.len(), 2);
    assert_eq!(listing.data[0].id, q_mixed.id);
    assert_eq!(listing.data[1].id, q_clean.id);
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_toggle_semantics() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let voter = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let path = format!("{API}/questions/{}/vote", question.id);

    // First upvote lands
    let response = server
        .post_auth(&path, &voter.access_token, &VoteRequest::up())
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.upvotes, 1);
    assert_eq!(vote.your_vote.as_deref(), Some("up"));

    // Same direction again retracts
    let response = server
        .post_auth(&path, &voter.access_token, &VoteRequest::up())
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.upvotes, 0);
    assert_eq!(vote.downvotes, 0);
    assert!(vote.your_vote.is_none());

    // Up then down switches in one step
    server
        .post_auth(&path, &voter.access_token, &VoteRequest::up())
        .await
        .unwrap();
    let response = server
        .post_auth(&path, &voter.access_token, &VoteRequest::down())
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.upvotes, 0);
    assert_eq!(vote.downvotes, 1);
    assert_eq!(vote.vote_score, -1);
    assert_eq!(vote.your_vote.as_deref(), Some("down"));
}

#[tokio::test]
async fn test_self_vote_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let path = format!("{API}/questions/{}/vote", question.id);

    let response = server
        .post_auth(&path, &author.access_token, &VoteRequest::up())
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();

    // The ledger is unchanged
    let response = server
        .get(&format!("{API}/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.upvotes, 0);
    assert_eq!(detail.score, 0);
}

// ============================================================================
// Answer and Acceptance Tests
// ============================================================================

#[tokio::test]
async fn test_answer_notifies_question_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let answer = create_answer(&server, &answerer.access_token, &question.id).await;

    assert_eq!(answer.question_id, question.id);
    assert!(!answer.accepted);

    let response = server
        .get_auth(&format!("{API}/notifications"), &author.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(inbox.unread_count, 1);
    assert_eq!(inbox.data[0].kind, "answer");
    assert_eq!(inbox.data[0].question_id.as_deref(), Some(question.id.as_str()));
}

#[tokio::test]
async fn test_self_answer_does_not_notify() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    create_answer(&server, &author.access_token, &question.id).await;

    let response = server
        .get_auth(&format!("{API}/notifications"), &author.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(inbox.unread_count, 0);
}

#[tokio::test]
async fn test_accept_answer_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let answer = create_answer(&server, &answerer.access_token, &question.id).await;

    // Only the question author may accept
    let response = server
        .post_auth_empty(
            &format!("{API}/answers/{}/accept", answer.id),
            &answerer.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("{API}/answers/{}/accept", answer.id),
            &author.access_token,
        )
        .await
        .unwrap();
    let accepted: AnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(accepted.accepted);
    assert!(accepted.accepted_at.is_some());

    // The question carries the back-reference
    let response = server
        .get(&format!("{API}/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.accepted_answer_id.as_deref(), Some(answer.id.as_str()));

    // The answer author got exactly one acceptance notification
    let response = server
        .get_auth(&format!("{API}/notifications"), &answerer.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let acceptance_count = inbox
        .data
        .iter()
        .filter(|n| n.kind == "accepted_answer")
        .count();
    assert_eq!(acceptance_count, 1);
}

#[tokio::test]
async fn test_reaccept_same_answer_is_noop() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let answer = create_answer(&server, &answerer.access_token, &question.id).await;
    let accept_path = format!("{API}/answers/{}/accept", answer.id);

    server
        .post_auth_empty(&accept_path, &author.access_token)
        .await
        .unwrap();
    let response = server
        .post_auth_empty(&accept_path, &author.access_token)
        .await
        .unwrap();
    let accepted: AnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(accepted.accepted);

    // No duplicate notification fires
    let response = server
        .get_auth(&format!("{API}/notifications"), &answerer.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let acceptance_count = inbox
        .data
        .iter()
        .filter(|n| n.kind == "accepted_answer")
        .count();
    assert_eq!(acceptance_count, 1);
}

#[tokio::test]
async fn test_accept_switch_clears_previous() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let first_answerer = register_user(&server).await;
    let second_answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let first = create_answer(&server, &first_answerer.access_token, &question.id).await;
    let second = create_answer(&server, &second_answerer.access_token, &question.id).await;

    server
        .post_auth_empty(
            &format!("{API}/answers/{}/accept", first.id),
            &author.access_token,
        )
        .await
        .unwrap();
    server
        .post_auth_empty(
            &format!("{API}/answers/{}/accept", second.id),
            &author.access_token,
        )
        .await
        .unwrap();

    // Back-reference moved to the second answer
    let response = server
        .get(&format!("{API}/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.accepted_answer_id.as_deref(), Some(second.id.as_str()));

    // The first answer lost its accepted mark
    let response = server
        .get(&format!("{API}/answers/{}", first.id))
        .await
        .unwrap();
    let first_now: AnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!first_now.accepted);
}

#[tokio::test]
async fn test_deleted_answer_hidden_from_listing_but_fetchable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let answer = create_answer(&server, &answerer.access_token, &question.id).await;

    let response = server
        .delete_auth(
            &format!("{API}/answers/{}", answer.id),
            &answerer.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone from the question's answer list
    let response = server
        .get(&format!("{API}/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.answers.is_empty());

    // Still resolvable by ID
    let response = server
        .get(&format!("{API}/answers/{}", answer.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_deleting_accepted_answer_clears_back_reference() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    let answer = create_answer(&server, &answerer.access_token, &question.id).await;

    server
        .post_auth_empty(
            &format!("{API}/answers/{}/accept", answer.id),
            &author.access_token,
        )
        .await
        .unwrap();
    server
        .delete_auth(
            &format!("{API}/answers/{}", answer.id),
            &answerer.access_token,
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("{API}/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.accepted_answer_id.is_none());
}

#[tokio::test]
async fn test_answer_validation_bounds() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;

    let response = server
        .post_auth(
            &format!("{API}/questions/{}/answers", question.id),
            &answerer.access_token,
            &CreateAnswerRequest {
                content: "short".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_notification_read_tracking() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    create_answer(&server, &answerer.access_token, &question.id).await;

    let response = server
        .get_auth(&format!("{API}/notifications"), &author.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let notification_id = inbox.data[0].id.clone();

    // Mark the single notification read
    let response = server
        .put_auth(
            &format!("{API}/notifications/{notification_id}/read"),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(
            &format!("{API}/notifications?unread=true"),
            &author.access_token,
        )
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.unread_count, 0);
    assert!(inbox.data.is_empty());
}

#[tokio::test]
async fn test_notifications_are_recipient_scoped() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    create_answer(&server, &answerer.access_token, &question.id).await;

    let response = server
        .get_auth(&format!("{API}/notifications"), &author.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let notification_id = inbox.data[0].id.clone();

    // Another user cannot touch the author's notification
    let response = server
        .delete_auth(
            &format!("{API}/notifications/{notification_id}"),
            &answerer.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_mark_all_notifications_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await;
    let answerer = register_user(&server).await;

    let question =
        create_question(&server, &author.access_token, &CreateQuestionRequest::unique()).await;
    create_answer(&server, &answerer.access_token, &question.id).await;
    create_answer(&server, &answerer.access_token, &question.id).await;

    let response = server
        .put_auth(&format!("{API}/notifications/read-all"), &author.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["updated"], 2);

    let response = server
        .get_auth(&format!("{API}/notifications"), &author.access_token)
        .await
        .unwrap();
    let inbox: NotificationListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.unread_count, 0);
}
