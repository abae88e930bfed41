/*
[INPUT]:  Task list screen backed by a real HTTP client and mock server
[OUTPUT]: End-to-end checks of command reconciliation and error messages
[POS]:    Integration test layer - full screen verification
[UPDATE]: When adding commands or changing reconciliation rules
*/

use rstest::rstest;
use std::time::Duration;
use tasklist_adapter::{ClientConfig, Task, TaskId, TasklistClient};
use tasklist_screen::{CommandError, TaskListScreen};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({ "id": id, "title": title, "completed": completed })
}

fn task(id: i64, title: &str, completed: bool) -> Task {
    Task::new(id, title, completed)
}

async fn mount_list(server: &MockServer, tasks: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .mount(server)
        .await;
}

async fn activated_screen(server: &MockServer) -> TaskListScreen<TasklistClient> {
    let client = TasklistClient::new(&server.uri()).expect("client init");
    let mut screen = TaskListScreen::new(client);
    assert_ok!(screen.activate().await);
    screen
}

/// Fetch one task, add a second; both appear in server order
#[tokio::test]
async fn test_fetch_then_add_preserves_order() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "A", false)])).await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(serde_json::json!({ "title": "B" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(2, "B", false)))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;
    screen.set_new_title("B");
    assert_ok!(screen.add_task().await);

    assert_eq!(screen.state().tasks(), &[task(1, "A", false), task(2, "B", false)]);
    assert_eq!(screen.state().error(), None);
}

/// Blank titles never reach the server
#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\n  ")]
#[tokio::test]
async fn test_blank_titles_rejected_locally(#[case] title: &str) {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "A", false)])).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;

    screen.set_new_title(title);
    let err = assert_err!(screen.add_task().await);
    assert!(matches!(err, CommandError::EmptyTitle));
    assert_eq!(screen.state().error(), Some("Task title cannot be empty"));

    screen.start_edit(TaskId::int(1), "A");
    screen.set_edit_title(title);
    let err = assert_err!(screen.update_task().await);
    assert!(matches!(err, CommandError::EmptyTitle));
    assert_eq!(screen.state().error(), Some("Task title cannot be empty"));
    assert_eq!(screen.state().tasks(), &[task(1, "A", false)]);
}

/// Update adopts every field the server echoes back
#[tokio::test]
async fn test_update_replaces_entry_with_server_response() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(5, "Old", false)])).await;
    Mock::given(method("PUT"))
        .and(path("/tasks/5"))
        .and(body_json(serde_json::json!({ "title": "X" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(5, "X", true)))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;
    screen.start_edit(TaskId::int(5), "Old");
    screen.set_edit_title("X");
    assert_ok!(screen.update_task().await);

    assert_eq!(screen.state().tasks(), &[task(5, "X", true)]);
    assert!(screen.state().edit().is_none());
}

/// A toggle answered with 204 and no body still flips the local flag
#[tokio::test]
async fn test_toggle_accepts_no_content_response() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "A", false)])).await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .and(body_json(serde_json::json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;

    assert_ok!(screen.toggle_completion(&TaskId::int(1), false).await);
    assert_eq!(screen.state().tasks(), &[task(1, "A", true)]);
    assert_eq!(screen.state().error(), None);
}

/// Toggle sends the negated flag and ignores the response body
#[tokio::test]
async fn test_toggle_uses_local_negation() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "A", false)])).await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .and(body_json(serde_json::json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(1, "A (done)", true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .and(body_json(serde_json::json!({ "completed": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(1, "A", false)))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;
    let id = TaskId::int(1);

    assert_ok!(screen.toggle_completion(&id, false).await);
    assert_eq!(screen.state().task(&id), Some(&task(1, "A", true)));

    assert_ok!(screen.toggle_completion(&id, true).await);
    assert_eq!(screen.state().task(&id), Some(&task(1, "A", false)));
}

/// Delete removes exactly the deleted entry
#[tokio::test]
async fn test_delete_removes_entry() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        serde_json::json!([task_json(1, "A", false), task_json(2, "B", true)]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;
    assert_ok!(screen.delete_task(&TaskId::int(1)).await);

    assert_eq!(screen.state().tasks(), &[task(2, "B", true)]);
}

/// Delete timing out reports no response and keeps the task
#[tokio::test]
async fn test_delete_without_response_keeps_task() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "A", false)])).await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout: Duration::from_millis(300),
        connect_timeout: Duration::from_millis(300),
    };
    let client = TasklistClient::with_config(config, &server.uri()).expect("client init");
    let mut screen = TaskListScreen::new(client);
    assert_ok!(screen.activate().await);

    assert_err!(screen.delete_task(&TaskId::int(1)).await);

    assert_eq!(screen.state().error(), Some("No response from server"));
    assert_eq!(screen.state().tasks(), &[task(1, "A", false)]);
}

/// Server-supplied messages are shown, otherwise the operation default
#[tokio::test]
async fn test_error_messages_from_server() {
    let server = MockServer::start().await;
    mount_list(&server, serde_json::json!([task_json(1, "A", false)])).await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "message": "Title too long" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let mut screen = activated_screen(&server).await;

    screen.set_new_title("A very long title");
    assert_err!(screen.add_task().await);
    assert_eq!(screen.state().error(), Some("Title too long"));
    assert_eq!(screen.state().new_title(), "A very long title");

    assert_err!(screen.toggle_completion(&TaskId::int(1), false).await);
    assert_eq!(screen.state().error(), Some("Failed to toggle task completion"));
    assert_eq!(screen.state().tasks(), &[task(1, "A", false)]);
}

/// An unreachable service leaves an empty list and a banner on activation
#[tokio::test]
async fn test_activate_against_unreachable_service() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = TasklistClient::new(&format!("http://{addr}")).expect("client init");
    let mut screen = TaskListScreen::new(client);

    assert_err!(screen.activate().await);
    assert!(screen.state().tasks().is_empty());
    assert_eq!(screen.state().error(), Some("No response from server"));
}
