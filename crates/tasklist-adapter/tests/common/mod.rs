/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tasklist-adapter tests

use tasklist_adapter::TasklistClient;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server root
pub fn client_for(server: &MockServer) -> TasklistClient {
    TasklistClient::new(&server.uri()).expect("client init")
}

/// Task JSON as the service would return it
pub fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({ "id": id, "title": title, "completed": completed })
}
