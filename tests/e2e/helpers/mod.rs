
pub use api_client::TestClient;
pub use test_server::TestApp;
