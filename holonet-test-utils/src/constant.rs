/// User agent sent by test clients.
pub const TEST_USER_AGENT: &str = "holonet-tests/0.0.0 (test)";
