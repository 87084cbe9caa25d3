// End-to-end tests for the localize backend API
//
// Each test gets its own router bound to an ephemeral port and its own
// wiremock server standing in for the Sarvam API, so tests run in parallel
// without sharing upstream expectations.

mod test_health;
