//! Integration tests with a mock HTTP server and in-process fake transports

mod fake_transport;
mod inference_client;
mod mock_server;
