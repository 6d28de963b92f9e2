#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Method, Response, Server, StatusCode};

use asset_verify_adapters::{InventoryAdapter, SubmissionAdapter};
use asset_verify_core::{ClockPort, PortError, VerificationController};

pub struct TestClock;

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(1_739_750_400_000)
    }
}

pub type TestController = VerificationController<InventoryAdapter, SubmissionAdapter, TestClock>;

pub fn bundled_controller() -> (TestController, SubmissionAdapter) {
    let submission = SubmissionAdapter::recording();
    let controller =
        VerificationController::new(InventoryAdapter::bundled(), submission.clone(), TestClock);
    (controller, submission)
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: String,
}

pub type Route = fn(&Method, &str, &str) -> (u16, String);

/// Serves `max_requests` requests on an ephemeral port, answering each
/// through `route` and recording what was received.
pub fn spawn_mock_server(
    route: Route,
    max_requests: usize,
) -> (String, Arc<Mutex<Vec<RecordedRequest>>>) {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}", server.server_addr());
    let calls = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);

    thread::spawn(move || {
        for _ in 0..max_requests {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let method = req.method().clone();
            let path = req.url().to_owned();
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);

            let (code, payload) = route(&method, &path, &body);
            if let Ok(mut g) = seen.lock() {
                g.push(RecordedRequest { method, path, body });
            }
            let response = Response::from_string(payload).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    (addr, calls)
}
