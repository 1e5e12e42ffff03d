//! Chrome requests in, responses out.

use tabhost_tabs::{Command, Request, Response, ResponseEnvelope, UiMirror};

use super::core::TabhostApp;

impl TabhostApp {
    /// Handle every request the chrome posted since the last poll.
    pub(super) fn poll_chrome_requests(&mut self) {
        let Some(chrome) = &self.chrome else {
            return;
        };
        for body in chrome.drain_requests() {
            self.dispatch_request(&body);
        }
    }

    fn dispatch_request(&mut self, body: &str) {
        let request = match Request::parse(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed chrome request");
                // Still answer so the chrome's promise settles.
                if let Some(request_id) = request_id_of(body) {
                    self.send_response(&ResponseEnvelope {
                        request_id,
                        response: Response::ack(false),
                    });
                }
                return;
            }
        };

        let Some(tabs) = &mut self.tabs else {
            tracing::warn!(command = request.command.name(), "Request before initialization");
            return;
        };

        let command = request.command.clone();
        let envelope = tabs.handle_request(request);
        tracing::debug!(
            command = command.name(),
            request_id = envelope.request_id,
            success = envelope.response.success(),
            "Chrome request handled"
        );

        apply_to_mirror(&mut self.mirror, &command, &envelope.response);
        self.send_response(&envelope);
    }

    fn send_response(&self, envelope: &ResponseEnvelope) {
        let Some(chrome) = &self.chrome else {
            return;
        };
        let payload = match serde_json::to_value(envelope) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response");
                return;
            }
        };
        if let Err(e) = chrome.dispatch("response", &payload) {
            tracing::warn!(error = %e, "Failed to deliver response to chrome");
        }
    }
}

fn request_id_of(body: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("requestId")?
        .as_u64()
}

/// Keep the app's own mirror in step with responses the chrome receives.
pub(super) fn apply_to_mirror(mirror: &mut UiMirror, command: &Command, response: &Response) {
    match (command, response) {
        (_, Response::CreateTab(r)) => mirror.apply_create_response(r),
        (Command::SwitchTab { id }, Response::Ack(r)) => mirror.apply_switch_response(id, r),
        (Command::CloseTab { id }, Response::CloseTab(r)) => {
            // Replacement tabs are the chrome's call.
            mirror.apply_close_response(id, r);
        }
        (_, Response::Navigate(r)) => mirror.apply_navigate_response(r),
        _ => {}
    }
}
