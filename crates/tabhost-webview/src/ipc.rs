//! IPC transport between the chrome's JavaScript and Rust.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the chrome calls `window.tabhost.invoke(command, args)`,
//!   which posts `{requestId, command, ...args}` through `window.ipc.postMessage`
//!   and returns a promise resolved by the matching response.
//! - **Rust -> JS**: Rust evaluates `window.tabhost._dispatch(kind, payload)`
//!   for responses (`kind = "response"`) and for pushed events.
//!
//! Only the chrome view gets this bridge; content tabs have no IPC.

/// Largest IPC body accepted from the chrome.
pub const MAX_IPC_BODY: usize = 64 * 1024;

/// JavaScript snippet that sets up the IPC bridge on the JS side.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.tabhost) { return; }
    var nextId = 1;
    var pending = {};
    var listeners = {};
    window.tabhost = {
        invoke: function(command, args) {
            var requestId = nextId++;
            return new Promise(function(resolve) {
                pending[requestId] = resolve;
                var message = Object.assign({}, args || {});
                message.requestId = requestId;
                message.command = command;
                window.ipc.postMessage(JSON.stringify(message));
            });
        },
        on: function(kind, callback) {
            (listeners[kind] = listeners[kind] || []).push(callback);
        },
        _dispatch: function(kind, payload) {
            if (kind === 'response') {
                var resolve = pending[payload.requestId];
                if (resolve) {
                    delete pending[payload.requestId];
                    resolve(payload.response);
                }
                return;
            }
            (listeners[kind] || []).forEach(function(cb) { cb(payload); });
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.tabhost._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// Accept only bounded JSON objects from the chrome.
pub fn is_valid_ipc_body(body: &str) -> bool {
    if body.len() > MAX_IPC_BODY {
        return false;
    }
    matches!(
        serde_json::from_str::<serde_json::Value>(body),
        Ok(serde_json::Value::Object(_))
    )
}
