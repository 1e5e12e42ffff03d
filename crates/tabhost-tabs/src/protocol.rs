//! Wire protocol between the chrome (UI) and the tab controller.
//!
//! Requests arrive as flat JSON objects posted by the chrome's IPC bridge:
//! `{"requestId": 7, "command": "switch-tab", "id": "tab-..."}`. Every
//! request gets exactly one `ResponseEnvelope` echoing its `requestId`.
//! `UiEvent`s are pushed without a request.

use serde::{Deserialize, Serialize};
use tabhost_common::TabId;

/// Commands the UI may issue.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    CreateTab {
        #[serde(default)]
        url: Option<String>,
    },
    SwitchTab {
        id: TabId,
    },
    CloseTab {
        id: TabId,
    },
    Navigate {
        url: String,
    },
    Back,
    Forward,
    Reload,
    ReportChromeHeight {
        height: f64,
    },
    ReportSidePanelWidth {
        width: f64,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateTab { .. } => "create-tab",
            Command::SwitchTab { .. } => "switch-tab",
            Command::CloseTab { .. } => "close-tab",
            Command::Navigate { .. } => "navigate",
            Command::Back => "back",
            Command::Forward => "forward",
            Command::Reload => "reload",
            Command::ReportChromeHeight { .. } => "report-chrome-height",
            Command::ReportSidePanelWidth { .. } => "report-side-panel-width",
        }
    }
}

/// A command plus the id the UI uses to match the response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub request_id: u64,
    #[serde(flatten)]
    pub command: Command,
}

impl Request {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTabResponse {
    pub success: bool,
    pub id: Option<TabId>,
    pub url: String,
}

/// `{success}` for switch-tab, back/forward/reload and layout reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTabResponse {
    pub success: bool,
    pub next_active_id: Option<TabId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigateResponse {
    pub success: bool,
    pub url: String,
}

/// Response to any command. Serializes as the bare inner object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    CreateTab(CreateTabResponse),
    CloseTab(CloseTabResponse),
    Navigate(NavigateResponse),
    Ack(AckResponse),
}

impl Response {
    pub fn ack(success: bool) -> Self {
        Response::Ack(AckResponse { success })
    }

    pub fn success(&self) -> bool {
        match self {
            Response::CreateTab(r) => r.success,
            Response::CloseTab(r) => r.success,
            Response::Navigate(r) => r.success,
            Response::Ack(r) => r.success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub request_id: u64,
    pub response: Response,
}

// =============================================================================
// EVENTS
// =============================================================================

/// Sparse metadata update for one tab. Absent fields are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPatch {
    pub id: TabId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_loading: Option<bool>,
}

impl TabPatch {
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn loading(id: TabId, is_loading: bool) -> Self {
        Self {
            is_loading: Some(is_loading),
            ..Self::new(id)
        }
    }
}

/// Events pushed from the controller to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum UiEvent {
    TabUpdated(TabPatch),
    TabSwitched { id: TabId },
}

impl UiEvent {
    /// Listener name on the JS side.
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::TabUpdated(_) => "tab-updated",
            UiEvent::TabSwitched { .. } => "tab-switched",
        }
    }

    /// The event body without its tag.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            UiEvent::TabUpdated(patch) => {
                serde_json::to_value(patch).unwrap_or(serde_json::Value::Null)
            }
            UiEvent::TabSwitched { id } => serde_json::json!({ "id": id }),
        }
    }

    pub fn tab_id(&self) -> &TabId {
        match self {
            UiEvent::TabUpdated(patch) => &patch.id,
            UiEvent::TabSwitched { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_flat_requests() {
        let req = Request::parse(r#"{"requestId":3,"command":"switch-tab","id":"tab-1"}"#).unwrap();
        assert_eq!(req.request_id, 3);
        assert_eq!(
            req.command,
            Command::SwitchTab {
                id: TabId::from("tab-1")
            }
        );
    }

    #[test]
    fn create_tab_url_is_optional() {
        let req = Request::parse(r#"{"requestId":1,"command":"create-tab"}"#).unwrap();
        assert_eq!(req.command, Command::CreateTab { url: None });

        let req =
            Request::parse(r#"{"requestId":2,"command":"create-tab","url":"https://x"}"#).unwrap();
        assert_eq!(
            req.command,
            Command::CreateTab {
                url: Some("https://x".into())
            }
        );
    }

    #[test]
    fn unit_commands_tolerate_extra_fields() {
        let req = Request::parse(r#"{"requestId":9,"command":"reload","stray":true}"#).unwrap();
        assert_eq!(req.command, Command::Reload);
    }

    #[test]
    fn layout_reports_accept_integers_and_fractions() {
        let req =
            Request::parse(r#"{"requestId":4,"command":"report-chrome-height","height":96}"#)
                .unwrap();
        assert_eq!(req.command, Command::ReportChromeHeight { height: 96.0 });
        let req = Request::parse(
            r#"{"requestId":5,"command":"report-side-panel-width","width":240.5}"#,
        )
        .unwrap();
        assert_eq!(req.command, Command::ReportSidePanelWidth { width: 240.5 });
    }

    #[test]
    fn rejects_unknown_commands_and_missing_ids() {
        assert!(Request::parse(r#"{"requestId":1,"command":"explode"}"#).is_err());
        assert!(Request::parse(r#"{"command":"reload"}"#).is_err());
        assert!(Request::parse(r#"{"requestId":1,"command":"switch-tab"}"#).is_err());
    }

    #[test]
    fn command_names_match_wire_tags() {
        let cmd = Command::ReportSidePanelWidth { width: 1.0 };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["command"], cmd.name());
    }

    #[test]
    fn responses_serialize_flat() {
        let close = Response::CloseTab(CloseTabResponse {
            success: true,
            next_active_id: None,
        });
        assert_eq!(
            serde_json::to_value(&close).unwrap(),
            json!({"success": true, "nextActiveId": null})
        );
        assert_eq!(
            serde_json::to_value(Response::ack(false)).unwrap(),
            json!({"success": false})
        );
    }

    #[test]
    fn envelope_echoes_request_id() {
        let env = ResponseEnvelope {
            request_id: 12,
            response: Response::Navigate(NavigateResponse {
                success: true,
                url: "https://y".into(),
            }),
        };
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"requestId": 12, "response": {"success": true, "url": "https://y"}})
        );
    }

    #[test]
    fn patch_omits_unchanged_fields() {
        let event = UiEvent::TabUpdated(TabPatch {
            title: Some("Docs".into()),
            ..TabPatch::new(TabId::from("tab-1"))
        });
        assert_eq!(event.kind(), "tab-updated");
        assert_eq!(event.payload(), json!({"id": "tab-1", "title": "Docs"}));

        let loading = UiEvent::TabUpdated(TabPatch::loading(TabId::from("tab-1"), true));
        assert_eq!(loading.payload(), json!({"id": "tab-1", "isLoading": true}));
    }

    #[test]
    fn switched_event_payload() {
        let event = UiEvent::TabSwitched {
            id: TabId::from("tab-2"),
        };
        assert_eq!(event.kind(), "tab-switched");
        assert_eq!(event.payload(), json!({"id": "tab-2"}));
        assert_eq!(event.tab_id(), &TabId::from("tab-2"));
    }

    #[test]
    fn tagged_event_form() {
        let event = UiEvent::TabSwitched {
            id: TabId::from("tab-2"),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"event": "tab-switched", "id": "tab-2"}));
        let back: UiEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }
}
