use crate::engine::mission::scroll::{MissionScroll, scroll_fraction};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::mission::MISSION_STAGES;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the host page.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    /// Notifications queued since the last flush, oldest first.
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing the postMessage bridge for iframe deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .init_resource::<MissionScroll>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages).chain(),
            )
            .add_systems(PostUpdate, send_outgoing_messages);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Cheap filter; full parsing happens on the Bevy side.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // JS owns the closure from here on.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message received from the host page.
#[derive(Event)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Parse and dispatch queued host messages. Mission systems run after this
/// so a scroll report is reflected in the same frame.
pub fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut mission_scroll: ResMut<MissionScroll>,
) {
    for event in events.read() {
        // Scroll reports arrive once per frame while scrolling.
        debug!("Received RPC: {}", event.content);

        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let before = mission_scroll.state;
                let response = handle_rpc_request(
                    &request,
                    mission_scroll.bypass_change_detection(),
                    current_fps(&diagnostics),
                );
                if mission_scroll.state != before {
                    mission_scroll.set_changed();
                }

                if let Some(response) = response {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Unparseable RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

fn current_fps(diagnostics: &DiagnosticsStore) -> f32 {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32
}

/// Run one request against the mission state.
///
/// Notifications (no `id`) are still executed, but never answered.
pub fn handle_rpc_request(
    request: &RpcRequest,
    mission_scroll: &mut MissionScroll,
    fps: f32,
) -> Option<RpcResponse> {
    if request.jsonrpc != "2.0" {
        warn!("Rejected RPC with version {:?}", request.jsonrpc);
        let id = request.id.clone()?;
        return Some(create_error_response(
            id,
            -32600,
            "Invalid request",
            Some(serde_json::json!({"jsonrpc": request.jsonrpc})),
        ));
    }

    let result = match request.method.as_str() {
        "scroll_changed" => handle_scroll_changed(&request.params, mission_scroll),
        "get_scroll_state" => handle_get_scroll_state(mission_scroll),
        "get_mission_stages" => handle_get_mission_stages(),
        "get_fps" => Ok(serde_json::json!({ "fps": fps })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            let id = request.id.clone()?;
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    if let Err(error) = &result {
        warn!("RPC {} failed: {}", request.method, error.message);
    }

    // Only generate responses for requests with IDs.
    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Either a ready-made fraction or the raw page measurements.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(untagged)]
enum ScrollChangedParams {
    Fraction {
        fraction: f32,
    },
    Document {
        scroll_y: f32,
        scroll_height: f32,
        viewport_height: f32,
    },
}

impl ScrollChangedParams {
    fn fraction(self) -> f32 {
        match self {
            Self::Fraction { fraction } => fraction,
            Self::Document {
                scroll_y,
                scroll_height,
                viewport_height,
            } => scroll_fraction(scroll_y, scroll_height, viewport_height),
        }
    }
}

fn handle_scroll_changed(
    params: &serde_json::Value,
    mission_scroll: &mut MissionScroll,
) -> Result<serde_json::Value, RpcError> {
    let scroll_params = serde_json::from_value::<ScrollChangedParams>(params.clone())
        .map_err(|_| {
            RpcError::invalid_params(
                "Expected 'fraction' or 'scroll_y', 'scroll_height' and 'viewport_height'",
            )
        })?;

    let fraction = scroll_params.fraction();
    if mission_scroll.state.scroll_fraction != fraction {
        mission_scroll.set_fraction(fraction);
    }

    to_result(&mission_scroll.state)
}

fn handle_get_scroll_state(mission_scroll: &MissionScroll) -> Result<serde_json::Value, RpcError> {
    to_result(&mission_scroll.state)
}

fn handle_get_mission_stages() -> Result<serde_json::Value, RpcError> {
    let stages = serde_json::to_value(MISSION_STAGES)
        .map_err(|e| RpcError::internal_error(&format!("Failed to encode stages: {e}")))?;

    Ok(serde_json::json!({
        "count": MISSION_STAGES.len(),
        "stages": stages,
    }))
}

fn to_result<T: Serialize>(value: &T) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::internal_error(&e.to_string()))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
pub fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Responses after notifications so state updates arrive first.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
