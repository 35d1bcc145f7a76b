//! Unit converter MCP server
//!
//! Newline-delimited JSON-RPC 2.0 over stdin/stdout. One session per process.
//!
//! Tools:
//! - list_categories: List unit categories
//! - list_units: List the units of one category
//! - convert: Convert a value between two units of a category
//! - add_to_history: Record the last successful conversion
//! - history: Show recorded conversions

use std::env;
use std::num::NonZeroUsize;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use unitconv::display::format_result;
use unitconv::{
    ConversionRequest, CurrencyConfig, Engine, ErrorReport, ExchangeRateClient, History,
    MissingCredentials, Session, SharedRateSource, UnitCategory,
};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unitconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const HISTORY_LIMIT_VAR: &str = "UNITCONV_HISTORY_LIMIT";

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn parse(message: impl Into<String>) -> Self {
        McpError { code: -32700, message: message.into(), data: None }
    }

    fn method_not_found(method: &str) -> Self {
        McpError { code: -32601, message: format!("Method not found: {}", method), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn new(id: Option<JsonValue>, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(r), error: None },
            Err(e) => McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(e) },
        }
    }
}

/// Rate source for the process: the live client when configured, otherwise
/// one that fails every lookup with the configuration problem.
fn rate_source() -> SharedRateSource {
    let client = CurrencyConfig::from_env().and_then(|config| {
        info!(?config, "currency rates enabled");
        ExchangeRateClient::new(config)
    });
    match client {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "currency conversions disabled");
            Arc::new(MissingCredentials::new(e.to_string()))
        }
    }
}

fn history_limit(raw: Option<String>) -> Option<NonZeroUsize> {
    let raw = raw?;
    match raw.trim().parse::<NonZeroUsize>() {
        Ok(limit) => Some(limit),
        Err(_) => {
            warn!(value = %raw, "ignoring invalid {}", HISTORY_LIMIT_VAR);
            None
        }
    }
}

fn create_session() -> Session {
    let history = match history_limit(env::var(HISTORY_LIMIT_VAR).ok()) {
        Some(limit) => History::with_limit(limit),
        None => History::new(),
    };
    Session::with_history(Engine::new(rate_source()), history)
}

#[tokio::main]
async fn main() {
    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut session = create_session();

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "unitconv MCP server started");

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("client disconnected (EOF)");
                break;
            }
            Err(e) => {
                warn!(error = %e, "error reading input");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(response) = handle_line(&mut session, line).await else {
            continue;
        };

        let response_json = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize response");
                continue;
            }
        };
        if let Err(e) = write_line(&mut stdout, &response_json).await {
            warn!(error = %e, "error writing response");
            break;
        }
    }

    info!("server shutting down");
}

async fn write_line(stdout: &mut io::Stdout, line: &str) -> std::io::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

/// Parse and handle one protocol line. Notifications (no id) get no response.
async fn handle_line(session: &mut Session, line: &str) -> Option<McpResponse> {
    debug!(bytes = line.len(), "received");

    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "error parsing request");
            return Some(McpResponse::new(None, Err(McpError::parse(format!("Parse error: {}", e)))));
        }
    };

    let response = handle_request(session, &request).await;

    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

async fn handle_request(session: &mut Session, request: &McpRequest) -> McpResponse {
    debug!(method = %request.method, "processing");

    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(session, &request.params).await,

        _ => Err(McpError::method_not_found(&request.method)),
    };

    McpResponse::new(request.id.clone(), result)
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion with live currency rates"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Call 'list_categories' and 'list_units' to discover units, then 'convert'. Conversions are only recorded when 'add_to_history' is called."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let categories: Vec<&str> = UnitCategory::ALL.iter().map(|c| c.name()).collect();

    Ok(json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List the supported unit categories.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_units",
                "description": "List the units available in one category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": categories }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category. Currency uses live exchange rates.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": categories },
                        "value": { "type": "number" },
                        "from_unit": { "type": "string", "description": "Unit name, symbol or currency code" },
                        "to_unit": { "type": "string", "description": "Unit name, symbol or currency code" }
                    },
                    "required": ["category", "value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "add_to_history",
                "description": "Record the most recent successful conversion in the session history.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "history",
                "description": "Show the conversions recorded in this session, oldest first.",
                "inputSchema": { "type": "object", "properties": {} }
            }
        ]
    }))
}

async fn handle_tool_call(session: &mut Session, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "list_categories" => tool_list_categories(session),
        "list_units" => tool_list_units(session, &args),
        "convert" => tool_convert(session, &args).await,
        "add_to_history" => tool_add_to_history(session),
        "history" => tool_history(session),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn text_content(text: impl Into<String>) -> JsonValue {
    json!([{ "type": "text", "text": text.into() }])
}

fn str_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

fn category_arg(args: &JsonValue) -> Result<UnitCategory, McpError> {
    str_arg(args, "category")?.parse::<UnitCategory>().map_err(|e| McpError {
        code: -32602,
        message: e.to_string(),
        data: Some(json!({ "available": UnitCategory::ALL.iter().map(|c| c.name()).collect::<Vec<_>>() })),
    })
}

fn tool_list_categories(session: &Session) -> Result<JsonValue, McpError> {
    let names: Vec<&str> = session.engine().list_categories().iter().map(|c| c.name()).collect();
    Ok(json!({
        "content": text_content(names.join("\n")),
        "categories": names,
        "isError": false
    }))
}

fn tool_list_units(session: &Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = category_arg(args)?;
    let units = session.engine().units_for(category);
    Ok(json!({
        "content": text_content(units.join("\n")),
        "category": category,
        "units": units,
        "isError": false
    }))
}

async fn tool_convert(session: &mut Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = category_arg(args)?;
    let value = args.get("value")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| McpError::invalid_params("Missing value argument"))?;
    let from_unit = str_arg(args, "from_unit")?;
    let to_unit = str_arg(args, "to_unit")?;

    let request = ConversionRequest::new(category, value, from_unit, to_unit);
    match session.convert(&request).await {
        Ok(conversion) => Ok(json!({
            "content": text_content(format_result(&conversion)),
            "conversion": conversion,
            "isError": false
        })),
        Err(e) => {
            let report = ErrorReport::from(&e);
            Ok(json!({
                "content": text_content(report.to_string()),
                "error": report,
                "isError": true
            }))
        }
    }
}

fn tool_add_to_history(session: &mut Session) -> Result<JsonValue, McpError> {
    if session.add_to_history() {
        Ok(json!({
            "content": text_content("Conversion added to history."),
            "entries": session.history().len(),
            "isError": false
        }))
    } else {
        Ok(json!({
            "content": text_content("Nothing to add: convert a value first."),
            "entries": session.history().len(),
            "isError": true
        }))
    }
}

fn tool_history(session: &Session) -> Result<JsonValue, McpError> {
    let history = session.history();
    let text = if history.is_empty() {
        "No conversions recorded.".to_string()
    } else {
        history.lines().join("\n")
    };
    Ok(json!({
        "content": text_content(text),
        "entries": history.entries(),
        "isError": false
    }))
}
