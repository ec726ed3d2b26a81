//! A2A message types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// MIME type carried by every structured data part this service produces
pub const JSON_MIME_TYPE: &str = "application/json";

/// A typed view of a task message
///
/// Task requests keep their messages as raw JSON; this type builds messages and
/// reads them back. Unknown fields are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Message content parts
    #[serde(default)]
    pub parts: Vec<Part>,

    /// Any other fields present on the wire
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Create a new message from parts
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            role,
            parts,
            extra: Map::new(),
        }
    }

    /// Create a user message with a single part
    pub fn user(part: Part) -> Self {
        Self::new(Role::User, vec![part])
    }

    /// Create an agent message with a single part
    pub fn agent(part: Part) -> Self {
        Self::new(Role::Agent, vec![part])
    }
}

/// Role of a message sender
///
/// Roles other than `user` and `agent` are kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an agent
    Agent,

    /// Any other role string
    Other(String),
}

impl Role {
    /// The wire representation of the role
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
            Role::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "user" => Role::User,
            "agent" => Role::Agent,
            _ => Role::Other(role),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Role::from)
    }
}

/// A part of a message
///
/// Parts are keyed by kind (`dataPart`, `textPart`, ...). Only data parts are
/// interpreted; every other kind stays in `rest` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Structured data
    #[serde(rename = "dataPart", default, skip_serializing_if = "Option::is_none")]
    pub data_part: Option<DataPart>,

    /// Other part kinds
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Part {
    /// Create a JSON data part
    pub fn data(json_data: Value) -> Self {
        Self {
            data_part: Some(DataPart::json(json_data)),
            rest: Map::new(),
        }
    }

    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        let mut rest = Map::new();
        rest.insert(
            "textPart".to_string(),
            serde_json::json!({ "text": text.into() }),
        );
        Self {
            data_part: None,
            rest,
        }
    }

    /// Check if this part carries structured data
    pub fn is_data(&self) -> bool {
        self.data_part.is_some()
    }
}

/// Structured data carried by a part
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataPart {
    /// MIME type of the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// The structured payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_data: Option<Value>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl DataPart {
    /// Create an `application/json` data part
    pub fn json(json_data: Value) -> Self {
        Self {
            mime_type: Some(JSON_MIME_TYPE.to_string()),
            json_data: Some(json_data),
            rest: Map::new(),
        }
    }
}
