//! Command definitions
//!
//! Represents operations an embedding application asks the engine to run.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Create,
    Read,
    Update,
    Delete,
    Upsert,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a new key/value pair
    Create { key: String, value: String },

    /// Read a value by key
    Read { key: String },

    /// Overwrite an existing key
    Update { key: String, value: String },

    /// Remove an existing key
    Delete { key: String },

    /// Create or update
    Upsert { key: String, value: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Create { .. } => CommandType::Create,
            Command::Read { .. } => CommandType::Read,
            Command::Update { .. } => CommandType::Update,
            Command::Delete { .. } => CommandType::Delete,
            Command::Upsert { .. } => CommandType::Upsert,
        }
    }

    /// Get the key the command targets
    pub fn key(&self) -> &str {
        match self {
            Command::Create { key, .. }
            | Command::Read { key }
            | Command::Update { key, .. }
            | Command::Delete { key }
            | Command::Upsert { key, .. } => key,
        }
    }

    /// Whether the command mutates the store
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::Read { .. })
    }
}
