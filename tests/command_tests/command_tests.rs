//! Tests for Command
//!
//! These tests verify:
//! - Command type classification
//! - Key extraction
//! - Read vs. write classification

use filedb::command::{Command, CommandType};

fn all_commands() -> Vec<Command> {
    vec![
        Command::Create {
            key: "c".to_string(),
            value: "1".to_string(),
        },
        Command::Read {
            key: "r".to_string(),
        },
        Command::Update {
            key: "u".to_string(),
            value: "2".to_string(),
        },
        Command::Delete {
            key: "d".to_string(),
        },
        Command::Upsert {
            key: "s".to_string(),
            value: "3".to_string(),
        },
    ]
}

#[test]
fn test_command_types() {
    let types: Vec<CommandType> = all_commands().iter().map(Command::command_type).collect();

    assert_eq!(
        types,
        vec![
            CommandType::Create,
            CommandType::Read,
            CommandType::Update,
            CommandType::Delete,
            CommandType::Upsert,
        ]
    );
}

#[test]
fn test_command_keys() {
    let keys: Vec<String> = all_commands().iter().map(|c| c.key().to_string()).collect();

    assert_eq!(keys, vec!["c", "r", "u", "d", "s"]);
}

#[test]
fn test_only_read_is_not_a_write() {
    for command in all_commands() {
        let is_read = command.command_type() == CommandType::Read;
        assert_eq!(command.is_write(), !is_read, "{:?}", command);
    }
}
