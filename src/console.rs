//! Line-oriented terminal front end. It only reads the store's value and
//! dispatches actions, the way a UI component would.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};

use crate::core::counter::action::{
    Action, DECREMENT, DECREMENT_BY_AMOUNT, INCREMENT, INCREMENT_BY_AMOUNT,
};
use crate::core::store::SharedCounterStore;
use crate::core::StoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Dispatch(Action),
    Show,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// A raw JSON object is decoded as an action. Amount arguments that are not
/// integers are passed through as string payloads so that the store rejects
/// them.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, StoreError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('{') {
        return Action::from_bytes(line.as_bytes()).map(|a| Some(ConsoleCommand::Dispatch(a)));
    }

    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let argument = words.next();
    if words.next().is_some() {
        return Err(StoreError::UnknownCommand(line.to_string()));
    }

    let command = match (name, argument) {
        ("increment" | "inc", None) => ConsoleCommand::Dispatch(Action::new(INCREMENT, None)),
        ("decrement" | "dec", None) => ConsoleCommand::Dispatch(Action::new(DECREMENT, None)),
        ("increment-by" | "inc-by", amount) => {
            ConsoleCommand::Dispatch(Action::new(INCREMENT_BY_AMOUNT, amount.map(amount_payload)))
        }
        ("decrement-by" | "dec-by", amount) => {
            ConsoleCommand::Dispatch(Action::new(DECREMENT_BY_AMOUNT, amount.map(amount_payload)))
        }
        ("value", None) => ConsoleCommand::Show,
        ("quit" | "exit", None) => ConsoleCommand::Quit,
        _ => return Err(StoreError::UnknownCommand(line.to_string())),
    };
    Ok(Some(command))
}

fn amount_payload(raw: &str) -> Value {
    raw.parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Reads commands until `quit` or end of input. Bad commands are reported
/// and skipped.
#[instrument(name = "run_console", level = "info", skip_all)]
pub async fn run_console<R>(store: &SharedCounterStore, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        debug!("Console input: {:?}", line);
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(ConsoleCommand::Show)) => println!("The count is {}", store.value().await),
            Ok(Some(ConsoleCommand::Dispatch(action))) => {
                if let Err(e) = store.apply(action).await {
                    eprintln!("error: {}", e);
                }
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }
    Ok(())
}
