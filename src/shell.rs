//! Interactive loop: every `predict`/`ask` line starts a new request
//! without waiting for earlier ones.

use crate::{
    Result,
    app::{self, Action, App},
};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

pub const HELP: &str = "Commands:
  predict <file>          classify an image
  ask [--llm|--no-llm] <question>
                          ask the docs (--llm to use the language model)
  health                  check the backend
  help                    show this message
  quit                    leave the shell";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Action),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses one shell line. `use_llm_default` applies when `ask` has no
/// `--llm`/`--no-llm` flag.
pub fn parse_line(line: &str, use_llm_default: bool) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => Command::Empty,
        "predict" => {
            let file = (!rest.is_empty()).then(|| PathBuf::from(rest));
            Command::Run(Action::Predict(file))
        }
        "ask" => {
            let (llm, no_llm, question) = if let Some(q) = strip_flag(rest, "--llm") {
                (true, false, q)
            } else if let Some(q) = strip_flag(rest, "--no-llm") {
                (false, true, q)
            } else {
                (false, false, rest)
            };
            Command::Run(Action::Ask {
                question: question.to_string(),
                use_llm: app::resolve_use_llm(llm, no_llm, use_llm_default),
            })
        }
        "health" => Command::Run(Action::Health),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn strip_flag<'a>(input: &'a str, flag: &str) -> Option<&'a str> {
    let rest = input.strip_prefix(flag)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Reads commands until `quit` or end of input. Lines that are not valid
/// UTF-8 are decoded lossily. Requests still in flight when the loop ends
/// are awaited so their results are not lost, even after a read error.
pub async fn run<R>(app: &App, mut input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("{}", HELP);

    let mut buf = Vec::new();
    let mut in_flight = Vec::new();
    let mut read_error = None;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to read input: {}", e);
                read_error = Some(e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        match parse_line(&line, app.use_llm_default()) {
            Command::Run(action) => {
                debug!("Dispatching {:?}", action);
                in_flight.push(app.dispatch(action));
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(verb) => println!("Unknown command '{}'. Type 'help'.", verb),
        }
        in_flight.retain(|handle| !handle.is_finished());
    }

    for handle in in_flight {
        // Failures were already shown in their output region
        if let Err(e) = handle.await {
            warn!("Request task failed: {}", e);
        }
    }

    match read_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
