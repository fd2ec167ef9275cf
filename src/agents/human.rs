//! Line-based human input.
//!
//! Accepted lines:
//!
//! | Input              | Intent                   |
//! |--------------------|--------------------------|
//! | `a3 b4`, `a3-b4`   | `Move { from, to }`      |
//! | `c3xe5`            | `Move { from, to }`      |
//! | `exit`, `quit`     | `Exit`                   |
//! | `stats`            | `ShowStats`              |
//!
//! Anything else is `Malformed`. End of input counts as `Exit`.

use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;

use tracing::warn;

use crate::core::{AgentKind, Coord};

use super::agent::{Agent, MoveIntent, TurnContext};

/// Parse one input line.
#[must_use]
pub fn parse_intent(line: &str) -> MoveIntent {
    let text = line.trim().to_ascii_lowercase();
    match text.as_str() {
        "exit" | "quit" => return MoveIntent::Exit,
        "stats" => return MoveIntent::ShowStats,
        _ => {}
    }

    let squares: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '-' || c == 'x')
        .filter(|s| !s.is_empty())
        .collect();

    match squares.as_slice() {
        [from, to] => match (from.parse::<Coord>(), to.parse::<Coord>()) {
            (Ok(from), Ok(to)) => MoveIntent::Move { from, to },
            _ => MoveIntent::Malformed(line.trim().to_string()),
        },
        _ => MoveIntent::Malformed(line.trim().to_string()),
    }
}

/// Reads one intent per line from any buffered reader.
///
/// Clones read from the same stream, so two seats at one keyboard take
/// turns on a single buffer.
#[derive(Debug)]
pub struct HumanAgent<R> {
    input: Rc<RefCell<R>>,
}

impl<R> Clone for HumanAgent<R> {
    fn clone(&self) -> Self {
        Self {
            input: Rc::clone(&self.input),
        }
    }
}

impl<R: BufRead> HumanAgent<R> {
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            input: Rc::new(RefCell::new(input)),
        }
    }

    /// Next line as an intent, or `None` once the input is exhausted.
    pub fn read_intent(&mut self) -> Option<MoveIntent> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(parse_intent(&line)),
            Err(err) => {
                warn!(%err, "failed to read input");
                None
            }
        }
    }
}

impl<R: BufRead> Agent for HumanAgent<R> {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn choose_move(&mut self, _ctx: &TurnContext<'_>) -> MoveIntent {
        self.read_intent().unwrap_or(MoveIntent::Exit)
    }
}
