//! Output surfaces the countdown writes into.
//!
//! A surface exposes named text slots. Writers never create or remove slots;
//! a write to a slot the surface does not have is a silent no-op.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

/// Stable identifiers of the two slots the countdown fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// The resolved occurrence date.
    Date,
    /// The formatted countdown or celebration message.
    Countdown,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::Date, SlotId::Countdown];

    pub const fn as_str(self) -> &'static str {
        match self {
            SlotId::Date => "cny-date",
            SlotId::Countdown => "cny-countdown",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait DisplaySurface: Send {
    /// Replace the text of `slot`. Returns `false` when the slot is absent.
    fn set_text(&mut self, slot: SlotId, text: &str) -> bool;
}

/// In-memory surface with an explicit set of attached slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotBoard {
    slots: HashMap<SlotId, String>,
}

impl SlotBoard {
    /// A board with every countdown slot attached and empty.
    pub fn attached() -> Self {
        Self::with_slots(&SlotId::ALL)
    }

    pub fn with_slots(slots: &[SlotId]) -> Self {
        Self {
            slots: slots.iter().map(|slot| (*slot, String::new())).collect(),
        }
    }

    pub fn text(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }
}

impl DisplaySurface for SlotBoard {
    fn set_text(&mut self, slot: SlotId, text: &str) -> bool {
        match self.slots.get_mut(&slot) {
            Some(current) => {
                current.clear();
                current.push_str(text);
                true
            }
            None => false,
        }
    }
}

/// Renders both slots on a single, continuously rewritten terminal line.
pub struct TerminalDisplay<W: Write + Send> {
    out: W,
    date: String,
    countdown: String,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            date: String::new(),
            countdown: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self) -> io::Result<()> {
        // \x1b[2K clears the previous line so shorter text leaves no residue
        write!(self.out, "\r\x1b[2K{}  {}", self.date, self.countdown)?;
        self.out.flush()
    }
}

impl<W: Write + Send> DisplaySurface for TerminalDisplay<W> {
    fn set_text(&mut self, slot: SlotId, text: &str) -> bool {
        match slot {
            SlotId::Date => self.date = text.to_string(),
            SlotId::Countdown => self.countdown = text.to_string(),
        }
        if let Err(err) = self.render() {
            log::warn!("Failed to render {} to terminal: {}", slot, err);
        }
        true
    }
}
