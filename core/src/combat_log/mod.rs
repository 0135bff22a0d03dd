mod combat_event;
mod error;
mod names;
mod parser;
mod reader;

pub use combat_event::*;
pub use error::{FormatError, LineError, ParseError, ReaderError};
pub use names::{normalize_mob_name, normalize_player_name};
pub use parser::{LogParser, split_line};
pub use reader::{ParsedLog, Reader};
