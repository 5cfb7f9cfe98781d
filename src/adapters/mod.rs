pub mod terminal_events;

pub use terminal_events::TerminalCaptureEvents;
