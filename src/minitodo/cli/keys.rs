use console::Key;
use minitodo::session::Command;

/// Maps a key press to a command. Keys without a binding map to `None` and
/// are ignored by the event loop.
pub fn command_for(key: &Key) -> Option<Command> {
    match key {
        Key::Char(c) => Command::from_char(*c),
        Key::ArrowDown => Some(Command::Down),
        Key::ArrowUp => Some(Command::Up),
        _ => None,
    }
}
