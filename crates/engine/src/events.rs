/// Notifications a concrete engine adapter delivers into the
/// orchestration layer, one panel at a time.
///
/// Adapters translate their native subscription mechanism (DOM events,
/// test scripting) into these values; the orchestration never
/// subscribes to an engine directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// Initial load of the map finished.
    Load,
    /// A style finished (re)loading. Fires on every style swap, not
    /// just the first load.
    StyleLoad,
    /// The engine reported an internal error. Non-fatal.
    Error(String),
    /// The style references an image the engine cannot find.
    StyleImageMissing(String),
    /// The camera changed (pan, zoom, rotate or tilt).
    Move,
}
