/// A lightweight, serializable snapshot of scroll geometry.
///
/// All engine state is session-scoped; this exists so a host can carry the
/// scroll position across view rebuilds (e.g. tab switches) without coupling
/// the engine to any specific UI framework.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub viewport_height: u32,
}
