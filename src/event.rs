use crate::anim::SlotKind;
use crate::page::PageState;

/// Lifecycle notifications collected by the manager and drained by the host.
///
/// The manager never blocks on these; a host that does not care simply lets
/// `take_events` clear the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Pushed {
        name: String,
    },
    Popped {
        name: String,
        revealed: Option<String>,
    },
    StateChanged {
        name: String,
        from: PageState,
        to: PageState,
    },
    TransitionFinished {
        name: String,
        slot: SlotKind,
    },
    Unloaded {
        name: String,
    },
}
