// Constants for the Mollang interpreter

/// Deepest chain of nested function calls before execution stops.
/// Each Mollang call costs several native frames, so this stays well below
/// what a default thread stack can hold.
pub const MAX_CALL_DEPTH: usize = 256;
