/// Initial capacity of the pending-directory stack.
/// Most trees stay well below this depth-times-fanout.
pub const INITIAL_STACK_CAPACITY: usize = 64;

/// Separator used in relative paths, independent of the host platform.
pub const RELATIVE_SEPARATOR: char = '/';
