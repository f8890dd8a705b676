// Bounds and id markers for tree input and decoration

/// Maximum length of a level-order input array
pub const MAX_INPUT_LEN: usize = 10_000;

/// Smallest accepted node value
pub const MIN_VALUE: i32 = -100;

/// Largest accepted node value
pub const MAX_VALUE: i32 = 100;

/// Id of the root node in a decorated tree
pub const ROOT_ID: &str = "root";

/// Suffix appended to a parent id when descending into its left child
pub const LEFT_MARKER: &str = "-L";

/// Suffix appended to a parent id when descending into its right child
pub const RIGHT_MARKER: &str = "-R";
