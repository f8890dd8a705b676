// Reference code shown beside the trace

/// The algorithm as displayed in the source pane. Line numbers are 1-based.
pub const REFERENCE_SOURCE: &str = "\
fn diameter_of_binary_tree(root: Option<&TreeNode>) -> i32 {
    let mut diameter = 0;
    depth(root, &mut diameter);
    diameter
}

fn depth(node: Option<&TreeNode>, diameter: &mut i32) -> i32 {
    let Some(node) = node else { return 0 };
    let left = depth(node.left.as_deref(), diameter);
    let right = depth(node.right.as_deref(), diameter);
    *diameter = (*diameter).max(left + right);
    left.max(right) + 1
}
";

/// `let mut diameter = 0;`
pub const LINE_INIT: usize = 2;
/// `depth(root, &mut diameter);`
pub const LINE_CALL_ROOT: usize = 3;
/// `diameter` (final result)
pub const LINE_RESULT: usize = 4;
/// `fn depth(...)`
pub const LINE_DEPTH_FN: usize = 7;
/// `let Some(node) = node else { return 0 };`
pub const LINE_EMPTY_CHECK: usize = 8;
/// `let left = depth(...)`
pub const LINE_LEFT_CALL: usize = 9;
/// `let right = depth(...)`
pub const LINE_RIGHT_CALL: usize = 10;
/// `*diameter = (*diameter).max(left + right);`
pub const LINE_UPDATE: usize = 11;
/// `left.max(right) + 1`
pub const LINE_RETURN: usize = 12;

/// Number of lines in [`REFERENCE_SOURCE`]
pub fn line_count() -> usize {
    REFERENCE_SOURCE.lines().count()
}
