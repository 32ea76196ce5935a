//! Auto-fit - finds the largest visible content window under a host
//!
//! Preview handlers build their own child windows after rendering starts.
//! The largest visible descendant is taken as the real content area.

use crate::domain::value_objects::{Rect, WindowId};

/// Read-only view of a window hierarchy
pub trait WindowTree {
    /// Direct children of `window`, in enumeration order
    fn children(&self, window: WindowId) -> Vec<WindowId>;

    /// Bounds of `window` mapped into `host` client coordinates, or `None`
    /// when the window is no longer alive or is not visible.
    fn visible_rect_in(&self, window: WindowId, host: WindowId) -> Option<Rect>;
}

/// The descendant chosen to size the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FitResult {
    pub window: WindowId,
    /// Bounds in host coordinates
    pub rect: Rect,
    pub area: i64,
}

/// Depth-first search of every descendant of `host` for the largest
/// visible rectangle with positive width and height.
///
/// A later window only replaces the current best if its area is strictly
/// larger, so the first-found window wins ties.
pub fn find_largest_descendant<T: WindowTree + ?Sized>(
    tree: &T,
    host: WindowId,
) -> Option<FitResult> {
    search(tree, host, host, None)
}

fn search<T: WindowTree + ?Sized>(
    tree: &T,
    host: WindowId,
    parent: WindowId,
    best: Option<FitResult>,
) -> Option<FitResult> {
    tree.children(parent).into_iter().fold(best, |best, child| {
        let best = pick(best, candidate(tree, host, child));
        search(tree, host, child, best)
    })
}

fn candidate<T: WindowTree + ?Sized>(
    tree: &T,
    host: WindowId,
    window: WindowId,
) -> Option<FitResult> {
    let rect = tree.visible_rect_in(window, host)?;
    let area = rect.positive_area()?;
    Some(FitResult { window, rect, area })
}

fn pick(best: Option<FitResult>, next: Option<FitResult>) -> Option<FitResult> {
    match (best, next) {
        (Some(b), Some(n)) if n.area > b.area => Some(n),
        (None, n) => n,
        (b, _) => b,
    }
}
