//! Test host: composition, idle synchronization and tree snapshots.
//!
//! [`SemanticsHost`] is the seam every interaction goes through. [`TestHost`]
//! is the in-memory implementation: it owns a content function, recomposes
//! it whenever a [`MutableState`] changes, and hands out fresh semantics
//! snapshots of the latest composition.

use crate::config::SemprobeConfig;
use crate::draw::{render, DrawCommand};
use crate::graphics::Rect;
use crate::result::{SemprobeError, SemprobeResult};
use crate::semantics::SemanticsTree;
use crate::ui::UiNode;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1080.0;

/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1920.0;

// =============================================================================
// HOST SEAM
// =============================================================================

/// What the assertion layer needs from a UI toolkit
pub trait SemanticsHost {
    /// Block until no composition work is pending
    fn wait_for_idle(&self) -> SemprobeResult<()>;

    /// Snapshot of the current semantics, merged unless `use_unmerged_tree`
    fn semantics_tree(&self, use_unmerged_tree: bool) -> SemanticsTree;
}

impl<H: SemanticsHost + ?Sized> SemanticsHost for Rc<H> {
    fn wait_for_idle(&self) -> SemprobeResult<()> {
        (**self).wait_for_idle()
    }

    fn semantics_tree(&self, use_unmerged_tree: bool) -> SemanticsTree {
        (**self).semantics_tree(use_unmerged_tree)
    }
}

// =============================================================================
// MUTABLE STATE
// =============================================================================

/// Observable value; writes schedule a recomposition of the owning host
pub struct MutableState<T> {
    value: Rc<RefCell<T>>,
    invalidated: Rc<Cell<bool>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            invalidated: Rc::clone(&self.invalidated),
        }
    }
}

impl<T: Clone> MutableState<T> {
    /// Current value
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> MutableState<T> {
    /// Replace the value
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.invalidated.set(true);
    }

    /// Modify the value in place
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.invalidated.set(true);
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableState").field(&self.value.borrow()).finish()
    }
}

// =============================================================================
// TEST HOST
// =============================================================================

type Content = Rc<dyn Fn() -> UiNode>;

struct HostInner {
    config: SemprobeConfig,
    viewport: Cell<Rect>,
    content: RefCell<Option<Content>>,
    root: RefCell<UiNode>,
    invalidated: Rc<Cell<bool>>,
    compositions: Cell<usize>,
}

/// In-memory host driving a content function.
///
/// Cloning yields another handle to the same host.
#[derive(Clone)]
pub struct TestHost {
    inner: Rc<HostInner>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new(SemprobeConfig::default())
    }
}

impl TestHost {
    /// Host with nothing composed and the default viewport
    #[must_use]
    pub fn new(config: SemprobeConfig) -> Self {
        Self {
            inner: Rc::new(HostInner {
                config,
                viewport: Cell::new(Rect::from_size(
                    0.0,
                    0.0,
                    DEFAULT_VIEWPORT_WIDTH,
                    DEFAULT_VIEWPORT_HEIGHT,
                )),
                content: RefCell::new(None),
                root: RefCell::new(UiNode::default()),
                invalidated: Rc::new(Cell::new(false)),
                compositions: Cell::new(0),
            }),
        }
    }

    /// Configuration the host was created with
    #[must_use]
    pub fn config(&self) -> &SemprobeConfig {
        &self.inner.config
    }

    /// Change the visible area
    pub fn set_viewport(&self, viewport: Rect) {
        self.inner.viewport.set(viewport);
    }

    /// Visible area
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.inner.viewport.get()
    }

    /// Install the content function; it is composed on the next idle wait
    pub fn set_content(&self, content: impl Fn() -> UiNode + 'static) {
        *self.inner.content.borrow_mut() = Some(Rc::new(content));
        self.invalidate();
    }

    /// State whose writes recompose this host
    #[must_use]
    pub fn state<T>(&self, initial: T) -> MutableState<T> {
        MutableState {
            value: Rc::new(RefCell::new(initial)),
            invalidated: Rc::clone(&self.inner.invalidated),
        }
    }

    /// Schedule a recomposition
    pub fn invalidate(&self) {
        self.inner.invalidated.set(true);
    }

    /// Whether a recomposition is pending
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.inner.invalidated.get()
    }

    /// Composition passes run so far
    #[must_use]
    pub fn composition_count(&self) -> usize {
        self.inner.compositions.get()
    }

    /// Paint operations of the current composition
    pub fn draw_commands(&self) -> SemprobeResult<Vec<DrawCommand>> {
        self.wait_for_idle()?;
        Ok(render(&self.inner.root.borrow()))
    }

    fn recompose(&self) {
        let content = self.inner.content.borrow().clone();
        if let Some(content) = content {
            let root = content();
            *self.inner.root.borrow_mut() = root;
        }
        let count = self.inner.compositions.get() + 1;
        self.inner.compositions.set(count);
        tracing::debug!(composition = count, "recomposed");
    }
}

impl SemanticsHost for TestHost {
    fn wait_for_idle(&self) -> SemprobeResult<()> {
        let config = &self.inner.config;
        let start = Instant::now();
        let mut passes = 0;
        while self.inner.invalidated.replace(false) {
            if passes >= config.max_recompositions || start.elapsed() > config.idle_timeout() {
                self.inner.invalidated.set(true);
                tracing::debug!(passes, "host did not become idle");
                return Err(SemprobeError::IdleTimeout {
                    ms: config.idle_timeout_ms,
                    passes,
                });
            }
            self.recompose();
            passes += 1;
        }
        Ok(())
    }

    fn semantics_tree(&self, use_unmerged_tree: bool) -> SemanticsTree {
        let tree = SemanticsTree::from_root(&self.inner.root.borrow(), self.viewport());
        tracing::trace!(nodes = tree.len(), use_unmerged_tree, "fetched semantics tree");
        if use_unmerged_tree {
            tree
        } else {
            tree.merged()
        }
    }
}

impl fmt::Debug for TestHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestHost")
            .field("config", &self.inner.config)
            .field("viewport", &self.inner.viewport.get())
            .field("compositions", &self.inner.compositions.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::modifier::Modifier;
    use crate::semantics::SemanticsProperties;
    use crate::ui::text;

    fn counter_host() -> (TestHost, MutableState<u32>) {
        let host = TestHost::default();
        let count = host.state(0_u32);
        let shown = count.clone();
        host.set_content(move || text(format!("Count: {}", shown.get()), Modifier::empty()));
        (host, count)
    }

    fn root_text(host: &TestHost) -> Vec<String> {
        host.semantics_tree(false)
            .root()
            .unwrap()
            .config()
            .get_or_else(SemanticsProperties::TEXT, Vec::new)
    }

    mod idle_tests {
        use super::*;

        #[test]
        fn test_content_composed_on_first_wait() {
            let (host, _) = counter_host();
            assert!(!host.is_idle());
            host.wait_for_idle().unwrap();
            assert!(host.is_idle());
            assert_eq!(host.composition_count(), 1);
            assert_eq!(root_text(&host), vec!["Count: 0".to_string()]);
        }

        #[test]
        fn test_state_write_recomposes() {
            let (host, count) = counter_host();
            host.wait_for_idle().unwrap();
            count.set(2);
            count.update(|value| *value += 1);
            host.wait_for_idle().unwrap();
            assert_eq!(host.composition_count(), 2);
            assert_eq!(root_text(&host), vec!["Count: 3".to_string()]);
        }

        #[test]
        fn test_idle_wait_without_work_is_free() {
            let host = TestHost::default();
            host.wait_for_idle().unwrap();
            assert_eq!(host.composition_count(), 0);
        }

        #[test]
        fn test_runaway_composition_times_out() {
            let host = TestHost::new(SemprobeConfig::default().with_max_recompositions(5));
            let state = host.state(0_u32);
            let writer = state.clone();
            host.set_content(move || {
                writer.update(|value| *value += 1);
                UiNode::default()
            });
            let err = host.wait_for_idle().unwrap_err();
            assert!(matches!(err, SemprobeError::IdleTimeout { passes: 5, .. }));
            assert!(!host.is_idle());
            assert_eq!(state.get(), 5);
        }
    }

    mod snapshot_tests {
        use super::*;
        use crate::graphics::{Color, Shape};

        #[test]
        fn test_viewport_is_applied() {
            let host = TestHost::default();
            host.set_viewport(Rect::from_size(0.0, 0.0, 10.0, 10.0));
            host.set_content(|| UiNode::default().at(50.0, 50.0));
            host.wait_for_idle().unwrap();
            let tree = host.semantics_tree(true);
            assert_eq!(tree.viewport(), Rect::new(0.0, 0.0, 10.0, 10.0));
            assert!(!tree.root().unwrap().is_displayed());
        }

        #[test]
        fn test_draw_commands_wait_for_idle() {
            let host = TestHost::default();
            host.set_content(|| {
                UiNode::new(Modifier::empty().background(Color::BLUE, Shape::Rectangle))
            });
            let commands = host.draw_commands().unwrap();
            assert_eq!(commands.len(), 1);
            assert_eq!(host.composition_count(), 1);
        }

        #[test]
        fn test_handles_share_state() {
            let host = TestHost::default();
            let other = host.clone();
            other.set_content(UiNode::default);
            host.wait_for_idle().unwrap();
            assert_eq!(other.composition_count(), 1);
        }
    }
}
