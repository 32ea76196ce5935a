//! In-memory fakes for the ports, shared by the unit tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::rc::Rc;

use crate::adapters::gateways::MemoryRegistrationGateway;
use crate::application::ports::{
    ComponentFactory, PreviewComponent, PreviewPlatform, WindowSystem,
};
use crate::domain::errors::{BindStep, PreviewError};
use crate::domain::services::auto_fit::WindowTree;
use crate::domain::value_objects::{ClassId, HResult, Rect, Size, WindowId};

/// Ordered record of side effects across all fakes.
///
/// Queries match entries by prefix.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.position(prefix).is_some()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    /// First `a` happened before first `b`; both must be present
    pub fn before(&self, a: &str, b: &str) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    fn position(&self, prefix: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e.starts_with(prefix))
    }
}

// ---------------------------------------------------------------------------
// Window tree
// ---------------------------------------------------------------------------

/// Static window hierarchy with rectangles already in host coordinates
pub struct FakeWindowTree {
    nodes: Vec<(WindowId, WindowId, Rect, bool)>,
    next: isize,
}

impl FakeWindowTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next: 100,
        }
    }

    pub fn add(&mut self, parent: WindowId, rect: Rect, visible: bool) -> WindowId {
        let id = WindowId(self.next);
        self.next += 1;
        self.nodes.push((parent, id, rect, visible));
        id
    }
}

impl WindowTree for FakeWindowTree {
    fn children(&self, window: WindowId) -> Vec<WindowId> {
        self.nodes
            .iter()
            .filter(|(parent, ..)| *parent == window)
            .map(|(_, id, ..)| *id)
            .collect()
    }

    fn visible_rect_in(&self, window: WindowId, _host: WindowId) -> Option<Rect> {
        self.nodes
            .iter()
            .find(|(_, id, ..)| *id == window)
            .filter(|(.., visible)| *visible)
            .map(|(_, _, rect, _)| *rect)
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Per-call failures of an accepted component
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeFailures {
    pub initialize: Option<HResult>,
    pub set_window: Option<HResult>,
    pub do_preview: Option<HResult>,
}

/// Counts instantiations and live references.
///
/// Unknown classes instantiate but fail negotiation.
pub struct FakeComponentFactory {
    journal: Journal,
    accepted: HashMap<ClassId, FakeFailures>,
    failing: HashMap<ClassId, HResult>,
    instantiations: Cell<usize>,
    live: Rc<Cell<usize>>,
}

impl FakeComponentFactory {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            accepted: HashMap::new(),
            failing: HashMap::new(),
            instantiations: Cell::new(0),
            live: Rc::new(Cell::new(0)),
        }
    }

    pub fn accepting(self, class_id: ClassId) -> Self {
        self.accepting_with(class_id, FakeFailures::default())
    }

    pub fn accepting_with(mut self, class_id: ClassId, failures: FakeFailures) -> Self {
        self.accepted.insert(class_id, failures);
        self
    }

    pub fn failing(mut self, class_id: ClassId, code: HResult) -> Self {
        self.failing.insert(class_id, code);
        self
    }

    pub fn instantiations(&self) -> usize {
        self.instantiations.get()
    }

    /// Instances and components not yet dropped
    pub fn live_references(&self) -> usize {
        self.live.get()
    }
}

pub struct FakeInstance {
    class_id: ClassId,
    journal: Journal,
    live: Rc<Cell<usize>>,
}

impl Drop for FakeInstance {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        self.journal.push(format!("release instance {}", self.class_id));
    }
}

impl ComponentFactory for FakeComponentFactory {
    type Instance = FakeInstance;
    type Component = FakeComponent;

    fn instantiate(&self, class_id: &ClassId) -> Result<FakeInstance, HResult> {
        self.instantiations.set(self.instantiations.get() + 1);
        self.journal.push(format!("instantiate {class_id}"));
        if let Some(code) = self.failing.get(class_id) {
            return Err(*code);
        }
        self.live.set(self.live.get() + 1);
        Ok(FakeInstance {
            class_id: *class_id,
            journal: self.journal.clone(),
            live: Rc::clone(&self.live),
        })
    }

    fn negotiate(&self, instance: &FakeInstance) -> Option<FakeComponent> {
        let failures = *self.accepted.get(&instance.class_id)?;
        self.live.set(self.live.get() + 1);
        Some(FakeComponent {
            journal: self.journal.clone(),
            live: Rc::clone(&self.live),
            failures,
        })
    }
}

pub struct FakeComponent {
    journal: Journal,
    live: Rc<Cell<usize>>,
    failures: FakeFailures,
}

fn outcome(failure: Option<HResult>) -> Result<(), HResult> {
    failure.map_or(Ok(()), Err)
}

impl PreviewComponent for FakeComponent {
    fn initialize_with_file(&self, path: &Path) -> Result<(), HResult> {
        self.journal.push(format!("initialize {}", path.display()));
        outcome(self.failures.initialize)
    }

    fn set_window(&self, _host: WindowId, rect: Rect) -> Result<(), HResult> {
        self.journal
            .push(format!("set_window {}x{}", rect.width(), rect.height()));
        outcome(self.failures.set_window)
    }

    fn do_preview(&self) -> Result<(), HResult> {
        self.journal.push("do_preview");
        outcome(self.failures.do_preview)
    }

    fn unload(&self) -> Result<(), HResult> {
        self.journal.push("unload");
        Ok(())
    }
}

impl Drop for FakeComponent {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        self.journal.push("release component");
    }
}

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Top,
    Host,
    Content,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Top => "top",
            Kind::Host => "host",
            Kind::Content => "content",
        }
    }
}

struct FakeWindow {
    kind: Kind,
    parent: Option<WindowId>,
    title: String,
    bounds: Rect,
    shown: bool,
    alive: bool,
}

#[derive(Default)]
struct WindowState {
    windows: BTreeMap<WindowId, FakeWindow>,
    next: isize,
    last_top: Option<WindowId>,
    last_host: Option<WindowId>,
}

/// Window system that records every call.
///
/// Content registered with [`FakeWindowSystem::with_content`] appears as
/// children of each host as soon as it is created, in host coordinates.
/// The message loop simulates the launcher destroying the top-level window.
pub struct FakeWindowSystem {
    journal: Journal,
    fail_at: Option<BindStep>,
    content: Vec<(Rect, bool)>,
    state: RefCell<WindowState>,
    tree_walks: Cell<usize>,
}

impl FakeWindowSystem {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail_at: None,
            content: Vec::new(),
            state: RefCell::new(WindowState {
                next: 1,
                ..WindowState::default()
            }),
            tree_walks: Cell::new(0),
        }
    }

    /// Fail the window call behind `step`
    pub fn failing_at(mut self, step: BindStep) -> Self {
        self.fail_at = Some(step);
        self
    }

    pub fn with_content(mut self, rect: Rect, visible: bool) -> Self {
        self.content.push((rect, visible));
        self
    }

    pub fn is_shown(&self, window: WindowId) -> bool {
        self.state
            .borrow()
            .windows
            .get(&window)
            .is_some_and(|w| w.shown)
    }

    pub fn title(&self, window: WindowId) -> Option<String> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|w| w.title.clone())
    }

    pub fn size(&self, window: WindowId) -> Option<Size> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|w| w.bounds.size())
    }

    /// Top-level and host windows created so far
    pub fn created(&self) -> usize {
        self.state
            .borrow()
            .windows
            .values()
            .filter(|w| w.kind != Kind::Content)
            .count()
    }

    pub fn alive_count(&self) -> usize {
        self.state
            .borrow()
            .windows
            .values()
            .filter(|w| w.alive)
            .count()
    }

    pub fn last_size_of_host(&self) -> Option<Size> {
        let host = self.state.borrow().last_host?;
        self.size(host)
    }

    pub fn last_size_of_top_level(&self) -> Option<Size> {
        let top = self.state.borrow().last_top?;
        self.size(top)
    }

    /// Number of times a host's children were enumerated
    pub fn tree_walks(&self) -> usize {
        self.tree_walks.get()
    }

    fn check(&self, step: BindStep) -> Result<(), HResult> {
        if self.fail_at == Some(step) {
            Err(HResult::FAIL)
        } else {
            Ok(())
        }
    }

    fn insert(
        &self,
        kind: Kind,
        parent: Option<WindowId>,
        title: &str,
        bounds: Rect,
        shown: bool,
    ) -> WindowId {
        let mut state = self.state.borrow_mut();
        let id = WindowId(state.next);
        state.next += 1;
        state.windows.insert(
            id,
            FakeWindow {
                kind,
                parent,
                title: title.to_string(),
                bounds,
                shown,
                alive: true,
            },
        );
        id
    }

    fn update(&self, window: WindowId, f: impl FnOnce(&mut FakeWindow)) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            f(w);
        }
    }
}

impl WindowSystem for FakeWindowSystem {
    fn register_class(&self) -> Result<(), HResult> {
        self.journal.push("register class");
        self.check(BindStep::RegisterClass)
    }

    fn create_top_level(&self, title: &str, bounds: Rect) -> Result<WindowId, HResult> {
        self.check(BindStep::CreateTopLevel)?;
        let id = self.insert(Kind::Top, None, title, bounds, false);
        self.state.borrow_mut().last_top = Some(id);
        self.journal.push(format!("create top {}", id.0));
        Ok(id)
    }

    fn show(&self, window: WindowId) {
        self.update(window, |w| w.shown = true);
    }

    fn create_host(
        &self,
        parent: WindowId,
        title: &str,
        bounds: Rect,
    ) -> Result<WindowId, HResult> {
        self.check(BindStep::CreateHost)?;
        let id = self.insert(Kind::Host, Some(parent), title, bounds, true);
        self.state.borrow_mut().last_host = Some(id);
        self.journal.push(format!("create host {}", id.0));
        for (rect, visible) in &self.content {
            self.insert(Kind::Content, Some(id), "", *rect, *visible);
        }
        Ok(id)
    }

    fn destroy(&self, window: WindowId) {
        let kind = {
            let state = self.state.borrow();
            match state.windows.get(&window) {
                Some(w) if w.alive => w.kind,
                _ => return,
            }
        };
        self.update(window, |w| w.alive = false);
        self.journal.push(format!("destroy {} {}", kind.label(), window.0));

        let children: Vec<WindowId> = self
            .state
            .borrow()
            .windows
            .iter()
            .filter(|(_, w)| w.parent == Some(window))
            .map(|(id, _)| *id)
            .collect();
        for child in children {
            self.destroy(child);
        }
    }

    fn is_alive(&self, window: WindowId) -> bool {
        self.state
            .borrow()
            .windows
            .get(&window)
            .is_some_and(|w| w.alive)
    }

    fn set_bounds(&self, window: WindowId, bounds: Rect) {
        self.update(window, |w| w.bounds = bounds);
    }

    fn resize(&self, window: WindowId, size: Size) {
        self.update(window, |w| {
            w.bounds = Rect::from_pos_size(w.bounds.left, w.bounds.top, size.width, size.height)
        });
    }

    fn notify_resized(&self, _window: WindowId, size: Size) {
        self.journal
            .push(format!("notify_resized {}x{}", size.width, size.height));
    }

    fn run_message_loop(&self) {
        self.journal.push("message loop");
        let top = self.state.borrow().last_top;
        if let Some(top) = top {
            self.destroy(top);
        }
    }
}

impl WindowTree for FakeWindowSystem {
    fn children(&self, window: WindowId) -> Vec<WindowId> {
        let state = self.state.borrow();
        if state
            .windows
            .get(&window)
            .is_some_and(|w| w.kind == Kind::Host)
        {
            self.tree_walks.set(self.tree_walks.get() + 1);
        }
        state
            .windows
            .iter()
            .filter(|(_, w)| w.alive && w.parent == Some(window))
            .map(|(id, _)| *id)
            .collect()
    }

    fn visible_rect_in(&self, window: WindowId, _host: WindowId) -> Option<Rect> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .filter(|w| w.alive && w.shown)
            .map(|w| w.bounds)
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

pub struct FakeRuntime {
    journal: Journal,
}

impl Drop for FakeRuntime {
    fn drop(&mut self) {
        self.journal.push("runtime down");
    }
}

pub struct FakePlatform {
    pub journal: Journal,
    pub store: MemoryRegistrationGateway,
    pub factory: FakeComponentFactory,
    pub windows: FakeWindowSystem,
    pub runtime_failure: Option<HResult>,
}

impl FakePlatform {
    pub fn new(journal: Journal, store: MemoryRegistrationGateway) -> Self {
        Self {
            factory: FakeComponentFactory::new(journal.clone()),
            windows: FakeWindowSystem::new(journal.clone()),
            journal,
            store,
            runtime_failure: None,
        }
    }
}

impl PreviewPlatform for FakePlatform {
    type Store = MemoryRegistrationGateway;
    type Factory = FakeComponentFactory;
    type Windows = FakeWindowSystem;
    type Runtime = FakeRuntime;

    fn initialize_runtime(&self) -> Result<FakeRuntime, PreviewError> {
        if let Some(code) = self.runtime_failure {
            return Err(PreviewError::Environment { code });
        }
        self.journal.push("runtime up");
        Ok(FakeRuntime {
            journal: self.journal.clone(),
        })
    }

    fn registration_store(&self) -> &MemoryRegistrationGateway {
        &self.store
    }

    fn component_factory(&self) -> &FakeComponentFactory {
        &self.factory
    }

    fn window_system(&self) -> &FakeWindowSystem {
        &self.windows
    }
}
