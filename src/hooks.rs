use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookId(u64);

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct InteractionHooks {
    listeners: Vec<(HookId, Listener)>,
    next_id: u64,
}

impl InteractionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: impl FnMut() + 'static) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unregister(&mut self, id: HookId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn trigger_identity_mark(&mut self) -> usize {
        for (_, listener) in &mut self.listeners {
            listener();
        }
        debug!(listeners = self.listeners.len(), "identity mark triggered");
        self.listeners.len()
    }
}
