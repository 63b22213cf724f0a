use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::controls::Key;

type Handler = Box<dyn FnMut(Key) + Send>;

#[derive(Default)]
struct Handlers {
    next_id: u64,
    handlers: BTreeMap<u64, Handler>,
}

/// Fans key presses out to the handlers of whoever currently holds a
/// [`KeyboardSubscription`].
#[derive(Default)]
pub struct KeyboardHub {
    inner: Mutex<Handlers>,
}

impl KeyboardHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn subscribe(
        self: &Arc<Self>,
        handler: impl FnMut(Key) + Send + 'static,
    ) -> KeyboardSubscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.insert(id, Box::new(handler));
        log::debug!("keyboard subscription {} acquired", id);

        KeyboardSubscription {
            hub: Arc::clone(self),
            id,
        }
    }

    pub fn dispatch(&self, key: Key) -> usize {
        let mut inner = self.lock();
        for handler in inner.handlers.values_mut() {
            handler(key);
        }
        inner.handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().handlers.len()
    }

    fn unsubscribe(&self, id: u64) {
        if self.lock().handlers.remove(&id).is_some() {
            log::debug!("keyboard subscription {} released", id);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Handlers> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps a handler registered with a [`KeyboardHub`]; dropping it removes the
/// handler.
pub struct KeyboardSubscription {
    hub: Arc<KeyboardHub>,
    id: u64,
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
