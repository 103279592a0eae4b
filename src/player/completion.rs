use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;

/// Resolve-once completion for element signals.
///
/// Toolkit signals can fire any number of times (an `error` notify after
/// `ended`, a second `prepared` after a reload). The waiting side only ever
/// wants the first outcome of an attempt, so every clone shares one sender
/// and the first `complete` consumes it.
pub struct Completion<T> {
    sender: Rc<RefCell<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("completed", &self.is_completed())
            .finish()
    }
}

impl<T> Completion<T> {
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (sender, receiver) = oneshot::channel();
        (
            Self {
                sender: Rc::new(RefCell::new(Some(sender))),
            },
            receiver,
        )
    }

    /// Deliver `value` unless this attempt already resolved. Returns whether
    /// this call was the one that resolved it.
    pub fn complete(&self, value: T) -> bool {
        match self.sender.borrow_mut().take() {
            Some(sender) => {
                // The waiter may have given up; resolving still counts
                let _ = sender.send(value);
                true
            }
            None => false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.sender.borrow().is_none()
    }
}

/// Callback shared by several toolkit signals that must run at most once
#[derive(Clone)]
pub struct OnceCallback {
    callback: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl std::fmt::Debug for OnceCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnceCallback")
            .field("fired", &self.has_fired())
            .finish()
    }
}

impl OnceCallback {
    pub fn new(callback: Box<dyn FnOnce()>) -> Self {
        Self {
            callback: Rc::new(RefCell::new(Some(callback))),
        }
    }

    /// Run the callback unless some clone already did. Returns whether this
    /// call ran it.
    pub fn fire(&self) -> bool {
        // Released before running so the callback may touch this handle
        let callback = self.callback.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.callback.borrow().is_none()
    }
}
