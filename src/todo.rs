//! Todo items
//!
//! A [`Todo`] is a plain record. Lists hold [`TodoHandle`]s, which share one
//! todo between every list it has been added to.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

pub const DONE_MARKER: &str = "[X]";
pub const UNDONE_MARKER: &str = "[ ]";

/// A single task with a description and a done flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    description: String,
    done: bool,
}

impl Todo {
    /// Creates a new, not yet done, todo
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }

    /// Marks this todo as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks this todo as not done
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Checks if this todo is done
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Gets the description of this todo
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { DONE_MARKER } else { UNDONE_MARKER };
        write!(f, "{} {}", marker, self.description)
    }
}

/// Shared reference to a [`Todo`]
///
/// Cloning a handle clones the reference, not the todo: marking an item done
/// through one handle is visible through every other. Two handles compare
/// equal only when they point at the same todo.
#[derive(Debug, Clone)]
pub struct TodoHandle {
    inner: Arc<Mutex<Todo>>,
}

impl TodoHandle {
    pub fn new(description: impl Into<String>) -> Self {
        Todo::new(description).into()
    }

    fn lock(&self) -> MutexGuard<'_, Todo> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn mark_done(&self) {
        self.lock().mark_done();
    }

    pub fn mark_undone(&self) {
        self.lock().mark_undone();
    }

    pub fn is_done(&self) -> bool {
        self.lock().is_done()
    }

    pub fn description(&self) -> String {
        self.lock().description().to_string()
    }

    /// Returns a copy of the todo as it is right now
    pub fn snapshot(&self) -> Todo {
        self.lock().clone()
    }

    /// Returns true if both handles refer to the same todo
    pub fn ptr_eq(&self, other: &TodoHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Todo> for TodoHandle {
    fn from(todo: Todo) -> Self {
        Self {
            inner: Arc::new(Mutex::new(todo)),
        }
    }
}

impl PartialEq for TodoHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for TodoHandle {}

impl fmt::Display for TodoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lock().fmt(f)
    }
}
