//! Todolist library crate
//!
//! An in-memory, ordered, titled collection of todos.
//!
//! ```
//! use todolist::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk"));
//! let room = list.add(Todo::new("Clean room"));
//! room.mark_done();
//!
//! assert_eq!(list.to_string(), "--- Today's Todos ---\n[ ] Buy milk\n[X] Clean room");
//! assert!(list.item_at(2).is_err());
//! ```

pub mod cli;
pub mod error;
pub mod list;
pub mod todo;

pub use error::{Result, TodoListError};
pub use list::{Iter, TodoList, TodoListSnapshot};
pub use todo::{Todo, TodoHandle, DONE_MARKER, UNDONE_MARKER};
