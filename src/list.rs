//! Todo lists
//!
//! A [`TodoList`] is a titled, ordered sequence of [`TodoHandle`]s. Lists
//! derived from another list (see [`TodoList::filter`]) share the same
//! handles, so item state changes flow both ways.

use std::collections::{vec_deque, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Result, TodoListError};
use crate::todo::{Todo, TodoHandle};

/// A titled, ordered collection of todos
///
/// A list always starts from a title:
///
/// ```compile_fail
/// let list = todolist::TodoList::default();
/// ```
#[derive(Debug)]
pub struct TodoList {
    title: String,
    todos: VecDeque<TodoHandle>,
}

impl TodoList {
    /// Creates an empty list with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: VecDeque::new(),
        }
    }

    /// Gets the title of this list
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the `--- <title> ---` line that heads the rendered list
    pub fn header(&self) -> String {
        format!("--- {} ---", self.title)
    }

    /// Appends a todo to the end of the list and returns the stored handle
    pub fn add(&mut self, todo: impl Into<TodoHandle>) -> TodoHandle {
        let handle = todo.into();
        trace!(title = %self.title, item = %handle, "adding todo");
        self.todos.push_back(handle.clone());
        handle
    }

    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the handles in list order
    pub fn to_array(&self) -> Vec<TodoHandle> {
        self.todos.iter().cloned().collect()
    }

    pub fn first(&self) -> Option<TodoHandle> {
        self.todos.front().cloned()
    }

    pub fn last(&self) -> Option<TodoHandle> {
        self.todos.back().cloned()
    }

    /// Removes and returns the first todo
    pub fn shift(&mut self) -> Option<TodoHandle> {
        let removed = self.todos.pop_front()?;
        debug!(title = %self.title, item = %removed, "shifted todo");
        Some(removed)
    }

    /// Removes and returns the last todo
    pub fn pop(&mut self) -> Option<TodoHandle> {
        let removed = self.todos.pop_back()?;
        debug!(title = %self.title, item = %removed, "popped todo");
        Some(removed)
    }

    fn out_of_range(&self, index: usize) -> TodoListError {
        warn!(title = %self.title, index, size = self.todos.len(), "index out of range");
        TodoListError::IndexOutOfRange {
            index,
            size: self.todos.len(),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.todos.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    /// Returns the todo at the given index
    pub fn item_at(&self, index: usize) -> Result<TodoHandle> {
        self.check_index(index)?;
        Ok(self.todos[index].clone())
    }

    /// Marks the todo at the given index as done
    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the todo at the given index as not done
    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Removes and returns the todo at the given index, shifting later todos left
    pub fn remove_at(&mut self, index: usize) -> Result<TodoHandle> {
        self.check_index(index)?;
        let removed = self
            .todos
            .remove(index)
            .ok_or_else(|| self.out_of_range(index))?;
        debug!(title = %self.title, index, item = %removed, "removed todo");
        Ok(removed)
    }

    /// Returns true if every todo is done. An empty list is done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(TodoHandle::is_done)
    }

    pub fn mark_all_done(&self) {
        debug!(title = %self.title, count = self.todos.len(), "marking all todos done");
        self.for_each(TodoHandle::mark_done);
    }

    pub fn mark_all_undone(&self) {
        debug!(title = %self.title, count = self.todos.len(), "marking all todos undone");
        self.for_each(TodoHandle::mark_undone);
    }

    /// Calls `visitor` once per todo, in list order
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&TodoHandle),
    {
        for todo in &self.todos {
            visitor(todo);
        }
    }

    /// Builds a new list with the same title holding the todos that match
    /// `predicate`. The todos are shared with this list, not copied.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&TodoHandle) -> bool,
    {
        let mut filtered = TodoList::new(self.title.clone());
        self.for_each(|todo| {
            if predicate(todo) {
                filtered.add(todo.clone());
            }
        });
        debug!(
            title = %self.title,
            kept = filtered.size(),
            total = self.size(),
            "filtered todos"
        );
        filtered
    }

    /// Returns the first todo whose description matches exactly
    pub fn find_by_description(&self, description: &str) -> Option<TodoHandle> {
        self.todos
            .iter()
            .find(|todo| todo.description() == description)
            .cloned()
    }

    pub fn all_done(&self) -> TodoList {
        self.filter(|todo| todo.is_done())
    }

    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }

    /// Marks the first todo with the given description as done.
    /// Returns false if there is no such todo.
    pub fn mark_done(&self, description: &str) -> bool {
        match self.find_by_description(description) {
            Some(todo) => {
                todo.mark_done();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.todos.iter(),
        }
    }

    /// Copies the current state of the list into a serializable value
    pub fn snapshot(&self) -> TodoListSnapshot {
        TodoListSnapshot {
            title: self.title.clone(),
            todos: self.todos.iter().map(TodoHandle::snapshot).collect(),
        }
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for todo in &self.todos {
            write!(f, "\n{}", todo)?;
        }
        Ok(())
    }
}

impl Extend<TodoHandle> for TodoList {
    fn extend<I: IntoIterator<Item = TodoHandle>>(&mut self, iter: I) {
        for todo in iter {
            self.add(todo);
        }
    }
}

/// Borrowing iterator over the todos of a [`TodoList`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, TodoHandle>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TodoHandle;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoHandle;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Point-in-time copy of a [`TodoList`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListSnapshot {
    pub title: String,
    pub todos: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (TodoList, TodoHandle, TodoHandle, TodoHandle) {
        let mut list = TodoList::new("Letters");
        let a = list.add(Todo::new("a"));
        let b = list.add(Todo::new("b"));
        let c = list.add(Todo::new("c"));
        (list, a, b, c)
    }

    #[test]
    fn test_empty_list() {
        let mut list = TodoList::new("Empty");

        assert_eq!(list.size(), 0);
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.shift().is_none());
        assert!(list.pop().is_none());
        assert!(list.is_done());
        assert_eq!(list.to_string(), "--- Empty ---");
    }

    #[test]
    fn test_item_at_matches_to_array() {
        let (list, ..) = abc();
        let array = list.to_array();

        for (i, todo) in array.iter().enumerate() {
            assert_eq!(&list.item_at(i).unwrap(), todo);
        }
    }

    #[test]
    fn test_out_of_range_indices_fail() {
        let (mut list, ..) = abc();
        let expected = TodoListError::IndexOutOfRange { index: 3, size: 3 };

        assert_eq!(list.item_at(3).unwrap_err(), expected);
        assert_eq!(list.mark_done_at(3).unwrap_err(), expected);
        assert_eq!(list.mark_undone_at(3).unwrap_err(), expected);
        assert_eq!(list.remove_at(3).unwrap_err(), expected);
        assert!(list.item_at(usize::MAX).is_err());
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_duplicate_handles_are_kept() {
        let mut list = TodoList::new("Dupes");
        let a = list.add(Todo::new("a"));
        list.add(a.clone());

        assert_eq!(list.size(), 2);
        list.mark_done_at(0).unwrap();
        assert!(list.item_at(1).unwrap().is_done());
    }

    #[test]
    fn test_filter_shares_items_with_source() {
        let (list, a, b, _) = abc();
        a.mark_done();

        let done = list.filter(|todo| todo.is_done());
        assert_eq!(done.title(), "Letters");
        assert_eq!(done.to_array(), vec![a.clone()]);

        done.mark_undone_at(0).unwrap();
        assert!(!a.is_done());

        b.mark_done();
        assert_eq!(list.all_done().to_array(), vec![b.clone()]);
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_find_and_mark_done_by_description() {
        let (list, _, b, _) = abc();

        assert_eq!(list.find_by_description("b"), Some(b.clone()));
        assert!(list.find_by_description("z").is_none());

        assert!(list.mark_done("b"));
        assert!(b.is_done());
        assert!(!list.mark_done("z"));
    }

    #[test]
    fn test_mark_all_undone() {
        let (list, ..) = abc();
        list.mark_all_done();
        assert!(list.is_done());

        list.mark_all_undone();
        assert_eq!(list.all_not_done().size(), 3);
        assert!(!list.is_done());
    }

    #[test]
    fn test_iter_and_extend() {
        let (list, a, b, c) = abc();

        let mut copy = TodoList::new("Copy");
        copy.extend(list.iter().cloned());
        assert_eq!(copy.to_array(), vec![a, b, c.clone()]);
        assert_eq!(list.iter().len(), 3);
        assert_eq!(list.iter().next_back(), Some(&c));

        let descriptions: Vec<String> = (&list).into_iter().map(|t| t.description()).collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_shift_and_pop_drain_from_both_ends() {
        let mut list = TodoList::new("Queue");
        let handles: Vec<TodoHandle> = (0..100)
            .map(|i| list.add(Todo::new(format!("item {}", i))))
            .collect();

        assert_eq!(list.shift(), Some(handles[0].clone()));
        assert_eq!(list.pop(), Some(handles[99].clone()));
        let tail = list.add(Todo::new("tail"));

        assert_eq!(list.size(), 99);
        assert_eq!(list.first(), Some(handles[1].clone()));
        assert_eq!(list.last(), Some(tail.clone()));
        assert_eq!(list.item_at(97).unwrap(), handles[98]);
        assert_eq!(list.remove_at(97).unwrap(), handles[98]);
        assert_eq!(list.to_array()[..2], handles[1..3]);
        assert_eq!(list.iter().next_back(), Some(&tail));
    }

    #[test]
    fn test_header_heads_rendering() {
        let (list, ..) = abc();

        assert_eq!(list.header(), "--- Letters ---");
        assert!(list.to_string().starts_with(&list.header()));
    }

    #[test]
    fn test_snapshot_serializes() {
        let (list, _, b, _) = abc();
        b.mark_done();

        let value = serde_json::to_value(list.snapshot()).unwrap();
        assert_eq!(value["title"], "Letters");
        assert_eq!(value["todos"][1]["description"], "b");
        assert_eq!(value["todos"][1]["done"], true);
        assert_eq!(value["todos"][0]["done"], false);
    }
}
