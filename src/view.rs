//! Projection of the task collection into display entries.
//!
//! The view is rebuilt from scratch after every state or search change:
//! filter by search term, split by completion status, then render each half into
//! the entries of its display region. Nothing here mutates state; the task
//! controls only carry the [`TaskAction`]s they are bound to.

use crate::search::filter_tasks;
use crate::task::{Task, TaskId};

/// Named display regions of the task view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListRegion {
    Active,
    Completed,
}

impl ListRegion {
    /// Placeholder text shown when the region has no tasks.
    pub fn empty_label(self) -> &'static str {
        match self {
            ListRegion::Active => "No active tasks",
            ListRegion::Completed => "No completed tasks",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ListRegion::Active => "Active",
            ListRegion::Completed => "Completed",
        }
    }
}

/// An interaction bound to a specific task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    ToggleCompletion(TaskId),
    Edit(TaskId),
    Delete(TaskId),
}

/// The three controls attached to every rendered task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHooks {
    pub toggle: TaskAction,
    pub edit: TaskAction,
    pub delete: TaskAction,
}

impl TaskHooks {
    fn for_task(id: &TaskId) -> Self {
        Self {
            toggle: TaskAction::ToggleCompletion(id.clone()),
            edit: TaskAction::Edit(id.clone()),
            delete: TaskAction::Delete(id.clone()),
        }
    }
}

/// Display description of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: TaskId,
    /// Shown verbatim.
    pub title: String,
    pub completed: bool,
    pub hooks: TaskHooks,
}

/// One line of a rendered region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Placeholder(String),
    Task(TaskEntry),
}

impl ListEntry {
    pub fn as_task(&self) -> Option<&TaskEntry> {
        match self {
            ListEntry::Task(entry) => Some(entry),
            ListEntry::Placeholder(_) => None,
        }
    }
}

/// Tasks split by completion status, each half in original relative order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub active: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

/// Splits `tasks` into active and completed halves.
pub fn partition<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Partition<'a> {
    let (completed, active) = tasks.into_iter().partition(|task| task.is_completed());
    Partition { active, completed }
}

/// Renders a task list, or a single placeholder carrying `empty_label` if it is empty.
pub fn render_list(tasks: &[&Task], empty_label: &str) -> Vec<ListEntry> {
    if tasks.is_empty() {
        return vec![ListEntry::Placeholder(empty_label.to_string())];
    }

    tasks
        .iter()
        .map(|task| {
            ListEntry::Task(TaskEntry {
                id: task.id().clone(),
                title: task.title().to_string(),
                completed: task.is_completed(),
                hooks: TaskHooks::for_task(task.id()),
            })
        })
        .collect()
}

/// Entries for both regions after a full filter/partition/render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub active: Vec<ListEntry>,
    pub completed: Vec<ListEntry>,
}

impl RenderedView {
    pub fn region(&self, region: ListRegion) -> &[ListEntry] {
        match region {
            ListRegion::Active => &self.active,
            ListRegion::Completed => &self.completed,
        }
    }
}

/// Runs the full pipeline over `tasks` with the current search term.
pub fn render_view(tasks: &[Task], search_term: &str) -> RenderedView {
    let matching = filter_tasks(tasks, search_term);
    let split = partition(matching);
    RenderedView {
        active: render_list(&split.active, ListRegion::Active.empty_label()),
        completed: render_list(&split.completed, ListRegion::Completed.empty_label()),
    }
}
