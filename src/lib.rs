pub mod error;
pub mod task;
pub mod store;
pub mod search;
pub mod view;
pub mod persistence;
pub mod theme;

// Export task model
pub use task::{Task, TaskId, IdGenerator};

// Export store and search
pub use store::TaskStore;
pub use search::filter_tasks;

// Export view projection
pub use view::{
    ListEntry, ListRegion, TaskAction, TaskEntry, TaskHooks,
    RenderedView, Partition, partition, render_list, render_view
};

// Export persistence
pub use persistence::{PersistenceAdapter, MemoryStorage, JsonFileStorage, TASKS_KEY, THEME_KEY};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeName};

pub use error::{PersistenceError, ThemeParseError};
