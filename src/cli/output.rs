use serde::Serialize;

use crate::model::task::Task;
use crate::store::views::Counts;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub name: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
    pub hide_done: bool,
}

#[derive(Serialize)]
pub struct SummaryJson {
    pub all: usize,
    pub done: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        name: task.name.clone(),
        done: task.done,
    }
}

pub fn task_list_json(tasks: &[&Task], hide_done: bool) -> TaskListJson {
    TaskListJson {
        tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
        hide_done,
    }
}

pub fn summary_json(counts: Counts) -> SummaryJson {
    SummaryJson {
        all: counts.all,
        done: counts.done,
    }
}

// ---------------------------------------------------------------------------
// Plain-text rendering
// ---------------------------------------------------------------------------

/// One task line: `[x]  12  Buy milk`
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.done { "[x]" } else { "[ ]" };
    format!("{} {:>4}  {}", checkbox, task.id, task.name)
}

pub fn summary_lines(counts: Counts) -> String {
    format!("total: {}\ndone:  {}", counts.all, counts.done)
}
