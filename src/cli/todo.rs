//! td command implementations.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

use crate::app::App;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::kv::FileKvStore;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::sync::StorageSync;
use crate::task::{Command, Task};
use crate::validate::validate;

pub struct AddOptions {
    pub title: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RmOptions {
    pub title: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct EditOptions {
    pub title: String,
    pub new_title: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DoneOptions {
    pub title: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ClearOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

struct TodoContext {
    app: App,
    output: OutputOptions,
}

#[derive(serde::Serialize)]
struct TaskAddedOutput {
    title: String,
    total: usize,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.json, options.quiet)?;

    let verdict = validate(&options.title, ctx.app.tasks());
    if !verdict.valid {
        return Err(Error::Validation(verdict.message));
    }

    ctx.app.dispatch(&Command::AddTask {
        title: options.title.clone(),
    });

    let output = TaskAddedOutput {
        title: options.title.clone(),
        total: ctx.app.tasks().len(),
    };

    let mut human = HumanOutput::new("Task added");
    human.push_summary("Title", options.title);
    human.push_summary("Total", output.total.to_string());

    emit_success(ctx.output, "add", &output, Some(&human))
}

#[derive(serde::Serialize)]
struct TaskDeletedOutput {
    title: String,
    removed: usize,
    total: usize,
}

pub fn run_rm(options: RmOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.json, options.quiet)?;

    let before = ctx.app.tasks().len();
    ctx.app.dispatch(&Command::DeleteTask {
        title: options.title.clone(),
    });
    let total = ctx.app.tasks().len();
    let removed = before - total;

    let output = TaskDeletedOutput {
        title: options.title.clone(),
        removed,
        total,
    };

    let mut human = HumanOutput::new("Task deleted");
    if removed == 0 {
        human = HumanOutput::new("No matching task");
        human.push_warning(format!("no task titled '{}'", options.title));
    }
    human.push_summary("Title", options.title);
    human.push_summary("Remaining", total.to_string());

    emit_success(ctx.output, "rm", &output, Some(&human))
}

#[derive(serde::Serialize)]
struct TaskEditedOutput {
    title: String,
    new_title: String,
    changed: bool,
}

pub fn run_edit(options: EditOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.json, options.quiet)?;

    if options.new_title.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "new title cannot be empty".to_string(),
        ));
    }

    // Renaming an existing task to its exact current title is a no-op,
    // not a duplicate; skip validation and the reducer entirely. An
    // unknown title falls through to the usual no-match reporting.
    if options.new_title == options.title && ctx.app.contains_title(&options.title) {
        let output = TaskEditedOutput {
            title: options.title.clone(),
            new_title: options.new_title,
            changed: false,
        };

        let mut human = HumanOutput::new("Task unchanged");
        human.push_summary("Title", options.title);

        return emit_success(ctx.output, "edit", &output, Some(&human));
    }

    let verdict = validate(&options.new_title, ctx.app.tasks());
    if !verdict.valid {
        return Err(Error::Validation(verdict.message));
    }

    let existed = ctx.app.contains_title(&options.title);
    ctx.app.dispatch(&Command::EditTask {
        old_title: options.title.clone(),
        new_title: options.new_title.clone(),
    });

    let output = TaskEditedOutput {
        title: options.title.clone(),
        new_title: options.new_title.clone(),
        changed: existed,
    };

    let mut human = HumanOutput::new("Task edited");
    if existed {
        human.push_summary("Title", options.title);
        human.push_summary("New title", options.new_title);
    } else {
        human = HumanOutput::new("No matching task");
        human.push_warning(format!("no task titled '{}'", options.title));
        human.push_summary("Title", options.title);
    }

    emit_success(ctx.output, "edit", &output, Some(&human))
}

#[derive(serde::Serialize)]
struct TaskToggledOutput {
    title: String,
    done: Option<bool>,
}

pub fn run_done(options: DoneOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.json, options.quiet)?;

    let existed = ctx.app.contains_title(&options.title);
    ctx.app.dispatch(&Command::ToggleDone {
        title: options.title.clone(),
    });
    let done = ctx
        .app
        .tasks()
        .iter()
        .find(|task| task.title == options.title)
        .map(|task| task.done);

    let output = TaskToggledOutput {
        title: options.title.clone(),
        done,
    };

    let mut human = HumanOutput::new("Task toggled");
    if existed {
        human.push_summary("Title", options.title);
        let status = match done {
            Some(true) => "done",
            _ => "open",
        };
        human.push_summary("Status", status.to_string());
    } else {
        human = HumanOutput::new("No matching task");
        human.push_warning(format!("no task titled '{}'", options.title));
        human.push_summary("Title", options.title);
    }

    emit_success(ctx.output, "done", &output, Some(&human))
}

#[derive(serde::Serialize)]
struct ClearedOutput {
    removed: usize,
    total: usize,
}

pub fn run_clear(options: ClearOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir, options.json, options.quiet)?;

    let before = ctx.app.tasks().len();
    ctx.app.dispatch(&Command::ClearCompleted);
    let total = ctx.app.tasks().len();
    let removed = before - total;

    let output = ClearedOutput { removed, total };

    let mut human = HumanOutput::new("Completed tasks cleared");
    human.push_summary("Removed", removed.to_string());
    human.push_summary("Remaining", total.to_string());

    emit_success(ctx.output, "clear", &output, Some(&human))
}

#[derive(serde::Serialize)]
struct TaskListOutput {
    total: usize,
    tasks: Vec<Task>,
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.data_dir, options.json, options.quiet)?;

    let tasks = ctx.app.tasks().to_vec();
    let output = TaskListOutput {
        total: tasks.len(),
        tasks: tasks.clone(),
    };

    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Total", tasks.len().to_string());
    for task in &tasks {
        let mark = if task.done { 'x' } else { ' ' };
        human.push_detail(format!("[{}] {}", mark, task.title));
    }
    if tasks.is_empty() {
        human.push_next_step("td add <title>");
    }

    emit_success(ctx.output, "list", &output, Some(&human))
}

fn load_context(data_dir: Option<PathBuf>, json: bool, quiet: bool) -> Result<TodoContext> {
    let store = FileKvStore::new(resolve_data_dir(data_dir)?);
    debug!("data directory: {}", store.root().display());

    let sync = StorageSync::new(Box::new(store));
    let app = App::init(sync);

    Ok(TodoContext {
        app,
        output: OutputOptions { json, quiet },
    })
}

/// Configured default output mode, for invocations without `--json`.
/// Resolves to plain output when no data directory is available.
pub(crate) fn configured_json_default(data_dir: Option<PathBuf>) -> bool {
    match resolve_data_dir(data_dir) {
        Ok(dir) => Config::load_from_dir(&dir).output.json,
        Err(_) => false,
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("", "", "td")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(Error::NoDataDir)
}
