/*
[INPUT]:  TaskListScreen and user input via dialoguer prompts
[OUTPUT]: Screen commands and a re-rendered task list after each action
[POS]:    CLI interactive flow
[UPDATE]: When screen commands or menu actions change
*/

use anyhow::Result;
use console::{Term, style};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use tasklist_adapter::{Task, TaskAccessor};
use tasklist_screen::{TaskListScreen, render};

#[derive(Debug, Clone, Copy)]
enum Action {
    Refresh,
    Add,
    ContinueEdit,
    Edit,
    Toggle,
    Delete,
    Exit,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::Refresh => "Refresh",
            Action::Add => "Add task",
            Action::ContinueEdit => "Continue editing",
            Action::Edit => "Edit task",
            Action::Toggle => "Toggle completion",
            Action::Delete => "Delete task",
            Action::Exit => "Exit",
        }
    }
}

pub async fn run_interactive<A: TaskAccessor>(screen: &mut TaskListScreen<A>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let term = Term::stdout();

    // Command failures land in the screen's error slot and are drawn by
    // `draw`, so their results are not inspected here.
    loop {
        draw(&term, screen)?;

        let mut actions = vec![Action::Refresh, Action::Add];
        if screen.state().edit().is_some() {
            actions.push(Action::ContinueEdit);
        }
        if !screen.state().tasks().is_empty() {
            actions.extend([Action::Edit, Action::Toggle, Action::Delete]);
        }
        actions.push(Action::Exit);
        let labels: Vec<&str> = actions.iter().map(|action| action.label()).collect();

        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            Action::Refresh => {
                let _ = screen.fetch_all().await;
            }
            Action::Add => {
                let title: String = Input::with_theme(&theme)
                    .with_prompt("New Task Title")
                    .allow_empty(true)
                    .interact_text()?;
                screen.set_new_title(title);
                let _ = screen.add_task().await;
            }
            Action::ContinueEdit => {
                submit_edit(screen, &theme).await?;
            }
            Action::Edit => {
                if let Some(task) = select_task(screen, &theme, "Task to edit")? {
                    screen.start_edit(task.id, task.title);
                    submit_edit(screen, &theme).await?;
                }
            }
            Action::Toggle => {
                if let Some(task) = select_task(screen, &theme, "Task to toggle")? {
                    let _ = screen.toggle_completion(&task.id, task.completed).await;
                }
            }
            Action::Delete => {
                if let Some(task) = select_task(screen, &theme, "Task to delete")? {
                    let confirmed = Confirm::with_theme(&theme)
                        .with_prompt(format!("Delete \"{}\"?", task.title))
                        .default(false)
                        .interact()?;
                    if confirmed {
                        let _ = screen.delete_task(&task.id).await;
                    }
                }
            }
            Action::Exit => return Ok(()),
        }
    }
}

fn draw<A: TaskAccessor>(term: &Term, screen: &TaskListScreen<A>) -> Result<()> {
    term.clear_screen()?;
    term.write_line(&style("Tasks").bold().cyan().to_string())?;
    for line in render(screen.state()) {
        term.write_line(&line)?;
    }
    term.write_line("")?;
    Ok(())
}

async fn submit_edit<A: TaskAccessor>(
    screen: &mut TaskListScreen<A>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let current = screen
        .state()
        .edit()
        .map(|edit| edit.title.clone())
        .unwrap_or_default();
    let title: String = Input::with_theme(theme)
        .with_prompt("Edit Task Title")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    screen.set_edit_title(title);
    let _ = screen.update_task().await;
    Ok(())
}

fn select_task<A: TaskAccessor>(
    screen: &TaskListScreen<A>,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<Task>> {
    let tasks = screen.state().tasks();
    if tasks.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = tasks
        .iter()
        .map(|task| {
            let mark = if task.completed { "x" } else { " " };
            format!("[{mark}] {} | {}", task.id, task.title)
        })
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(tasks[selection].clone()))
}
