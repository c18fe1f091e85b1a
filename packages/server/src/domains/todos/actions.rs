//! Task board actions.
//!
//! Every operation here is gated by `manage_todos`: the board is visible to
//! verificatori/amministratori only. Completion can be toggled by any of
//! them, not just the creator.

use tracing::info;

use crate::common::{Actor, ActorContext, Capability, CoreError, TodoId};
use crate::domains::notifications::{notify, DomainEvent};
use crate::domains::todos::models::{NewTodo, TodoItem};
use crate::kernel::ServerDeps;

/// Create a todo item. Assigning it to someone else notifies the assignee;
/// without an assignee no notification is generated.
pub async fn create_todo(
    deps: &ServerDeps,
    actor: &ActorContext,
    input: NewTodo,
) -> Result<TodoItem, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ManageTodos)
        .check()?;

    if input.title.trim().is_empty() {
        return Err(CoreError::ValidationFailed(
            "il titolo è obbligatorio".to_string(),
        ));
    }

    let todo = TodoItem::new(input, actor.user_id);
    deps.store.insert_todo(&todo).await?;

    info!(todo_id = %todo.id, priority = %todo.priority, "Created todo");

    if todo.assigned_to.is_some() {
        let profile = deps
            .store
            .find_user(actor.user_id)
            .await?
            .ok_or(CoreError::NotFound("user"))?;
        notify(
            deps,
            &DomainEvent::TodoAssigned {
                todo: todo.clone(),
                actor: profile,
            },
        )
        .await?;
    }

    Ok(todo)
}

/// Toggle completion on a todo item.
pub async fn set_completed(
    deps: &ServerDeps,
    actor: &ActorContext,
    todo_id: TodoId,
    completed: bool,
) -> Result<TodoItem, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ManageTodos)
        .check()?;

    let todo = deps
        .store
        .set_todo_completed(todo_id, completed)
        .await
        .map_err(CoreError::from_store("todo"))?;

    info!(todo_id = %todo_id, completed, "Toggled todo");
    Ok(todo)
}

/// Delete a todo item.
pub async fn delete_todo(
    deps: &ServerDeps,
    actor: &ActorContext,
    todo_id: TodoId,
) -> Result<(), CoreError> {
    Actor::from_context(actor)
        .can(Capability::ManageTodos)
        .check()?;

    deps.store
        .delete_todo(todo_id)
        .await
        .map_err(CoreError::from_store("todo"))?;

    info!(todo_id = %todo_id, "Deleted todo");
    Ok(())
}

/// The whole board, newest first.
pub async fn list_todos(
    deps: &ServerDeps,
    actor: &ActorContext,
) -> Result<Vec<TodoItem>, CoreError> {
    Actor::from_context(actor)
        .can(Capability::ManageTodos)
        .check()?;

    let todos = deps.store.list_todos().await?;
    Ok(todos)
}
