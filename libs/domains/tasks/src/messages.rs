//! Task messages, in English and Brazilian Portuguese.

use axum_helpers::i18n::MessageEntry;

pub mod keys {
    pub const CREATED: &str = "task.created.success";
    pub const UPDATED: &str = "task.updated.success";
    pub const DELETED: &str = "task.deleted.success";
    pub const NOT_FOUND: &str = "task.not.found";
    pub const TITLE_NOT_EMPTY: &str = "task.title.not.empty";
    pub const DESCRIPTION_SIZE: &str = "task.description.size";
}

/// Register with `Catalog::with_messages`.
pub const TASK_MESSAGES: &[MessageEntry] = &[
    (
        keys::CREATED,
        "Task '{0}' created successfully.",
        "Tarefa '{0}' criada com sucesso.",
    ),
    (
        keys::UPDATED,
        "Task {0} updated successfully.",
        "Tarefa {0} atualizada com sucesso.",
    ),
    (
        keys::DELETED,
        "Task {0} deleted successfully.",
        "Tarefa {0} excluída com sucesso.",
    ),
    (
        keys::NOT_FOUND,
        "Task with ID {0} not found.",
        "Tarefa com ID {0} não encontrada.",
    ),
    (
        keys::TITLE_NOT_EMPTY,
        "Title must not be empty and must be at most 100 characters.",
        "O título é obrigatório e deve ter no máximo 100 caracteres.",
    ),
    (
        keys::DESCRIPTION_SIZE,
        "Description must be at most 500 characters.",
        "A descrição deve ter no máximo 500 caracteres.",
    ),
];
