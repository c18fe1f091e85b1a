use crate::common::entity_ids::UserId;
use crate::common::types::Role;

/// Capabilities in the giornalino editorial platform.
///
/// Each capability maps to a fixed allow-list of roles. The table is static:
/// no side effects, no I/O, never computed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Draft a new article
    CreateArticle,

    /// Edit article content (ownership checked separately, see `can_edit_article`)
    EditArticle,

    /// Delete any article regardless of author
    DeleteArticle,

    /// Approve or reject articles in review
    ApproveArticle,

    /// See every article, not just one's own
    ViewAllArticles,

    /// Comment on articles under review
    AddComment,

    /// Remove a review comment
    DeleteComment,

    /// Create, toggle and delete todo items
    ManageTodos,

    /// Change roles and delete users
    ManageUsers,

    /// Read the newsroom-wide dashboard statistics
    ViewStats,

    /// Enter the admin area
    AccessAdmin,
}

impl Capability {
    /// The fixed allow-list of roles for this capability.
    pub fn allowed_roles(&self) -> &'static [Role] {
        use Role::*;
        match self {
            Capability::CreateArticle => &[Scrittore, Verificatore, Amministratore],
            Capability::EditArticle => &[Scrittore, Verificatore, Amministratore],
            Capability::DeleteArticle => &[Amministratore],
            Capability::ApproveArticle => &[Verificatore, Amministratore],
            Capability::ViewAllArticles => &[Verificatore, Amministratore],
            Capability::AddComment => &[Verificatore, Amministratore],
            Capability::DeleteComment => &[Amministratore],
            Capability::ManageTodos => &[Verificatore, Amministratore],
            Capability::ManageUsers => &[Amministratore],
            Capability::ViewStats => &[Amministratore],
            Capability::AccessAdmin => &[Amministratore],
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::CreateArticle => "create_article",
            Capability::EditArticle => "edit_article",
            Capability::DeleteArticle => "delete_article",
            Capability::ApproveArticle => "approve_article",
            Capability::ViewAllArticles => "view_all_articles",
            Capability::AddComment => "add_comment",
            Capability::DeleteComment => "delete_comment",
            Capability::ManageTodos => "manage_todos",
            Capability::ManageUsers => "manage_users",
            Capability::ViewStats => "view_stats",
            Capability::AccessAdmin => "access_admin",
        };
        write!(f, "{name}")
    }
}

/// Check a role against the static allow-list for a capability.
///
/// Deterministic: identical inputs always yield the identical result.
pub fn has_permission(role: Role, capability: Capability) -> bool {
    capability.allowed_roles().contains(&role)
}

/// Whether `user_id` may edit the content of an article authored by `author_id`.
///
/// Admins and verificatori may edit any article; scrittori only their own.
/// The article status is deliberately not consulted here: the contract is
/// purely role/ownership based, so a verificatore can edit an article that
/// is already in review.
pub fn can_edit_article(role: Role, user_id: UserId, author_id: UserId) -> bool {
    match role {
        Role::Amministratore => true,
        Role::Verificatore => true,
        Role::Scrittore => user_id == author_id,
    }
}

/// Whether `user_id` may delete an article authored by `author_id`.
///
/// Admins may delete anything. Scrittori may delete only their own drafts
/// (the draft-status restriction is enforced by the caller). Verificatori
/// may reject an article, never delete it.
pub fn can_delete_article(role: Role, user_id: UserId, author_id: UserId) -> bool {
    match role {
        Role::Amministratore => true,
        Role::Scrittore => user_id == author_id,
        Role::Verificatore => false,
    }
}
