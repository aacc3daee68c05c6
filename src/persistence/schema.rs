//! Diesel schema for project, task, and comment persistence.

diesel::table! {
    /// Project aggregate roots.
    projects (id) {
        /// Project identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Project membership associations.
    project_members (project_id, member_id) {
        /// Owning project identifier.
        #[max_length = 255]
        project_id -> Varchar,
        /// Member user identifier.
        #[max_length = 255]
        member_id -> Varchar,
        /// Opaque access-level tag.
        #[max_length = 50]
        access_level -> Varchar,
        /// When the membership row was written.
        joined_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks owned by projects.
    tasks (id) {
        /// Task identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Owning project identifier.
        #[max_length = 255]
        project_id -> Varchar,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Canonical task status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional assignee user identifier.
        #[max_length = 255]
        assignee_id -> Nullable<Varchar>,
        /// Creation order within the owning project.
        position -> BigInt,
    }
}

diesel::table! {
    /// Comments attached to tasks.
    comments (id) {
        /// Comment identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Commented task identifier.
        #[max_length = 255]
        task_id -> Varchar,
        /// Author user identifier.
        #[max_length = 255]
        author_id -> Varchar,
        /// Comment body.
        content -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(project_members -> projects (project_id));
diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, project_members, tasks, comments);
