//! Given steps for project assignment BDD scenarios.

use super::world::{ProjectAssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::project::services::{CreateProjectRequest, CreateTaskRequest};

#[given(r#"a project "{name}" owned by "{owner}""#)]
fn project_owned_by(
    world: &mut ProjectAssignmentWorld,
    name: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let outcome = run_async(
        world
            .service
            .create_project(CreateProjectRequest::new(name, owner)),
    )
    .wrap_err("create project for scenario")?;
    world.project_id = Some(outcome.output.id().clone());
    world.last_events = outcome.events;
    Ok(())
}

#[given(r#"a task titled "{title}" in the project"#)]
fn task_in_project(world: &mut ProjectAssignmentWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?.as_str().to_owned();
    let outcome = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(project_id, title)),
    )
    .wrap_err("create task for scenario")?;
    world.task_id = Some(outcome.output);
    world.last_events = outcome.events;
    Ok(())
}

#[given(r#""{member}" has joined the project"#)]
fn member_has_joined(world: &mut ProjectAssignmentWorld, member: String) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?.as_str().to_owned();
    let outcome = run_async(world.service.add_member(&project_id, &member))
        .wrap_err("add member for scenario")?;
    world.last_events = outcome.events;
    Ok(())
}
