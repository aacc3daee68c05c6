//! When steps for project assignment BDD scenarios.

use super::world::{ProjectAssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#""{member}" is added to the project"#)]
fn member_is_added(world: &mut ProjectAssignmentWorld, member: String) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?.as_str().to_owned();
    let outcome = run_async(world.service.add_member(&project_id, &member))
        .wrap_err("add member")?;
    world.last_events = outcome.events;
    Ok(())
}

#[when(r#"the task is assigned to "{assignee}""#)]
fn task_is_assigned(
    world: &mut ProjectAssignmentWorld,
    assignee: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?.as_str().to_owned();
    let task_id = world.task_id()?.as_str().to_owned();
    let result = run_async(
        world
            .service
            .assign_task(&project_id, &task_id, &assignee),
    );
    world.last_events = result
        .as_ref()
        .map(|outcome| outcome.events.clone())
        .unwrap_or_default();
    world.last_assignment = Some(result);
    Ok(())
}
