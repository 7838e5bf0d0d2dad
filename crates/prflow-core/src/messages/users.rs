use prflow_config::WorkflowConfig;

/// Render a GitHub login as a Slack mention, or as bold text when unmapped.
pub fn user_mention(workflow: &WorkflowConfig, github_login: &str) -> String {
    match workflow.slack_user_id(github_login) {
        Some(id) => format!("<@{id}>"),
        None => format!("*{github_login}*"),
    }
}

/// Greeting line for `target`, empty when the target triggered the event.
pub fn greeting(workflow: &WorkflowConfig, target: &str, actor: &str) -> String {
    if target.is_empty() || target == actor {
        String::new()
    } else {
        format!("Hi {} :wave:\n", user_mention(workflow, target))
    }
}
