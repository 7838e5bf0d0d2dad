pub(crate) mod process_workflow_event;

pub use process_workflow_event::{ProcessWorkflowEventInterface, WorkflowEvent};

#[cfg(any(test, feature = "testkit"))]
pub use self::process_workflow_event::MockProcessWorkflowEventInterface;
