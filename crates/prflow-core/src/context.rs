use prflow_chat_interface::ChatService;
use prflow_config::{Config, WorkflowConfig};
use prflow_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub workflow: &'a WorkflowConfig,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub chat_service: &'a (dyn ChatService + 'a),
}

impl<'a> CoreContext<'a> {
    /// Target chat channel.
    pub fn channel_id(&self) -> &str {
        &self.config.chat.slack.channel_id
    }
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use std::collections::HashMap;

    use prflow_chat_interface::MockChatService;
    use prflow_config::{Config, WorkflowConfig};
    use prflow_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub const TEST_CHANNEL_ID: &str = "C0TEST";

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub workflow: WorkflowConfig,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub chat_service: MockChatService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version();
            config.chat.slack.channel_id = TEST_CHANNEL_ID.into();

            Self {
                config,
                workflow: test_workflow(Some(24.0)),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                chat_service: MockChatService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                workflow: &self.workflow,
                core_module: &self.core_module,
                api_service: &self.api_service,
                chat_service: &self.chat_service,
            }
        }
    }

    /// Pool `alice, bob, carol, dave`, where `dave` has no Slack mapping.
    #[allow(dead_code)]
    pub fn test_workflow(remind_after: Option<f64>) -> WorkflowConfig {
        let mapper: HashMap<String, String> = [("alice", "U01"), ("bob", "U02"), ("carol", "U03")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        WorkflowConfig::new(
            Some("Core".into()),
            vec!["alice".into(), "bob".into(), "carol".into(), "dave".into()],
            mapper,
            remind_after,
        )
        .unwrap()
    }
}
