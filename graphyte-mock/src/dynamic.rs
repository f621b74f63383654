use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use graphyte_core::{GraphyteError, RawSeries, RenderConnector, RenderRequest};

/// Instruction for how `render` should behave for a given target.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return these series for the target.
    Return(Vec<RawSeries>),
    /// Fail the whole call with the provided error.
    Fail(GraphyteError),
    /// Hang indefinitely (simulate a stalled backend).
    Hang,
}

#[derive(Default)]
struct InternalState {
    render_rules: HashMap<String, MockBehavior>,
    requests: Vec<RenderRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `render` calls that include `target`.
    pub async fn set_render_behavior(&self, target: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.render_rules.insert(target.into(), behavior);
    }

    /// Remove every configured behavior.
    pub async fn clear(&self) {
        self.state.lock().await.render_rules.clear();
    }

    /// Requests received so far, in call order.
    pub async fn requests(&self) -> Vec<RenderRequest> {
        self.state.lock().await.requests.clone()
    }
}

/// Connector whose answers are scripted per target at runtime.
///
/// Targets without a rule yield no series.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a connector plus the controller that scripts it.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let connector = Arc::new(Self {
            name,
            state: Arc::clone(&state),
        });
        (connector, DynamicMockController { state })
    }
}

#[async_trait]
impl RenderConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn render(&self, req: &RenderRequest) -> Result<Vec<RawSeries>, GraphyteError> {
        let behaviors: Vec<Option<MockBehavior>> = {
            let mut guard = self.state.lock().await;
            guard.requests.push(req.clone());
            req.targets
                .iter()
                .map(|t| guard.render_rules.get(t).cloned())
                .collect()
        };

        let mut out = Vec::new();
        for behavior in behaviors {
            match behavior {
                Some(MockBehavior::Return(series)) => out.extend(series),
                Some(MockBehavior::Fail(e)) => return Err(e),
                Some(MockBehavior::Hang) => std::future::pending::<()>().await,
                None => {}
            }
        }
        Ok(out)
    }
}
