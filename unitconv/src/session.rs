//! One user session: an engine, its history log, and the last result

use tracing::debug;
use unitconv_core::{Conversion, ConversionRequest, ConversionResult};

use crate::{Engine, History};

/// Pairs an engine with one explicit history.
///
/// Converting never records anything by itself. `add_to_history` appends
/// the most recent successful conversion, if there is one.
pub struct Session {
    engine: Engine,
    history: History,
    last: Option<Conversion>,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Self::with_history(engine, History::new())
    }

    pub fn with_history(engine: Engine, history: History) -> Self {
        Session { engine, history, last: None }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_conversion(&self) -> Option<&Conversion> {
        self.last.as_ref()
    }

    /// Convert and remember the result. A failure forgets the previous one.
    pub async fn convert(&mut self, request: &ConversionRequest) -> ConversionResult {
        let result = self.engine.convert(request).await;
        self.last = result.as_ref().ok().cloned();
        result
    }

    /// Record the remembered conversion. Returns false when there is none.
    pub fn add_to_history(&mut self) -> bool {
        match &self.last {
            Some(conversion) => {
                let text = self.history.push(conversion).text.clone();
                debug!(entry = %text, total = self.history.len(), "added to history");
                true
            }
            None => false,
        }
    }
}
