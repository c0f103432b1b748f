use crate::domain::event::TriggerEvent;
use crate::error::AppResult;

pub trait EventSource {
    fn trigger_event(&self) -> AppResult<TriggerEvent>;
}

impl EventSource for TriggerEvent {
    fn trigger_event(&self) -> AppResult<TriggerEvent> {
        Ok(self.clone())
    }
}
