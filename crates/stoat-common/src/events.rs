use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// A single field of the persisted desktop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigKey {
    FirstLaunch,
    CustomFrame,
    MinimiseToTray,
    StartMinimisedToTray,
    Spellchecker,
    HardwareAcceleration,
    DiscordRpc,
    Instances,
    ActiveInstanceId,
    WindowState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigChanged(ConfigKey),
    InstanceAdded(String),
    InstanceRemoved(String),
    InstanceSwitched(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::ConfigChanged(ConfigKey::Instances));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::ConfigChanged(ConfigKey::Instances)));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::Shutdown));
        assert!(matches!(e2, Event::Shutdown));
    }

    #[tokio::test]
    async fn instance_events_keep_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::InstanceAdded("a".into()));
        bus.publish(Event::InstanceSwitched("a".into()));
        bus.publish(Event::InstanceRemoved("a".into()));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::InstanceAdded(ref id) if id == "a"));
        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, Event::InstanceSwitched(ref id) if id == "a"));
        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, Event::InstanceRemoved(ref id) if id == "a"));
    }

    #[test]
    fn try_recv_drains_without_runtime() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        bus.publish(Event::ConfigChanged(ConfigKey::WindowState));
        assert!(matches!(
            rx.try_recv(),
            Ok(Event::ConfigChanged(ConfigKey::WindowState))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::Shutdown);
        assert_eq!(count, 0);
    }

    #[test]
    fn config_key_serializes_camel_case() {
        let json = serde_json::to_string(&ConfigKey::ActiveInstanceId).unwrap();
        assert_eq!(json, "\"activeInstanceId\"");
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
