use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "alert--info",
            Self::Success => "alert--success",
            Self::Warning => "alert--warning",
            Self::Danger => "alert--danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub kind: AlertKind,
}

/// Dismissable messages shown above the page content, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alerts {
    items: Vec<Alert>,
    next_id: u64,
}

impl Alerts {
    pub fn push(&mut self, message: impl Into<String>, kind: AlertKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(
            0,
            Alert {
                id,
                message: message.into(),
                kind,
            },
        );
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|alert| alert.id != id);
    }

    pub fn items(&self) -> &[Alert] {
        &self.items
    }
}

/// Provide the alert signal to the subtree. Call once near the root.
pub fn use_alerts_provider() -> Signal<Alerts> {
    use_context_provider(|| Signal::new(Alerts::default()))
}

/// Push an alert onto the stack provided by an ancestor, if any.
pub fn show_alert(message: impl Into<String>, kind: AlertKind) {
    if let Some(mut alerts) = try_consume_context::<Signal<Alerts>>() {
        alerts.with_mut(|a| {
            a.push(message, kind);
        });
    }
}

#[component]
pub fn AlertStack() -> Element {
    let Some(mut alerts) = try_use_context::<Signal<Alerts>>() else {
        return rsx! {};
    };
    let items = alerts.read().items().to_vec();

    rsx! {
        div { class: "alert-stack", role: "status",
            for alert in items {
                div {
                    key: "{alert.id}",
                    class: "alert {alert.kind.css_modifier()}",
                    span { class: "alert__message", "{alert.message}" }
                    button {
                        r#type: "button",
                        class: "alert__close",
                        aria_label: "Dismiss",
                        onclick: move |_| alerts.with_mut(|a| a.dismiss(alert.id)),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_alert_comes_first() {
        let mut alerts = Alerts::default();
        alerts.push("saved", AlertKind::Success);
        alerts.push("failed", AlertKind::Danger);
        let messages: Vec<&str> = alerts.items().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["failed", "saved"]);
    }

    #[test]
    fn dismiss_removes_only_that_alert() {
        let mut alerts = Alerts::default();
        let first = alerts.push("one", AlertKind::Info);
        alerts.push("two", AlertKind::Warning);
        alerts.dismiss(first);
        assert_eq!(alerts.items().len(), 1);
        assert_eq!(alerts.items()[0].message, "two");
    }
}
