use yew::prelude::*;

/// Kind of transient notification, mapped straight to the alert CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notification success",
            NoticeKind::Danger => "notification danger",
        }
    }
}

/// A transient message shown after a mutation succeeds or fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Danger,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashMessageProps {
    pub notice: Option<Notice>,
}

/// Renders the current notice, or nothing when there is none.
#[function_component(FlashMessage)]
pub fn flash_message(props: &FlashMessageProps) -> Html {
    match props.notice.as_ref() {
        Some(notice) => html! {
            <div class={notice.kind.css_class()}>
                {&notice.message}
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let ok = Notice::success("Expense added successfully!");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.message, "Expense added successfully!");

        let bad = Notice::danger("Failed to add expense");
        assert_eq!(bad.kind, NoticeKind::Danger);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "notification success");
        assert_eq!(NoticeKind::Danger.css_class(), "notification danger");
    }
}
