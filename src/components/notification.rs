use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::contact::{RelayError, DELIVERED_TEXT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

pub enum ToastAction {
    Push(NoticeKind, String),
    Dismiss(u32),
}

impl ToastAction {
    pub fn for_delivery(result: &Result<(), RelayError>) -> Self {
        match result {
            Ok(()) => ToastAction::Push(NoticeKind::Success, DELIVERED_TEXT.to_string()),
            Err(e) => ToastAction::Push(NoticeKind::Failure, e.notice_text().to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    pub notices: Vec<Notice>,
}

impl Toasts {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(kind, text) => {
                self.notices.push(Notice { id: self.next_id, kind, text });
                self.next_id += 1;
            }
            ToastAction::Dismiss(id) => self.notices.retain(|n| n.id != id),
        }
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            { for props.notices.iter().map(|notice| html! {
                <ToastItem key={notice.id} notice={notice.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.notice.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind_class = match props.notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Failure => "toast-failure",
    };

    html! {
        <div class={classes!("toast", kind_class)} onclick={onclick}>
            {&props.notice.text}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_the_matching_notice() {
        let mut toasts = Toasts::default();
        toasts.apply(ToastAction::for_delivery(&Ok(())));
        toasts.apply(ToastAction::for_delivery(&Err(RelayError::Rejected { status: 500 })));
        toasts.apply(ToastAction::Push(NoticeKind::Success, "third".into()));

        toasts.apply(ToastAction::Dismiss(1));
        let ids: Vec<u32> = toasts.notices.iter().map(|n| n.id).collect();
        assert_eq!(ids, [0, 2]);

        toasts.apply(ToastAction::Dismiss(7));
        assert_eq!(toasts.notices.len(), 2);
    }

    #[test]
    fn ids_keep_increasing_after_dismissal() {
        let mut toasts = Toasts::default();
        toasts.apply(ToastAction::Push(NoticeKind::Success, "a".into()));
        toasts.apply(ToastAction::Dismiss(0));
        toasts.apply(ToastAction::Push(NoticeKind::Failure, "b".into()));
        assert_eq!(toasts.notices[0].id, 1);
    }

    #[test]
    fn delivery_outcomes_map_to_notice_kinds() {
        let mut toasts = Toasts::default();
        toasts.apply(ToastAction::for_delivery(&Ok(())));
        toasts.apply(ToastAction::for_delivery(&Err(RelayError::Transport("dns".into()))));
        assert_eq!(toasts.notices[0].kind, NoticeKind::Success);
        assert_eq!(toasts.notices[0].text, "Email sent successfully!");
        assert_eq!(toasts.notices[1].kind, NoticeKind::Failure);
        assert_eq!(toasts.notices[1].text, "An error occurred. Please try again.");
    }
}
