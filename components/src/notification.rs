use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::Dispatch;

use conversy_sdk::model::notification::{Notification, NotificationType};
use icons::{AlertTriangleIcon, BellIcon, CheckCircleIcon, XIcon};

struct Toast {
    noti: Rc<Notification>,
    // dropped with the toast, cancelling the pending auto-dismiss
    _timer: Timeout,
}

/// toast stack fed by the global `Notification` store; each toast
/// auto-dismisses after its delay and carries a close button for
/// dismissing it early
pub struct NotificationCom {
    toasts: Vec<Toast>,
    _noti_dis: Dispatch<Notification>,
}

pub enum NotificationComMsg {
    Push(Rc<Notification>),
    Dismiss(i64),
}

impl Component for NotificationCom {
    type Message = NotificationComMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _noti_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(NotificationComMsg::Push));
        Self {
            toasts: Vec::new(),
            _noti_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationComMsg::Push(noti) => {
                let id = noti.id;
                let link = ctx.link().clone();
                let timer = Timeout::new(noti.delay, move || {
                    link.send_message(NotificationComMsg::Dismiss(id))
                });
                self.toasts.push(Toast {
                    noti,
                    _timer: timer,
                });
                true
            }
            NotificationComMsg::Dismiss(id) => {
                self.toasts.retain(|toast| toast.noti.id != id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="notify">
                {self.toasts.iter().map(|toast| Self::view_toast(ctx, &toast.noti)).collect::<Html>()}
            </div>
        }
    }
}

impl NotificationCom {
    fn view_toast(ctx: &Context<Self>, noti: &Notification) -> Html {
        let icon = match noti.type_ {
            NotificationType::Info => html!(<CheckCircleIcon />),
            NotificationType::Warn => html!(<BellIcon />),
            NotificationType::Error => html!(<AlertTriangleIcon />),
        };
        let id = noti.id;
        let ondismiss = ctx
            .link()
            .callback(move |_| NotificationComMsg::Dismiss(id));

        html! {
            <div class={classes!("notification-item", type_class(&noti.type_))} key={noti.id}>
                {icon}
                <span class="notification-content">{noti.content.clone()}</span>
                <button class="notification-dismiss" onclick={ondismiss} title="Dismiss">
                    <XIcon />
                </button>
            </div>
        }
    }
}

fn type_class(type_: &NotificationType) -> &'static str {
    match type_ {
        NotificationType::Info => "info",
        NotificationType::Warn => "warn",
        NotificationType::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_classes_follow_the_type() {
        assert_eq!(type_class(&NotificationType::Info), "info");
        assert_eq!(type_class(&NotificationType::Warn), "warn");
        assert_eq!(type_class(&NotificationType::Error), "error");
    }
}
