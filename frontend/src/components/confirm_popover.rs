use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmPopoverProps {
    /// Whether the question is showing.
    pub open: bool,
    pub title: AttrValue,
    pub ok_text: AttrValue,
    pub cancel_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    /// Disable both answers, e.g. while the confirmed action runs.
    #[prop_or_default]
    pub busy: bool,
    /// The trigger the popover is anchored to.
    #[prop_or_default]
    pub children: Children,
}

/// Yes/no question anchored to its trigger. The owner decides when it is
/// open; this component only reports the answer.
#[function_component(ConfirmPopover)]
pub fn confirm_popover(props: &ConfirmPopoverProps) -> Html {
    let ConfirmPopoverProps {
        open,
        title,
        ok_text,
        cancel_text,
        on_confirm,
        on_cancel,
        busy,
        children,
    } = props;

    let confirm = {
        let on_confirm = on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="confirm">
            { children.clone() }
            if *open {
                <div class="confirm__popover" role="alertdialog" aria-label={title.clone()}>
                    <p class="confirm__title">{ title.clone() }</p>
                    <div class="confirm__actions">
                        <button
                            type="button"
                            class="confirm__cancel"
                            disabled={*busy}
                            onclick={cancel}
                        >
                            { cancel_text.clone() }
                        </button>
                        <button
                            type="button"
                            class="confirm__ok"
                            disabled={*busy}
                            onclick={confirm}
                        >
                            { ok_text.clone() }
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
