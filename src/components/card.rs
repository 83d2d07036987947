use crate::model::Pick;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardViewProps {
    pub identity: String,
    pub position: usize,
    pub visible: bool,
    pub matched: bool,
    pub disabled: bool,
    pub asset_src: String,
    pub on_choose: Callback<Pick>,
}

/// The pick a click emits, or `None` when the card is disabled.
pub fn chosen(disabled: bool, pick: &Pick) -> Option<Pick> {
    if disabled { None } else { Some(pick.clone()) }
}

#[function_component]
pub fn CardView(props: &CardViewProps) -> Html {
    // Props are captured per render, so `disabled` is checked at click time.
    let click_cb = {
        let cb = props.on_choose.clone();
        let disabled = props.disabled;
        let pick = Pick {
            position: props.position,
            identity: props.identity.clone(),
        };
        Callback::from(move |_: MouseEvent| {
            if let Some(p) = chosen(disabled, &pick) {
                cb.emit(p);
            }
        })
    };
    let border = if props.matched { "#2ea043" } else { "#30363d" };
    let cursor = if props.disabled { "default" } else { "pointer" };
    let card_style = format!(
        "width:96px; height:72px; border:2px solid {}; border-radius:8px; overflow:hidden; cursor:{}; user-select:none; display:flex; align-items:center; justify-content:center;",
        border, cursor
    );
    html! {
        <div class={classes!("card", props.visible.then_some("flipped"), props.matched.then_some("matched"))}
            style={card_style} onclick={click_cb}>
            { if props.visible {
                html!{ <img src={props.asset_src.clone()} alt={props.identity.clone()} draggable="false"
                    style="width:100%; height:100%; object-fit:cover;" /> }
            } else {
                html!{ <div style="width:100%; height:100%; background:repeating-linear-gradient(45deg,#1f6feb,#1f6feb 8px,#1a5fcf 8px,#1a5fcf 16px);"></div> }
            } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick() -> Pick {
        Pick {
            position: 3,
            identity: "jp".into(),
        }
    }

    #[test]
    fn disabled_card_emits_nothing() {
        assert_eq!(chosen(true, &pick()), None);
    }

    #[test]
    fn enabled_card_emits_its_pick() {
        assert_eq!(chosen(false, &pick()), Some(pick()));
    }
}
