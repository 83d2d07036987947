use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub status: String,
    pub won: bool,
    pub turns: u32,
    /// Hint about the selection in progress, e.g. "1/2 picked".
    pub hint: String,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let status_color = if props.won { "#2ea043" } else { "#c9d1d9" };
    html! {<div style="display:flex; align-items:center; justify-content:space-between; gap:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 14px; min-width:420px;">
        <div style="display:flex; flex-direction:column; gap:2px;">
            <span style={format!("font-size:16px; font-weight:600; color:{};", status_color)}>{ props.status.clone() }</span>
            <span style="font-size:12px; opacity:0.7; font-variant-numeric:tabular-nums;">{ format!("Turns: {} · {}", props.turns, props.hint) }</span>
        </div>
        <button onclick={reset_cb}>{"Reset"}</button>
    </div>}
}
