use super::board::BoardView;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::util::fresh_seed;
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; the config element is static for the page's lifetime.
    let config = use_memo((), |_| GameConfig::load_from_document());
    let game = {
        let config = config.clone();
        use_reducer(move || GameState::new(&config, fresh_seed()))
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif; display:flex; flex-direction:column; align-items:center; padding:24px 12px; gap:16px;">
            <h1 style="margin:0; font-size:26px; color:#58a6ff;">{"Flag Match"}</h1>
            <BoardView game={game} config={Rc::clone(&config)} />
        </div>
    }
}
