use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::GameConfig;
use crate::game::{GameAction, GameState};
use crate::model::{Pick, SelectionBuffer};
use crate::util::fresh_seed;

use super::{card::CardView, status_panel::StatusPanel};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game: UseReducerHandle<GameState>,
    pub config: Rc<GameConfig>,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    // Schedule the flip-back for each new mismatch. Timers are never
    // cancelled; the board drops flip-backs from an earlier game.
    {
        let game = props.game.clone();
        let delay = props.config.flip_back_delay_ms;
        use_effect_with(props.game.pending_flip, move |pending| {
            if let Some(flip) = *pending {
                log::debug!(
                    "turn {}: flipping back {:?} in {}ms",
                    flip.turn,
                    flip.positions,
                    delay
                );
                Timeout::new(delay, move || {
                    game.dispatch(GameAction::FlipBack(flip));
                })
                .forget();
            }
            || ()
        });
    }

    // Trace every applied action.
    {
        let game = props.game.clone();
        use_effect_with(props.game.version, move |version| {
            log::debug!("v{}: {}, turns {}", version, game.board.status(), game.board.turns());
            || ()
        });
    }

    let on_choose = {
        let game = props.game.clone();
        Callback::from(move |pick: Pick| {
            game.dispatch(GameAction::Pick {
                position: pick.position,
            });
        })
    };
    let on_reset = {
        let game = props.game.clone();
        Callback::from(move |_| {
            game.dispatch(GameAction::Reset { seed: fresh_seed() });
        })
    };

    let board = &props.game.board;
    let locked = board.is_locked();
    let selection = board.selection();
    let hint = if selection.is_empty() {
        "pick a card".to_string()
    } else {
        format!("{}/{} picked", selection.len(), SelectionBuffer::CAPACITY)
    };
    let grid_style = format!(
        "display:grid; grid-template-columns:repeat({}, 96px); gap:10px; justify-content:center;",
        props.config.columns
    );

    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:14px;">
        <StatusPanel status={board.status()} won={locked} turns={board.turns()} hint={hint} on_reset={on_reset} />
        <div style={grid_style}>
            { for board.cards().iter().map(|c| html!{
                <CardView
                    key={c.position}
                    identity={c.identity.clone()}
                    position={c.position}
                    visible={c.visible}
                    matched={c.matched}
                    disabled={locked || c.matched}
                    asset_src={props.config.asset_path(&c.identity)}
                    on_choose={on_choose.clone()}
                />
            }) }
        </div>
    </div>}
}
