use common::{Board, BoardSpace, GameState, PlaceOutcome, PlayerNum, UndoOutcome};
use gloo::console::log;
use gloo::dialogs::alert;
use std::fmt;
use yew::prelude::*;

#[derive(Debug, Clone)]
pub enum Message {
    ClickSpace(usize, usize),
    Undo,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ClickSpace(row, col) => write!(f, "ClickSpace: {:?}, {:?}", row, col),
            Message::Undo => write!(f, "Undo"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub board: Board,
    pub onclick: Callback<(usize, usize)>,
}

pub struct Game {
    state: GameState,
}

impl Component for Game {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Game {
            state: GameState::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::ClickSpace(row, col) => {
                match self.state.place_stone(row as i32, col as i32) {
                    PlaceOutcome::Placed => true,
                    PlaceOutcome::Rejected => {
                        log!(msg.to_string());
                        false
                    }
                    PlaceOutcome::Win => {
                        // The turn pointer is still on the winner here
                        let winner = self.state.current_player();
                        alert(&format!("{} wins!", winner));
                        self.state.reset();
                        true
                    }
                }
            }
            Message::Undo => match self.state.undo() {
                UndoOutcome::Undone(_) => true,
                UndoOutcome::NoOp => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick_space = ctx.link().callback(|(row, col)| Message::ClickSpace(row, col));
        let onclick_undo = ctx.link().callback(|_| Message::Undo);
        let scores = self.state.scores();
        html! {
            <section id="page">
                <div class={classes!("score-bar")}>
                    <div class={classes!("score")}>
                        {format!("Black Score: {}", scores[PlayerNum::Black])}
                    </div>
                    <div class={classes!("score")}>
                        {format!("White Score: {}", scores[PlayerNum::White])}
                    </div>
                    <div class={classes!("turn")}>
                        {format!("Current Turn: {}", self.state.current_player())}
                    </div>
                    <button onclick={onclick_undo}>{"Undo Move"}</button>
                </div>
                <BoardComponent board={self.state.board().clone()} onclick={onclick_space}/>
            </section>
        }
    }
}

#[function_component(BoardComponent)]
pub fn board(props: &BoardProps) -> Html {
    let size = props.board.size();
    html! {
        <div class={classes!("board")}>
            <div
                class={classes!("board-grid")}
                style={format!("display: grid; grid-template-rows: repeat({}, 1fr); grid-template-columns: repeat({}, 1fr)", size, size)}>
                {
                    props.board.rows().iter().enumerate().flat_map(|(row, spaces)| {
                        spaces.iter().enumerate().map(move |(col, s)| {
                            board_space((row, col), s, props.onclick.clone())
                        })
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn board_space(
    position: (usize, usize),
    space: &BoardSpace,
    onclick_space: Callback<(usize, usize)>,
) -> Html {
    let onclick = Callback::from(move |_| {
        onclick_space.emit(position);
    });
    html! {
        <div class={classes!("board-space", "bordered")} {onclick}>
            {
                match space {
                    BoardSpace::Stone { player_num } => html! {
                        <div class={classes!("stone", get_player_num_class(player_num))}></div>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

fn get_player_num_class(player_num: &PlayerNum) -> String {
    match player_num {
        PlayerNum::Black => "black".to_string(),
        PlayerNum::White => "white".to_string(),
    }
}
