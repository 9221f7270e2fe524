use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let Action::Tick = action {
        features::navigation::tick(state);
        features::ui::expire_status(state, Instant::now());
        return None;
    }

    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::search::update,
        features::navigation::update,
        features::ui::update,
    ];
    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }
    tracing::trace!(?action, "unhandled action");
    None
}
