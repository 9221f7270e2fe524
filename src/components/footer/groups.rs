use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() && state.mode == AppMode::Normal {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![item("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::Normal => vec![
            FooterGroup {
                name: "NAV",
                items: vec![
                    item("j/k", "scroll"),
                    item("n/p", "section"),
                    item("g/G", "top/end"),
                ],
            },
            FooterGroup {
                name: "SEARCH",
                items: vec![item("/", "search")],
            },
            FooterGroup {
                name: "APP",
                items: vec![item("t", "theme"), item("?", "help"), item("q", "quit")],
            },
        ],
        AppMode::Search => vec![FooterGroup {
            name: "SEARCH",
            items: vec![
                item("\u{2191}/\u{2193}", "move"),
                item("\u{21B5}", "open"),
                item("Esc", "close"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![item("Esc", "close")],
        }],
    }
}
