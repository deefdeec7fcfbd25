//! Mapping of configured shortcuts onto egui keyboard input.

use egui::{Key, KeyboardShortcut, Modifiers};
use lility_core::{Action, Settings, Shortcut};
use log::warn;

/// Convert a parsed shortcut into the egui form. `Ctrl` maps to the
/// platform command key. Returns `None` for key names egui does not know.
pub fn to_keyboard_shortcut(shortcut: &Shortcut) -> Option<KeyboardShortcut> {
    let key = Key::from_name(&shortcut.key)?;
    let mut modifiers = Modifiers::NONE;
    if shortcut.ctrl {
        modifiers = modifiers | Modifiers::COMMAND;
    }
    if shortcut.shift {
        modifiers = modifiers | Modifiers::SHIFT;
    }
    if shortcut.alt {
        modifiers = modifiers | Modifiers::ALT;
    }
    Some(KeyboardShortcut::new(modifiers, key))
}

fn modifier_count(modifiers: Modifiers) -> usize {
    [modifiers.command, modifiers.shift, modifiers.alt]
        .iter()
        .filter(|m| **m)
        .count()
}

/// Every usable binding, most specific first.
///
/// egui matches `Ctrl+S` against a `Ctrl+Shift+S` press as well, so the
/// longer combinations must be consumed before their prefixes.
pub fn bindings(settings: &Settings) -> Vec<(Action, KeyboardShortcut)> {
    let mut out: Vec<_> = Action::ALL
        .iter()
        .filter_map(|&action| {
            let shortcut = match settings.shortcut(action) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Shortcut for {:?} ignored: {}", action, e);
                    return None;
                }
            };
            match to_keyboard_shortcut(&shortcut) {
                Some(ks) => Some((action, ks)),
                None => {
                    warn!("Unknown key '{}' for {:?}", shortcut.key, action);
                    None
                }
            }
        })
        .collect();
    out.sort_by_key(|(_, ks)| std::cmp::Reverse(modifier_count(ks.modifiers)));
    out
}

/// Whether `event` is how the windowing backend reports a press of `ks`.
///
/// Ctrl+C, Ctrl+X and Ctrl+V reach egui only as clipboard events, never as
/// key events.
fn is_clipboard_press(ks: &KeyboardShortcut, event: &egui::Event) -> bool {
    ks.modifiers == Modifiers::COMMAND
        && matches!(
            (ks.logical_key, event),
            (Key::C, egui::Event::Copy)
                | (Key::X, egui::Event::Cut)
                | (Key::V, egui::Event::Paste(_))
        )
}

fn consume_clipboard_press(input: &mut egui::InputState, ks: &KeyboardShortcut) -> bool {
    let before = input.events.len();
    input.events.retain(|event| !is_clipboard_press(ks, event));
    input.events.len() != before
}

/// Consume the shortcuts pressed this frame and return their actions.
pub fn pressed(ctx: &egui::Context, bindings: &[(Action, KeyboardShortcut)]) -> Vec<Action> {
    ctx.input_mut(|input| {
        bindings
            .iter()
            .filter(|(_, ks)| input.consume_shortcut(ks) || consume_clipboard_press(input, ks))
            .map(|(action, _)| *action)
            .collect()
    })
}
