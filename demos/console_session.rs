//! Console Session
//!
//! Plays a scripted stack/queue session and prints what a surface would
//! show after each step.
//!
//! Key concepts:
//! - Terminal presentation port rendering the bucket as text
//! - Virtual time: `wait` advances the manual timer
//! - Requests during an animation are dropped
//!
//! Run with: cargo run --example console_session [script-file]
//!
//! Script lines: `add <label>`, `remove`, `peek`, `reset`,
//! `mode <stack|queue>`, `wait <ms>`. Blank lines and `#` comments are skipped.

use bucketviz::builder::CoordinatorBuilder;
use bucketviz::config::VisualizerConfig;
use bucketviz::core::{DisplaySnapshot, Label, Mode, ModeDescription, Slot};
use bucketviz::ports::{ManualTimer, NotificationPort, PresentationPort, Severity, TokenHandle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_SCRIPT: &str = "\
# stack first
add A
add B
wait 600
add B
wait 600
add C
wait 600
peek
remove
wait 600
# queue next
mode queue
add first
wait 600
add second
wait 600
remove
wait 600
remove
wait 600
remove
";

struct Token {
    handle: TokenHandle,
    label: Label,
    state: &'static str,
}

/// Draws the bucket as a single line of text.
#[derive(Default)]
struct ConsoleSurface {
    tokens: Vec<Token>,
    next_handle: u64,
    enabled: bool,
}

impl ConsoleSurface {
    fn draw(&self) {
        let cells: Vec<String> = self
            .tokens
            .iter()
            .map(|t| {
                if t.state.is_empty() {
                    format!("[{}]", t.label)
                } else {
                    format!("[{} {}]", t.label, t.state)
                }
            })
            .collect();
        let controls = if self.enabled { "" } else { "  (controls locked)" };
        println!("    bucket: {}{}", cells.join(" "), controls);
    }

    fn set_state(&mut self, handle: TokenHandle, state: &'static str) {
        if let Some(token) = self.tokens.iter_mut().find(|t| t.handle == handle) {
            token.state = state;
        }
    }
}

impl PresentationPort for ConsoleSurface {
    fn render_token(&mut self, label: &Label, slot: Slot) -> TokenHandle {
        self.next_handle += 1;
        let token = Token {
            handle: TokenHandle(self.next_handle),
            label: label.clone(),
            state: "",
        };
        let handle = token.handle;
        match slot {
            Slot::First => self.tokens.insert(0, token),
            Slot::Last => self.tokens.push(token),
        }
        handle
    }

    fn mark_entering(&mut self, token: TokenHandle) {
        self.set_state(token, "entering");
    }

    fn clear_entering(&mut self, token: TokenHandle) {
        self.set_state(token, "");
    }

    fn mark_leaving(&mut self, token: TokenHandle) {
        self.set_state(token, "leaving");
    }

    fn detach_token(&mut self, token: TokenHandle) {
        self.tokens.retain(|t| t.handle != token);
    }

    fn mark_peeked(&mut self, token: TokenHandle) {
        self.set_state(token, "peeked");
    }

    fn clear_peeked(&mut self, token: TokenHandle) {
        self.set_state(token, "");
    }

    fn clear_tokens(&mut self) {
        self.tokens.clear();
    }

    fn set_interactive_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_input_value(&mut self, _value: &str) {}

    fn update_metrics(&mut self, snapshot: &DisplaySnapshot) {
        println!(
            "    size {} ({}), top/front {}",
            snapshot.size, snapshot.capacity_label, snapshot.top_or_front
        );
    }

    fn update_recent(&mut self, last_added: &str, last_removed: &str) {
        println!("    last added {last_added}, last removed {last_removed}");
    }

    fn update_mode_description(&mut self, description: &ModeDescription) {
        println!(
            "    == {}: {} ({} / {})",
            description.title,
            description.description,
            description.add_action,
            description.remove_action
        );
    }
}

struct ConsoleNotices;

impl NotificationPort for ConsoleNotices {
    fn show(&mut self, message: &str, severity: Severity) {
        let tag = match severity {
            Severity::Success => "ok",
            Severity::Error => "error",
            Severity::Warning => "note",
        };
        println!("    [{tag}] {message}");
    }

    fn expire_error(&mut self) {}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let script = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_SCRIPT.to_string(),
    };

    let mut viz = CoordinatorBuilder::new()
        .config(VisualizerConfig::default())
        .presentation(ConsoleSurface {
            enabled: true,
            ..ConsoleSurface::default()
        })
        .notifications(ConsoleNotices)
        .timer(ManualTimer::new())
        .build()?;

    println!("=== Bucket Session ===\n");
    viz.sync_surface();

    for line in script.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("> {line}");

        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));
        let outcome = match command {
            "add" => Some(viz.request_add(argument)),
            "remove" => Some(viz.request_remove()),
            "peek" => Some(viz.request_peek()),
            "reset" => Some(viz.request_reset()),
            "mode" => Some(viz.request_switch_mode(argument.parse::<Mode>()?)),
            "wait" => {
                let ms: u64 = argument.trim().parse()?;
                viz.advance(Duration::from_millis(ms));
                None
            }
            other => {
                println!("    unknown command '{other}'");
                None
            }
        };

        if outcome.is_some_and(|o| o.is_dropped()) {
            println!("    (dropped)");
        }
        viz.presentation().draw();
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
