//! Interactive configuration setup.
//!
//! Walks the user through the minimum viable config: coordinates typed at a
//! prompt (re-prompted until they parse and pass range validation), then
//! madhab and calculation method picked from arrow-key menus. The caller
//! persists the result.

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::Write;

use super::Config;
use super::validation::{validate_latitude, validate_longitude};
use crate::logger::Log;

const MADHAB_OPTIONS: &[(&str, u8)] = &[("Shafi/Hanbali/Maliki", 0), ("Hanafi", 1)];

const METHOD_OPTIONS: &[(&str, u8)] = &[
    ("Other", 0),
    ("Muslim World League", 1),
    ("Egyptian", 2),
    ("Karachi", 3),
    ("Umm al-Qura", 4),
    ("Dubai", 5),
    ("Moon Sighting Committee", 6),
    ("North America (ISNA)", 7),
    ("Kuwait", 8),
    ("Qatar", 9),
    ("Singapore", 10),
    ("UOIF", 11),
];

/// Gather a fresh configuration from terminal prompts.
pub fn interactive_setup() -> Result<Config> {
    let latitude = prompt_coordinate("Enter your latitude", validate_latitude)?;
    let longitude = prompt_coordinate("Enter your longitude", validate_longitude)?;
    let madhab = select_menu("Choose your madhab:", MADHAB_OPTIONS)?;
    let method = select_menu("Choose your calculation method:", METHOD_OPTIONS)?;

    Ok(Config {
        latitude,
        longitude,
        method: Some(method),
        fajr_angle: None,
        isha_angle: None,
        isha_interval: None,
        madhab: Some(madhab),
        high_latitude_rule: None,
        adjustments: None,
        method_adjustments: None,
        enable_countdown: false,
        enable_highlighting: false,
        highlight_colour: String::new(),
    })
}

/// Prompt until the input parses as a float and passes `validate`.
fn prompt_coordinate(label: &str, validate: fn(f64) -> Result<()>) -> Result<f64> {
    let stdin = std::io::stdin();
    loop {
        print!("{label}: ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            bail!("setup cancelled (end of input)");
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            log_warning!("value can't be empty");
            continue;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => match validate(value) {
                Ok(()) => return Ok(value),
                Err(e) => log_warning!("{e}"),
            },
            Err(e) => log_warning!("failed to parse value: {e}"),
        }
    }
}

/// Arrow-key selection menu; returns the chosen option's code.
fn select_menu(title: &str, options: &[(&str, u8)]) -> Result<u8> {
    let mut stdout = std::io::stdout();
    println!("{title}");

    let _guard = RawModeGuard::enter()?;
    let mut selected = 0usize;
    draw_options(&mut stdout, options, selected)?;

    let choice = loop {
        let Event::Key(key) = event::read().context("failed to read key event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if selected + 1 < options.len() {
                    selected += 1;
                }
            }
            KeyCode::Enter => break options[selected],
            KeyCode::Esc | KeyCode::Char('q') => bail!("setup cancelled"),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                bail!("setup cancelled")
            }
            _ => continue,
        }

        execute!(
            stdout,
            cursor::MoveUp(options.len() as u16),
            Clear(ClearType::FromCursorDown)
        )?;
        draw_options(&mut stdout, options, selected)?;
    };

    // Collapse the menu to a single confirmation line.
    execute!(
        stdout,
        cursor::MoveUp(options.len() as u16 + 1),
        Clear(ClearType::FromCursorDown),
        Print(format!("{title} {}\r\n", choice.0))
    )?;

    Ok(choice.1)
}

fn draw_options(stdout: &mut impl Write, options: &[(&str, u8)], selected: usize) -> Result<()> {
    for (idx, (label, _)) in options.iter().enumerate() {
        let marker = if idx == selected { "▶" } else { " " };
        execute!(stdout, Print(format!("{marker} {label}\r\n")))?;
    }
    Ok(())
}

/// Raw terminal mode scoped to the menu loop; logging is suspended so
/// nothing interleaves with the redraws.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Log::set_enabled(false);
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        Log::set_enabled(true);
        let _ = terminal::disable_raw_mode();
    }
}
