use std::convert::TryFrom;

use chrono::Timelike;
use clap::{Parser, Subcommand};
use inquire::{Password, Select, Text};

use weatherdash_core::{
    CITY_CHOICES, Config, DisplayUnit, Selection, Theme, ViewModel, provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherdash", version, about = "Current-weather terminal dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default selections.
    Configure,

    /// Show the dashboard for a city.
    ///
    /// Without a city argument, all three selections are prompted for
    /// interactively.
    Show {
        /// City name; free text or one of the preset choices.
        city: Option<String>,

        /// Temperature unit: celsius (c) or fahrenheit (f).
        #[arg(long)]
        unit: Option<String>,

        /// Chart theme: light or dark.
        #[arg(long)]
        theme: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, unit, theme } => show(city, unit, theme).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    if !key.is_empty() {
        config.api_key = Some(key);
    }

    config.default_unit = Select::new("Default temperature unit:", DisplayUnit::all().to_vec())
        .with_starting_cursor(position_of(config.default_unit, DisplayUnit::all()))
        .prompt()?;

    config.default_theme = Select::new("Default chart theme:", Theme::all().to_vec())
        .with_starting_cursor(position_of(config.default_theme, Theme::all()))
        .prompt()?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(
    city: Option<String>,
    unit: Option<String>,
    theme: Option<String>,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let selection = resolve_selection(&config, city, unit, theme)?;

    let provider = provider_from_config(&config)?;
    let reading = provider.fetch_current(&selection.city).await?;

    let local_hour = chrono::Local::now().hour();
    let vm = ViewModel::compose(&reading, &selection, local_hour);

    render::print_dashboard(&vm);
    Ok(())
}

/// Fill the three selector values: explicit flags win, then config
/// defaults; a missing city switches to interactive prompts.
fn resolve_selection(
    config: &Config,
    city: Option<String>,
    unit: Option<String>,
    theme: Option<String>,
) -> anyhow::Result<Selection> {
    let unit = match unit.as_deref() {
        Some(s) => DisplayUnit::try_from(s)?,
        None => config.default_unit,
    };

    let theme = match theme.as_deref() {
        Some(s) => Theme::try_from(s)?,
        None => config.default_theme,
    };

    match city {
        Some(city) if !city.trim().is_empty() => Ok(Selection {
            city: city.trim().to_string(),
            unit,
            theme,
        }),
        _ => prompt_selection(config, unit, theme),
    }
}

fn prompt_selection(
    config: &Config,
    unit: DisplayUnit,
    theme: Theme,
) -> anyhow::Result<Selection> {
    const OTHER: &str = "Other (type a name)";

    let mut options: Vec<&str> = CITY_CHOICES.to_vec();
    options.push(OTHER);

    let default_idx = config
        .default_city
        .as_deref()
        .and_then(|c| CITY_CHOICES.iter().position(|choice| *choice == c))
        .unwrap_or(0);

    let picked = Select::new("City:", options)
        .with_starting_cursor(default_idx)
        .prompt()?;

    let city = if picked == OTHER {
        let typed = Text::new("City name:").prompt()?;
        let typed = typed.trim().to_string();
        if typed.is_empty() {
            anyhow::bail!("City name must not be empty.");
        }
        typed
    } else {
        picked.to_string()
    };

    let unit = Select::new("Temperature unit:", DisplayUnit::all().to_vec())
        .with_starting_cursor(position_of(unit, DisplayUnit::all()))
        .prompt()?;

    let theme = Select::new("Chart theme:", Theme::all().to_vec())
        .with_starting_cursor(position_of(theme, Theme::all()))
        .prompt()?;

    Ok(Selection { city, unit, theme })
}

fn position_of<T: PartialEq + Copy>(value: T, choices: &[T]) -> usize {
    choices.iter().position(|c| *c == value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_config_defaults() {
        let config = Config {
            default_unit: DisplayUnit::Celsius,
            default_theme: Theme::Light,
            ..Config::default()
        };

        let sel = resolve_selection(
            &config,
            Some("Delhi".into()),
            Some("f".into()),
            Some("dark".into()),
        )
        .unwrap();

        assert_eq!(sel.city, "Delhi");
        assert_eq!(sel.unit, DisplayUnit::Fahrenheit);
        assert_eq!(sel.theme, Theme::Dark);
    }

    #[test]
    fn config_defaults_apply_when_flags_are_absent() {
        let config = Config {
            default_unit: DisplayUnit::Fahrenheit,
            default_theme: Theme::Dark,
            ..Config::default()
        };

        let sel = resolve_selection(&config, Some("Chennai".into()), None, None).unwrap();

        assert_eq!(sel.unit, DisplayUnit::Fahrenheit);
        assert_eq!(sel.theme, Theme::Dark);
    }

    #[test]
    fn bad_unit_flag_is_rejected() {
        let config = Config::default();
        let err =
            resolve_selection(&config, Some("Chennai".into()), Some("kelvin".into()), None)
                .unwrap_err();
        assert!(err.to_string().contains("Unknown temperature unit"));
    }

    #[test]
    fn city_argument_is_trimmed() {
        let config = Config::default();
        let sel = resolve_selection(&config, Some("  Hyderabad  ".into()), None, None).unwrap();
        assert_eq!(sel.city, "Hyderabad");
    }

    #[test]
    fn position_of_falls_back_to_first_choice() {
        assert_eq!(position_of(DisplayUnit::Fahrenheit, DisplayUnit::all()), 1);
        assert_eq!(position_of(Theme::Light, Theme::all()), 0);
    }
}
