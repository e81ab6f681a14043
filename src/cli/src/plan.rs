use color_eyre::eyre::{WrapErr, eyre};
use parking::Car;
use serde::Deserialize;
use std::{fs, path::Path};

/// A pair of layouts to plan the moves between, as read from a plan file:
///
/// ```toml
/// start = [1, 2, 0, 3]
/// desired = [3, 0, 1, 2]
/// ```
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    pub start: Vec<Car>,
    pub desired: Vec<Car>,
}

impl Plan {
    pub fn load(path: &Path) -> color_eyre::Result<Plan> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the plan file {}", path.display()))?;
        Plan::parse(&text)
            .wrap_err_with(|| format!("Failed to parse the plan file {}", path.display()))
    }

    fn parse(text: &str) -> color_eyre::Result<Plan> {
        Ok(toml::from_str(text)?)
    }
}

/// Parse a layout written as car numbers separated by spaces and/or commas.
pub fn parse_layout(text: &str) -> color_eyre::Result<Vec<Car>> {
    let layout = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Car>()
                .map_err(|_| eyre!("`{token}` is not a car number"))
        })
        .collect::<color_eyre::Result<Vec<Car>>>()?;

    if layout.is_empty() {
        return Err(eyre!("The layout {text:?} has no spots"));
    }

    Ok(layout)
}
