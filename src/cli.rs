// Command line interface for expanding templates

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};
use std::path::Path;
use tracing::debug;

use crate::config::{parse_assignment, TemplateSettings};
use crate::domain::{Template, VariableBag};

pub fn build_command() -> clap::Command {
    clap::Command::new("uritemplate")
        .about("Expand an RFC 6570 URI template")
        .arg(
            Arg::new("notation")
                .value_name("TEMPLATE")
                .help("Template notation, overrides the settings file"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Path to a YAML or JSON file with template, defaults and variables"),
        )
        .arg(
            Arg::new("var")
                .short('V')
                .long("var")
                .value_name("NAME=VALUE")
                .action(ArgAction::Append)
                .help("Bind a scalar variable, overrides the settings file"),
        )
        .arg(
            Arg::new("default")
                .short('D')
                .long("default")
                .value_name("NAME=VALUE")
                .action(ArgAction::Append)
                .help("Bind a scalar default variable"),
        )
        .arg(
            Arg::new("names")
                .long("names")
                .action(ArgAction::SetTrue)
                .help("Print the template's variable names instead of expanding it"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail when a template variable is undefined"),
        )
}

/// Run the command described by `matches` and return what should be printed.
pub fn run(matches: &ArgMatches) -> Result<String> {
    let settings = match matches.get_one::<String>("config") {
        Some(path) => TemplateSettings::load(Path::new(path))?,
        None => TemplateSettings::default(),
    };

    let template = match matches.get_one::<String>("notation") {
        Some(notation) => Template::new(notation.as_str())
            .context("Failed to parse template from the command line")?
            .with_default_variables(settings.defaults()?),
        None => settings
            .template()?
            .context("No template given: pass TEMPLATE or set 'template' in the settings file")?,
    };

    if matches.get_flag("names") {
        return Ok(template.variable_names().join("\n"));
    }

    let defaults = assignments(matches, "default")?.merged_over(template.default_variables());
    let template = template.with_default_variables(defaults);
    let variables = assignments(matches, "var")?.merged_over(&settings.variables()?);
    debug!(template = %template, variables = variables.len(), "expanding");

    if matches.get_flag("strict") {
        Ok(template.expand_or_fail(&variables)?)
    } else {
        Ok(template.expand(&variables))
    }
}

fn assignments(matches: &ArgMatches, id: &str) -> Result<VariableBag> {
    let pairs = matches
        .get_many::<String>(id)
        .into_iter()
        .flatten()
        .map(|assignment| parse_assignment(assignment))
        .collect::<Result<Vec<_>>>()?;
    Ok(pairs.into_iter().collect())
}
